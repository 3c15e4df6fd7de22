//! This crate contains all shared UI for the workspace.

mod preference;
mod storage;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod settings;
pub use settings::{use_settings, SettingsProvider};

mod theme;
pub use theme::{
    apply_theme, is_dark, load_theme_from_storage, set_theme, use_theme, ThemeApplier,
    ThemeSelector, ThemeSignal,
};

mod i18n;
pub use i18n::{locale_label, translate, use_i18n, I18n, LanguageProvider, LanguageSelector};

mod providers;
pub use providers::AppProviders;

mod tailwind_check;
pub use tailwind_check::TailwindCheck;
