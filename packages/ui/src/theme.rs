//! Theme context: the active [`Theme`] and how it reaches the document.

use dioxus::prelude::*;
use store::Theme;

use crate::i18n::use_i18n;
use crate::preference::{self, Preference};
use crate::storage;

/// The theme signal provided by [`crate::SettingsProvider`].
pub type ThemeSignal = Signal<Theme>;

/// Get the active theme. Change it with [`set_theme`], not by writing the signal.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// The visitor's saved theme, if they picked one.
pub fn load_theme_from_storage() -> Option<Theme> {
    storage::load(storage::THEME_KEY).and_then(|value| value.parse().ok())
}

/// Switch theme and remember the choice. Call from handlers under
/// [`crate::SettingsProvider`].
pub fn set_theme(theme: Theme) {
    let choice = consume_context::<Signal<Preference<Theme>>>();
    preference::apply(choice, consume_context::<ThemeSignal>(), |p| p.choose(theme));
    storage::save(storage::THEME_KEY, theme.as_str());
}

/// Whether the document should render dark.
pub fn is_dark(theme: Theme, system_prefers_dark: bool) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => system_prefers_dark,
    }
}

/// Reflect `theme` on `<html>`: the `dark` class for Tailwind's class strategy,
/// and `data-theme` for plain CSS.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };
    let classes = root.class_list();
    let result = if is_dark(theme, prefers_dark) {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() || root.set_attribute("data-theme", theme.as_str()).is_err() {
        tracing::warn!("Failed to apply theme {}", theme);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Theme) {}

/// Applies the current theme whenever it changes. Renders nothing.
#[component]
pub fn ThemeApplier() -> Element {
    let theme = use_theme();

    use_effect(move || apply_theme(theme()));

    rsx! {}
}

/// Three-way theme switch.
#[component]
pub fn ThemeSelector() -> Element {
    let theme = use_theme();
    let i18n = use_i18n();
    let current = theme();

    let option_class = |active: bool| {
        if active {
            "px-3 py-1.5 rounded-md text-sm bg-neutral-900 text-white dark:bg-white dark:text-neutral-900"
        } else {
            "px-3 py-1.5 rounded-md text-sm text-neutral-600 hover:bg-neutral-100 dark:text-neutral-300 dark:hover:bg-neutral-800"
        }
    };

    rsx! {
        div {
            class: "inline-flex gap-1 p-1 rounded-lg border border-neutral-200 dark:border-neutral-700",
            role: "radiogroup",
            button {
                class: option_class(current == Theme::System),
                onclick: move |_| set_theme(Theme::System),
                {i18n.t("theme.system")}
            }
            button {
                class: option_class(current == Theme::Light),
                onclick: move |_| set_theme(Theme::Light),
                {i18n.t("theme.light")}
            }
            button {
                class: option_class(current == Theme::Dark),
                onclick: move |_| set_theme(Theme::Dark),
                {i18n.t("theme.dark")}
            }
        }
    }
}
