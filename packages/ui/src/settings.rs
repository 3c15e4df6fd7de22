//! Site settings context.
//!
//! [`SettingsProvider`] fetches [`SiteSettings`] from the server and owns the
//! theme signal, since the site default is the theme's fallback.

use api::{SiteSettings, Theme};
use dioxus::prelude::*;

use crate::preference::{self, Preference};
use crate::theme::{load_theme_from_storage, ThemeSignal};

/// Get the site settings. Holds defaults until the server answers.
pub fn use_settings() -> Signal<SiteSettings> {
    use_context::<Signal<SiteSettings>>()
}

#[component]
pub fn SettingsProvider(children: Element) -> Element {
    let mut settings = use_signal(SiteSettings::default);
    // Server and first client render must agree, so both start from the default.
    let theme_preference =
        use_signal(|| Preference::<Theme>::new(SiteSettings::default().default_theme));
    let theme: ThemeSignal = use_signal(|| theme_preference.peek().current());

    use_effect(move || {
        preference::apply(theme_preference, theme, |p| {
            p.restore(load_theme_from_storage())
        });
    });

    let _ = use_resource(move || async move {
        match api::get_site_settings().await {
            Ok(loaded) => {
                let default_theme = loaded.default_theme;
                preference::apply(theme_preference, theme, |p| {
                    p.set_site_default(default_theme)
                });
                settings.set(loaded);
            }
            Err(e) => tracing::warn!("Failed to load site settings: {}", e),
        }
    });

    use_context_provider(|| settings);
    use_context_provider(|| theme);
    use_context_provider(|| theme_preference);

    rsx! {
        {children}
    }
}
