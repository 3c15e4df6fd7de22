use dioxus::prelude::*;

use crate::{AuthProvider, LanguageProvider, SettingsProvider, ThemeApplier};

/// Every context the app needs, outermost first: session, site settings and
/// theme, then language. The theme is applied before the children render.
#[component]
pub fn AppProviders(children: Element) -> Element {
    rsx! {
        AuthProvider {
            SettingsProvider {
                LanguageProvider {
                    ThemeApplier {}
                    {children}
                }
            }
        }
    }
}
