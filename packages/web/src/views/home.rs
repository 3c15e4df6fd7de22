use dioxus::prelude::*;
use ui::{use_auth, use_i18n, use_settings, LanguageSelector, LogoutButton, ThemeSelector};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let settings = use_settings();
    let i18n = use_i18n();
    let state = auth();
    let title = format!("{} · {}", i18n.t("home.welcome"), settings.read().name);
    let greeting = state
        .user
        .as_ref()
        .map(|user| format!("{} {}", i18n.t("home.signed_in_as"), user.display_name()));

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen gap-6 p-8 bg-white text-neutral-800 dark:bg-neutral-950 dark:text-neutral-100",

            h1 {
                class: "font-bold text-[1.75rem]",
                "{title}"
            }

            if state.loading {
                p { class: "text-neutral-500", "…" }
            } else if let Some(greeting) = greeting {
                p { class: "text-neutral-600 dark:text-neutral-300", "{greeting}" }
                LogoutButton {
                    label: i18n.t("nav.logout"),
                    class: "px-4 py-2 rounded-md bg-neutral-900 text-white dark:bg-white dark:text-neutral-900",
                }
            } else {
                p { class: "text-neutral-600 dark:text-neutral-300", {i18n.t("home.signed_out")} }
                Link {
                    to: Route::Login {},
                    class: "px-4 py-2 rounded-md bg-neutral-900 text-white dark:bg-white dark:text-neutral-900",
                    {i18n.t("nav.login")}
                }
            }

            div { class: "flex flex-wrap items-center gap-4",
                LanguageSelector {}
                ThemeSelector {}
            }
        }
    }
}
