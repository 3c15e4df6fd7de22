//! Login page view with an email/password form.

use dioxus::prelude::*;
use ui::{use_auth, use_i18n, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let i18n = use_i18n();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                error.set(Some(i18n.t("login.missing_fields")));
                return;
            }

            loading.set(true);
            match api::login_password(e, p).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    nav.replace(Route::Home {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let input_class = "w-full px-3 py-2 rounded-md border border-neutral-200 bg-white dark:border-neutral-700 dark:bg-neutral-900";

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white text-neutral-800 dark:bg-neutral-950 dark:text-neutral-100",

            h1 {
                class: "mb-8 font-bold text-[1.75rem]",
                {i18n.t("login.title")}
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                input {
                    class: input_class,
                    r#type: "email",
                    placeholder: i18n.t("login.email"),
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: input_class,
                    r#type: "password",
                    placeholder: i18n.t("login.password"),
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full px-4 py-2 rounded-md bg-neutral-900 text-white disabled:opacity-50 dark:bg-white dark:text-neutral-900",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        {i18n.t("login.submitting")}
                    } else {
                        {i18n.t("login.submit")}
                    }
                }
            }
        }
    }
}
