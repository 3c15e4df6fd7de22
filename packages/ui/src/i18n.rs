//! UI translations and the language context.

use api::{Locale, SiteSettings};
use dioxus::prelude::*;

use crate::preference::{self, Preference};
use crate::settings::use_settings;
use crate::storage;

type Catalog = &'static [(&'static str, &'static str)];

const EN: Catalog = &[
    ("nav.home", "Home"),
    ("nav.login", "Sign in"),
    ("nav.logout", "Sign out"),
    ("home.welcome", "Welcome"),
    ("home.signed_in_as", "Signed in as"),
    ("home.signed_out", "You are not signed in."),
    ("login.title", "Sign in"),
    ("login.email", "Email"),
    ("login.password", "Password"),
    ("login.submit", "Sign in"),
    ("login.submitting", "Signing in..."),
    ("login.missing_fields", "Email and password are required"),
    ("settings.language", "Language"),
    ("settings.theme", "Theme"),
    ("theme.system", "System"),
    ("theme.light", "Light"),
    ("theme.dark", "Dark"),
    ("tailwind.title", "Tailwind check"),
];

const FR: Catalog = &[
    ("nav.home", "Accueil"),
    ("nav.login", "Se connecter"),
    ("nav.logout", "Se déconnecter"),
    ("home.welcome", "Bienvenue"),
    ("home.signed_in_as", "Connecté en tant que"),
    ("home.signed_out", "Vous n'êtes pas connecté."),
    ("login.title", "Connexion"),
    ("login.email", "E-mail"),
    ("login.password", "Mot de passe"),
    ("login.submit", "Se connecter"),
    ("login.submitting", "Connexion..."),
    ("login.missing_fields", "L'e-mail et le mot de passe sont requis"),
    ("settings.language", "Langue"),
    ("settings.theme", "Thème"),
    ("theme.system", "Système"),
    ("theme.light", "Clair"),
    ("theme.dark", "Sombre"),
];

const ES: Catalog = &[
    ("nav.home", "Inicio"),
    ("nav.login", "Iniciar sesión"),
    ("nav.logout", "Cerrar sesión"),
    ("home.welcome", "Bienvenido"),
    ("home.signed_in_as", "Sesión iniciada como"),
    ("home.signed_out", "No has iniciado sesión."),
    ("login.title", "Iniciar sesión"),
    ("login.email", "Correo electrónico"),
    ("login.password", "Contraseña"),
    ("login.submit", "Entrar"),
    ("login.submitting", "Entrando..."),
    ("login.missing_fields", "El correo y la contraseña son obligatorios"),
    ("settings.language", "Idioma"),
    ("settings.theme", "Tema"),
    ("theme.system", "Sistema"),
    ("theme.light", "Claro"),
    ("theme.dark", "Oscuro"),
];

fn catalog(locale: Locale) -> Catalog {
    match locale {
        Locale::En => EN,
        Locale::Fr => FR,
        Locale::Es => ES,
    }
}

fn lookup(catalog: Catalog, key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key`, falling back to English and then to the key itself.
pub fn translate(locale: Locale, key: &str) -> String {
    lookup(catalog(locale), key)
        .or_else(|| lookup(EN, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Native name of a locale, for the language picker.
pub fn locale_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "English",
        Locale::Fr => "Français",
        Locale::Es => "Español",
    }
}

/// Handle to the language context.
#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    locale: Signal<Locale>,
}

impl I18n {
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    /// Switch language and remember the choice. Call from handlers under
    /// [`LanguageProvider`].
    pub fn set_locale(&self, locale: Locale) {
        let choice = consume_context::<Signal<Preference<Locale>>>();
        preference::apply(choice, self.locale, |p| p.choose(locale));
        storage::save(storage::LOCALE_KEY, locale.code());
    }

    pub fn t(&self, key: &str) -> String {
        translate(self.locale(), key)
    }
}

pub fn use_i18n() -> I18n {
    I18n {
        locale: use_context::<Signal<Locale>>(),
    }
}

fn load_locale_from_storage() -> Option<Locale> {
    storage::load(storage::LOCALE_KEY).and_then(|tag| Locale::from_tag(&tag))
}

/// Provides the active locale: the visitor's choice if they made one, otherwise
/// the site default. Storage is read after mount so hydration matches the
/// server render.
#[component]
pub fn LanguageProvider(children: Element) -> Element {
    let settings = use_settings();
    let locale_preference =
        use_signal(|| Preference::<Locale>::new(SiteSettings::default().default_locale));
    let locale = use_signal(|| locale_preference.peek().current());

    use_effect(move || {
        preference::apply(locale_preference, locale, |p| {
            p.restore(load_locale_from_storage())
        });
    });

    use_effect(move || {
        let default_locale = settings.read().default_locale;
        preference::apply(locale_preference, locale, |p| {
            p.set_site_default(default_locale)
        });
    });

    use_context_provider(|| locale);
    use_context_provider(|| locale_preference);

    rsx! {
        {children}
    }
}

#[component]
pub fn LanguageSelector() -> Element {
    let i18n = use_i18n();
    let current = i18n.locale();

    rsx! {
        label {
            class: "flex items-center gap-2 text-sm text-neutral-600 dark:text-neutral-300",
            {i18n.t("settings.language")}
            select {
                class: "rounded-md border border-neutral-200 bg-white px-2 py-1 dark:border-neutral-700 dark:bg-neutral-900",
                onchange: move |evt| {
                    if let Some(locale) = Locale::from_tag(&evt.value()) {
                        i18n.set_locale(locale);
                    }
                },
                for locale in Locale::ALL {
                    option {
                        key: "{locale.code()}",
                        value: locale.code(),
                        selected: locale == current,
                        {locale_label(locale)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate(Locale::Fr, "theme.dark"), "Sombre");
        assert_eq!(translate(Locale::Es, "login.password"), "Contraseña");
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        assert_eq!(translate(Locale::Fr, "tailwind.title"), "Tailwind check");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Locale::Es, "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_catalog_key_exists_in_english() {
        for locale in Locale::ALL {
            for (key, _) in catalog(locale) {
                assert!(lookup(EN, key).is_some(), "{key} missing from English");
            }
        }
    }
}
