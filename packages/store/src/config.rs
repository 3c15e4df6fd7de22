//! # Site-level settings shared by server and client
//!
//! [`SiteSettings`] is what the settings context hands to the UI: the application
//! name plus the default [`Locale`] and [`Theme`] used before a visitor has picked
//! their own. The server builds it from its configuration; clients receive it via
//! the `get_site_settings` server function.
//!
//! In `formcraft.toml` it is the `[site]` table:
//!
//! ```toml
//! [site]
//! name = "Formcraft"
//! default_locale = "en"
//! default_theme = "system"
//! ```
//!
//! Every field has a default, so a missing or empty table is equivalent to the
//! default configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Settings exposed to the UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default)]
    pub default_locale: Locale,
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_site_name() -> String {
    "Formcraft".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            default_locale: Locale::default(),
            default_theme: Theme::default(),
        }
    }
}

/// A supported UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Es => "es",
        }
    }

    /// Match a language tag such as `fr`, `FR` or `fr-CA`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Locale::ALL.into_iter().find(|l| l.code() == primary)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown locale or theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseSettingError {
    kind: &'static str,
    value: String,
}

impl FromStr for Locale {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or_else(|| ParseSettingError {
            kind: "locale",
            value: s.to_string(),
        })
    }
}

/// Colour scheme. `System` follows the OS preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseSettingError {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}
