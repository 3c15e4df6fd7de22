//! A visitor preference layered over a site-wide default.
//!
//! The site default arrives asynchronously from the server, and the saved choice
//! can only be read after hydration, so either may land after the visitor has
//! already picked something. [`Preference`] keeps the three apart: a choice,
//! once made, is never replaced by a default.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Preference<T> {
    chosen: Option<T>,
    site_default: T,
}

impl<T: Copy> Preference<T> {
    pub(crate) fn new(site_default: T) -> Self {
        Self {
            chosen: None,
            site_default,
        }
    }

    pub(crate) fn current(&self) -> T {
        self.chosen.unwrap_or(self.site_default)
    }

    /// The visitor picked `value` in this session.
    pub(crate) fn choose(&mut self, value: T) {
        self.chosen = Some(value);
    }

    /// A choice saved by an earlier visit. Ignored once the visitor has chosen.
    pub(crate) fn restore(&mut self, stored: Option<T>) {
        if self.chosen.is_none() {
            self.chosen = stored;
        }
    }

    pub(crate) fn set_site_default(&mut self, value: T) {
        self.site_default = value;
    }
}

/// Update `preference` and mirror its current value into `value`.
pub(crate) fn apply<T>(
    mut preference: Signal<Preference<T>>,
    mut value: Signal<T>,
    update: impl FnOnce(&mut Preference<T>),
) where
    T: Copy + PartialEq + 'static,
{
    let next = {
        let mut preference = preference.write();
        update(&mut preference);
        preference.current()
    };
    if *value.peek() != next {
        value.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Theme;

    #[test]
    fn follows_site_default_until_chosen() {
        let mut pref = Preference::new(Theme::System);
        pref.set_site_default(Theme::Dark);
        assert_eq!(pref.current(), Theme::Dark);
    }

    #[test]
    fn choice_survives_late_site_default() {
        let mut pref = Preference::new(Theme::System);
        pref.choose(Theme::Light);
        pref.set_site_default(Theme::Dark);
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn stored_choice_wins_over_site_default() {
        let mut pref = Preference::new(Theme::System);
        pref.restore(Some(Theme::Dark));
        pref.set_site_default(Theme::Light);
        assert_eq!(pref.current(), Theme::Dark);
    }

    #[test]
    fn stored_choice_does_not_override_session_choice() {
        let mut pref = Preference::new(Theme::System);
        pref.choose(Theme::Light);
        pref.restore(Some(Theme::Dark));
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn nothing_stored_keeps_default() {
        let mut pref = Preference::new(Theme::System);
        pref.restore(None);
        assert_eq!(pref.current(), Theme::System);
    }
}
