//! Locale interface consumed by page assembly and form labels.

/// Read access to the ambient localization service.
///
/// Empty answers mean the service has no opinion and the configured
/// fallback applies.
pub trait Localizer {
    /// Active locale tag, e.g. `"en"`. May be empty.
    fn locale(&self) -> String;

    /// Active charset, e.g. `"UTF-8"`. May be empty.
    fn charset(&self) -> String;

    /// Translate a message for the active locale.
    fn text(&self, msg: &str) -> String;
}

/// Fixed-answer [`Localizer`] for standalone use and tests.
///
/// `text` is the identity — messages come back untranslated.
#[derive(Debug, Clone, Default)]
pub struct StaticLocale {
    pub locale: String,
    pub charset: String,
}

impl StaticLocale {
    pub fn new(locale: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            charset: charset.into(),
        }
    }
}

impl Localizer for StaticLocale {
    fn locale(&self) -> String {
        self.locale.clone()
    }

    fn charset(&self) -> String {
        self.charset.clone()
    }

    fn text(&self, msg: &str) -> String {
        msg.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_locale_answers() {
        let i18n = StaticLocale::new("en", "UTF-8");
        assert_eq!(i18n.locale(), "en");
        assert_eq!(i18n.charset(), "UTF-8");
        assert_eq!(i18n.text("Tags"), "Tags");
    }

    #[test]
    fn default_is_empty() {
        let i18n = StaticLocale::default();
        assert!(i18n.locale().is_empty());
        assert!(i18n.charset().is_empty());
    }
}
