/// Languages the summary can be translated into, alongside English
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Tamil,
    Malayalam,
}

impl Language {
    /// Resolve a locale code. Unrecognized or absent codes mean English only.
    pub fn from_code(code: Option<&str>) -> Option<Self> {
        match code {
            Some("ta") => Some(Language::Tamil),
            Some("ml") => Some(Language::Malayalam),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Tamil => "ta",
            Language::Malayalam => "ml",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::Malayalam => "Malayalam",
        }
    }

    /// Sentence appended to the persona line of the prompt
    pub fn translation_note(self) -> String {
        format!(
            " Please include a {} translation after each section.",
            self.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_supported_codes() {
        assert_eq!(Language::from_code(Some("ta")), Some(Language::Tamil));
        assert_eq!(Language::from_code(Some("ml")), Some(Language::Malayalam));
    }

    #[test]
    fn other_codes_fall_back_to_english() {
        assert_eq!(Language::from_code(None), None);
        assert_eq!(Language::from_code(Some("en")), None);
        assert_eq!(Language::from_code(Some("TA")), None);
        assert_eq!(Language::from_code(Some("")), None);
    }

    #[test]
    fn translation_note_names_language() {
        assert_eq!(
            Language::Malayalam.translation_note(),
            " Please include a Malayalam translation after each section."
        );
        assert_eq!(Language::Tamil.code(), "ta");
    }
}
