use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;

/// Language of every user-facing string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Picks the variant of a message written for this language.
    pub fn pick(self, en: &'static str, ru: &'static str) -> &'static str {
        match self {
            Locale::En => en,
            Locale::Ru => ru,
        }
    }
}

impl FromStr for Locale {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            _ => Err(InputError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pick("en", "ru"))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("RU".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!(" Russian ".parse::<Locale>().unwrap(), Locale::Ru);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "de".parse::<Locale>().unwrap_err();
        assert_eq!(err, InputError::UnknownLocale("de".to_string()));
        assert!(err.to_string().contains("en, ru"));
    }

    #[test]
    fn pick_follows_language() {
        assert_eq!(Locale::En.pick("flow", "поток"), "flow");
        assert_eq!(Locale::Ru.pick("flow", "поток"), "поток");
    }

    #[test]
    fn english_is_default() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
