use crate::uv::Severity;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const LANGUAGE_EN: &'static str = "en";
const LANGUAGE_PL: &'static str = "pl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pl,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::En => f.write_str(LANGUAGE_EN),
            Self::Pl => f.write_str(LANGUAGE_PL),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Language, Self::Err> {
        match s {
            LANGUAGE_EN => Ok(Language::En),
            LANGUAGE_PL => Ok(Language::Pl),
            _ => Err(format!("Unrecognized language: {}", s)),
        }
    }
}

impl Language {
    pub fn loading(&self) -> &'static str {
        match self {
            Self::En => "Loading …",
            Self::Pl => "Ładowanie …",
        }
    }

    pub fn severity_label(&self, severity: Severity) -> &'static str {
        match (self, severity) {
            (Self::En, Severity::Low) => "Low",
            (Self::En, Severity::Moderate) => "Moderate",
            (Self::En, Severity::High) => "High",
            (Self::En, Severity::VeryHigh) => "Very high",
            (Self::En, Severity::Extreme) => "Extreme",

            (Self::Pl, Severity::Low) => "Niski",
            (Self::Pl, Severity::Moderate) => "Umiarkowany",
            (Self::Pl, Severity::High) => "Wysoki",
            (Self::Pl, Severity::VeryHigh) => "Bardzo wysoki",
            (Self::Pl, Severity::Extreme) => "Ekstremalny",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("pl".parse::<Language>(), Ok(Language::Pl));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Pl.to_string(), "pl");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Severity::VeryHigh.label(Language::En), "Very high");
        assert_eq!(Severity::VeryHigh.label(Language::Pl), "Bardzo wysoki");
        assert_eq!(Language::Pl.loading(), "Ładowanie …");
    }
}
