use crate::uv::Language;
use serde::Serialize;
use std::fmt;

// Inclusive upper bounds of each band.
const LOW_MAX: f64 = 2.0;
const MODERATE_MAX: f64 = 5.0;
const HIGH_MAX: f64 = 7.0;
const VERY_HIGH_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl Severity {
    pub fn label(&self, language: Language) -> &'static str {
        language.severity_label(*self)
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Moderate => Color::Yellow,
            Self::High => Color::Orange,
            Self::VeryHigh => Color::Red,
            Self::Extreme => Color::Violet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Violet,
    /// Color coding is switched off.
    #[serde(rename = "none")]
    Uncolored,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Violet => "violet",
            Self::Uncolored => "none",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a UV index onto its severity band. NaN lands in `Extreme`.
pub fn classify_severity(value: f64) -> Severity {
    if value <= LOW_MAX {
        Severity::Low
    } else if value <= MODERATE_MAX {
        Severity::Moderate
    } else if value <= HIGH_MAX {
        Severity::High
    } else if value <= VERY_HIGH_MAX {
        Severity::VeryHigh
    } else {
        Severity::Extreme
    }
}

pub fn color_for(value: f64, colors_enabled: bool) -> Color {
    if !colors_enabled {
        return Color::Uncolored;
    }
    classify_severity(value).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_severity_bands() {
        let cases = [
            (-1.0, Severity::Low, Color::Green),
            (0.0, Severity::Low, Color::Green),
            (2.0, Severity::Low, Color::Green),
            (2.01, Severity::Moderate, Color::Yellow),
            (4.2, Severity::Moderate, Color::Yellow),
            (5.0, Severity::Moderate, Color::Yellow),
            (5.5, Severity::High, Color::Orange),
            (7.0, Severity::High, Color::Orange),
            (7.1, Severity::VeryHigh, Color::Red),
            (10.0, Severity::VeryHigh, Color::Red),
            (10.01, Severity::Extreme, Color::Violet),
            (14.0, Severity::Extreme, Color::Violet),
        ];

        for (value, severity, color) in cases.iter() {
            assert_eq!(classify_severity(*value), *severity, "value {}", value);
            assert_eq!(color_for(*value, true), *color, "value {}", value);
        }
    }

    #[test]
    fn test_color_for_disabled() {
        for value in [0.0, 3.0, 6.0, 9.0, 12.0].iter() {
            assert_eq!(color_for(*value, false), Color::Uncolored);
        }
    }

    #[test]
    fn test_nan_is_extreme() {
        assert_eq!(classify_severity(f64::NAN), Severity::Extreme);
    }

    #[test]
    fn test_serialized_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Severity::VeryHigh)?, "\"veryHigh\"");
        assert_eq!(serde_json::to_string(&Color::Violet)?, "\"violet\"");
        assert_eq!(serde_json::to_string(&Color::Uncolored)?, "\"none\"");
        Ok(())
    }
}
