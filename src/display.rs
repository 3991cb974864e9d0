mod error;

use crate::uv::{Color, Severity};
pub use error::{Error, ErrorKind};

use chrono::{DateTime, Local};
use log::debug;
use serde::Serialize;
use std::io::{self, Write};

/// What the widget should currently show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum View {
    MissingApiKey {
        message: String,
    },
    Loading {
        text: &'static str,
    },
    /// No location is configured, so the widget stays out of sight.
    Hidden,
    #[serde(rename_all = "camelCase")]
    Reading {
        display_value: f64,
        severity: Severity,
        severity_label: &'static str,
        severity_color: Color,
        updated_at: Option<DateTime<Local>>,
    },
}

// To enable heterogenous abstractions over multiple display types
pub enum DisplayType {
    Console(ConsoleDisplay<io::Stdout>),
    Json(JsonDisplay<io::Stdout>),
    Composite(Vec<DisplayType>),
}

impl Display for DisplayType {
    fn print(&mut self, view: &View) -> Result<(), Error> {
        match &mut *self {
            Self::Console(display) => display.print(view),
            Self::Json(display) => display.print(view),
            Self::Composite(displays) => {
                for d in displays.iter_mut() {
                    d.print(view)?;
                }
                Ok(())
            }
        }
    }
}

pub trait Display {
    fn print(&mut self, view: &View) -> Result<(), Error>;
}

/// Draws the widget as a small framed box of text.
pub struct ConsoleDisplay<W> {
    out: W,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn new() -> Self {
        ConsoleDisplay::with_writer(io::stdout())
    }
}

impl Default for ConsoleDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        ConsoleDisplay { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for ConsoleDisplay<W> {
    fn print(&mut self, view: &View) -> Result<(), Error> {
        let rows = match console_rows(view) {
            Some(rows) => rows,
            None => {
                debug!("console display hidden");
                return Ok(());
            }
        };

        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

        writeln!(self.out)?;
        writeln!(self.out, "-{}-", "-".repeat(width))?;
        for row in rows.iter() {
            writeln!(self.out, "|{:<width$}|", row, width = width)?;
        }
        writeln!(self.out, "-{}-", "-".repeat(width))?;
        self.out.flush()?;

        Ok(())
    }
}

fn console_rows(view: &View) -> Option<Vec<String>> {
    match view {
        View::Hidden => None,
        View::MissingApiKey { message } => Some(vec![message.clone()]),
        View::Loading { text } => Some(vec![format!("UV {:>width$}", text, width = 17)]),
        View::Reading {
            display_value,
            severity_label,
            severity_color,
            updated_at,
            ..
        } => {
            let color = match severity_color {
                Color::Uncolored => String::new(),
                c => format!("[{}]", c),
            };
            let time = match updated_at {
                Some(t) => t.format("%H:%M").to_string(),
                None => String::new(),
            };
            Some(vec![
                format!("UV {:<5}{:>width$}", display_value, severity_label, width = 13),
                format!("{:<10}{:>width$}", color, time, width = 11),
            ])
        }
    }
}

/// Writes every view as one JSON object per line, for a host process to pick up.
pub struct JsonDisplay<W> {
    out: W,
}

impl JsonDisplay<io::Stdout> {
    pub fn new() -> Self {
        JsonDisplay::with_writer(io::stdout())
    }
}

impl Default for JsonDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        JsonDisplay { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for JsonDisplay<W> {
    fn print(&mut self, view: &View) -> Result<(), Error> {
        serde_json::to_writer(&mut self.out, view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading(color: Color) -> View {
        View::Reading {
            display_value: 4.2,
            severity: Severity::Moderate,
            severity_label: "Moderate",
            severity_color: color,
            updated_at: Some(Local.with_ymd_and_hms(2024, 6, 10, 14, 5, 0).unwrap()),
        }
    }

    #[test]
    fn test_console_reading() -> Result<(), Box<dyn std::error::Error>> {
        let mut display = ConsoleDisplay::with_writer(Vec::new());
        display.print(&reading(Color::Yellow))?;
        let out = String::from_utf8(display.into_inner())?;

        assert!(out.contains("|UV 4.2       Moderate|"), "{}", out);
        assert!(out.contains("|[yellow]        14:05|"), "{}", out);
        Ok(())
    }

    #[test]
    fn test_console_reading_uncolored() -> Result<(), Box<dyn std::error::Error>> {
        let mut display = ConsoleDisplay::with_writer(Vec::new());
        display.print(&reading(Color::Uncolored))?;
        let out = String::from_utf8(display.into_inner())?;

        assert!(!out.contains('['), "{}", out);
        assert!(out.contains("14:05|"), "{}", out);
        Ok(())
    }

    #[test]
    fn test_console_hidden_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let mut display = ConsoleDisplay::with_writer(Vec::new());
        display.print(&View::Hidden)?;
        assert!(display.into_inner().is_empty());
        Ok(())
    }

    #[test]
    fn test_console_loading() -> Result<(), Box<dyn std::error::Error>> {
        let mut display = ConsoleDisplay::with_writer(Vec::new());
        display.print(&View::Loading { text: "Loading …" })?;
        let out = String::from_utf8(display.into_inner())?;
        assert!(out.contains("|UV         Loading …|"), "{}", out);
        Ok(())
    }

    #[test]
    fn test_json_lines() -> Result<(), Box<dyn std::error::Error>> {
        let mut display = JsonDisplay::with_writer(Vec::new());
        display.print(&View::Hidden)?;
        display.print(&reading(Color::Yellow))?;
        let out = String::from_utf8(display.into_inner())?;

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(serde_json::from_str::<serde_json::Value>)
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], serde_json::json!({ "kind": "hidden" }));
        assert_eq!(lines[1]["kind"], "reading");
        assert_eq!(lines[1]["displayValue"], 4.2);
        assert_eq!(lines[1]["severity"], "moderate");
        assert_eq!(lines[1]["severityLabel"], "Moderate");
        assert_eq!(lines[1]["severityColor"], "yellow");
        Ok(())
    }
}
