mod error;

use crate::uv::Language;
pub use error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

const DEFAULT_UPDATE_INTERVAL_MS: u64 = 60 * 60 * 1000;
const DEFAULT_INITIAL_LOAD_DELAY_MS: u64 = 0;
const DEFAULT_RETRY_DELAY_MS: u64 = 2500;

const DEFAULT_API_VERSION: &'static str = "3.0";
const DEFAULT_API_BASE: &'static str = "https://api.openweathermap.org/data/";
const DEFAULT_UV_ENDPOINT: &'static str = "onecall";

/// Startup configuration of a single UV widget.
///
/// Keys match the dashboard module config (`updateInterval`, `apiBase`, ...)
/// so an existing module block can be pasted into the JSON file unchanged.
/// Unknown keys are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub appid: String,
    pub colors: bool,

    #[serde(rename = "updateInterval")]
    pub update_interval_ms: u64,
    #[serde(rename = "initialLoadDelay")]
    pub initial_load_delay_ms: u64,
    #[serde(rename = "retryDelay")]
    pub retry_delay_ms: u64,

    pub api_version: String,
    pub api_base: String,
    pub uv_endpoint: String,

    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lat: None,
            lon: None,
            appid: String::default(),
            colors: true,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            initial_load_delay_ms: DEFAULT_INITIAL_LOAD_DELAY_MS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            api_version: DEFAULT_API_VERSION.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            uv_endpoint: DEFAULT_UV_ENDPOINT.to_owned(),
            language: Language::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
        let contents = fs::read_to_string(path)?;
        Config::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Config, Error> {
        Ok(serde_json::from_str::<Config>(json)?)
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn initial_load_delay(&self) -> Duration {
        Duration::from_millis(self.initial_load_delay_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn has_appid(&self) -> bool {
        !self.appid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.lat, None);
        assert_eq!(config.lon, None);
        assert_eq!(config.appid, "");
        assert!(config.colors);
        assert_eq!(config.update_interval(), Duration::from_secs(3600));
        assert_eq!(config.initial_load_delay(), Duration::from_millis(0));
        assert_eq!(config.retry_delay(), Duration::from_millis(2500));
        assert_eq!(config.api_base, "https://api.openweathermap.org/data/");
        assert_eq!(config.api_version, "3.0");
        assert_eq!(config.uv_endpoint, "onecall");
        assert_eq!(config.language, Language::En);
        assert!(!config.has_appid());
    }

    #[test]
    fn test_from_json_module_keys() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_json(
            r#"{
                "lat": 52.2297,
                "lon": 21.0122,
                "appid": "abc123",
                "colors": false,
                "updateInterval": 600000,
                "retryDelay": 5000,
                "animationSpeed": 1000,
                "language": "pl"
            }"#,
        )?;

        assert_eq!(config.lat, Some(52.2297));
        assert_eq!(config.lon, Some(21.0122));
        assert_eq!(config.appid, "abc123");
        assert!(!config.colors);
        assert_eq!(config.update_interval(), Duration::from_secs(600));
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
        assert_eq!(config.initial_load_delay(), Duration::from_millis(0));
        assert_eq!(config.uv_endpoint, "onecall");
        assert_eq!(config.language, Language::Pl);
        assert!(config.has_appid());

        Ok(())
    }

    #[test]
    fn test_from_json_empty_object_is_default() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Config::from_json("{}")?, Config::default());
        Ok(())
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(Config::from_json("{\"lat\": ").is_err());
        assert!(Config::from_json("{\"lat\": \"north\"}").is_err());
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Config::from_file("/nonexistent/uv_index.json").is_err());
    }
}
