use crate::config::Config;
use crate::display::{self, Display, View};
use crate::notify::{Notification, Notifier};
use crate::uv::{self, classify_severity, color_for, OneCall};

use chrono::{DateTime, Local};
use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const MODULE_NAME: &'static str = "uv-index";

/// The last reading this poller has seen. Only a successful poll writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingState {
    pub value: Option<f64>,
    pub updated_at: Option<DateTime<Local>>,
    pub loaded: bool,
}

impl ReadingState {
    fn record(&mut self, value: f64) {
        self.value = Some(value);
        self.updated_at = Some(Local::now());
        self.loaded = true;
    }
}

/// A usable UV index plus the response it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub payload: Value,
}

/// How a request ended. A `200 OK` without a usable reading has no outcome.
#[derive(Debug)]
pub enum PollOutcome {
    Success(Reading),
    Unauthorized,
    TransportError(uv::Error),
}

/// What the run loop should do after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    After(Duration),
    /// Nothing can ever be requested with this configuration.
    Halt,
}

/// Builds the One Call URL, or `None` when no latitude is configured.
pub fn build_request_url(config: &Config) -> Option<String> {
    let lat = config.lat?;
    let lon = config.lon.map(|l| l.to_string()).unwrap_or_default();

    Some(format!(
        "{}{}/{}?lat={}&lon={}&APPID={}",
        config.api_base, config.api_version, config.uv_endpoint, lat, lon, config.appid
    ))
}

pub fn poll(url: &str) -> Option<PollOutcome> {
    match uv::fetch(url) {
        Ok(body) => parse_reading(&body).map(PollOutcome::Success),
        Err(e) if e.is_unauthorized() => Some(PollOutcome::Unauthorized),
        Err(e) => Some(PollOutcome::TransportError(e)),
    }
}

pub fn parse_reading(body: &str) -> Option<Reading> {
    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("UV response is not JSON, skipping: {}", e);
            return None;
        }
    };

    let value = match OneCall::deserialize(&payload) {
        Ok(one_call) => one_call.current_uvi(),
        Err(e) => {
            warn!("UV response has an unexpected shape, skipping: {}", e);
            return None;
        }
    };

    match value {
        Some(value) => Some(Reading { value, payload }),
        None => {
            warn!("UV response carried no current.uvi, skipping");
            None
        }
    }
}

fn missing_appid_message() -> String {
    format!(
        "Please set the correct openuv appid in the config for module: {}.",
        MODULE_NAME
    )
}

/// Polls one location and keeps its [`ReadingState`].
#[derive(Debug)]
pub struct Poller {
    config: Config,
    state: ReadingState,
}

impl Poller {
    pub fn new(config: Config) -> Poller {
        Poller {
            config,
            state: ReadingState::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    pub fn view(&self) -> View {
        if !self.config.has_appid() {
            return View::MissingApiKey {
                message: missing_appid_message(),
            };
        }

        match self.state.value {
            Some(value) if self.state.loaded => {
                let severity = classify_severity(value);
                View::Reading {
                    display_value: value,
                    severity,
                    severity_label: severity.label(self.config.language),
                    severity_color: color_for(value, self.config.colors),
                    updated_at: self.state.updated_at,
                }
            }
            _ => View::Loading {
                text: self.config.language.loading(),
            },
        }
    }

    /// The delay before the next poll: `delay` if given, the update interval otherwise.
    pub fn schedule_next(&self, delay: Option<Duration>) -> Duration {
        delay.unwrap_or_else(|| self.config.update_interval())
    }

    /// Runs one poll cycle and says when the next one is due.
    pub fn cycle<D, N>(
        &mut self,
        display: &mut D,
        notifier: &mut N,
    ) -> Result<Schedule, display::Error>
    where
        D: Display + ?Sized,
        N: Notifier + ?Sized,
    {
        if !self.config.has_appid() {
            error!("{}: APPID not set!", MODULE_NAME);
            return Ok(Schedule::Halt);
        }

        let url = match build_request_url(&self.config) {
            Some(url) => url,
            None => {
                warn!("{}: no latitude configured, hiding widget", MODULE_NAME);
                display.print(&View::Hidden)?;
                return Ok(Schedule::Halt);
            }
        };

        debug!(
            "requesting UV index for lat={:?} lon={:?}",
            self.config.lat, self.config.lon
        );
        let outcome = poll(&url);

        self.complete(outcome, display, notifier).map(Schedule::After)
    }

    /// Applies the result of one request and returns the delay until the next.
    pub fn complete<D, N>(
        &mut self,
        outcome: Option<PollOutcome>,
        display: &mut D,
        notifier: &mut N,
    ) -> Result<Duration, display::Error>
    where
        D: Display + ?Sized,
        N: Notifier + ?Sized,
    {
        let retry = Some(self.config.retry_delay());

        match outcome {
            Some(PollOutcome::Success(reading)) => {
                info!("UV index updated: {}", reading.value);
                self.state.record(reading.value);
                display.print(&self.view())?;

                let notification = Notification::CurrentUvData(&reading.payload);
                if let Err(e) = notifier.send(&notification) {
                    warn!("failed to publish {}: {}", notification.name(), e);
                }

                Ok(self.schedule_next(None))
            }
            Some(PollOutcome::Unauthorized) => {
                error!("{}: Incorrect APPID.", MODULE_NAME);
                display.print(&self.view())?;
                Ok(self.schedule_next(retry))
            }
            Some(PollOutcome::TransportError(e)) => {
                error!("{}: Could not load UV index: {}", MODULE_NAME, e);
                Ok(self.schedule_next(retry))
            }
            None if self.state.loaded => Ok(self.schedule_next(None)),
            None => Ok(self.schedule_next(retry)),
        }
    }
}
