use serde::Deserialize;

/// The subset of an OpenWeather One Call response the widget reads.
///
/// Everything else in the payload is ignored here and only travels onward in
/// the raw `CURRENTUV_DATA` notification.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OneCall {
    pub current: Option<Current>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Current {
    pub dt: Option<i64>,
    pub uvi: Option<f64>,
}

impl OneCall {
    pub fn current_uvi(&self) -> Option<f64> {
        self.current.as_ref().and_then(|c| c.uvi)
    }
}
