mod error;
mod language;
mod open_weather_types;
mod severity;

pub use error::{Error, ErrorKind};
pub use language::Language;
pub use open_weather_types::{Current, OneCall};
pub use severity::{classify_severity, color_for, Color, Severity};

const HTTP_OK: u16 = 200;

/// Issues a GET against `uri` and returns the body of a `200 OK` response.
///
/// Any other final status is an error, including the 2xx and 3xx codes that
/// survive redirect handling.
pub fn fetch(uri: &str) -> Result<String, Error> {
    let resp = ureq::get(uri).call()?;

    let status = resp.status();
    if status != HTTP_OK {
        return Err(Error::unexpected_status(status));
    }

    Ok(resp.into_string()?)
}
