pub mod config;
mod display;
mod notify;
mod poller;
pub mod uv;

pub use config::Config;
pub use display::Error as DisplayError;
pub use display::{ConsoleDisplay, Display, DisplayType, JsonDisplay, View};
pub use notify::{JsonLinesNotifier, LogNotifier, Notification, Notifier, NotifierType};
pub use poller::{
    build_request_url, parse_reading, poll, PollOutcome, Poller, Reading, ReadingState, Schedule,
};

use log::{debug, info};
use std::fmt;
use std::thread;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Config(config::Error),
    Display(display::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Config(ref err) => write!(f, "{}", err),
            ErrorKind::Display(ref err) => write!(f, "{}", err),
        }
    }
}

impl From<config::Error> for Error {
    fn from(e: config::Error) -> Self {
        Error {
            kind: ErrorKind::Config(e),
        }
    }
}

impl From<display::Error> for Error {
    fn from(e: display::Error) -> Self {
        Error {
            kind: ErrorKind::Display(e),
        }
    }
}

/// Polls forever, sleeping between cycles for whatever the last cycle asked for.
///
/// Returns once the configuration makes polling pointless (no APPID or no
/// latitude), after a single cycle when `once` is set, or when the display
/// can no longer be written to. Failed requests never end the loop.
pub fn run<D, N>(
    config: Config,
    display: &mut D,
    notifier: &mut N,
    once: bool,
) -> Result<(), Error>
where
    D: Display + ?Sized,
    N: Notifier + ?Sized,
{
    let mut poller = Poller::new(config);
    display.print(&poller.view())?;

    let mut delay = poller.schedule_next(Some(poller.config().initial_load_delay()));

    loop {
        thread::sleep(delay);

        match poller.cycle(display, notifier)? {
            Schedule::After(_) if once => return Ok(()),
            Schedule::After(next) => {
                debug!("next UV poll in {}ms", next.as_millis());
                delay = next;
            }
            Schedule::Halt => {
                info!("nothing to poll with this configuration, stopping");
                return Ok(());
            }
        }
    }
}
