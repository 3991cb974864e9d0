use log::info;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

const CURRENT_UV_DATA: &'static str = "CURRENTUV_DATA";

/// An event published to the rest of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification<'a> {
    /// The full response of a poll that produced a reading.
    CurrentUvData(&'a Value),
}

#[derive(Serialize)]
struct DataPayload<'a> {
    data: &'a Value,
}

#[derive(Serialize)]
struct Envelope<'a> {
    notification: &'static str,
    payload: DataPayload<'a>,
}

impl<'a> Notification<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CurrentUvData(_) => CURRENT_UV_DATA,
        }
    }

    /// The event body as subscribers receive it: `{"data": <raw response>}`.
    pub fn payload(&self) -> Value {
        match self {
            Self::CurrentUvData(data) => serde_json::json!({ "data": data }),
        }
    }

    fn envelope(&self) -> Envelope<'a> {
        match *self {
            Self::CurrentUvData(data) => Envelope {
                notification: self.name(),
                payload: DataPayload { data },
            },
        }
    }
}

pub trait Notifier {
    fn send(&mut self, notification: &Notification) -> io::Result<()>;
}

// To enable heterogenous abstractions over multiple notifier types
pub enum NotifierType {
    Log(LogNotifier),
    JsonLines(JsonLinesNotifier<io::Stdout>),
    Silent,
}

impl Notifier for NotifierType {
    fn send(&mut self, notification: &Notification) -> io::Result<()> {
        match &mut *self {
            Self::Log(notifier) => notifier.send(notification),
            Self::JsonLines(notifier) => notifier.send(notification),
            Self::Silent => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct LogNotifier {}

impl LogNotifier {
    pub fn new() -> LogNotifier {
        LogNotifier {}
    }
}

impl Notifier for LogNotifier {
    fn send(&mut self, notification: &Notification) -> io::Result<()> {
        info!("{}: {}", notification.name(), notification.payload());
        Ok(())
    }
}

pub struct JsonLinesNotifier<W> {
    out: W,
}

impl JsonLinesNotifier<io::Stdout> {
    pub fn new() -> Self {
        JsonLinesNotifier::with_writer(io::stdout())
    }
}

impl Default for JsonLinesNotifier<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonLinesNotifier<W> {
    pub fn with_writer(out: W) -> Self {
        JsonLinesNotifier { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for JsonLinesNotifier<W> {
    fn send(&mut self, notification: &Notification) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &notification.envelope())?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
