use std::fmt;

const HTTP_UNAUTHORIZED: u16 = 401;

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

    /// The HTTP status that caused this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Http(ureq::Error::Status(code, _)) => Some(code),
            ErrorKind::UnexpectedStatus(code) => Some(code),
            _ => None,
        }
    }

    /// Whether the server rejected the configured APPID.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(HTTP_UNAUTHORIZED)
    }

    pub(crate) fn unexpected_status(code: u16) -> Self {
        Error {
            kind: ErrorKind::UnexpectedStatus(code),
        }
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Http(ureq::Error),
    Transport(ureq::Error),
    UnexpectedStatus(u16),
    StringParse(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Http(ref err) => write!(f, "{}", err),
            ErrorKind::Transport(ref err) => write!(f, "{}", err),
            ErrorKind::UnexpectedStatus(code) => write!(f, "unexpected HTTP status {}", code),
            ErrorKind::StringParse(ref err) => write!(f, "{}", err),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(_, _) => Error {
                kind: ErrorKind::Http(e),
            },
            ureq::Error::Transport(_) => Error {
                kind: ErrorKind::Transport(e),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::StringParse(e),
        }
    }
}
