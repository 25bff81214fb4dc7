use std::fmt::{Display, Formatter};

use crate::options::TransportOptions;


pub mod reqwest;

/// What the transport brought back from a server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fetched {
    /// `None` when the body could not be read or the status was refused.
    pub body: Option<String>,
    /// The raw status line followed by `name: value` lines.
    pub header: Vec<String>,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    InvalidMethod(String),
    Request(::reqwest::Error),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match &self.kind {
            ErrorKind::InvalidMethod(method) => {
                f.write_fmt(format_args!("Invalid request method: {}", method))
            }
            ErrorKind::Request(e) => f.write_fmt(format_args!("{}", e)),
        }
    }
}

impl From<::reqwest::Error> for Error {
    fn from(e: ::reqwest::Error) -> Self {
        Error {
            kind: ErrorKind::Request(e),
        }
    }
}

/// The capability that actually talks to the network.
///
/// An `Err` means no server was reached. Any answer from a server, whatever its status, is
/// an `Ok`.
pub trait HttpClient {
    fn fetch(&self, url: &str, options: &TransportOptions) -> Result<Fetched, Error>;
}
