use std::{error, fmt};

/// The platform has a single failure mode: the content document could not
/// be fetched or decoded. Network errors, bad statuses, and malformed
/// bodies are not told apart.
#[derive(Clone, Debug)]
pub enum Error {
    FetchFailed(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed(msg) => write!(f, "Failed to fetch content: {msg}"),
        }
    }
}
