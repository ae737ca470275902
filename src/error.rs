// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Crate-wide error type.
///
/// Payloads are plain strings so the error stays `Clone` and can travel
/// inside Iced messages (e.g. async image load results).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Content Error: {0}")]
    Content(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
