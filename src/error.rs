//! Error types
//!
//! Gameplay never fails; only loading settings and driving the host can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings file is not valid JSON for [`crate::Settings`]
    #[error("malformed settings: {0}")]
    Settings(#[from] serde_json::Error),
    /// A setting parsed but its value is unusable
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
