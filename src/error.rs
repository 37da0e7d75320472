// src/error.rs
use std::fmt;

use thiserror::Error;

/// Which side of a delta filter a missing key column was expected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Existing,
    Candidates,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Existing => f.write_str("existing"),
            Side::Candidates => f.write_str("candidate"),
        }
    }
}

/// Caller/configuration errors. Bad page data never ends up here; it is padded,
/// coerced or skipped and shows up in a [`crate::Report`] instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("key column `{key}` is missing from the {side} data")]
    SchemaKeyMissing { key: String, side: Side },

    #[error("invalid parse options: {0}")]
    Options(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
