// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! The filter panel itself never fails: missing setters disable interactions
//! instead of raising errors. Failures only come from the ambient layers
//! (configuration files, album manifests).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Album Error: {0}")]
    Album(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
