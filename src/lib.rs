//! Ballast - layered settings resolution for the run-tracking client.
//!
//! This library is the settings core of the client SDK: a registry of
//! declared settings updated by many concurrently-active sources
//! (environment, config files, login flow, run init, runtime code, CLI
//! overrides), arbitrated by an explicit source-precedence order and
//! exported as a JSON-safe snapshot.

pub mod cli;
pub mod schema;
pub mod settings;

/// Library-level error type for Ballast operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("invalid value for `{name}`: {value}: {reason}")]
    InvalidValue {
        name: String,
        value: serde_json::Value,
        reason: String,
    },

    #[error("`{0}` is frozen")]
    Frozen(String),

    #[error("cyclic dependency: {0}")]
    CyclicDependency(String),
}

/// Result type alias for Ballast operations.
pub type Result<T> = std::result::Result<T, Error>;
