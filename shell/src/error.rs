//! Error types for shell composition.
//!
//! Every runtime operation of the shell is total. Errors only surface while
//! composing the shell from configuration, so a bad theme list or a broken
//! nav table is caught at startup instead of at the first click.

use thiserror::Error;

/// Errors raised while loading or validating the shell configuration.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The ordered theme set has no entries.
    #[error("theme set is empty")]
    EmptyThemeSet,

    /// The same theme id appears twice in the ordered theme set.
    #[error("duplicate theme id `{0}`")]
    DuplicateTheme(String),

    /// A theme id outside the configured set was supplied.
    #[error("theme `{0}` is not part of the configured theme set")]
    UnknownTheme(String),

    /// No navigation entries were configured.
    #[error("navigation list is empty")]
    EmptyNav,

    /// Two navigation entries share the same path segment.
    #[error("duplicate navigation path `{0}`")]
    DuplicateNavPath(String),

    /// A navigation path segment is empty or contains a slash.
    #[error("invalid navigation path `{0}`: expected a single non-empty segment")]
    InvalidNavPath(String),

    /// The TOML configuration could not be parsed.
    #[error("failed to parse shell config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ShellError>;
