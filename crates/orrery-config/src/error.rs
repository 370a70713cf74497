//! Configuration error types.

/// Errors from loading or persisting the demo's `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("could not read config.ron: {0}")]
    ReadError(#[source] std::io::Error),

    /// `config.ron` (or its directory) could not be written.
    #[error("could not write config.ron: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for the settings schema.
    #[error("config.ron is not valid: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// The settings could not be serialized to RON.
    #[error("could not serialize settings: {0}")]
    SerializeError(#[source] ron::Error),
}
