use thiserror::Error;

/// Library-level error type.
///
/// Invalid configuration supplied by the caller is the only failure the
/// core surfaces as an error; malformed or partial input always degrades to
/// well-formed output with reduced confidence instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(String),
}
