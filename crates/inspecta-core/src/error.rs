use thiserror::Error;

/// Errors from resolving settings and user-supplied values
#[derive(Error, Debug)]
pub enum CoreError {
    /// A configured value is present but unusable, e.g. an unknown timezone.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A week start, schedule kind or instant that does not parse.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
