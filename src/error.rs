use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
    #[error("Recursion depth exhausted (limit {limit})")]
    DepthExhausted { limit: usize },
    #[error("Not a falsy literal: {0:?}")]
    NotFalsy(String),
}

pub type Result<T> = std::result::Result<T, SharedError>;

// Helper conversions
impl From<config::ConfigError> for SharedError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

impl<G> From<std::sync::PoisonError<G>> for SharedError {
    fn from(e: std::sync::PoisonError<G>) -> Self { Self::Lock(e.to_string()) }
}
