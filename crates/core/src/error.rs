use thiserror::Error;

/// Hospital finder error types
#[derive(Debug, Error)]
pub enum HospitalError {
    #[error("Language model provider error: {0}")]
    Provider(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Unparseable hospital list: {0}")]
    UnparseableList(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
