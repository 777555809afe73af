use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before a valid answer was given")]
    InputClosed,

    #[error("Failed to parse rules: {0}")]
    RulesParse(#[from] toml::de::Error),

    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
