use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("answer value {0} is outside the 0-4 scale")]
    InvalidAnswerValue(u8),

    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("unknown respondent role: {0}")]
    UnknownRole(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
