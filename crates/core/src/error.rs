/// Errors raised by the ECOG reference table and note formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcogError {
    #[error("ECOG score {score} is out of range (expected 0 to 5)")]
    OutOfRange { score: i64 },
    #[error("invalid ECOG score: {0}")]
    InvalidScore(String),
    #[error("invalid assessment date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

pub type EcogResult<T> = std::result::Result<T, EcogError>;
