#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No amount entered")]
    EmptyAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Serde Error: {0}")]
    Serde(String),
}

impl Error {
    pub fn invalid_amount(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::InvalidAmount(message)
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::InvalidAmount(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serde(error.to_string())
    }
}
