use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortydexError {
    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: reqwest::StatusCode, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("MortydexError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for MortydexError {
    fn from(error: reqwest::Error) -> Self {
        MortydexError::Reqwest(Box::new(error))
    }
}
