use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("invalid date key `{input}`, expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("invalid time `{input}`, expected HH:mm")]
    InvalidTime { input: String },
    #[error("no schedule item with id `{id}`")]
    NotFound { id: String },
    #[error("unable to decode seed items: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type Result<T, E = AgendaError> = std::result::Result<T, E>;
