use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("number of pairs must be greater than 0, got {0}")]
    InvalidArgument(i64),
    #[error("unknown difficulty label: {0}")]
    UnknownDifficulty(String),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("could not read preferences: {0}")]
    Preferences(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
