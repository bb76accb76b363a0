use innodex_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Loading(#[from] LoadingError),
    #[error("invalid question {index} in {source_key}: {reason}")]
    InvalidQuestion {
        source_key: String,
        index: usize,
        reason: &'static str,
    },
    #[error("no questions configured")]
    Empty,
}

impl From<serde_yml::Error> for ConfigError {
    fn from(e: serde_yml::Error) -> Self {
        LoadingError::from(e).into()
    }
}
