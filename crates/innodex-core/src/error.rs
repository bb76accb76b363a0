use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("question {0} is not part of the supplied question set")]
    UnknownQuestion(i32),
    #[error("num conversion failed")]
    NumConversion,
}
