use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    WalkDir(#[from] async_walkdir::Error),
    #[error("{0} does not point to a local file")]
    InvalidURL(String),
    #[error("unsupported location scheme \"{0}\", expected a path or a file:// URL")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Content that could be read but not understood.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
}

impl From<url::ParseError> for LoadingError {
    fn from(e: url::ParseError) -> Self {
        ParseError::Url(e).into()
    }
}

impl From<serde_yml::Error> for LoadingError {
    fn from(e: serde_yml::Error) -> Self {
        ParseError::Yaml(e).into()
    }
}
