use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter is out of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A request refers to state the corpus does not have, e.g. an unknown page.
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk directory error: {0}")]
    Walk(#[from] walkdir::Error),
}
