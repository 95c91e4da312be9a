use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BgsError {
    #[error("unknown color family: {value}")]
    UnknownFamily { value: String },
    #[error("unknown selector mode: {value} (expected recommended, brand or custom)")]
    UnknownMode { value: String },
    #[error("unknown background category: {value}")]
    UnknownCategory { value: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, BgsError>;
