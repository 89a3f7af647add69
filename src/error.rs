use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("source id must be a non-empty string")]
    EmptyId,
    #[error("source `{id}` claims ready but is missing `{field}`")]
    InvalidSourceState { id: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, SourceError>;
