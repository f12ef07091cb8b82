use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopError {
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("serialization failure: {0}")]
    SerializationFailure(String),

    #[error("Excel export error: {0}")]
    ExcelExport(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CopError>;
