use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode error: {0}")]
    Decode(#[source] csv::Error),
    #[error("encode error: {0}")]
    Encode(#[source] csv::Error),
    #[error("input has no header row")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, CsvError>;
