use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("no 'email' column found in the input table")]
    MissingEmailColumn,
}
