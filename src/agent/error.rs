use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid agent name {0:?}: must start with a letter or underscore and contain only letters, digits or underscores")]
    InvalidName(String),

    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),
}
