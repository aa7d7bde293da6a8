use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Error while running tool: {0}")]
    ExecutionError(Box<dyn std::error::Error + Send + Sync>),

    #[error("Input parsing error: {0}")]
    InputParseError(#[from] serde_json::Error),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}
