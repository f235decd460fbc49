use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool '{name}' not found")]
    ToolNotFound { name: String },

    #[error("Tool '{tool}': missing required argument '{name}'")]
    MissingArgument { tool: String, name: String },

    #[error("Tool '{tool}': argument '{name}' must be a {expected}")]
    InvalidArgument {
        tool: String,
        name: String,
        expected: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
