use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Document compilation failed: {0}")]
    Compile(String),

    #[error("Rendering timed out after {0}ms")]
    Timeout(u64),

    #[error("Failed to encode template inputs: {0}")]
    InputEncoding(#[from] serde_json::Error),

    #[error("Render task failed: {0}")]
    Internal(String),
}
