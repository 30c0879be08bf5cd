use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("canvas dimension cannot be zero")]
pub struct CanvasDimensionCannotBeZeroError;

#[derive(Debug, Error)]
pub enum SaveArtError {
    #[error("Failed to write artwork: {0}")]
    FileSystemError(#[from] std::io::Error),
    #[error("Failed to serialize artwork: {0}")]
    SerializationError(#[from] serde_json::Error),
}
