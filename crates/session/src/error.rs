use thiserror::Error;

use invoicer_render::RenderError;

/// Why a generate request produced no document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    /// Another generation is still running; retry once it finishes.
    #[error("a document is already being generated")]
    AlreadyInFlight,

    /// The rendering backend failed.
    #[error("document generation failed: {0}")]
    Render(#[from] RenderError),

    /// The generation task panicked or was torn down with the runtime.
    #[error("document generation task aborted")]
    Aborted,
}

/// Session construction failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown page template: {0}")]
    UnknownPage(String),

    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}
