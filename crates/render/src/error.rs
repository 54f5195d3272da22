use thiserror::Error;

/// Why a backend could not produce a document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    /// Nothing to draw.
    #[error("layout contains no draw instructions")]
    EmptyLayout,

    /// Page size is zero, negative or not a number.
    #[error("invalid page size {width} x {height}")]
    InvalidPage { width: f32, height: f32 },

    /// Backend-specific failure.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl RenderError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
