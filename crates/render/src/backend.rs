use invoicer_layout::PageLayout;

use crate::error::RenderError;

/// Serializes a laid-out page into a document byte stream.
///
/// Implementations must be deterministic for equal layouts and must not
/// return partial output: either the whole document or an error.
pub trait RenderBackend: Send + Sync {
    /// MIME type of the produced bytes (e.g. `application/pdf`).
    fn media_type(&self) -> &'static str;

    /// File extension without the dot (e.g. `pdf`).
    fn extension(&self) -> &'static str;

    fn render(&self, layout: &PageLayout) -> Result<Vec<u8>, RenderError>;
}
