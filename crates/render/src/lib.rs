//! Rendering backends: turn a laid-out page into a downloadable document.

pub mod backend;
pub mod document;
pub mod error;
pub mod pdf;

pub use backend::RenderBackend;
pub use document::{RenderedDocument, render_invoice, suggested_filename};
pub use error::RenderError;
pub use pdf::PdfBackend;
