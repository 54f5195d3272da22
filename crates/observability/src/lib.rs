//! Tracing/logging setup shared by every embedding of the editor.

pub mod tracing;

pub use crate::tracing::LogConfig;

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with(config: &LogConfig) {
    tracing::init(config);
}
