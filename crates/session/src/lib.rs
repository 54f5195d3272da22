//! One editing session: the invoice state container plus the single
//! in-flight document generation the user can trigger from it.

pub mod config;
pub mod error;
pub mod generation;
pub mod session;

pub use config::SessionConfig;
pub use error::{GenerationError, SessionError};
pub use generation::{GeneratedOutput, GenerationSlot};
pub use session::EditorSession;
