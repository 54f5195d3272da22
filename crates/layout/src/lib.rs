//! Document layout transform.
//!
//! Maps one immutable invoice snapshot onto a fixed single-page coordinate
//! template and returns the ordered draw instructions a rendering backend
//! replays. The transform is pure: same snapshot, same instructions.

pub mod format;
pub mod metrics;
pub mod op;
pub mod template;
pub mod transform;
pub mod wrap;

pub use op::{DrawOp, FontWeight, Paint, Rgb, TextStyle};
pub use template::PageTemplate;
pub use transform::{PageLayout, layout_invoice};
