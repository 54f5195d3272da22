use chrono::{DateTime, Utc};

/// A domain-agnostic change event.
///
/// Events are immutable; treat them as facts.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "invoice.item.added").
    fn event_type(&self) -> &'static str;

    /// When the change was applied (wall-clock time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
