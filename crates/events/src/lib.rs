//! Change events and the publish/subscribe plumbing that carries them.
//!
//! The state container publishes one event per applied mutation; presentation
//! layers subscribe instead of relying on framework reactivity.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
