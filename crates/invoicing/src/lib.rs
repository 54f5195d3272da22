//! Invoice state model.
//!
//! This crate holds the single invoice being edited, the closed set of
//! mutations it accepts and the derived total. Everything here is
//! deterministic domain logic (no rendering, no IO).

pub mod amount;
pub mod invoice;
pub mod seed;
pub mod store;

pub use amount::Amount;
pub use invoice::{
    ChangeKind, Invoice, InvoiceCommand, InvoiceField, ItemUpdate, LineItem, Party, PartyField,
    PartyRole,
};
pub use store::{InvoiceChanged, InvoiceStore};
