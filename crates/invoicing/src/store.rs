//! The state container for the invoice being edited.
//!
//! One `InvoiceStore` exists per editing session. It holds the current
//! immutable snapshot and swaps in a new one on every applied mutation, then
//! publishes an [`InvoiceChanged`] event to subscribers.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use invoicer_core::LineItemId;
use invoicer_events::{Event, EventBus, InMemoryEventBus, Subscription};

use crate::invoice::{ChangeKind, Invoice, InvoiceCommand, InvoiceField, ItemUpdate, PartyField, PartyRole};
use crate::seed;

/// Published after every mutation that changed the invoice.
#[derive(Debug, Clone)]
pub struct InvoiceChanged {
    /// Store version after the change.
    pub version: u64,
    pub change: ChangeKind,
    pub snapshot: Arc<Invoice>,
    pub occurred_at: DateTime<Utc>,
}

impl Event for InvoiceChanged {
    fn event_type(&self) -> &'static str {
        match self.change {
            ChangeKind::FieldSet(_) => "invoice.field.set",
            ChangeKind::PartyFieldSet(..) => "invoice.party.field_set",
            ChangeKind::ItemAdded(_) => "invoice.item.added",
            ChangeKind::ItemRemoved(_) => "invoice.item.removed",
            ChangeKind::ItemUpdated(_) => "invoice.item.updated",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Owner of the single invoice snapshot.
#[derive(Debug)]
pub struct InvoiceStore {
    current: Arc<Invoice>,
    version: u64,
    bus: InMemoryEventBus<InvoiceChanged>,
}

impl InvoiceStore {
    /// Start a session from the seed invoice dated today (UTC).
    pub fn new() -> Self {
        Self::with_invoice(seed::seeded(Utc::now().date_naive()))
    }

    pub fn with_invoice(invoice: Invoice) -> Self {
        Self {
            current: Arc::new(invoice),
            version: 0,
            bus: InMemoryEventBus::new(),
        }
    }

    /// The current snapshot. Cheap; later edits never affect it.
    pub fn snapshot(&self) -> Arc<Invoice> {
        Arc::clone(&self.current)
    }

    /// Number of applied mutations since the store was created.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn total(&self) -> f64 {
        self.current.total()
    }

    pub fn subscribe(&self) -> Subscription<InvoiceChanged> {
        self.bus.subscribe()
    }

    pub fn set_field(&mut self, field: InvoiceField, value: impl Into<String>) {
        self.dispatch(InvoiceCommand::SetField {
            field,
            value: value.into(),
        });
    }

    pub fn set_party_field(&mut self, party: PartyRole, field: PartyField, value: impl Into<String>) {
        self.dispatch(InvoiceCommand::SetPartyField {
            party,
            field,
            value: value.into(),
        });
    }

    /// Append a blank item and return its id.
    pub fn add_item(&mut self) -> LineItemId {
        let mut id = LineItemId::new();
        while self.current.item(&id).is_some() {
            id = LineItemId::new();
        }
        self.dispatch(InvoiceCommand::AddItem { id });
        id
    }

    /// Returns `false` (and changes nothing) if no item has this id.
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        self.dispatch(InvoiceCommand::RemoveItem { id })
    }

    /// Returns `false` (and changes nothing) if no item has this id.
    pub fn set_item_field(&mut self, id: LineItemId, update: ItemUpdate) -> bool {
        self.dispatch(InvoiceCommand::SetItemField { id, update })
    }

    /// Apply any command. Returns whether the invoice changed.
    pub fn dispatch(&mut self, command: InvoiceCommand) -> bool {
        let Some(next) = self.current.apply(&command) else {
            tracing::debug!(change = ?command.kind(), "invoice command was a no-op");
            return false;
        };

        self.current = Arc::new(next);
        self.version += 1;

        let changed = InvoiceChanged {
            version: self.version,
            change: command.kind(),
            snapshot: self.snapshot(),
            occurred_at: Utc::now(),
        };
        tracing::debug!(
            version = self.version,
            event_type = changed.event_type(),
            "invoice changed"
        );
        if let Err(e) = self.bus.publish(changed) {
            tracing::warn!(error = ?e, "failed to notify invoice subscribers");
        }

        true
    }
}

impl Default for InvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}
