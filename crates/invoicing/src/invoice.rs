use serde::{Deserialize, Serialize};

use invoicer_core::entity::position_of;
use invoicer_core::{Entity, LineItemId, ValueObject};

use crate::amount::Amount;

/// One billable row. Quantity and price go through [`Amount`], also when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: Amount,
    pub unit_price: Amount,
}

impl LineItem {
    /// A freshly added row: empty description, quantity 1, price 0.
    pub fn blank(id: LineItemId) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: Amount::ONE,
            unit_price: Amount::ZERO,
        }
    }

    pub fn new(
        id: LineItemId,
        description: impl Into<String>,
        quantity: Amount,
        unit_price: Amount,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`; never stored.
    pub fn subtotal(&self) -> f64 {
        self.quantity.get() * self.unit_price.get()
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Sender or recipient block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    /// Free text; commas separate printed lines.
    pub address: String,
    pub email: String,
}

impl Party {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    pub fn field(&self, field: PartyField) -> &str {
        match field {
            PartyField::Name => &self.name,
            PartyField::Address => &self.address,
            PartyField::Email => &self.email,
        }
    }

    fn field_mut(&mut self, field: PartyField) -> &mut String {
        match field {
            PartyField::Name => &mut self.name,
            PartyField::Address => &mut self.address,
            PartyField::Email => &mut self.email,
        }
    }
}

impl ValueObject for Party {}

/// Top-level scalar fields of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceField {
    InvoiceNumber,
    InvoiceDate,
    DueDate,
    Notes,
    Currency,
}

impl InvoiceField {
    pub const ALL: [InvoiceField; 5] = [
        InvoiceField::InvoiceNumber,
        InvoiceField::InvoiceDate,
        InvoiceField::DueDate,
        InvoiceField::Notes,
        InvoiceField::Currency,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    From,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyField {
    Name,
    Address,
    Email,
}

impl PartyField {
    pub const ALL: [PartyField; 3] = [PartyField::Name, PartyField::Address, PartyField::Email];
}

/// A single edit to one line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "field", content = "value")]
pub enum ItemUpdate {
    Description(String),
    Quantity(Amount),
    UnitPrice(Amount),
}

/// The closed set of mutations an invoice accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InvoiceCommand {
    SetField {
        field: InvoiceField,
        value: String,
    },
    SetPartyField {
        party: PartyRole,
        field: PartyField,
        value: String,
    },
    /// The id is chosen by the caller so that applying stays deterministic.
    AddItem {
        id: LineItemId,
    },
    RemoveItem {
        id: LineItemId,
    },
    SetItemField {
        id: LineItemId,
        update: ItemUpdate,
    },
}

impl InvoiceCommand {
    pub fn kind(&self) -> ChangeKind {
        match self {
            InvoiceCommand::SetField { field, .. } => ChangeKind::FieldSet(*field),
            InvoiceCommand::SetPartyField { party, field, .. } => {
                ChangeKind::PartyFieldSet(*party, *field)
            }
            InvoiceCommand::AddItem { id } => ChangeKind::ItemAdded(*id),
            InvoiceCommand::RemoveItem { id } => ChangeKind::ItemRemoved(*id),
            InvoiceCommand::SetItemField { id, .. } => ChangeKind::ItemUpdated(*id),
        }
    }
}

/// What an applied command changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    FieldSet(InvoiceField),
    PartyFieldSet(PartyRole, PartyField),
    ItemAdded(LineItemId),
    ItemRemoved(LineItemId),
    ItemUpdated(LineItemId),
}

/// The invoice document being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    /// Free-form date text (`YYYY-MM-DD` by default); never validated.
    pub invoice_date: String,
    pub due_date: String,
    pub from: Party,
    pub to: Party,
    /// Display/print order.
    pub items: Vec<LineItem>,
    pub notes: String,
    /// Symbol prefixed to every printed amount.
    pub currency: String,
}

impl ValueObject for Invoice {}

impl Invoice {
    /// Sum of `quantity * unit_price` over all items, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn field(&self, field: InvoiceField) -> &str {
        match field {
            InvoiceField::InvoiceNumber => &self.invoice_number,
            InvoiceField::InvoiceDate => &self.invoice_date,
            InvoiceField::DueDate => &self.due_date,
            InvoiceField::Notes => &self.notes,
            InvoiceField::Currency => &self.currency,
        }
    }

    fn field_mut(&mut self, field: InvoiceField) -> &mut String {
        match field {
            InvoiceField::InvoiceNumber => &mut self.invoice_number,
            InvoiceField::InvoiceDate => &mut self.invoice_date,
            InvoiceField::DueDate => &mut self.due_date,
            InvoiceField::Notes => &mut self.notes,
            InvoiceField::Currency => &mut self.currency,
        }
    }

    pub fn party(&self, role: PartyRole) -> &Party {
        match role {
            PartyRole::From => &self.from,
            PartyRole::To => &self.to,
        }
    }

    fn party_mut(&mut self, role: PartyRole) -> &mut Party {
        match role {
            PartyRole::From => &mut self.from,
            PartyRole::To => &mut self.to,
        }
    }

    pub fn item(&self, id: &LineItemId) -> Option<&LineItem> {
        position_of(&self.items, id).map(|idx| &self.items[idx])
    }

    /// Apply a command, producing the next snapshot.
    ///
    /// Returns `None` when the command changes nothing: removing or editing an
    /// id that is not present, or adding an id that is already present.
    /// `self` is never mutated.
    pub fn apply(&self, command: &InvoiceCommand) -> Option<Invoice> {
        match command {
            InvoiceCommand::SetField { field, value } => {
                let mut next = self.clone();
                *next.field_mut(*field) = value.clone();
                Some(next)
            }
            InvoiceCommand::SetPartyField {
                party,
                field,
                value,
            } => {
                let mut next = self.clone();
                *next.party_mut(*party).field_mut(*field) = value.clone();
                Some(next)
            }
            InvoiceCommand::AddItem { id } => {
                if self.item(id).is_some() {
                    return None;
                }
                let mut next = self.clone();
                next.items.push(LineItem::blank(*id));
                Some(next)
            }
            InvoiceCommand::RemoveItem { id } => {
                let idx = position_of(&self.items, id)?;
                let mut next = self.clone();
                next.items.remove(idx);
                Some(next)
            }
            InvoiceCommand::SetItemField { id, update } => {
                let idx = position_of(&self.items, id)?;
                let mut next = self.clone();
                let item = &mut next.items[idx];
                match update {
                    ItemUpdate::Description(text) => item.description = text.clone(),
                    ItemUpdate::Quantity(qty) => item.quantity = *qty,
                    ItemUpdate::UnitPrice(price) => item.unit_price = *price,
                }
                Some(next)
            }
        }
    }
}
