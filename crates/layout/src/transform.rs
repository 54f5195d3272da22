use serde::{Deserialize, Serialize};

use invoicer_invoicing::{Invoice, Party};

use crate::format;
use crate::op::{DrawOp, Paint, TextStyle};
use crate::template::{PageTemplate, PartyBlock};
use crate::wrap::{address_lines, wrap_text};

const TITLE: &str = "INVOICE";
const BILL_TO: &str = "Bill To:";
const META_LABELS: [&str; 3] = ["Invoice Number:", "Invoice Date:", "Due Date:"];
const TABLE_HEADERS: [&str; 4] = ["Description", "Qty", "Price", "Total"];
const TOTAL_LABEL: &str = "Total:";
const NOTES_LABEL: &str = "Notes:";

/// A laid-out page: its size plus the instructions in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    /// Whether anything was placed below the bottom edge (and will be clipped).
    pub fn overflows(&self) -> bool {
        self.ops.iter().any(|op| op.bottom() > self.height)
    }

    /// Text contents in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }
}

struct Builder<'t> {
    template: &'t PageTemplate,
    ops: Vec<DrawOp>,
}

impl<'t> Builder<'t> {
    fn text(&mut self, content: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        self.ops.push(DrawOp::Text {
            content: content.into(),
            x,
            y,
            style,
        });
    }

    fn normal(&mut self, content: impl Into<String>, x: f32, y: f32) {
        self.text(content, x, y, TextStyle::normal(self.template.body_size_pt));
    }

    fn bold(&mut self, content: impl Into<String>, x: f32, y: f32) {
        self.text(content, x, y, TextStyle::bold(self.template.body_size_pt));
    }

    fn party(&mut self, party: &Party, block: &PartyBlock) {
        if let Some(label_y) = block.label_y {
            self.bold(BILL_TO, block.x, label_y);
        }
        self.normal(party.name.as_str(), block.x, block.name_y);
        for (i, line) in address_lines(&party.address).into_iter().enumerate() {
            let y = block.address_y + i as f32 * self.template.address_step;
            self.normal(line, block.x, y);
        }
        self.normal(party.email.as_str(), block.x, block.email_y);
    }
}

/// Lay `invoice` out on `template`.
///
/// Never fails: empty strings are placed as empty text, an empty item list
/// puts the total right under the table header, and empty notes leave the
/// notes block out entirely. Content that runs past the page bottom is kept
/// in the output and clipped by the page; see [`PageLayout::overflows`].
pub fn layout_invoice(invoice: &Invoice, template: &PageTemplate) -> PageLayout {
    let t = template;
    let mut b = Builder {
        template: t,
        ops: Vec::new(),
    };

    b.text(TITLE, t.title.x, t.title.y, TextStyle::bold(t.title_size_pt));

    b.party(&invoice.from, &t.from);
    b.party(&invoice.to, &t.to);

    let meta_values = [
        invoice.invoice_number.as_str(),
        invoice.invoice_date.as_str(),
        invoice.due_date.as_str(),
    ];
    for (i, (label, value)) in META_LABELS.iter().zip(meta_values).enumerate() {
        let y = t.meta_first_y + i as f32 * t.meta_step;
        b.bold(*label, t.meta_label_x, y);
        b.normal(value, t.meta_value_x, y);
    }

    b.ops.push(DrawOp::Rect {
        x: t.table_origin.x,
        y: t.table_origin.y,
        w: t.table_width,
        h: t.table_header_height,
        paint: Paint {
            fill: Some(t.table_header_fill),
            stroke_gray: Some(t.rule_gray),
        },
    });
    let cols = t.columns;
    let header_xs = [cols.description_x, cols.quantity_x, cols.price_x, cols.total_x];
    for (label, x) in TABLE_HEADERS.iter().zip(header_xs) {
        b.bold(*label, x, t.table_header_text_y);
    }

    let currency = invoice.currency.as_str();
    for (i, item) in invoice.items.iter().enumerate() {
        let y = t.row_y(i);
        b.normal(item.description.as_str(), cols.description_x, y);
        b.normal(format::quantity(item.quantity.get()), cols.quantity_x, y);
        b.normal(format::money(currency, item.unit_price.get()), cols.price_x, y);
        b.normal(format::money(currency, item.subtotal()), cols.total_x, y);
    }

    let rule_y = t.row_y(invoice.items.len());
    b.ops.push(DrawOp::Line {
        x1: t.total_rule_x.0,
        y1: rule_y,
        x2: t.total_rule_x.1,
        y2: rule_y,
        stroke_gray: t.rule_gray,
    });
    let total_y = rule_y + t.total_offset;
    b.bold(TOTAL_LABEL, cols.price_x, total_y);
    b.bold(format::money(currency, invoice.total()), cols.total_x, total_y);

    if !invoice.notes.is_empty() {
        let label_y = total_y + t.notes_gap;
        b.bold(NOTES_LABEL, t.notes_x, label_y);
        let body_y = label_y + t.notes_body_offset;
        for (i, line) in wrap_text(&invoice.notes, t.notes_width, t.body_size_pt)
            .into_iter()
            .enumerate()
        {
            b.normal(line, t.notes_x, body_y + i as f32 * t.notes_line_height);
        }
    }

    let layout = PageLayout {
        width: t.width,
        height: t.height,
        ops: b.ops,
    };
    if layout.overflows() {
        tracing::warn!(
            items = invoice.items.len(),
            page_height = t.height,
            "invoice content runs past the page bottom and will be clipped"
        );
    }
    layout
}
