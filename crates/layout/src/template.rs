//! The fixed coordinate template every invoice is laid out on.

use serde::{Deserialize, Serialize};

use crate::metrics::MM_PER_PT;
use crate::op::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

const fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// A sender/recipient block: name, address rows, email.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartyBlock {
    pub x: f32,
    /// Bold caption above the block ("Bill To:"), if any.
    pub label_y: Option<f32>,
    pub name_y: f32,
    pub address_y: f32,
    pub email_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableColumns {
    pub description_x: f32,
    pub quantity_x: f32,
    pub price_x: f32,
    pub total_x: f32,
}

/// Page geometry in millimetres, top-left origin.
///
/// Section positions are fixed; only item rows advance (by `row_height`),
/// and the total and notes sections follow the last row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTemplate {
    pub width: f32,
    pub height: f32,

    pub body_size_pt: f32,
    pub title: Point,
    pub title_size_pt: f32,

    pub from: PartyBlock,
    pub to: PartyBlock,
    /// Vertical distance between address rows.
    pub address_step: f32,

    pub meta_label_x: f32,
    pub meta_value_x: f32,
    pub meta_first_y: f32,
    pub meta_step: f32,

    /// Top-left corner of the shaded table header.
    pub table_origin: Point,
    pub table_width: f32,
    pub table_header_height: f32,
    pub table_header_text_y: f32,
    pub table_header_fill: Rgb,
    pub columns: TableColumns,
    pub first_row_y: f32,
    pub row_height: f32,

    pub rule_gray: u8,
    pub total_rule_x: (f32, f32),
    /// Distance from the rule down to the total baseline.
    pub total_offset: f32,

    pub notes_x: f32,
    /// Distance from the total baseline down to the "Notes:" caption.
    pub notes_gap: f32,
    /// Distance from the caption down to the first body line.
    pub notes_body_offset: f32,
    pub notes_width: f32,
    pub notes_line_height: f32,
}

/// jsPDF-compatible leading for multi-line text.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

impl PageTemplate {
    /// ISO A4 portrait (210 × 297 mm).
    pub fn a4() -> Self {
        let body_size_pt = 10.0;
        Self {
            width: 210.0,
            height: 297.0,

            body_size_pt,
            title: pt(14.0, 22.0),
            title_size_pt: 22.0,

            from: PartyBlock {
                x: 14.0,
                label_y: None,
                name_y: 40.0,
                address_y: 45.0,
                email_y: 60.0,
            },
            to: PartyBlock {
                x: 120.0,
                label_y: Some(40.0),
                name_y: 45.0,
                address_y: 50.0,
                email_y: 65.0,
            },
            address_step: 5.0,

            meta_label_x: 14.0,
            meta_value_x: 50.0,
            meta_first_y: 80.0,
            meta_step: 5.0,

            table_origin: pt(14.0, 100.0),
            table_width: 182.0,
            table_header_height: 10.0,
            table_header_text_y: 106.0,
            table_header_fill: Rgb(240, 240, 240),
            columns: TableColumns {
                description_x: 16.0,
                quantity_x: 125.0,
                price_x: 150.0,
                total_x: 178.0,
            },
            first_row_y: 116.0,
            row_height: 7.0,

            rule_gray: 200,
            total_rule_x: (120.0, 196.0),
            total_offset: 6.0,

            notes_x: 14.0,
            notes_gap: 15.0,
            notes_body_offset: 5.0,
            notes_width: 182.0,
            notes_line_height: body_size_pt * LINE_HEIGHT_FACTOR * MM_PER_PT,
        }
    }

    /// Look a template up by name (`"a4"`).
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a4" => Some(Self::a4()),
            _ => None,
        }
    }

    /// Baseline of the item row at `index`.
    pub fn row_y(&self, index: usize) -> f32 {
        self.first_row_y + index as f32 * self.row_height
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::a4()
    }
}
