//! Primitive draw instructions.
//!
//! Coordinates are millimetres from the top-left corner of the page, y
//! growing downwards. Text is positioned by its baseline.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub size_pt: f32,
}

impl TextStyle {
    pub const fn normal(size_pt: f32) -> Self {
        Self {
            weight: FontWeight::Normal,
            size_pt,
        }
    }

    pub const fn bold(size_pt: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size_pt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// How a rectangle or line is painted. `None` skips that pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paint {
    pub fill: Option<Rgb>,
    /// Stroke gray level, 0 (black) ..= 255 (white).
    pub stroke_gray: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawOp {
    Text {
        content: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        paint: Paint,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke_gray: u8,
    },
}

impl DrawOp {
    /// Lowest point (largest y) this instruction touches.
    pub fn bottom(&self) -> f32 {
        match self {
            DrawOp::Text { y, .. } => *y,
            DrawOp::Rect { y, h, .. } => y + h,
            DrawOp::Line { y1, y2, .. } => y1.max(*y2),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
