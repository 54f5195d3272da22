//! Text measurement for the built-in Helvetica face.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Advance width used for glyphs outside the table.
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica advance widths (1/1000 em) for U+0020 ..= U+007E.
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

fn glyph_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA_ASCII[ch as usize - 0x20],
        _ => DEFAULT_WIDTH,
    }
}

/// Width in millimetres of `text` set in regular Helvetica at `size_pt`.
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c))).sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(text_width_mm("", 10.0), 0.0);
    }

    #[test]
    fn digits_share_one_width() {
        assert_eq!(text_width_mm("0", 10.0), text_width_mm("9", 10.0));
    }

    #[test]
    fn width_scales_with_size() {
        let small = text_width_mm("Invoice", 10.0);
        let large = text_width_mm("Invoice", 20.0);
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn known_word_width() {
        // "Hi" = 722 + 222 units; at 72pt one unit-em is 25.4mm.
        let w = text_width_mm("Hi", 72.0);
        assert!((w - 0.944 * 25.4).abs() < 1e-3);
    }

    #[test]
    fn unknown_glyphs_use_default_width() {
        assert_eq!(text_width_mm("€", 10.0), text_width_mm("0", 10.0));
    }
}
