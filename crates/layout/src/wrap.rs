//! Line-breaking policies used by the template.

use crate::metrics::text_width_mm;

/// Split an address into printed rows.
///
/// Commas and newlines both end a row; every row is trimmed. Empty rows are
/// kept so the row count follows the separators, and an address without any
/// separator is a single row.
pub fn address_lines(address: &str) -> Vec<&str> {
    address.split([',', '\n']).map(str::trim).collect()
}

/// Greedy word wrap to `max_width_mm` at `size_pt` Helvetica.
///
/// Breaks between whitespace-separated words; a word that is wider than the
/// line on its own is split between characters. Explicit newlines always
/// start a new line, and a blank paragraph yields an empty line.
pub fn wrap_text(text: &str, max_width_mm: f32, size_pt: f32) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, size_pt) <= max_width_mm;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                if fits(word) {
                    line.push_str(word);
                    continue;
                }
            } else {
                let candidate = format!("{line} {word}");
                if fits(&candidate) {
                    line = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut line));
                if fits(word) {
                    line.push_str(word);
                    continue;
                }
            }

            // Oversized word: break it wherever the line fills up.
            for ch in word.chars() {
                line.push(ch);
                if !fits(&line) && line.chars().count() > 1 {
                    line.pop();
                    lines.push(std::mem::take(&mut line));
                    line.push(ch);
                }
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_splits_on_commas_and_trims() {
        assert_eq!(
            address_lines("123 Main St, Anytown,  USA "),
            vec!["123 Main St", "Anytown", "USA"]
        );
    }

    #[test]
    fn address_without_commas_is_one_row() {
        assert_eq!(address_lines("PO Box 9"), vec!["PO Box 9"]);
        assert_eq!(address_lines(""), vec![""]);
    }

    #[test]
    fn address_keeps_empty_rows_and_honours_newlines() {
        assert_eq!(address_lines("a,,b"), vec!["a", "", "b"]);
        assert_eq!(address_lines("Line 1\nLine 2, Zip"), vec!["Line 1", "Line 2", "Zip"]);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Thank you for your business!", 182.0, 10.0), vec![
            "Thank you for your business!"
        ]);
    }

    #[test]
    fn long_text_breaks_at_word_boundaries_within_width() {
        let text = "lorem ipsum dolor sit amet ".repeat(20);
        let lines = wrap_text(&text, 60.0, 10.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0) <= 60.0, "too wide: {line}");
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined.split_whitespace().collect::<Vec<_>>(), text.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn oversized_word_is_split_by_character() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, 20.0, 10.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, 10.0) <= 20.0);
        }
    }

    #[test]
    fn newlines_start_new_lines() {
        assert_eq!(wrap_text("one\n\ntwo", 182.0, 10.0), vec!["one", "", "two"]);
    }
}
