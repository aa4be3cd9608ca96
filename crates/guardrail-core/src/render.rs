// crates/guardrail-core/src/render.rs
// ============================================================================
// Module: Message Rendering
// Description: Bounded rendering of values into diagnostic messages.
// Purpose: Keep violation messages readable regardless of input size.
// Dependencies: crate::settings
// ============================================================================

//! ## Overview
//! Values are rendered with `Debug` so any checked type can appear in a
//! message. Output is capped by the installed settings: long values are cut
//! at `max_rendered_chars` and collections list at most `max_rendered_items`
//! entries. Truncated output ends in `...`.

#![allow(clippy::use_debug, reason = "Violation messages render arbitrary values via Debug.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;
use std::fmt::Write;

use crate::settings::settings;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Marker appended to truncated output.
const ELLIPSIS: &str = "...";

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Returns the message subject: the parameter name or a group fallback.
pub(crate) fn subject<'a>(parameter: &'a str, fallback: &'a str) -> &'a str {
    if parameter.is_empty() { fallback } else { parameter }
}

/// Renders a single value, capped at the configured character limit.
pub(crate) fn value<T: Debug + ?Sized>(value: &T) -> String {
    truncate(format!("{value:?}"), settings().max_rendered_chars)
}

/// Renders a sequence of items, capped at the configured item limit.
pub(crate) fn items<'a, T, I>(items: I) -> String
where
    T: Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let limits = settings();
    let mut out = String::from("[");
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        if index >= limits.max_rendered_items {
            out.push_str(ELLIPSIS);
            break;
        }
        let _ = write!(out, "{item:?}");
    }
    out.push(']');
    truncate(out, limits.max_rendered_chars)
}

/// Cuts `text` to at most `max_chars` characters, marking the cut.
fn truncate(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
        text.push_str(ELLIPSIS);
    }
    text
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::ELLIPSIS;
    use super::items;
    use super::subject;
    use super::truncate;
    use super::value;

    #[test]
    fn subject_falls_back_when_unnamed() {
        assert_eq!(subject("", "The value"), "The value");
        assert_eq!(subject("count", "The value"), "count");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let cut = truncate("ééééé".to_string(), 2);
        assert_eq!(cut, format!("éé{ELLIPSIS}"));
        assert_eq!(truncate("abc".to_string(), 3), "abc");
    }

    #[test]
    fn items_render_debug_list() {
        assert_eq!(items(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(items::<i32, _>(&[]), "[]");
        assert_eq!(value("x"), "\"x\"");
    }

    #[test]
    fn items_cap_long_sequences() {
        let many: Vec<u32> = (0 .. 100).collect();
        let rendered = items(&many);
        assert!(rendered.ends_with("...]"));
        assert!(!rendered.contains("99"));
    }
}
