//! Input sanitization for the notes model.
//!
//! # Responsibility
//! - Clean free-text and numeric identifiers before they enter the model.
//! - Gate persisted payloads before hydration trusts them.
//!
//! # Invariants
//! - Every function is pure and never panics.
//! - Invalid input degrades to a safe default instead of signaling failure.

use crate::model::note::{NoteId, UNTITLED};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Maximum accepted title length, in characters.
pub const MAX_TITLE_CHARS: usize = 100;

static NULL_BYTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{0}+").expect("valid null-byte regex"));

/// Cleans a general-purpose string: strips null bytes and trims
/// surrounding whitespace.
pub fn sanitize_string(input: &str) -> String {
    NULL_BYTES_RE.replace_all(input, "").trim().to_string()
}

/// Cleans note body text: strips null bytes only, preserving internal
/// whitespace and newlines.
pub fn sanitize_note_content(content: &str) -> String {
    NULL_BYTES_RE.replace_all(content, "").into_owned()
}

/// Sanitizes and bounds a note title.
///
/// Rules:
/// - Null bytes stripped, surrounding whitespace trimmed.
/// - Truncated to [`MAX_TITLE_CHARS`] characters.
/// - Empty result is substituted with `Untitled`.
pub fn validate_note_title(title: &str) -> String {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return UNTITLED.to_string();
    }
    if sanitized.chars().count() > MAX_TITLE_CHARS {
        return sanitized.chars().take(MAX_TITLE_CHARS).collect();
    }
    sanitized
}

/// Cleans a user search term. Alias of [`sanitize_string`].
pub fn sanitize_search_term(term: &str) -> String {
    sanitize_string(term)
}

/// Validates a loosely-typed note id.
///
/// Accepts positive integers, either as a JSON number or as a numeric
/// string (`"7"` -> `7`). Everything else — fractional numbers, zero,
/// negatives, booleans, nulls, objects — yields `None`.
pub fn validate_note_id(value: &Value) -> Option<NoteId> {
    let id = match value {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => text.trim().parse::<NoteId>().ok()?,
        _ => return None,
    };
    if id > 0 {
        Some(id)
    } else {
        None
    }
}

/// Gate for payloads read back from the storage backend: only a non-null
/// JSON object may be hydrated.
pub fn validate_storage_data(data: &Value) -> bool {
    data.is_object()
}

#[cfg(test)]
mod tests {
    use super::{
        sanitize_note_content, sanitize_search_term, sanitize_string, validate_note_id,
        validate_note_title, validate_storage_data, MAX_TITLE_CHARS,
    };
    use serde_json::{json, Value};

    #[test]
    fn sanitize_string_strips_null_bytes_and_trims() {
        assert_eq!(sanitize_string("  a\u{0}b  "), "ab");
        assert_eq!(sanitize_string("\u{0}\u{0}"), "");
    }

    #[test]
    fn sanitize_note_content_preserves_internal_whitespace() {
        assert_eq!(
            sanitize_note_content("line one\n\n  line two\u{0}"),
            "line one\n\n  line two"
        );
    }

    #[test]
    fn empty_title_becomes_untitled() {
        assert_eq!(validate_note_title(""), "Untitled");
        assert_eq!(validate_note_title("   "), "Untitled");
        assert_eq!(validate_note_title("\u{0}"), "Untitled");
    }

    #[test]
    fn long_title_truncates_to_limit() {
        let long = format!(" a {}", "b".repeat(105));
        let validated = validate_note_title(&long);
        assert_eq!(validated.chars().count(), MAX_TITLE_CHARS);
        assert!(validated.starts_with("a b"));
    }

    #[test]
    fn note_id_accepts_positive_integers_only() {
        assert_eq!(validate_note_id(&json!(7)), Some(7));
        assert_eq!(validate_note_id(&json!("7")), Some(7));
        assert_eq!(validate_note_id(&json!(-1)), None);
        assert_eq!(validate_note_id(&json!(0)), None);
        assert_eq!(validate_note_id(&json!(3.5)), None);
        assert_eq!(validate_note_id(&json!("3.5")), None);
        assert_eq!(validate_note_id(&json!("abc")), None);
        assert_eq!(validate_note_id(&Value::Null), None);
        assert_eq!(validate_note_id(&json!(true)), None);
    }

    #[test]
    fn search_term_sanitization_matches_general_sanitizer() {
        assert_eq!(sanitize_search_term("  idea\u{0}  "), "idea");
    }

    #[test]
    fn storage_data_must_be_an_object() {
        assert!(validate_storage_data(&json!({ "notes": [] })));
        assert!(!validate_storage_data(&Value::Null));
        assert!(!validate_storage_data(&json!([1, 2])));
        assert!(!validate_storage_data(&json!("text")));
    }
}
