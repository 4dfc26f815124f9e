//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its lifecycle helpers.
//! - Validate records read back from persisted state.
//!
//! # Invariants
//! - `id` is positive and stable for the lifetime of the note.
//! - `created_at`/`updated_at` are ISO-8601 strings with millisecond
//!   precision and a `Z` offset, so lexicographic order equals time order.
//! - `updated_at >= created_at`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a note: epoch milliseconds at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Default title substituted for empty or blank titles.
pub const UNTITLED: &str = "Untitled";

/// A user-authored document.
///
/// Field names serialize in camelCase so the struct doubles as the wire
/// shape of the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Positive integer id, unique across the live collection.
    pub id: NoteId,
    /// Display title; never stored empty, defaults to `Untitled`.
    pub title: String,
    /// Free-form body text; may be empty.
    pub content: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// ISO-8601 timestamp of the last title or content mutation.
    pub updated_at: String,
    /// Favorite flag.
    pub starred: bool,
}

/// Validation failure for a persisted note record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `id` is zero or negative.
    NonPositiveId(NoteId),
    /// `updated_at` sorts before `created_at`.
    TimestampOrder { created_at: String, updated_at: String },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(id) => write!(f, "note id must be positive, got {id}"),
            Self::TimestampOrder {
                created_at,
                updated_at,
            } => write!(
                f,
                "note updated_at `{updated_at}` precedes created_at `{created_at}`"
            ),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates an empty untitled note stamped with the provided timestamp.
    ///
    /// # Invariants
    /// - `created_at == updated_at` on a fresh note.
    /// - `starred` starts as `false`.
    pub fn new(id: NoteId, timestamp: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        Self {
            id,
            title: UNTITLED.to_string(),
            content: String::new(),
            created_at: timestamp.clone(),
            updated_at: timestamp,
            starred: false,
        }
    }

    /// Refreshes `updated_at` after a title or content mutation.
    pub fn touch(&mut self, timestamp: impl Into<String>) {
        self.updated_at = timestamp.into();
    }

    /// Checks structural invariants of one record.
    ///
    /// Used on hydration read paths; write paths uphold these by
    /// construction.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id <= 0 {
            return Err(NoteValidationError::NonPositiveId(self.id));
        }
        if self.updated_at < self.created_at {
            return Err(NoteValidationError::TimestampOrder {
                created_at: self.created_at.clone(),
                updated_at: self.updated_at.clone(),
            });
        }
        Ok(())
    }

    /// Case-insensitive substring match over title and content.
    pub fn matches_term(&self, lowercased_term: &str) -> bool {
        self.title.to_lowercase().contains(lowercased_term)
            || self.content.to_lowercase().contains(lowercased_term)
    }
}
