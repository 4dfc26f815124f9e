//! Persisted-state subset, hydration and save.
//!
//! # Responsibility
//! - Define the exact wire shape written to the storage backend.
//! - Validate persisted payloads before the store trusts them.
//!
//! # Invariants
//! - `search_term` and `is_zen_mode` never appear in the serialized form.
//! - Hydration rejects invalid payloads instead of masking them; the
//!   caller falls back to seed state.
//! - Save failures are logged and swallowed; no store operation fails.

use crate::model::note::{Note, NoteId};
use crate::sanitize::validate_storage_data;
use crate::storage::StorageBackend;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage-backend key holding the whole persisted state.
pub const STORAGE_KEY: &str = "elegant-notes-storage";

/// The subset of store state that survives a reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub notes: Vec<Note>,
    pub active_note_id: Option<NoteId>,
    pub is_sidebar_open: bool,
    pub sound_enabled: bool,
}

/// Reason a persisted payload was rejected during hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationError {
    NotAnObject,
    Malformed(String),
    EmptyCollection,
    InvalidNote(String),
    DuplicateNoteId(NoteId),
    DanglingActiveId(NoteId),
}

impl Display for HydrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "persisted value is not a JSON object"),
            Self::Malformed(message) => write!(f, "persisted value is malformed: {message}"),
            Self::EmptyCollection => write!(f, "persisted note collection is empty"),
            Self::InvalidNote(message) => write!(f, "persisted note is invalid: {message}"),
            Self::DuplicateNoteId(id) => write!(f, "duplicate note id {id} in persisted state"),
            Self::DanglingActiveId(id) => {
                write!(f, "active note id {id} references no persisted note")
            }
        }
    }
}

impl Error for HydrationError {}

impl PersistedState {
    /// Checks the invariants hydrated state must satisfy.
    pub fn validate(&self) -> Result<(), HydrationError> {
        if self.notes.is_empty() {
            return Err(HydrationError::EmptyCollection);
        }

        let mut seen = HashSet::new();
        for note in &self.notes {
            note.validate()
                .map_err(|err| HydrationError::InvalidNote(err.to_string()))?;
            if !seen.insert(note.id) {
                return Err(HydrationError::DuplicateNoteId(note.id));
            }
        }

        if let Some(active) = self.active_note_id {
            if !seen.contains(&active) {
                return Err(HydrationError::DanglingActiveId(active));
            }
        }

        Ok(())
    }
}

/// Parses one raw storage value into validated persisted state.
pub fn parse_persisted(raw: &str) -> Result<PersistedState, HydrationError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|err| HydrationError::Malformed(err.to_string()))?;
    if !validate_storage_data(&value) {
        return Err(HydrationError::NotAnObject);
    }
    let state: PersistedState =
        serde_json::from_value(value).map_err(|err| HydrationError::Malformed(err.to_string()))?;
    state.validate()?;
    Ok(state)
}

/// Loads persisted state from the backend.
///
/// Returns `None` when no value exists, the backend fails, or the value
/// does not pass validation; every failure degrades to the seed state.
pub fn load<S: StorageBackend>(storage: &S) -> Option<PersistedState> {
    let raw = match storage.read(STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            log::warn!("event=hydrate module=store status=fallback reason=storage_read error={err}");
            return None;
        }
    };

    match parse_persisted(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("event=hydrate module=store status=fallback reason=invalid_payload error={err}");
            None
        }
    }
}

/// Writes persisted state to the backend, swallowing failures.
pub fn save<S: StorageBackend>(storage: &mut S, state: &PersistedState) {
    let serialized = match serde_json::to_string(state) {
        Ok(serialized) => serialized,
        Err(err) => {
            log::warn!("event=persist module=store status=skipped reason=serialize error={err}");
            return;
        }
    };

    if let Err(err) = storage.write(STORAGE_KEY, &serialized) {
        log::warn!("event=persist module=store status=skipped reason=storage_write error={err}");
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_persisted, HydrationError, PersistedState};
    use crate::model::note::Note;

    fn state_with_notes(notes: Vec<Note>) -> PersistedState {
        let active = notes.first().map(|note| note.id);
        PersistedState {
            notes,
            active_note_id: active,
            is_sidebar_open: true,
            sound_enabled: false,
        }
    }

    #[test]
    fn round_trip_preserves_state_and_excludes_transient_fields() {
        let state = state_with_notes(vec![Note::new(1, "2026-01-01T00:00:00.000Z")]);
        let serialized = serde_json::to_string(&state).unwrap();
        assert!(!serialized.contains("searchTerm"));
        assert!(!serialized.contains("isZenMode"));

        let restored = parse_persisted(&serialized).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn rejects_non_object_payloads() {
        assert!(matches!(
            parse_persisted("[1,2,3]").unwrap_err(),
            HydrationError::NotAnObject
        ));
        assert!(matches!(
            parse_persisted("not json").unwrap_err(),
            HydrationError::Malformed(_)
        ));
    }

    #[test]
    fn rejects_empty_collection() {
        let state = state_with_notes(Vec::new());
        let serialized = serde_json::to_string(&state).unwrap();
        assert_eq!(
            parse_persisted(&serialized).unwrap_err(),
            HydrationError::EmptyCollection
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let state = state_with_notes(vec![
            Note::new(5, "2026-01-01T00:00:00.000Z"),
            Note::new(5, "2026-01-01T00:00:01.000Z"),
        ]);
        let serialized = serde_json::to_string(&state).unwrap();
        assert_eq!(
            parse_persisted(&serialized).unwrap_err(),
            HydrationError::DuplicateNoteId(5)
        );
    }

    #[test]
    fn rejects_dangling_active_id() {
        let mut state = state_with_notes(vec![Note::new(1, "2026-01-01T00:00:00.000Z")]);
        state.active_note_id = Some(99);
        let serialized = serde_json::to_string(&state).unwrap();
        assert_eq!(
            parse_persisted(&serialized).unwrap_err(),
            HydrationError::DanglingActiveId(99)
        );
    }

    #[test]
    fn null_active_id_is_accepted() {
        let mut state = state_with_notes(vec![Note::new(1, "2026-01-01T00:00:00.000Z")]);
        state.active_note_id = None;
        let serialized = serde_json::to_string(&state).unwrap();
        assert!(parse_persisted(&serialized).is_ok());
    }
}
