//! Core domain logic for the Elegant Notes store.
//! This crate is the single source of truth for notes state and its
//! persistence contract; presentation layers consume it through the
//! exposed operations and ports.

pub mod audio;
pub mod clock;
pub mod export;
pub mod logging;
pub mod model;
pub mod notify;
pub mod sanitize;
pub mod storage;
pub mod store;

pub use audio::{AudioCue, NullAudioCue, SoundThrottle, SOUND_THROTTLE_MS};
pub use clock::{Clock, SystemClock};
pub use export::{export_note, NoteExport};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NoteValidationError, UNTITLED};
pub use notify::{Notification, NotificationGate};
pub use sanitize::{
    sanitize_note_content, sanitize_search_term, sanitize_string, validate_note_id,
    validate_note_title, validate_storage_data,
};
pub use storage::{MemoryStorage, SqliteStorage, StorageBackend, StorageError, StorageResult};
pub use store::notes_store::NotesStore;
pub use store::persist::{PersistedState, STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
