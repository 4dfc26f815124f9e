//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `elegant_notes_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use elegant_notes_core::{MemoryStorage, NotesStore};

fn main() {
    let store = NotesStore::with_defaults(MemoryStorage::new());
    println!(
        "elegant_notes_core version={}",
        elegant_notes_core::core_version()
    );
    println!(
        "elegant_notes_core seeded_notes={} active_note={}",
        store.notes().len(),
        store
            .active_note()
            .map(|note| note.title.as_str())
            .unwrap_or("none")
    );
}
