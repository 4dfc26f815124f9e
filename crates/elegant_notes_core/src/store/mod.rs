//! Notes state store and its persistence bridge.
//!
//! # Responsibility
//! - Own the authoritative in-memory notes/session state.
//! - Keep mutation logic free of I/O; persistence happens through an
//!   explicit save step after each mutation.
//!
//! # Invariants
//! - The note collection is never empty.
//! - Only the subset `{notes, activeNoteId, isSidebarOpen, soundEnabled}`
//!   is ever serialized.

pub mod notes_store;
pub mod persist;
