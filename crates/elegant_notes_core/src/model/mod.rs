//! Domain model for user-authored notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by store and persistence.
//! - Keep serialization names aligned with the persisted layout.
//!
//! # Invariants
//! - Every note is identified by a positive integer `NoteId`.
//! - `updated_at` never precedes `created_at`.

pub mod note;
