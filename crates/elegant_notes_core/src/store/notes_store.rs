//! Notes store: the single source of truth for notes and session flags.
//!
//! # Responsibility
//! - Apply note CRUD and session-flag mutations atomically.
//! - Persist the durable state subset after every mutation.
//! - Drive the keystroke audio cue through its throttle.
//!
//! # Invariants
//! - The note collection is never empty; deleting the last note is a
//!   no-op.
//! - New notes are prepended (newest-first display order) and become
//!   active.
//! - Note ids stay unique even when two notes are created within the
//!   same clock millisecond.
//! - No operation returns an error; storage failures degrade silently.

use crate::audio::{AudioCue, NullAudioCue, SoundThrottle};
use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteId};
use crate::sanitize::{sanitize_note_content, sanitize_search_term, validate_note_title};
use crate::storage::StorageBackend;
use crate::store::persist::{self, PersistedState};
use chrono::SecondsFormat;
use log::info;

const SEED_NOTE_ID: NoteId = 1;
const SEED_NOTE_TITLE: &str = "Welcome to Notes";
const SEED_NOTE_CONTENT: &str = "This is your new elegant notes application. \
Start writing your ideas here...\n\nFeatures:\n\u{2022} Dark/light mode\n\u{2022} \
Zen mode for concentration\n\u{2022} Smart search\n\u{2022} Favorites\n\u{2022} Note export";

/// Authoritative notes and session state, with injected storage, audio
/// and clock ports.
pub struct NotesStore<S: StorageBackend> {
    notes: Vec<Note>,
    active_note_id: Option<NoteId>,
    search_term: String,
    is_sidebar_open: bool,
    is_zen_mode: bool,
    sound_enabled: bool,
    storage: S,
    audio: Box<dyn AudioCue>,
    clock: Box<dyn Clock>,
    sound_throttle: SoundThrottle,
}

impl<S: StorageBackend> NotesStore<S> {
    /// Opens a store over the given backend, hydrating persisted state
    /// when a valid value exists and seeding otherwise.
    pub fn open(storage: S, audio: Box<dyn AudioCue>, clock: Box<dyn Clock>) -> Self {
        let mut store = Self {
            notes: Vec::new(),
            active_note_id: None,
            search_term: String::new(),
            is_sidebar_open: true,
            is_zen_mode: false,
            sound_enabled: false,
            storage,
            audio,
            clock,
            sound_throttle: SoundThrottle::default(),
        };

        match persist::load(&store.storage) {
            Some(state) => {
                store.notes = state.notes;
                store.active_note_id = state.active_note_id;
                store.is_sidebar_open = state.is_sidebar_open;
                store.sound_enabled = state.sound_enabled;
                info!(
                    "event=store_hydrate module=store status=ok source=storage notes={}",
                    store.notes.len()
                );
            }
            None => {
                store.seed();
                info!("event=store_hydrate module=store status=ok source=seed notes=1");
            }
        }

        store
    }

    /// Opens a store with the no-op audio cue and the system clock.
    pub fn with_defaults(storage: S) -> Self {
        Self::open(storage, Box::new(NullAudioCue), Box::new(SystemClock))
    }

    fn seed(&mut self) {
        let now = self.now_iso();
        let mut welcome = Note::new(SEED_NOTE_ID, now);
        welcome.title = SEED_NOTE_TITLE.to_string();
        welcome.content = SEED_NOTE_CONTENT.to_string();
        welcome.starred = true;
        self.notes = vec![welcome];
        self.active_note_id = Some(SEED_NOTE_ID);
    }

    fn now_iso(&self) -> String {
        self.clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn persist(&mut self) {
        let state = PersistedState {
            notes: self.notes.clone(),
            active_note_id: self.active_note_id,
            is_sidebar_open: self.is_sidebar_open,
            sound_enabled: self.sound_enabled,
        };
        persist::save(&mut self.storage, &state);
    }

    /// Creates an empty untitled note, prepends it and makes it active.
    ///
    /// The id is the current epoch millisecond, bumped past the largest
    /// existing id when two creations land in the same millisecond, so
    /// ids stay unique and monotonically increasing.
    pub fn create_note(&mut self) -> NoteId {
        let now = self.clock.now();
        let mut id = now.timestamp_millis();
        let max_existing = self.notes.iter().map(|note| note.id).max().unwrap_or(0);
        if id <= max_existing {
            id = max_existing + 1;
        }

        let note = Note::new(id, now.to_rfc3339_opts(SecondsFormat::Millis, true));
        self.notes.insert(0, note);
        self.active_note_id = Some(id);
        self.persist();
        id
    }

    /// Replaces the content of the currently active note.
    ///
    /// Fires the audio cue (best-effort, throttled) when sound is
    /// enabled and the content actually changed. No-op without an
    /// active note.
    pub fn update_note_content(&mut self, content: &str) {
        let Some(active_id) = self.active_note_id else {
            return;
        };
        let Some(position) = self.notes.iter().position(|note| note.id == active_id) else {
            return;
        };

        let sanitized = sanitize_note_content(content);
        if self.sound_enabled && sanitized != self.notes[position].content {
            let now_ms = self.clock.now_millis();
            if self.sound_throttle.try_acquire(now_ms) {
                self.audio.play();
            }
        }

        let now = self.now_iso();
        let note = &mut self.notes[position];
        note.content = sanitized;
        note.touch(now);
        self.persist();
    }

    /// Replaces the title of the note matching `id`; no-op when unknown.
    pub fn update_note_title(&mut self, id: NoteId, title: &str) {
        let now = self.now_iso();
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };
        note.title = validate_note_title(title);
        note.touch(now);
        self.persist();
    }

    /// Flips the starred flag of the matching note; no-op when unknown.
    pub fn toggle_star(&mut self, id: NoteId) {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return;
        };
        note.starred = !note.starred;
        self.persist();
    }

    /// Removes the matching note unless it is the last one remaining.
    ///
    /// When the deleted note was active, the first remaining note
    /// becomes active.
    pub fn delete_note(&mut self, id: NoteId) {
        if self.notes.len() <= 1 {
            return;
        }
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return;
        }
        if self.active_note_id == Some(id) {
            self.active_note_id = self.notes.first().map(|note| note.id);
        }
        self.persist();
    }

    pub fn set_active_note(&mut self, id: NoteId) {
        self.active_note_id = Some(id);
        self.persist();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = sanitize_search_term(term);
        self.persist();
    }

    pub fn set_is_sidebar_open(&mut self, value: bool) {
        self.is_sidebar_open = value;
        self.persist();
    }

    pub fn set_is_zen_mode(&mut self, value: bool) {
        self.is_zen_mode = value;
        self.persist();
    }

    pub fn set_sound_enabled(&mut self, value: bool) {
        self.sound_enabled = value;
        self.persist();
    }

    /// Notes whose title or content case-insensitively contains the
    /// current search term, in display order. Computed, not stored.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        let term = self.search_term.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.matches_term(&term))
            .collect()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn active_note(&self) -> Option<&Note> {
        let active_id = self.active_note_id?;
        self.notes.iter().find(|note| note.id == active_id)
    }

    pub fn active_note_id(&self) -> Option<NoteId> {
        self.active_note_id
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.is_sidebar_open
    }

    pub fn is_zen_mode(&self) -> bool {
        self.is_zen_mode
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Read access to the storage backend, mainly for inspection in
    /// tests and diagnostics.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
