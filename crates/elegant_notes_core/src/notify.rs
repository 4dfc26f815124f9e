//! Notification gating for the toast layer.
//!
//! # Responsibility
//! - Decide which collection/selection changes deserve a toast.
//! - Debounce the created-then-autoselected sequence into one toast.
//!
//! # Invariants
//! - Zen mode suppresses collection and selection toasts entirely.
//! - A created note never produces both a "created" and a "selected"
//!   toast inside the suppression window.
//! - The first observation only primes baselines and emits nothing.

use crate::model::note::{Note, NoteId, UNTITLED};

/// Minimum gap between two collection-change toasts.
pub const COLLECTION_TOAST_GAP_MS: i64 = 1_000;
/// Minimum gap before a selection toast may follow any other toast.
pub const SELECTION_TOAST_GAP_MS: i64 = 500;
/// Window in which selecting a just-created note stays silent.
pub const CREATED_SELECTION_SUPPRESS_MS: i64 = 2_000;

/// One toast payload handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn note_created() -> Self {
        Self::new("New note created", "Start writing your ideas")
    }

    pub fn note_deleted() -> Self {
        Self::new("Note deleted", "Note has been removed successfully")
    }

    pub fn note_selected(note_title: &str) -> Self {
        let title = if note_title.is_empty() {
            UNTITLED
        } else {
            note_title
        };
        Self::new("Note selected", title)
    }

    /// Confirmation for the save shortcut; persistence is already
    /// continuous, so the shortcut only acknowledges.
    pub fn auto_saved() -> Self {
        Self::new("Auto-saved", "Note saved to local storage")
    }

    pub fn star_toggled(is_starred: bool) -> Self {
        if is_starred {
            Self::new("Added to favorites", "Note has been marked as favorite")
        } else {
            Self::new(
                "Removed from favorites",
                "Note has been removed from favorites",
            )
        }
    }

    pub fn note_downloaded(file_name: &str) -> Self {
        Self::new(
            "Note downloaded",
            format!("{file_name} has been downloaded successfully"),
        )
    }

    /// Zen toasts are the one kind shown while zen mode is active.
    pub fn zen_mode(is_entering: bool) -> Self {
        if is_entering {
            Self::new(
                "Zen mode enabled",
                "Focus on your writing without distractions",
            )
        } else {
            Self::new("Zen mode disabled", "You have returned to normal view")
        }
    }

    /// Drops this notification while zen mode is active.
    ///
    /// For manually triggered toasts (save/star/download) that bypass
    /// the gate.
    pub fn unless_zen(self, is_zen: bool) -> Option<Self> {
        if is_zen {
            None
        } else {
            Some(self)
        }
    }
}

/// Stateful debounce over store snapshots.
///
/// Feed it the state after every mutation; it returns the toasts that
/// should actually be shown.
#[derive(Debug, Clone, Default)]
pub struct NotificationGate {
    primed: bool,
    prev_count: usize,
    prev_active_id: Option<NoteId>,
    last_toast_ms: i64,
    last_created_id: Option<NoteId>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes one state snapshot and returns due notifications.
    ///
    /// While zen mode is active nothing is emitted and baselines stay
    /// frozen, so a change made during zen surfaces on the first
    /// non-zen observation after it.
    pub fn observe(
        &mut self,
        now_ms: i64,
        notes: &[Note],
        active_note_id: Option<NoteId>,
        is_zen: bool,
    ) -> Vec<Notification> {
        if !self.primed {
            self.primed = true;
            self.prev_count = notes.len();
            self.prev_active_id = active_note_id;
            return Vec::new();
        }

        if is_zen {
            return Vec::new();
        }

        let mut due = Vec::new();
        self.observe_collection(now_ms, notes, &mut due);
        self.observe_selection(now_ms, notes, active_note_id, &mut due);
        due
    }

    fn observe_collection(&mut self, now_ms: i64, notes: &[Note], due: &mut Vec<Notification>) {
        if notes.len() == self.prev_count {
            return;
        }

        if notes.len() > self.prev_count {
            if now_ms - self.last_toast_ms > COLLECTION_TOAST_GAP_MS {
                if let Some(newest) = notes.first() {
                    if self.last_created_id != Some(newest.id) {
                        due.push(Notification::note_created());
                        self.last_toast_ms = now_ms;
                        self.last_created_id = Some(newest.id);
                    }
                }
            }
        } else if now_ms - self.last_toast_ms > COLLECTION_TOAST_GAP_MS {
            due.push(Notification::note_deleted());
            self.last_toast_ms = now_ms;
        }

        self.prev_count = notes.len();
    }

    fn observe_selection(
        &mut self,
        now_ms: i64,
        notes: &[Note],
        active_note_id: Option<NoteId>,
        due: &mut Vec<Notification>,
    ) {
        if active_note_id != self.prev_active_id {
            if let Some(active) = active_note_id {
                let recently_created = self.last_created_id == Some(active)
                    && now_ms - self.last_toast_ms < CREATED_SELECTION_SUPPRESS_MS;

                if !recently_created && now_ms - self.last_toast_ms > SELECTION_TOAST_GAP_MS {
                    if let Some(note) = notes.iter().find(|note| note.id == active) {
                        due.push(Notification::note_selected(&note.title));
                        self.last_toast_ms = now_ms;
                    }
                }
            }
        }

        self.prev_active_id = active_note_id;
    }
}

#[cfg(test)]
mod tests {
    use super::{Notification, NotificationGate};
    use crate::model::note::Note;

    fn note(id: i64, title: &str) -> Note {
        let mut note = Note::new(id, "2026-01-01T00:00:00.000Z");
        note.title = title.to_string();
        note
    }

    #[test]
    fn first_observation_primes_silently() {
        let mut gate = NotificationGate::new();
        let notes = vec![note(1, "Welcome")];
        assert!(gate.observe(10_000, &notes, Some(1), false).is_empty());
    }

    #[test]
    fn created_note_toasts_once_and_autoselect_stays_silent() {
        let mut gate = NotificationGate::new();
        let seed = vec![note(1, "Welcome")];
        gate.observe(10_000, &seed, Some(1), false);

        // Create prepends and auto-selects: one snapshot, one toast.
        let after_create = vec![note(2, "Untitled"), note(1, "Welcome")];
        let due = gate.observe(12_000, &after_create, Some(2), false);
        assert_eq!(due, vec![Notification::note_created()]);

        // Re-selecting the created note within the window stays silent.
        let due = gate.observe(12_100, &after_create, Some(1), false);
        assert!(due.is_empty());
        let due = gate.observe(13_999, &after_create, Some(2), false);
        assert!(due.is_empty());
    }

    #[test]
    fn selection_toast_carries_note_title() {
        let mut gate = NotificationGate::new();
        let notes = vec![note(2, "Ideas"), note(1, "Welcome")];
        gate.observe(10_000, &notes, Some(1), false);

        let due = gate.observe(20_000, &notes, Some(2), false);
        assert_eq!(due, vec![Notification::note_selected("Ideas")]);
    }

    #[test]
    fn rapid_collection_changes_are_throttled() {
        let mut gate = NotificationGate::new();
        let one = vec![note(1, "Welcome")];
        gate.observe(10_000, &one, Some(1), false);

        let two = vec![note(2, "Untitled"), note(1, "Welcome")];
        assert_eq!(gate.observe(12_000, &two, Some(2), false).len(), 1);

        // Deletion 400 ms later falls inside the 1 s gap.
        let due = gate.observe(12_400, &one, Some(1), false);
        assert!(due.is_empty());

        // Well past the gap the deletion toast fires.
        let three = vec![note(3, "Untitled"), note(1, "Welcome")];
        gate.observe(20_000, &three, Some(3), false);
        let due = gate.observe(25_000, &one, Some(1), false);
        assert!(due.contains(&Notification::note_deleted()));
    }

    #[test]
    fn zen_mode_freezes_baselines_and_emits_nothing() {
        let mut gate = NotificationGate::new();
        let one = vec![note(1, "Welcome")];
        gate.observe(10_000, &one, Some(1), false);

        let two = vec![note(2, "Untitled"), note(1, "Welcome")];
        assert!(gate.observe(12_000, &two, Some(2), true).is_empty());

        // Leaving zen, the frozen baseline makes the change visible.
        let due = gate.observe(15_000, &two, Some(2), false);
        assert_eq!(due, vec![Notification::note_created()]);
    }

    #[test]
    fn manual_toasts_respect_zen_suppression() {
        assert!(Notification::auto_saved().unless_zen(true).is_none());
        assert!(Notification::star_toggled(true).unless_zen(false).is_some());
        // Zen toasts themselves are never suppressed.
        let toast = Notification::zen_mode(true);
        assert_eq!(toast.title, "Zen mode enabled");
    }

    #[test]
    fn empty_title_selection_falls_back_to_untitled() {
        let toast = Notification::note_selected("");
        assert_eq!(toast.description, "Untitled");
    }
}
