//! Plain-text note export.
//!
//! # Responsibility
//! - Offer a note's content as a downloadable `<title>.txt` file.
//! - Keep file names safe for common filesystems.

use crate::model::note::{Note, UNTITLED};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static UNSAFE_FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]+"#).expect("valid filename regex"));

/// A note rendered as an exportable plain-text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteExport {
    /// `<title>.txt`, with filesystem-unsafe characters removed.
    pub file_name: String,
    /// The note content, verbatim.
    pub contents: String,
}

impl NoteExport {
    /// Writes the export into `dir` and returns the full path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        info!(
            "event=note_export module=export status=ok file={} bytes={}",
            self.file_name,
            self.contents.len()
        );
        Ok(path)
    }
}

/// Builds the export payload for one note.
pub fn export_note(note: &Note) -> NoteExport {
    NoteExport {
        file_name: format!("{}.txt", file_safe_title(&note.title)),
        contents: note.content.clone(),
    }
}

fn file_safe_title(title: &str) -> String {
    let cleaned = UNSAFE_FILENAME_RE.replace_all(title, "").trim().to_string();
    if cleaned.is_empty() {
        UNTITLED.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::export_note;
    use crate::model::note::Note;

    fn note_with(title: &str, content: &str) -> Note {
        let mut note = Note::new(1, "2026-01-01T00:00:00.000Z");
        note.title = title.to_string();
        note.content = content.to_string();
        note
    }

    #[test]
    fn file_name_is_title_with_txt_extension() {
        let export = export_note(&note_with("Shopping list", "milk"));
        assert_eq!(export.file_name, "Shopping list.txt");
        assert_eq!(export.contents, "milk");
    }

    #[test]
    fn unsafe_characters_are_stripped_from_file_name() {
        let export = export_note(&note_with("a/b\\c:d?e", "x"));
        assert_eq!(export.file_name, "abcde.txt");
    }

    #[test]
    fn empty_title_falls_back_to_untitled() {
        let export = export_note(&note_with("///", ""));
        assert_eq!(export.file_name, "Untitled.txt");
    }

    #[test]
    fn write_to_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = export_note(&note_with("Ideas", "line one\nline two"));
        let path = export.write_to(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "line one\nline two");
    }
}
