//! Display spelling for notes and scales.
//!
//! Notes are shown with flats (Db, Eb, Ab, Bb) except F#, which keeps its
//! sharp the way guitar charts in G and D write it.

use crate::pitch::PitchClass;
use crate::scale::major_scale;

/// Display name of a single note.
pub fn format_note(note: PitchClass) -> &'static str {
    if note == PitchClass::FSharp {
        return note.name();
    }
    note.flat_name().unwrap_or(note.name())
}

/// Display names joined with `-`.
///
/// # Example
/// ```
/// use fretboard::{format_notes, PitchClass::*};
///
/// assert_eq!(format_notes(&[G, A, B, C, D, E, FSharp]), "G-A-B-C-D-E-F#");
/// assert_eq!(format_notes(&[CSharp]), "Db");
/// ```
pub fn format_notes(notes: &[PitchClass]) -> String {
    notes
        .iter()
        .map(|&note| format_note(note))
        .collect::<Vec<_>>()
        .join("-")
}

/// The major scale of `key` as display text.
pub fn scale_text(key: PitchClass) -> String {
    format_notes(&major_scale(key))
}

/// Label for a key picker: `"C"`, or `"C# / Db"` for black keys.
pub fn key_display_name(key: PitchClass) -> String {
    match key.flat_name() {
        Some(flat) => format!("{} / {}", key.name(), flat),
        None => key.name().to_string(),
    }
}
