//! # Fretboard Mapper
//!
//! Maps string/fret positions to pitch classes and decides which positions
//! a fretboard diagram highlights.
//!
//! ## Note at Fret
//! The note at fret `n` of a string tuned to `open` is `open` raised by `n`
//! semitones, wrapped to a pitch class. Fret 0 is the open string. No upper
//! bound applies here; how many frets to draw is up to the caller.
//!
//! ## Highlighting
//!
//! ### Scale Mode
//! - Scale tones of the key are shown, labelled by degree relative to the key
//! - Blue notes (♭3, ♭5, ♭7) are shown too when enabled
//!
//! ### Chord Mode
//! - Chord tones are emphasized, labelled by degree relative to the chord root
//! - Other scale tones are shown dimmed, labelled relative to the key
//! - Blue notes are not shown
//!
//! ## Layout
//! [`FretboardView`] rows are in display order: highest string (1st) on top,
//! lowest (6th) at the bottom, each row holding one cell per fret.

use crate::chord::{chord_degree, Chord};
use crate::format::format_note;
use crate::pitch::PitchClass;
use crate::scale::{degree_label, is_blue_note, is_in_scale};
use serde::Serialize;

/// Number of fret columns drawn, open string included (frets 0-15).
pub const FRET_COUNT: u32 = 16;

/// Frets carrying an inlay dot.
pub const FRET_MARKERS: [u32; 6] = [3, 5, 7, 9, 12, 15];

/// Frets carrying a double dot.
pub const DOUBLE_MARKERS: [u32; 1] = [12];

/// Open-string notes from the 6th (lowest) string to the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tuning(pub [PitchClass; 6]);

/// E A D G B E.
pub const STANDARD_TUNING: Tuning = Tuning([
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
]);

impl Tuning {
    /// Open strings in display order, 1st string first.
    pub fn display_order(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.0.iter().rev().copied()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        STANDARD_TUNING
    }
}

/// The note sounding at `fret` on a string tuned to `open_string`.
pub fn note_at_fret(open_string: PitchClass, fret: u32) -> PitchClass {
    PitchClass::from_index(open_string.index() + (fret % 12) as usize)
}

/// Fret inlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FretMarker {
    Single,
    Double,
}

pub fn fret_marker(fret: u32) -> Option<FretMarker> {
    if DOUBLE_MARKERS.contains(&fret) {
        Some(FretMarker::Double)
    } else if FRET_MARKERS.contains(&fret) {
        Some(FretMarker::Single)
    } else {
        None
    }
}

/// What the diagram is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Scale { show_blue_notes: bool },
    Chord(Chord),
}

/// Why a note is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteRole {
    ScaleTone,
    BlueNote,
    ChordTone,
    ScaleToneDimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub role: NoteRole,
    pub degree: &'static str,
}

/// Highlight for `note` in `key` under `mode`, or `None` if it is hidden.
pub fn highlight(note: PitchClass, key: PitchClass, mode: &ViewMode) -> Option<Highlight> {
    let in_scale = is_in_scale(note, key);

    match mode {
        ViewMode::Scale { show_blue_notes } => {
            let role = if in_scale {
                NoteRole::ScaleTone
            } else if *show_blue_notes && is_blue_note(note, key) {
                NoteRole::BlueNote
            } else {
                return None;
            };
            Some(Highlight { role, degree: degree_label(note, key) })
        }
        ViewMode::Chord(chord) => {
            if let Some(degree) = chord_degree(note, chord) {
                return Some(Highlight { role: NoteRole::ChordTone, degree });
            }
            in_scale.then(|| Highlight {
                role: NoteRole::ScaleToneDimmed,
                degree: degree_label(note, key),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretCell {
    pub fret: u32,
    pub note: PitchClass,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<FretMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRow {
    pub open: PitchClass,
    pub cells: Vec<FretCell>,
}

/// A full fretboard for one key and mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardView {
    pub key: PitchClass,
    pub frets: u32,
    pub strings: Vec<StringRow>,
}

impl FretboardView {
    /// Lay out `frets` fret columns (open string included) for every string.
    ///
    /// # Example
    /// ```
    /// use fretboard::{FretboardView, NoteRole, PitchClass, ViewMode, STANDARD_TUNING, FRET_COUNT};
    ///
    /// let mode = ViewMode::Scale { show_blue_notes: true };
    /// let view = FretboardView::build(PitchClass::G, &mode, &STANDARD_TUNING, FRET_COUNT);
    ///
    /// // Top row is the high E string; fret 3 is G, the root
    /// let cell = &view.strings[0].cells[3];
    /// assert_eq!(cell.note, PitchClass::G);
    /// assert_eq!(cell.highlight.unwrap().role, NoteRole::ScaleTone);
    /// assert_eq!(cell.highlight.unwrap().degree, "R");
    /// ```
    pub fn build(key: PitchClass, mode: &ViewMode, tuning: &Tuning, frets: u32) -> Self {
        let strings = tuning
            .display_order()
            .map(|open| StringRow {
                open,
                cells: (0..frets)
                    .map(|fret| {
                        let note = note_at_fret(open, fret);
                        FretCell {
                            fret,
                            note,
                            label: format_note(note),
                            marker: fret_marker(fret),
                            highlight: highlight(note, key, mode),
                        }
                    })
                    .collect(),
            })
            .collect();

        FretboardView { key, frets, strings }
    }

    pub fn cell(&self, row: usize, fret: u32) -> Option<&FretCell> {
        self.strings.get(row)?.cells.get(fret as usize)
    }

    /// All highlighted cells, row by row.
    pub fn highlighted(&self) -> impl Iterator<Item = &FretCell> {
        self.strings
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.highlight.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordQuality;
    use crate::pitch::PitchClass::*;

    #[test]
    fn test_note_at_fret() {
        assert_eq!(note_at_fret(E, 0), E);
        assert_eq!(note_at_fret(E, 3), G);
        assert_eq!(note_at_fret(B, 1), C);
        assert_eq!(note_at_fret(E, 12), E);
        assert_eq!(note_at_fret(A, 15), C);
        assert_eq!(note_at_fret(G, 100), B);
    }

    #[test]
    fn test_markers() {
        assert_eq!(fret_marker(0), None);
        assert_eq!(fret_marker(3), Some(FretMarker::Single));
        assert_eq!(fret_marker(12), Some(FretMarker::Double));
        assert_eq!(fret_marker(15), Some(FretMarker::Single));
        assert_eq!(fret_marker(13), None);
    }

    #[test]
    fn test_tuning_display_order() {
        let order: Vec<_> = STANDARD_TUNING.display_order().collect();
        assert_eq!(order, vec![E, B, G, D, A, E]);
        assert_eq!(Tuning::default(), STANDARD_TUNING);
    }

    #[test]
    fn test_highlight_scale_mode() {
        let mode = ViewMode::Scale { show_blue_notes: true };
        assert_eq!(
            highlight(B, G, &mode),
            Some(Highlight { role: NoteRole::ScaleTone, degree: "3" })
        );
        assert_eq!(
            highlight(ASharp, G, &mode),
            Some(Highlight { role: NoteRole::BlueNote, degree: "♭3" })
        );
        // ♭6 is neither diatonic nor blue
        assert_eq!(highlight(DSharp, G, &mode), None);
    }

    #[test]
    fn test_highlight_scale_mode_hides_blue_notes() {
        let mode = ViewMode::Scale { show_blue_notes: false };
        assert_eq!(highlight(F, G, &mode), None);
        assert!(highlight(FSharp, G, &mode).is_some());
    }

    #[test]
    fn test_highlight_chord_mode() {
        let mode = ViewMode::Chord(Chord::new(D, ChordQuality::DominantSeventh));
        assert_eq!(
            highlight(C, G, &mode),
            Some(Highlight { role: NoteRole::ChordTone, degree: "♭7" })
        );
        // E is in G major but not in D7: dimmed, labelled relative to G
        assert_eq!(
            highlight(E, G, &mode),
            Some(Highlight { role: NoteRole::ScaleToneDimmed, degree: "6" })
        );
        // Blue notes never show in chord mode
        assert_eq!(highlight(F, G, &mode), None);
    }

    #[test]
    fn test_view_layout() {
        let mode = ViewMode::Scale { show_blue_notes: true };
        let view = FretboardView::build(G, &mode, &STANDARD_TUNING, FRET_COUNT);

        assert_eq!(view.strings.len(), 6);
        assert!(view.strings.iter().all(|row| row.cells.len() == 16));
        assert_eq!(view.strings[0].open, E);
        assert_eq!(view.strings[1].open, B);
        assert_eq!(view.strings[5].open, E);

        let cell = view.cell(1, 1).unwrap();
        assert_eq!(cell.note, C);
        assert_eq!(cell.label, "C");
        assert_eq!(view.cell(0, 12).unwrap().marker, Some(FretMarker::Double));
        assert_eq!(view.cell(6, 0), None);
    }

    #[test]
    fn test_view_highlight_counts() {
        // 12 frets hit each pitch class exactly once per string
        let mode = ViewMode::Scale { show_blue_notes: false };
        let view = FretboardView::build(C, &mode, &STANDARD_TUNING, 12);
        assert_eq!(view.highlighted().count(), 6 * 7);
    }
}
