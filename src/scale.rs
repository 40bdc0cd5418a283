//! # Scale Deriver
//!
//! Major scales, blue notes and scale-degree labels for any key.
//!
//! ## Interval Tables
//! - Major scale: `[0, 2, 4, 5, 7, 9, 11]` semitones above the key
//! - Blue notes: `[3, 6, 10]` (♭3, ♭5, ♭7). These are chromatic alterations
//!   and are never members of the major scale of the same key.
//!
//! ## Degree Labels
//! Every one of the twelve intervals has a label, so non-diatonic notes such
//! as blue notes can be labelled too:
//!
//! ```text
//! 0  1   2  3   4  5  6   7  8   9  10  11
//! R  ♭2  2  ♭3  3  4  ♭5  5  ♭6  6  ♭7  7
//! ```
//!
//! ## Example
//! ```rust
//! use fretboard::{blue_notes, degree_label, major_scale, PitchClass::*};
//!
//! assert_eq!(major_scale(G), [G, A, B, C, D, E, FSharp]);
//! assert_eq!(blue_notes(G), [ASharp, CSharp, F]);
//! assert_eq!(degree_label(D, G), "5");
//! ```

use crate::pitch::PitchClass;

/// Semitones above the tonic for each degree of the major scale.
pub const MAJOR_SCALE_INTERVALS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitones above the tonic for ♭3, ♭5 and ♭7.
pub const BLUE_NOTE_INTERVALS: [i32; 3] = [3, 6, 10];

/// Degree label for each interval above the reference root.
pub const DEGREE_LABELS: [&str; 12] = [
    "R", "♭2", "2", "♭3", "3", "4", "♭5", "5", "♭6", "6", "♭7", "7",
];

/// The seven notes of the major scale of `key`, tonic first.
pub fn major_scale(key: PitchClass) -> [PitchClass; 7] {
    MAJOR_SCALE_INTERVALS.map(|interval| key.transpose(interval))
}

/// The ♭3, ♭5 and ♭7 of `key`, in that order.
pub fn blue_notes(key: PitchClass) -> [PitchClass; 3] {
    BLUE_NOTE_INTERVALS.map(|interval| key.transpose(interval))
}

pub fn is_in_scale(note: PitchClass, key: PitchClass) -> bool {
    major_scale(key).contains(&note)
}

pub fn is_blue_note(note: PitchClass, key: PitchClass) -> bool {
    blue_notes(key).contains(&note)
}

/// Label of `note` relative to `key` ("R", "♭3", "5", ...).
///
/// Total over all twelve intervals.
pub fn degree_label(note: PitchClass, key: PitchClass) -> &'static str {
    DEGREE_LABELS[note.interval_from(key)]
}

/// Keys in circle-of-fifths order, clockwise from C.
///
/// Each step is a perfect fifth (7 semitones):
/// `C G D A E B F# C# G# D# A# F`.
pub fn circle_of_fifths() -> [PitchClass; 12] {
    std::array::from_fn(|step| PitchClass::C.transpose(7 * step as i32))
}
