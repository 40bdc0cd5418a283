//! # Pitch-Class Model
//!
//! The twelve chromatic pitch classes of 12-tone equal temperament and the
//! index arithmetic every other module is built on.
//!
//! ## Key Concepts
//!
//! ### Canonical Spelling
//! Every pitch class is stored under its sharp spelling:
//! `C C# D D# E F F# G G# A A# B` (index 0-11). Arithmetic always maps back
//! through this table, so transposing never produces spellings like `Cx` or
//! `E#`. Flat spellings only exist at the edges: they are accepted when
//! parsing and produced by the formatter for display.
//!
//! ### Index Arithmetic
//! - `index(p)` is the fixed chromatic position 0-11
//! - `p.transpose(n)` is `(index(p) + n) mod 12`, for any signed `n`
//! - `a.interval_from(b)` is `(index(a) - index(b) + 12) mod 12`
//!
//! ## Related Modules
//! - `scale` - Major scale and blue notes built from intervals over a key
//! - `chord` - Chord tones built from intervals over a chord root
//! - `format` - Flat spelling for display

use crate::error::FretboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve pitch classes, named by its sharp spelling.
///
/// A key is represented by the same type: it is simply the pitch class chosen
/// as tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#", alias = "Db")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#", alias = "Eb")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#", alias = "Gb")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#", alias = "Ab")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#", alias = "Bb")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

/// The canonical chromatic order, starting from C.
pub const NOTES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// All twelve pitch classes in chromatic order. Every one of them is a
    /// selectable key.
    pub const ALL: [PitchClass; 12] = NOTES;

    /// Chromatic index 0-11 (C = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at a chromatic index; wraps modulo 12.
    pub fn from_index(index: usize) -> Self {
        NOTES[index % 12]
    }

    /// Move up (or down, for negative values) by a number of semitones.
    pub fn transpose(self, semitones: i32) -> Self {
        let index = (self.index() as i32 + semitones).rem_euclid(12);
        NOTES[index as usize]
    }

    /// Semitones from `root` up to `self`, in `0..12`.
    pub fn interval_from(self, root: PitchClass) -> usize {
        (self.index() + 12 - root.index()) % 12
    }

    /// Canonical sharp spelling ("C", "C#", ...).
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling of a black key, `None` for the naturals.
    pub fn flat_name(self) -> Option<&'static str> {
        match self {
            PitchClass::CSharp => Some("Db"),
            PitchClass::DSharp => Some("Eb"),
            PitchClass::FSharp => Some("Gb"),
            PitchClass::GSharp => Some("Ab"),
            PitchClass::ASharp => Some("Bb"),
            _ => None,
        }
    }

    /// Whether this pitch class is spelled with an accidental.
    pub fn is_accidental(self) -> bool {
        self.flat_name().is_some()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a pitch class in the canonical list.
pub fn index_of(note: PitchClass) -> usize {
    note.index()
}

/// Parses a note letter with at most one accidental.
///
/// Accepts `#`/`♯` and `b`/`♭`, case-insensitive letters, and normalizes
/// enharmonics to the canonical sharp spelling (`Bb` -> `A#`, `E#` -> `F`,
/// `Cb` -> `B`).
///
/// # Example
/// ```
/// use fretboard::PitchClass;
///
/// assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::ASharp);
/// assert_eq!("f#".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
/// assert!("H".parse::<PitchClass>().is_err());
/// ```
impl FromStr for PitchClass {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || FretboardError::InvalidNote(trimmed.to_string());

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let base = match letter.to_ascii_uppercase() {
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return Err(invalid()),
        };

        let offset = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(base.transpose(offset))
    }
}
