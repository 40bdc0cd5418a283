//! # Chord Builder
//!
//! Chord qualities, chord construction and chord-tone lookup.
//!
//! ## Quality Table
//! Each [`ChordQuality`] fixes three things, kept side by side in one `match`
//! per property so that adding a quality is a compile error until all three
//! are filled in:
//!
//! | Quality    | Intervals       | Degrees          | Suffix  |
//! |------------|-----------------|------------------|---------|
//! | `major`    | 0 4 7           | R 3 5            | (none)  |
//! | `minor`    | 0 3 7           | R ♭3 5           | `m`     |
//! | `dim`      | 0 3 6           | R ♭3 ♭5          | `m♭5`   |
//! | `maj7`     | 0 4 7 11        | R 3 5 7          | `maj7`  |
//! | `min7`     | 0 3 7 10        | R ♭3 5 ♭7        | `m7`    |
//! | `7`        | 0 4 7 10        | R 3 5 ♭7         | `7`     |
//! | `min7b5`   | 0 3 6 10        | R ♭3 ♭5 ♭7       | `m7♭5`  |
//!
//! Chord tones are always listed in interval order, never re-sorted by pitch.
//!
//! ## Chord Symbols
//! [`Chord::from_symbol`] accepts the display suffixes above plus the usual
//! lead-sheet aliases (`maj`, `M`, `min`, `-`, `°`, `M7`, `-7`, `ø`, `m7b5`).

use crate::diatonic::HarmonicFunction;
use crate::error::FretboardError;
use crate::pitch::PitchClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interval pattern of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "minor")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "maj7")]
    MajorSeventh,
    #[serde(rename = "min7")]
    MinorSeventh,
    #[serde(rename = "7")]
    DominantSeventh,
    #[serde(rename = "min7b5")]
    HalfDiminishedSeventh,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 7] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::MajorSeventh,
        ChordQuality::MinorSeventh,
        ChordQuality::DominantSeventh,
        ChordQuality::HalfDiminishedSeventh,
    ];

    /// Semitones above the chord root, root first.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::MajorSeventh => &[0, 4, 7, 11],
            ChordQuality::MinorSeventh => &[0, 3, 7, 10],
            ChordQuality::DominantSeventh => &[0, 4, 7, 10],
            ChordQuality::HalfDiminishedSeventh => &[0, 3, 6, 10],
        }
    }

    /// Degree label for each interval, parallel to [`intervals`](Self::intervals).
    pub fn degree_labels(self) -> &'static [&'static str] {
        match self {
            ChordQuality::Major => &["R", "3", "5"],
            ChordQuality::Minor => &["R", "♭3", "5"],
            ChordQuality::Diminished => &["R", "♭3", "♭5"],
            ChordQuality::MajorSeventh => &["R", "3", "5", "7"],
            ChordQuality::MinorSeventh => &["R", "♭3", "5", "♭7"],
            ChordQuality::DominantSeventh => &["R", "3", "5", "♭7"],
            ChordQuality::HalfDiminishedSeventh => &["R", "♭3", "♭5", "♭7"],
        }
    }

    /// Suffix appended to the root to name a chord.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "m♭5",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::MinorSeventh => "m7",
            ChordQuality::DominantSeventh => "7",
            ChordQuality::HalfDiminishedSeventh => "m7♭5",
        }
    }

    /// Stable identifier, also the serialized form.
    pub fn symbol(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "dim",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::MinorSeventh => "min7",
            ChordQuality::DominantSeventh => "7",
            ChordQuality::HalfDiminishedSeventh => "min7b5",
        }
    }

    pub fn is_seventh(self) -> bool {
        self.intervals().len() == 4
    }

    /// Parse a chord suffix as written after the root.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" | "M" | "maj" => Some(ChordQuality::Major),
            "m" | "min" | "-" => Some(ChordQuality::Minor),
            "m♭5" | "mb5" | "dim" | "°" => Some(ChordQuality::Diminished),
            "maj7" | "M7" => Some(ChordQuality::MajorSeventh),
            "m7" | "min7" | "-7" => Some(ChordQuality::MinorSeventh),
            "7" => Some(ChordQuality::DominantSeventh),
            "m7♭5" | "m7b5" | "min7b5" | "ø" | "ø7" => Some(ChordQuality::HalfDiminishedSeventh),
            _ => None,
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Chord tones paired with their degree labels, in interval order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordTones {
    pub notes: Vec<PitchClass>,
    pub degrees: Vec<&'static str>,
}

/// A chord built from a root and a quality.
///
/// `notes` and `degrees` always have the same length as the quality's
/// interval table. `role` and `function` are only set for chords produced by
/// the diatonic generator, since they describe a position within a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub name: String,
    pub root: PitchClass,
    pub quality: ChordQuality,
    pub notes: Vec<PitchClass>,
    pub degrees: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<HarmonicFunction>,
}

impl Chord {
    /// Build a chord outside any key context.
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        let ChordTones { notes, degrees } = chord_notes(root, quality);
        Chord {
            name: chord_name(root, quality),
            root,
            quality,
            notes,
            degrees,
            role: None,
            function: None,
        }
    }

    pub(crate) fn with_role(mut self, role: &'static str, function: HarmonicFunction) -> Self {
        self.role = Some(role);
        self.function = Some(function);
        self
    }

    /// Parse a chord symbol such as `"G"`, `"Bbm7"` or `"F#m7♭5"`.
    ///
    /// # Example
    /// ```
    /// use fretboard::{Chord, ChordQuality, PitchClass};
    ///
    /// let chord = Chord::from_symbol("Bbmaj7").unwrap();
    /// assert_eq!(chord.root, PitchClass::ASharp);
    /// assert_eq!(chord.quality, ChordQuality::MajorSeventh);
    /// assert_eq!(chord.name, "A#maj7");
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<Self, FretboardError> {
        let trimmed = symbol.trim();
        let invalid = || FretboardError::InvalidChordSymbol(trimmed.to_string());

        // Root is the letter plus an optional accidental. No suffix starts with
        // '#' or 'b', so a second char of either kind always belongs to the root.
        let mut boundaries = trimmed.char_indices().skip(1);
        let root_end = match boundaries.next() {
            None => trimmed.len(),
            Some((_, c)) if matches!(c, '#' | '♯' | 'b' | '♭') => {
                boundaries.next().map(|(j, _)| j).unwrap_or(trimmed.len())
            }
            Some((i, _)) => i,
        };

        let root: PitchClass = trimmed[..root_end].parse().map_err(|_| invalid())?;
        let quality = ChordQuality::from_suffix(&trimmed[root_end..]).ok_or_else(invalid)?;
        Ok(Chord::new(root, quality))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Apply a quality's intervals to a root.
pub fn chord_notes(root: PitchClass, quality: ChordQuality) -> ChordTones {
    ChordTones {
        notes: quality
            .intervals()
            .iter()
            .map(|&interval| root.transpose(interval))
            .collect(),
        degrees: quality.degree_labels().to_vec(),
    }
}

/// Root name plus quality suffix, e.g. `"F#m7♭5"`.
pub fn chord_name(root: PitchClass, quality: ChordQuality) -> String {
    format!("{}{}", root.name(), quality.suffix())
}

pub fn is_chord_tone(note: PitchClass, chord: &Chord) -> bool {
    chord.notes.contains(&note)
}

/// Degree of `note` within `chord`, or `None` if it isn't a chord tone.
pub fn chord_degree(note: PitchClass, chord: &Chord) -> Option<&'static str> {
    chord
        .notes
        .iter()
        .position(|&n| n == note)
        .and_then(|i| chord.degrees.get(i).copied())
}
