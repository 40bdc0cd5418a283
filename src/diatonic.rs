//! # Diatonic Chords
//!
//! The seven triads and seven seventh chords of a major key.
//!
//! Chord quality per scale degree is a fixed table, not computed from the
//! scale. Only major keys are supported.
//!
//! ```text
//! Degree     Ⅰ      Ⅱ    Ⅲ    Ⅳ      Ⅴ    Ⅵ    Ⅶ
//! Triad      maj    m    m    maj    maj  m    m♭5
//! Seventh    maj7   m7   m7   maj7   7    m7   m7♭5
//! Function   T      SD   T    SD     D    T    D
//! ```

use crate::chord::{Chord, ChordQuality};
use crate::pitch::PitchClass;
use crate::scale::major_scale;
use serde::Serialize;

pub const DIATONIC_TRIAD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

pub const DIATONIC_SEVENTH_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::MajorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::MajorSeventh,
    ChordQuality::DominantSeventh,
    ChordQuality::MinorSeventh,
    ChordQuality::HalfDiminishedSeventh,
];

pub const DIATONIC_TRIAD_ROLES: [&str; 7] = ["Ⅰ", "Ⅱm", "Ⅲm", "Ⅳ", "Ⅴ", "Ⅵm", "Ⅶm♭5"];

pub const DIATONIC_SEVENTH_ROLES: [&str; 7] =
    ["Ⅰmaj7", "Ⅱm7", "Ⅲm7", "Ⅳmaj7", "Ⅴ7", "Ⅵm7", "Ⅶm7♭5"];

/// Harmonic function of a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HarmonicFunction {
    #[serde(rename = "T")]
    Tonic,
    #[serde(rename = "SD")]
    Subdominant,
    #[serde(rename = "D")]
    Dominant,
}

impl HarmonicFunction {
    pub fn abbreviation(self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "T",
            HarmonicFunction::Subdominant => "SD",
            HarmonicFunction::Dominant => "D",
        }
    }
}

pub const DIATONIC_FUNCTIONS: [HarmonicFunction; 7] = [
    HarmonicFunction::Tonic,
    HarmonicFunction::Subdominant,
    HarmonicFunction::Tonic,
    HarmonicFunction::Subdominant,
    HarmonicFunction::Dominant,
    HarmonicFunction::Tonic,
    HarmonicFunction::Dominant,
];

/// Triad or seventh row of the chord picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordKind {
    Triad,
    Seventh,
}

/// Diatonic chords of one key; index `i` is scale degree `i` (0 = tonic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiatonicChords {
    pub key: PitchClass,
    pub triads: [Chord; 7],
    pub sevenths: [Chord; 7],
}

impl DiatonicChords {
    pub fn get(&self, kind: ChordKind, degree: usize) -> Option<&Chord> {
        match kind {
            ChordKind::Triad => self.triads.get(degree),
            ChordKind::Seventh => self.sevenths.get(degree),
        }
    }

    /// Locate a chord by name. Triads are searched before sevenths.
    pub fn find(&self, name: &str) -> Option<(ChordKind, usize)> {
        if let Some(i) = self.triads.iter().position(|c| c.name == name) {
            return Some((ChordKind::Triad, i));
        }
        self.sevenths
            .iter()
            .position(|c| c.name == name)
            .map(|i| (ChordKind::Seventh, i))
    }

    /// Locate a chord by root and quality.
    pub fn position_of(&self, chord: &Chord) -> Option<(ChordKind, usize)> {
        let same = |c: &Chord| c.root == chord.root && c.quality == chord.quality;
        if let Some(i) = self.triads.iter().position(same) {
            return Some((ChordKind::Triad, i));
        }
        self.sevenths
            .iter()
            .position(same)
            .map(|i| (ChordKind::Seventh, i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chord> {
        self.triads.iter().chain(self.sevenths.iter())
    }
}

/// Build the diatonic triads and sevenths of `key`.
///
/// # Example
/// ```
/// use fretboard::{diatonic_chords, PitchClass};
///
/// let chords = diatonic_chords(PitchClass::G);
/// assert_eq!(chords.sevenths[4].name, "D7");
/// assert_eq!(chords.sevenths[4].role, Some("Ⅴ7"));
/// ```
pub fn diatonic_chords(key: PitchClass) -> DiatonicChords {
    let scale = major_scale(key);

    let triads = std::array::from_fn(|i| {
        Chord::new(scale[i], DIATONIC_TRIAD_QUALITIES[i])
            .with_role(DIATONIC_TRIAD_ROLES[i], DIATONIC_FUNCTIONS[i])
    });
    let sevenths = std::array::from_fn(|i| {
        Chord::new(scale[i], DIATONIC_SEVENTH_QUALITIES[i])
            .with_role(DIATONIC_SEVENTH_ROLES[i], DIATONIC_FUNCTIONS[i])
    });

    DiatonicChords { key, triads, sevenths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass::*;

    fn names(chords: &[Chord]) -> Vec<&str> {
        chords.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_g_major_triads() {
        let chords = diatonic_chords(G);
        assert_eq!(
            names(&chords.triads),
            vec!["G", "Am", "Bm", "C", "D", "Em", "F#m♭5"]
        );
        assert_eq!(chords.triads[6].quality, ChordQuality::Diminished);
        assert_eq!(chords.triads[6].notes, vec![FSharp, A, C]);
    }

    #[test]
    fn test_g_major_sevenths() {
        let chords = diatonic_chords(G);
        assert_eq!(
            names(&chords.sevenths),
            vec!["Gmaj7", "Am7", "Bm7", "Cmaj7", "D7", "Em7", "F#m7♭5"]
        );
        assert_eq!(chords.sevenths[4].notes, vec![D, FSharp, A, C]);
    }

    #[test]
    fn test_roles_and_functions() {
        let chords = diatonic_chords(C);
        assert_eq!(chords.triads[0].role, Some("Ⅰ"));
        assert_eq!(chords.triads[6].role, Some("Ⅶm♭5"));
        assert_eq!(chords.sevenths[1].role, Some("Ⅱm7"));
        assert_eq!(chords.triads[4].function, Some(HarmonicFunction::Dominant));
        assert_eq!(chords.sevenths[3].function, Some(HarmonicFunction::Subdominant));
        assert_eq!(chords.sevenths[5].function, Some(HarmonicFunction::Tonic));
    }

    #[test]
    fn test_every_chord_tone_is_diatonic() {
        for key in PitchClass::ALL {
            let scale = major_scale(key);
            for chord in diatonic_chords(key).iter() {
                for note in &chord.notes {
                    assert!(scale.contains(note), "{} in {} major", chord, key);
                }
            }
        }
    }

    #[test]
    fn test_find_and_get() {
        let chords = diatonic_chords(G);
        assert_eq!(chords.find("G"), Some((ChordKind::Triad, 0)));
        assert_eq!(chords.find("D7"), Some((ChordKind::Seventh, 4)));
        assert_eq!(chords.find("Dm"), None);
        assert_eq!(chords.get(ChordKind::Seventh, 4).map(|c| c.name.as_str()), Some("D7"));
        assert_eq!(chords.get(ChordKind::Triad, 7), None);
    }

    #[test]
    fn test_position_of_ignores_role() {
        let chords = diatonic_chords(G);
        let em = Chord::new(E, ChordQuality::Minor);
        assert_eq!(chords.position_of(&em), Some((ChordKind::Triad, 5)));
        let gm = Chord::new(G, ChordQuality::Minor);
        assert_eq!(chords.position_of(&gm), None);
    }
}
