//! # View Configuration
//!
//! YAML description of what a fretboard diagram should show.
//!
//! ## Format
//! ```yaml
//! key: Bb            # any note name, flats accepted (default: G)
//! mode: chord        # scale | chord (default: scale)
//! chord: F7          # diatonic chord symbol (default: the tonic triad)
//! show-blue-notes: false   # scale mode only (default: true)
//! frets: 13          # fret columns including the open string (default: 16)
//! ```
//!
//! All fields are optional; an empty document gives the G major scale view.
//!
//! ## Example
//! ```rust
//! use fretboard::{ViewConfig, PitchClass};
//!
//! let config = ViewConfig::from_yaml("key: Eb\nmode: chord\nchord: Bb7\n")?;
//! assert_eq!(config.key, PitchClass::DSharp);
//! assert_eq!(config.chord.role, Some("Ⅴ7"));
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use crate::board::{FretboardView, ViewMode, FRET_COUNT, STANDARD_TUNING};
use crate::chord::Chord;
use crate::diatonic::diatonic_chords;
use crate::error::FretboardError;
use crate::pitch::PitchClass;
use serde::Deserialize;

/// Highest accepted fret count (open string plus 24 frets).
pub const MAX_FRETS: u32 = 25;

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawViewConfig {
    pub key: Option<String>,
    pub mode: Option<String>,
    pub chord: Option<String>,
    pub show_blue_notes: Option<bool>,
    pub frets: Option<u32>,
}

/// Scale or chord display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Scale,
    Chord,
}

impl DisplayMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scale" => Some(DisplayMode::Scale),
            "chord" => Some(DisplayMode::Chord),
            _ => None,
        }
    }
}

/// Validated view configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub key: PitchClass,
    pub mode: DisplayMode,
    /// Selected diatonic chord. Always set so switching to chord mode has
    /// something to show.
    pub chord: Chord,
    pub show_blue_notes: bool,
    pub frets: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let key = PitchClass::G;
        let [tonic, ..] = diatonic_chords(key).triads;
        ViewConfig {
            key,
            mode: DisplayMode::Scale,
            chord: tonic,
            show_blue_notes: true,
            frets: FRET_COUNT,
        }
    }
}

impl ViewConfig {
    /// Parse and validate a YAML view config.
    pub fn from_yaml(source: &str) -> Result<Self, FretboardError> {
        let raw: RawViewConfig = if source.trim().is_empty() {
            RawViewConfig::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| FretboardError::ConfigError(e.to_string()))?
        };
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawViewConfig) -> Result<Self, FretboardError> {
        let key = match &raw.key {
            Some(k) => k.parse()?,
            None => PitchClass::G,
        };

        let mode = match &raw.mode {
            Some(m) => DisplayMode::from_str(m).ok_or_else(|| {
                FretboardError::ConfigError(format!("mode must be 'scale' or 'chord', got '{}'", m))
            })?,
            None => DisplayMode::default(),
        };

        let chord = resolve_chord(key, raw.chord.as_deref())?;

        let frets = raw.frets.unwrap_or(FRET_COUNT);
        if frets == 0 || frets > MAX_FRETS {
            return Err(FretboardError::ConfigError(format!(
                "frets must be between 1 and {}, got {}",
                MAX_FRETS, frets
            )));
        }

        Ok(ViewConfig {
            key,
            mode,
            chord,
            show_blue_notes: raw.show_blue_notes.unwrap_or(true),
            frets,
        })
    }

    pub fn view_mode(&self) -> ViewMode {
        match self.mode {
            DisplayMode::Scale => ViewMode::Scale {
                show_blue_notes: self.show_blue_notes,
            },
            DisplayMode::Chord => ViewMode::Chord(self.chord.clone()),
        }
    }

    /// Lay out the configured fretboard in standard tuning.
    pub fn build_view(&self) -> FretboardView {
        FretboardView::build(self.key, &self.view_mode(), &STANDARD_TUNING, self.frets)
    }
}

/// Look up a chord symbol among the diatonic chords of `key`, keeping its
/// role and function. `None` selects the tonic triad.
pub fn resolve_chord(key: PitchClass, symbol: Option<&str>) -> Result<Chord, FretboardError> {
    let chords = diatonic_chords(key);
    let Some(symbol) = symbol else {
        let [tonic, ..] = chords.triads;
        return Ok(tonic);
    };

    let wanted = Chord::from_symbol(symbol)?;
    chords
        .position_of(&wanted)
        .and_then(|(kind, degree)| chords.get(kind, degree))
        .cloned()
        .ok_or_else(|| FretboardError::ChordNotInKey {
            chord: wanted.name,
            key: key.name().to_string(),
        })
}
