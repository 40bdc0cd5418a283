//! # Fretboard
//!
//! Music theory engine for a guitar fretboard visualizer: major scales, blue
//! notes, diatonic chords and degree labels over the twelve pitch classes.
//!
//! Everything here is a pure function of its inputs. Front ends (the
//! `fretboard` command, the WebAssembly bindings) call these functions and
//! render the results.
//!
//! ## Modules
//! - `pitch` - The twelve pitch classes and index arithmetic
//! - `scale` - Major scale, blue notes, degree labels, circle of fifths
//! - `chord` - Chord qualities, chord tones and chord symbols
//! - `diatonic` - Diatonic triads and seventh chords of a key
//! - `board` - Note at fret, tuning, markers and highlighted views
//! - `format` - Display spelling (flats, except F#)
//! - `config` - YAML view configuration
//!
//! ## Example
//! ```rust
//! use fretboard::{diatonic_chords, chord_degree, note_at_fret, scale_text, PitchClass};
//!
//! assert_eq!(scale_text(PitchClass::G), "G-A-B-C-D-E-F#");
//!
//! let gmaj7 = &diatonic_chords(PitchClass::G).sevenths[0];
//! let note = note_at_fret(PitchClass::A, 5); // D on the A string
//! assert_eq!(chord_degree(note, gmaj7), Some("5"));
//! ```

pub mod board;
pub mod chord;
pub mod config;
pub mod diatonic;
pub mod error;
pub mod format;
pub mod pitch;
pub mod scale;

pub use board::*;
pub use chord::*;
pub use config::{resolve_chord, DisplayMode, ViewConfig};
pub use diatonic::*;
pub use error::*;
pub use format::*;
pub use pitch::*;
pub use scale::*;

/// Build the fretboard view described by a YAML config.
/// This is the main entry point for front ends.
pub fn view_from_yaml(source: &str) -> Result<FretboardView, FretboardError> {
    Ok(ViewConfig::from_yaml(source)?.build_view())
}
