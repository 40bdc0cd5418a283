//! # Error Types
//!
//! This module defines all error types for the fretboard engine.
//!
//! The theory functions themselves are total: every pitch class, chord quality
//! and fret has a defined answer. Errors only come from the string boundaries,
//! i.e. parsing note names and chord symbols typed by a user, or loading a
//! view configuration file.
//!
//! ## Error Types
//! - `InvalidNote` - A note name that isn't A-G with an optional accidental
//! - `InvalidChordSymbol` - A chord symbol with an unknown root or suffix
//! - `ChordNotInKey` - A chord that isn't one of the key's diatonic chords
//! - `ConfigError` - Invalid YAML view configuration
//!
//! ## Usage
//! ```rust
//! use fretboard::{FretboardError, PitchClass};
//!
//! match "H".parse::<PitchClass>() {
//!     Ok(note) => println!("Parsed {}", note),
//!     Err(FretboardError::InvalidNote(name)) => eprintln!("No such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FretboardError {
    /// Note name could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidNote("H#".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: H#");
    /// ```
    #[error("Invalid note name: {0}")]
    InvalidNote(String),

    /// Chord symbol could not be parsed.
    ///
    /// Occurs when the root is not a valid note or the suffix after it doesn't
    /// name one of the supported chord qualities.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidChordSymbol("Gsus4".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord symbol: Gsus4");
    /// ```
    #[error("Invalid chord symbol: {0}")]
    InvalidChordSymbol(String),

    /// Chord isn't diatonic to the selected key.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::ChordNotInKey {
    ///     chord: "Dm".to_string(),
    ///     key: "G".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Chord Dm is not diatonic to G major");
    /// ```
    #[error("Chord {chord} is not diatonic to {key} major")]
    ChordNotInKey { chord: String, key: String },

    /// Invalid view configuration.
    ///
    /// Occurs when the YAML is malformed or holds out-of-range values.
    #[error("Invalid view config: {0}")]
    ConfigError(String),
}
