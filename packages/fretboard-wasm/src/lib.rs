use fretboard::config::RawViewConfig;
use fretboard::{circle_of_fifths, format_note, FretboardError, PitchClass, ViewConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, PartialEq)]
struct BindingError {
    message: String,
    kind: &'static str,
}

impl From<FretboardError> for BindingError {
    fn from(e: FretboardError) -> Self {
        let kind = match &e {
            FretboardError::InvalidNote(_) => "invalid-note",
            FretboardError::InvalidChordSymbol(_) => "invalid-chord",
            FretboardError::ChordNotInKey { .. } => "chord-not-in-key",
            FretboardError::ConfigError(_) => "config",
        };
        BindingError {
            message: e.to_string(),
            kind,
        }
    }
}

#[derive(Serialize)]
struct KeyLabel {
    note: PitchClass,
    label: &'static str,
}

fn to_js_error(e: BindingError) -> JsValue {
    let json = serde_json::to_string(&e).unwrap_or_else(|_| e.message.clone());
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BindingError> {
    serde_json::to_string(value).map_err(|e| BindingError {
        message: e.to_string(),
        kind: "serialize",
    })
}

fn parse_key(key: &str) -> Result<PitchClass, BindingError> {
    Ok(key.parse::<PitchClass>()?)
}

fn diatonic_chords_json(key: &str) -> Result<String, BindingError> {
    to_json(&fretboard::diatonic_chords(parse_key(key)?))
}

fn fretboard_view_json(
    key: &str,
    mode: &str,
    chord: Option<&str>,
    show_blue_notes: bool,
    frets: Option<u32>,
) -> Result<String, BindingError> {
    // Same validation as a YAML config
    let raw = RawViewConfig {
        key: Some(key.to_string()),
        mode: Some(mode.to_string()),
        chord: chord.map(str::to_string),
        show_blue_notes: Some(show_blue_notes),
        frets,
    };
    to_json(&ViewConfig::from_raw(raw)?.build_view())
}

fn format_notes_text(notes: &[String]) -> Result<String, BindingError> {
    let notes = notes
        .iter()
        .map(|n| parse_key(n))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fretboard::format_notes(&notes))
}

fn degree_label_text(note: &str, key: &str) -> Result<String, BindingError> {
    Ok(fretboard::degree_label(parse_key(note)?, parse_key(key)?).to_string())
}

fn note_at_fret_text(open_string: &str, fret: u32) -> Result<String, BindingError> {
    Ok(fretboard::note_at_fret(parse_key(open_string)?, fret).to_string())
}

fn view_from_yaml_json(source: &str) -> Result<String, BindingError> {
    to_json(&fretboard::view_from_yaml(source)?)
}

/// Major scale of a key as an array of sharp-spelled names
#[wasm_bindgen]
pub fn major_scale(key: &str) -> Result<JsValue, JsValue> {
    let key = parse_key(key).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&fretboard::major_scale(key))?)
}

#[wasm_bindgen]
pub fn blue_notes(key: &str) -> Result<JsValue, JsValue> {
    let key = parse_key(key).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&fretboard::blue_notes(key))?)
}

/// Display text such as "G-A-B-C-D-E-F#"
#[wasm_bindgen]
pub fn scale_text(key: &str) -> Result<String, JsValue> {
    let key = parse_key(key).map_err(to_js_error)?;
    Ok(fretboard::scale_text(key))
}

#[wasm_bindgen]
pub fn format_notes(notes: Vec<String>) -> Result<String, JsValue> {
    format_notes_text(&notes).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn degree_label(note: &str, key: &str) -> Result<String, JsValue> {
    degree_label_text(note, key).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn note_at_fret(open_string: &str, fret: u32) -> Result<String, JsValue> {
    note_at_fret_text(open_string, fret).map_err(to_js_error)
}

/// Circle of fifths keys with their picker labels
#[wasm_bindgen]
pub fn circle_of_fifths_keys() -> Result<JsValue, JsValue> {
    let keys: Vec<KeyLabel> = circle_of_fifths()
        .into_iter()
        .map(|note| KeyLabel { note, label: format_note(note) })
        .collect();
    Ok(serde_wasm_bindgen::to_value(&keys)?)
}

/// Diatonic triads and sevenths of a key as JSON
#[wasm_bindgen]
pub fn diatonic_chords(key: &str) -> Result<String, JsValue> {
    diatonic_chords_json(key).map_err(to_js_error)
}

/// Fretboard cells for a key as JSON.
/// `mode` is "scale" or "chord"; in chord mode `chord` names a diatonic chord
/// (the tonic triad when omitted).
#[wasm_bindgen]
pub fn fretboard_view(
    key: &str,
    mode: &str,
    chord: Option<String>,
    show_blue_notes: bool,
    frets: Option<u32>,
) -> Result<String, JsValue> {
    fretboard_view_json(key, mode, chord.as_deref(), show_blue_notes, frets).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn view_from_yaml(source: &str) -> Result<String, JsValue> {
    view_from_yaml_json(source).map_err(to_js_error)
}
