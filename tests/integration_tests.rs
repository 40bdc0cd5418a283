//! Integration tests for the fretboard engine
//!
//! Exercises the public API end to end: scales, chords, fretboard mapping and
//! formatting across every key.

use fretboard::PitchClass::*;
use fretboard::*;
use std::collections::HashSet;

#[test]
fn test_major_scale_properties_all_keys() {
    for key in PitchClass::ALL {
        let scale = major_scale(key);
        assert_eq!(scale.len(), 7);
        let unique: HashSet<_> = scale.iter().collect();
        assert_eq!(unique.len(), 7, "duplicate notes in {} major", key);
        assert_eq!(scale[0], key);
        assert_eq!(degree_label(key, key), "R");
    }
}

#[test]
fn test_is_in_scale_matches_scale_membership() {
    for key in PitchClass::ALL {
        let scale = major_scale(key);
        let mut count = 0;
        for note in PitchClass::ALL {
            assert_eq!(is_in_scale(note, key), scale.contains(&note));
            if is_in_scale(note, key) {
                count += 1;
            }
        }
        assert_eq!(count, 7);
    }
}

#[test]
fn test_blue_notes_disjoint_from_scale() {
    for key in PitchClass::ALL {
        let scale = major_scale(key);
        for note in blue_notes(key) {
            assert!(!scale.contains(&note), "{} is diatonic to {}", note, key);
            assert!(is_blue_note(note, key));
        }
    }

    let blue: HashSet<_> = blue_notes(G).into_iter().collect();
    assert_eq!(blue, HashSet::from([ASharp, CSharp, F]));
    let scale: HashSet<_> = major_scale(G).into_iter().collect();
    assert_eq!(scale, HashSet::from([G, A, B, C, D, E, FSharp]));
}

#[test]
fn test_chord_notes_and_degrees_parallel() {
    for root in PitchClass::ALL {
        for quality in ChordQuality::ALL {
            let tones = chord_notes(root, quality);
            assert_eq!(tones.notes.len(), tones.degrees.len());
            let expected = match quality {
                ChordQuality::Major | ChordQuality::Minor | ChordQuality::Diminished => 3,
                _ => 4,
            };
            assert_eq!(tones.notes.len(), expected);
        }
    }
}

#[test]
fn test_diatonic_chords_g() {
    let chords = diatonic_chords(G);

    let triads: Vec<_> = chords.triads.iter().map(|c| (c.root, c.quality)).collect();
    assert_eq!(
        triads,
        vec![
            (G, ChordQuality::Major),
            (A, ChordQuality::Minor),
            (B, ChordQuality::Minor),
            (C, ChordQuality::Major),
            (D, ChordQuality::Major),
            (E, ChordQuality::Minor),
            (FSharp, ChordQuality::Diminished),
        ]
    );
    let triad_names: Vec<_> = chords.triads.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(triad_names, vec!["G", "Am", "Bm", "C", "D", "Em", "F#m♭5"]);

    let seventh_names: Vec<_> = chords.sevenths.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        seventh_names,
        vec!["Gmaj7", "Am7", "Bm7", "Cmaj7", "D7", "Em7", "F#m7♭5"]
    );
}

#[test]
fn test_note_at_fret() {
    assert_eq!(note_at_fret(E, 0), E);
    assert_eq!(note_at_fret(E, 3), G);
    assert_eq!(note_at_fret(B, 1), C);
}

#[test]
fn test_chord_degree_in_gmaj7() {
    let gmaj7 = &diatonic_chords(G).sevenths[0];
    assert_eq!(gmaj7.name, "Gmaj7");
    assert_eq!(chord_degree(D, gmaj7), Some("5"));
    assert_eq!(chord_degree(A, gmaj7), None);
    assert!(!is_chord_tone(A, gmaj7));
}

#[test]
fn test_format_notes() {
    assert_eq!(format_notes(&[G, A, B, C, D, E, FSharp]), "G-A-B-C-D-E-F#");
    assert_eq!(format_notes(&[CSharp]), "Db");
    assert_eq!(scale_text(G), "G-A-B-C-D-E-F#");
}

#[test]
fn test_derivers_are_idempotent() {
    for key in PitchClass::ALL {
        assert_eq!(major_scale(key), major_scale(key));
        assert_eq!(blue_notes(key), blue_notes(key));
        assert_eq!(diatonic_chords(key), diatonic_chords(key));
        assert_eq!(scale_text(key), scale_text(key));
    }
    let mode = ViewMode::Scale { show_blue_notes: true };
    assert_eq!(
        FretboardView::build(E, &mode, &STANDARD_TUNING, FRET_COUNT),
        FretboardView::build(E, &mode, &STANDARD_TUNING, FRET_COUNT)
    );
}

#[test]
fn test_view_from_yaml_scale_mode_labels() {
    let view = view_from_yaml("key: G\nshow-blue-notes: true\n").unwrap();
    // Low E string (bottom row): open E is the 6, fret 1 F is a blue ♭7
    let low = view.strings.last().unwrap();
    assert_eq!(low.open, E);
    assert_eq!(low.cells[0].highlight.unwrap().degree, "6");
    let blue = low.cells[1].highlight.unwrap();
    assert_eq!(blue.role, NoteRole::BlueNote);
    assert_eq!(blue.degree, "♭7");
}

#[test]
fn test_view_from_yaml_errors() {
    assert!(matches!(
        view_from_yaml("key: [not, a, note]"),
        Err(FretboardError::ConfigError(_))
    ));
    assert!(matches!(
        view_from_yaml("key: C\nmode: chord\nchord: Gsus4"),
        Err(FretboardError::InvalidChordSymbol(_))
    ));
}

#[test]
fn test_serialized_chord_shape() {
    let chord = &diatonic_chords(G).triads[6];
    let value = serde_json::to_value(chord).unwrap();
    assert_eq!(value["name"], "F#m♭5");
    assert_eq!(value["root"], "F#");
    assert_eq!(value["quality"], "dim");
    assert_eq!(value["degrees"], serde_json::json!(["R", "♭3", "♭5"]));
    assert_eq!(value["role"], "Ⅶm♭5");
    assert_eq!(value["function"], "D");

    let plain = serde_json::to_value(Chord::new(C, ChordQuality::Major)).unwrap();
    assert!(plain.get("role").is_none());
}

#[test]
fn test_pitch_class_deserializes_flats() {
    let notes: Vec<PitchClass> = serde_json::from_str(r#"["Bb", "F#", "Db", "C"]"#).unwrap();
    assert_eq!(notes, vec![ASharp, FSharp, CSharp, C]);
}
