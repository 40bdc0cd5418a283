use fretboard::{
    blue_notes, diatonic_chords, format_notes, fret_marker, key_display_name, resolve_chord,
    scale_text, DisplayMode, FretMarker, FretboardError, FretboardView, NoteRole, PitchClass, ViewConfig,
};
use std::env;
use std::fmt::Write;
use std::fs;
use std::process;

const USAGE: &str = "Usage: fretboard <key> [chord]\n       fretboard --config <view.yaml> [output.txt]";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let mut output_path: Option<&String> = None;

    let config = if args[1] == "--config" {
        let Some(config_path) = args.get(2) else {
            eprintln!("{}", USAGE);
            process::exit(1);
        };
        output_path = args.get(3);

        let source = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", config_path, e);
                process::exit(1);
            }
        };
        ViewConfig::from_yaml(&source)
    } else {
        config_from_args(&args[1], args.get(2).map(String::as_str))
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let text = render(&config);

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &text) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote fretboard to {}", path);
        }
        None => print!("{}", text),
    }
}

/// `<key>` alone shows the scale; `<key> <chord>` shows that chord.
fn config_from_args(key: &str, chord: Option<&str>) -> Result<ViewConfig, FretboardError> {
    let key: PitchClass = key.parse()?;
    Ok(ViewConfig {
        key,
        mode: if chord.is_some() { DisplayMode::Chord } else { DisplayMode::Scale },
        chord: resolve_chord(key, chord)?,
        ..ViewConfig::default()
    })
}

fn render(config: &ViewConfig) -> String {
    let key = config.key;
    let mut out = String::new();

    // Infallible: writing into a String
    let _ = writeln!(out, "{} major: {}", key_display_name(key), scale_text(key));
    let _ = writeln!(out, "Blue notes: {}", format_notes(&blue_notes(key)));
    let _ = writeln!(out);

    let chords = diatonic_chords(key);
    for row in [&chords.triads, &chords.sevenths] {
        for chord in row.iter() {
            let _ = write!(out, "{:<8}", chord.role.unwrap_or(""));
        }
        let _ = writeln!(out);
        for chord in row.iter() {
            let _ = write!(out, "{:<8}", chord.name);
        }
        let _ = writeln!(out);
    }
    for chord in chords.triads.iter() {
        let _ = write!(out, "{:<8}", chord.function.map(|f| f.abbreviation()).unwrap_or(""));
    }
    let _ = writeln!(out);
    let _ = writeln!(out);

    if config.mode == DisplayMode::Chord {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            config.chord.name,
            config.chord.role.unwrap_or(""),
            format_notes(&config.chord.notes)
        );
    }
    out.push_str(&render_diagram(&config.build_view()));
    out
}

/// Text fretboard, 1st string on top. Chord tones are marked `*`, blue notes
/// `~`, dimmed scale tones are parenthesized.
fn render_diagram(view: &FretboardView) -> String {
    let mut out = String::from("   ");
    for fret in 0..view.frets {
        let _ = write!(out, "{:^5}", if fret > 0 { fret.to_string() } else { String::new() });
    }
    out.push('\n');

    for row in &view.strings {
        let _ = write!(out, "{:<3}", row.open.name());
        for cell in &row.cells {
            let text = match cell.highlight {
                Some(h) => match h.role {
                    NoteRole::ScaleTone => h.degree.to_string(),
                    NoteRole::BlueNote => format!("~{}", h.degree),
                    NoteRole::ChordTone => format!("*{}", h.degree),
                    NoteRole::ScaleToneDimmed => format!("({})", h.degree),
                },
                None => "-".to_string(),
            };
            let _ = write!(out, "{:^5}", text);
        }
        out.push('\n');
    }

    out.push_str("   ");
    for fret in 0..view.frets {
        let dots = match fret_marker(fret) {
            Some(FretMarker::Double) => "::",
            Some(FretMarker::Single) => ":",
            None => "",
        };
        let _ = write!(out, "{:^5}", dots);
    }
    out.push('\n');
    out
}
