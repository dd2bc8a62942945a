//! Rendering of a Score to a MusicXML `score-partwise` document.
//!
//! Every primitive renders its own fragment; [`RendersToMusicxml`]
//! for [`Score`] assembles the complete document, and [`write_score`]
//! puts it on disk under the melody's file name. Notation-level
//! layout (what a sixteenth looks like, where systems break) is left
//! entirely to the score editor reading the file.

use std::fs;
use std::path::{Path, PathBuf};

use fraction::Fraction;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::primitives::{
    Clef, Event, EventType, Length, Measure, Part, Pitch, Score,
    TimeSignature,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 4.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">"#;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Divisions of a quarter note used for `<duration>` values.
    pub divisions: u32,
}
impl RenderSettings {
    pub fn new(divisions: u32) -> Self {
        Self { divisions }
    }
}
impl Default for RenderSettings {
    fn default() -> Self {
        // The sixteenth is the smallest figure in the library.
        Self { divisions: 4 }
    }
}

pub trait RendersToMusicxml {
    fn render_musicxml(&self, settings: &RenderSettings) -> String;
}

impl RendersToMusicxml for TimeSignature {
    fn render_musicxml(&self, _settings: &RenderSettings) -> String {
        let (num, denom) = (self.numerator, self.denominator);
        format!("<time><beats>{num}</beats><beat-type>{denom}</beat-type></time>")
    }
}

impl RendersToMusicxml for Clef {
    fn render_musicxml(&self, _settings: &RenderSettings) -> String {
        let (sign, line) = match self {
            Clef::Treble => ('G', 2),
            Clef::Bass => ('F', 4),
        };
        format!("<clef><sign>{sign}</sign><line>{line}</line></clef>")
    }
}

impl RendersToMusicxml for Pitch {
    fn render_musicxml(&self, _settings: &RenderSettings) -> String {
        let step = self.name.step();
        let octave = self.octave;
        match self.accidental.alter() {
            0 => format!(
                "<pitch><step>{step}</step><octave>{octave}</octave></pitch>"
            ),
            alter => format!(
                "<pitch><step>{step}</step><alter>{alter}</alter><octave>{octave}</octave></pitch>"
            ),
        }
    }
}

impl RendersToMusicxml for Event {
    fn render_musicxml(&self, settings: &RenderSettings) -> String {
        match &self.event {
            EventType::Note(note) => {
                render_note(&note.pitch, &self.length, false, settings)
            }
            EventType::Chord(chord) => chord
                .notes()
                .iter()
                .enumerate()
                .map(|(idx, note)| {
                    render_note(&note.pitch, &self.length, idx > 0, settings)
                })
                .join(""),
        }
    }
}

impl RendersToMusicxml for Measure {
    fn render_musicxml(&self, settings: &RenderSettings) -> String {
        self.events()
            .iter()
            .map(|event| format!("      {}", event.render_musicxml(settings)))
            .join("\n")
    }
}

impl RendersToMusicxml for Score {
    fn render_musicxml(&self, settings: &RenderSettings) -> String {
        let part_list = self
            .parts()
            .iter()
            .enumerate()
            .map(|(idx, part)| {
                format!(
                    "    <score-part id=\"P{id}\"><part-name>{name}</part-name></score-part>",
                    id = idx + 1,
                    name = part_name(part.clef),
                )
            })
            .join("\n");
        let parts = self
            .parts()
            .iter()
            .enumerate()
            .map(|(idx, part)| {
                format!(
                    "  <part id=\"P{id}\">\n{measures}\n  </part>",
                    id = idx + 1,
                    measures = render_measures(part, settings),
                )
            })
            .join("\n");
        format!(
            "{decl}\n{doctype}\n<score-partwise version=\"4.0\">\n  \
             <work>\n    <work-title>{title}</work-title>\n  </work>\n  \
             <part-list>\n{part_list}\n  </part-list>\n{parts}\n\
             </score-partwise>\n",
            decl = XML_DECLARATION,
            doctype = DOCTYPE,
            title = escape_text(self.title()),
        )
    }
}

fn part_name(clef: Clef) -> &'static str {
    match clef {
        Clef::Treble => "Treble",
        Clef::Bass => "Bass",
    }
}

fn render_measures(part: &Part, settings: &RenderSettings) -> String {
    part.measures()
        .iter()
        .map(|measure| {
            let attributes = match measure.index() {
                1 => format!(
                    "      {}\n",
                    render_attributes(part, settings)
                ),
                _ => String::new(),
            };
            format!(
                "    <measure number=\"{number}\">\n{attributes}{body}\n    </measure>",
                number = measure.index(),
                body = measure.render_musicxml(settings),
            )
        })
        .join("\n")
}

fn render_attributes(part: &Part, settings: &RenderSettings) -> String {
    // Accidentals are spelled explicitly in the tables, so every
    // score carries the plain C-major signature.
    format!(
        "<attributes><divisions>{divisions}</divisions><key><fifths>0</fifths></key>{time}{clef}</attributes>",
        divisions = settings.divisions,
        time = part.time_signature.render_musicxml(settings),
        clef = part.clef.render_musicxml(settings),
    )
}

fn render_note(
    pitch: &Pitch,
    length: &Length,
    in_chord: bool,
    settings: &RenderSettings,
) -> String {
    let chord_tag = if in_chord { "<chord/>" } else { "" };
    let figure = match figure(length) {
        Some((name, dotted)) => {
            let dot = if dotted { "<dot/>" } else { "" };
            format!("<type>{name}</type>{dot}")
        }
        // A duration with no conventional figure still imports fine
        // from its `<duration>` alone.
        None => String::new(),
    };
    format!(
        "<note>{chord_tag}{pitch}<duration>{duration}</duration>{figure}</note>",
        pitch = pitch.render_musicxml(settings),
        duration = duration_divisions(length, settings),
    )
}

/// Conventional note figure of the duration, if it has one.
///
/// Works on the duration as a fraction of a whole note: a numerator
/// of one is a plain figure, a numerator of three a dotted one.
fn figure(length: &Length) -> Option<(&'static str, bool)> {
    let whole = length.get() / Fraction::from(4.0);
    let numer = *whole.numer()?;
    let denom = *whole.denom()?;
    match numer {
        1 => type_name(denom).map(|name| (name, false)),
        2 if denom == 1 => Some(("breve", false)),
        3 => type_name(denom / 2).map(|name| (name, true)),
        _ => None,
    }
}

fn type_name(denom: u64) -> Option<&'static str> {
    match denom {
        1 => Some("whole"),
        2 => Some("half"),
        4 => Some("quarter"),
        8 => Some("eighth"),
        16 => Some("16th"),
        32 => Some("32nd"),
        64 => Some("64th"),
        _ => None,
    }
}

/// `<duration>` value: the length quantized to the settings grid.
fn duration_divisions(length: &Length, settings: &RenderSettings) -> u64 {
    let frac = length.get() * Fraction::from(settings.divisions as u64);
    match (frac.numer(), frac.denom()) {
        (Some(numer), Some(denom)) if *denom != 0 => {
            (*numer + *denom / 2) / *denom
        }
        _ => 0,
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("can not create output directory `{path}`: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("can not write `{path}`: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render `score` and write it as `<Title_With_Underscores>.musicxml`
/// under `out_dir`, creating the directory when missing.
pub fn write_score(
    score: &Score,
    out_dir: impl AsRef<Path>,
    settings: &RenderSettings,
) -> Result<PathBuf, WriteError> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|source| WriteError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let path = out_dir.join(format!("{}.musicxml", score.file_stem()));
    fs::write(&path, score.render_musicxml(settings)).map_err(|source| {
        WriteError::WriteFile {
            path: path.clone(),
            source,
        }
    })?;
    Ok(path)
}
