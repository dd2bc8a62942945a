//! The melody library: literal note tables and score assembly.
//!
//! Every melody module holds nothing but data, spelled exactly the
//! way it should sound. Assembly is the same for all of them: parse
//! the table literals, pack each part into measures, collect parts
//! into a [`Score`].

pub mod au_clair_de_la_lune;
pub mod fur_elise;
pub mod good_king_wenceslas;
pub mod jingle_bells;
pub mod mary_lamb;
pub mod minuet_in_g;
pub mod ode_to_joy;
pub mod twinkle_twinkle;

use thiserror::Error;

use crate::primitives::{
    pack, Chord, Clef, Event, EventType, Length, Note, PackError, Part,
    Pitch, PitchParseError, Score, TimeSignature,
};

/// One entry of a melody table: a pitch or a set of simultaneous
/// pitches, with a duration in quarter-note beats.
#[derive(Debug, Clone, Copy)]
pub enum EventSpec {
    Note(&'static str, f64),
    Chord(&'static [&'static str], f64),
}

/// One line of a melody, ready to be packed.
#[derive(Debug, Clone, Copy)]
pub struct PartSpec {
    pub clef: Clef,
    pub time_signature: TimeSignature,
    /// Reduced capacity of the first measure, in beats, for melodies
    /// that begin before the first full bar.
    pub pickup_beats: Option<f64>,
    pub events: &'static [EventSpec],
}

#[derive(Debug, Clone)]
pub struct MelodySpec {
    pub title: &'static str,
    pub parts: Vec<PartSpec>,
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{title}: bad pitch literal: {source}")]
    Pitch {
        title: String,
        source: PitchParseError,
    },
    #[error("{title}: empty chord in table")]
    EmptyChord { title: String },
    #[error("{title}: {source}")]
    Pack { title: String, source: PackError },
}

/// All melodies of the library, in generation order.
pub fn all() -> Vec<MelodySpec> {
    vec![
        ode_to_joy::melody(),
        good_king_wenceslas::melody(),
        jingle_bells::melody(),
        mary_lamb::melody(),
        au_clair_de_la_lune::melody(),
        fur_elise::melody(),
        minuet_in_g::melody(),
        twinkle_twinkle::melody(),
    ]
}

/// Parse the melody tables, pack every part and assemble the Score.
pub fn build_score(melody: &MelodySpec) -> Result<Score, LibraryError> {
    let mut score = Score::new(melody.title);
    for part_spec in &melody.parts {
        let events = parse_events(melody.title, part_spec.events)?;
        let measures = pack(
            events,
            part_spec.time_signature.beats(),
            part_spec.pickup_beats.map(Length::from),
        )
        .map_err(|source| LibraryError::Pack {
            title: melody.title.to_string(),
            source,
        })?;
        log::debug!(
            "{}: packed {} measures for the {:?} part",
            melody.title,
            measures.len(),
            part_spec.clef
        );
        score.push_part(Part::new(
            part_spec.clef,
            part_spec.time_signature,
            measures,
        ));
    }
    Ok(score)
}

fn parse_events(
    title: &str,
    specs: &[EventSpec],
) -> Result<Vec<Event>, LibraryError> {
    let parse_pitch = |name: &str| {
        name.parse::<Pitch>().map_err(|source| LibraryError::Pitch {
            title: title.to_string(),
            source,
        })
    };
    specs
        .iter()
        .map(|spec| match spec {
            EventSpec::Note(name, beats) => {
                let note = Note::new(parse_pitch(name)?);
                Ok(Event::new(EventType::Note(note), Length::from(*beats)))
            }
            EventSpec::Chord(names, beats) => {
                if names.is_empty() {
                    return Err(LibraryError::EmptyChord {
                        title: title.to_string(),
                    });
                }
                let mut chord = Chord::new();
                for name in *names {
                    chord = chord.push(Note::new(parse_pitch(name)?));
                }
                Ok(Event::new(
                    EventType::Chord(chord),
                    Length::from(*beats),
                ))
            }
        })
        .collect()
}
