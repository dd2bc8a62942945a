//! Jingle Bells chorus, melody over root-note bass.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    // Jingle bells, jingle bells, jingle all the way
    Note("E4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("E4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("E4", 1.0), Note("G4", 1.0), Note("C4", 1.5), Note("D4", 0.5),
    Note("E4", 4.0),
    // Oh what fun it is to ride in a one horse open sleigh, hey!
    Note("F4", 1.0), Note("F4", 1.0), Note("F4", 1.5), Note("F4", 0.5),
    Note("F4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("E4", 1.0), Note("D4", 1.0), Note("D4", 1.0), Note("E4", 1.0),
    Note("D4", 2.0), Note("G4", 2.0),
    // Jingle bells, jingle bells, jingle all the way
    Note("E4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("E4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("E4", 1.0), Note("G4", 1.0), Note("C4", 1.5), Note("D4", 0.5),
    Note("E4", 4.0),
    // Oh what fun it is to ride in a one horse open sleigh.
    Note("F4", 1.0), Note("F4", 1.0), Note("F4", 1.5), Note("F4", 0.5),
    Note("F4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("G4", 1.0), Note("G4", 1.0), Note("F4", 1.0), Note("D4", 1.0),
    Note("C4", 4.0),
];

const BASS: &[EventSpec] = &[
    // Phrase 1
    Note("C3", 4.0), Note("C3", 4.0), Note("C3", 4.0), Note("C3", 4.0),
    // Phrase 2 (F major imply, C major imply, G major imply)
    Note("F2", 4.0), Note("C3", 4.0), Note("G2", 4.0), Note("G2", 4.0),
    // Phrase 3
    Note("C3", 4.0), Note("C3", 4.0), Note("C3", 4.0), Note("C3", 4.0),
    // Phrase 4
    Note("F2", 4.0), Note("C3", 4.0), Note("G2", 4.0), Note("C3", 4.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Jingle Bells",
        parts: vec![
            PartSpec {
                clef: Clef::Treble,
                time_signature: TimeSignature::new(4, 4),
                pickup_beats: None,
                events: TREBLE,
            },
            PartSpec {
                clef: Clef::Bass,
                time_signature: TimeSignature::new(4, 4),
                pickup_beats: None,
                events: BASS,
            },
        ],
    }
}
