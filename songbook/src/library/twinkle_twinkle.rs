//! Twinkle Twinkle Little Star: A B A form, melody in the right
//! hand, block chords in the left.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Chord, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    // A
    Note("C4", 1.0), Note("C4", 1.0), Note("G4", 1.0), Note("G4", 1.0),
    Note("A4", 1.0), Note("A4", 1.0), Note("G4", 2.0),
    Note("F4", 1.0), Note("F4", 1.0), Note("E4", 1.0), Note("E4", 1.0),
    Note("D4", 1.0), Note("D4", 1.0), Note("C4", 2.0),
    // B
    Note("G4", 1.0), Note("G4", 1.0), Note("F4", 1.0), Note("F4", 1.0),
    Note("E4", 1.0), Note("E4", 1.0), Note("D4", 2.0),
    Note("G4", 1.0), Note("G4", 1.0), Note("F4", 1.0), Note("F4", 1.0),
    Note("E4", 1.0), Note("E4", 1.0), Note("D4", 2.0),
    // A
    Note("C4", 1.0), Note("C4", 1.0), Note("G4", 1.0), Note("G4", 1.0),
    Note("A4", 1.0), Note("A4", 1.0), Note("G4", 2.0),
    Note("F4", 1.0), Note("F4", 1.0), Note("E4", 1.0), Note("E4", 1.0),
    Note("D4", 1.0), Note("D4", 1.0), Note("C4", 2.0),
];

const BASS: &[EventSpec] = &[
    // A
    Chord(&["C3", "E3", "G3"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    Chord(&["F3", "A3", "C4"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    Chord(&["F3", "A3", "C4"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    Chord(&["G3", "B3", "D4"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    // B
    Chord(&["C3", "E3", "G3"], 2.0), Chord(&["F3", "A3", "C4"], 2.0),
    Chord(&["C3", "E3", "G3"], 2.0), Chord(&["G3", "B3", "D4"], 2.0),
    Chord(&["C3", "E3", "G3"], 2.0), Chord(&["F3", "A3", "C4"], 2.0),
    Chord(&["C3", "E3", "G3"], 2.0), Chord(&["G3", "B3", "D4"], 2.0),
    // A
    Chord(&["C3", "E3", "G3"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    Chord(&["F3", "A3", "C4"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    Chord(&["F3", "A3", "C4"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
    Chord(&["G3", "B3", "D4"], 2.0), Chord(&["C3", "E3", "G3"], 2.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Twinkle Twinkle",
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
