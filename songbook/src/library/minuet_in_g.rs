//! Minuet in G, simplified: melody over bass dyads.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Chord, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    Note("D5", 1.0), Note("G4", 0.5), Note("A4", 0.5), Note("B4", 0.5),
    Note("C5", 0.5),
    Note("D5", 1.0), Note("G4", 1.0), Note("G4", 1.0),
    Note("E5", 1.0), Note("C5", 0.5), Note("D5", 0.5), Note("E5", 0.5),
    Note("F#5", 0.5),
    Note("G5", 1.0), Note("G4", 1.0), Note("G4", 1.0),

    Note("C5", 1.0), Note("D5", 0.5), Note("C5", 0.5), Note("B4", 0.5),
    Note("A4", 0.5),
    Note("B4", 1.0), Note("C5", 0.5), Note("B4", 0.5), Note("A4", 0.5),
    Note("G4", 0.5),
    Note("F#4", 1.0), Note("G4", 0.5), Note("A4", 0.5), Note("B4", 0.5),
    Note("G4", 0.5),
    Note("B4", 1.0), Note("A4", 2.0),
];

// Intervals instead of full chords keep the left hand readable.
const BASS: &[EventSpec] = &[
    Chord(&["G3", "D4"], 3.0),
    Chord(&["B3", "D4"], 3.0),
    Chord(&["C3", "E3"], 3.0),
    Chord(&["B2", "D3"], 3.0),

    Chord(&["A2", "C3"], 3.0),
    Chord(&["G2", "B2"], 3.0),
    Chord(&["D3", "F#3"], 3.0),
    Chord(&["G2", "D3"], 3.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Minuet in G",
        parts: vec![
            PartSpec {
                clef: Clef::Treble,
                time_signature: TimeSignature::new(3, 4),
                pickup_beats: None,
                events: TREBLE,
            },
            PartSpec {
                clef: Clef::Bass,
                time_signature: TimeSignature::new(3, 4),
                pickup_beats: None,
                events: BASS,
            },
        ],
    }
}
