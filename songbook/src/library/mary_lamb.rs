//! Mary Had a Little Lamb, treble only.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    Note("E4", 1.0), Note("D4", 1.0), Note("C4", 1.0), Note("D4", 1.0),
    Note("E4", 1.0), Note("E4", 1.0), Note("E4", 2.0),
    Note("D4", 1.0), Note("D4", 1.0), Note("D4", 2.0),
    Note("E4", 1.0), Note("G4", 1.0), Note("G4", 2.0),
    Note("E4", 1.0), Note("D4", 1.0), Note("C4", 1.0), Note("D4", 1.0),
    Note("E4", 1.0), Note("E4", 1.0), Note("E4", 1.0), Note("E4", 1.0),
    Note("D4", 1.0), Note("D4", 1.0), Note("E4", 1.0), Note("D4", 1.0),
    Note("C4", 4.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Mary Lamb",
        parts: vec![PartSpec {
            clef: Clef::Treble,
            time_signature: TimeSignature::new(4, 4),
            pickup_beats: None,
            events: TREBLE,
        }],
    }
}
