//! Ode to Joy, treble only, C position.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    // A section
    Note("E4", 1.0), Note("E4", 1.0), Note("F4", 1.0), Note("G4", 1.0),
    Note("G4", 1.0), Note("F4", 1.0), Note("E4", 1.0), Note("D4", 1.0),
    Note("C4", 1.0), Note("C4", 1.0), Note("D4", 1.0), Note("E4", 1.0),
    Note("E4", 1.5), Note("D4", 0.5), Note("D4", 2.0),
    // A' section
    Note("E4", 1.0), Note("E4", 1.0), Note("F4", 1.0), Note("G4", 1.0),
    Note("G4", 1.0), Note("F4", 1.0), Note("E4", 1.0), Note("D4", 1.0),
    Note("C4", 1.0), Note("C4", 1.0), Note("D4", 1.0), Note("E4", 1.0),
    Note("D4", 1.5), Note("C4", 0.5), Note("C4", 2.0),
    // B section
    Note("D4", 1.0), Note("D4", 1.0), Note("E4", 1.0), Note("C4", 1.0),
    Note("D4", 1.0), Note("E4", 0.5), Note("F4", 0.5), Note("E4", 1.0),
    Note("C4", 1.0),
    Note("D4", 1.0), Note("E4", 0.5), Note("F4", 0.5), Note("E4", 1.0),
    Note("D4", 1.0),
    Note("C4", 1.0), Note("D4", 1.0), Note("G3", 2.0),
    // A' section
    Note("E4", 1.0), Note("E4", 1.0), Note("F4", 1.0), Note("G4", 1.0),
    Note("G4", 1.0), Note("F4", 1.0), Note("E4", 1.0), Note("D4", 1.0),
    Note("C4", 1.0), Note("C4", 1.0), Note("D4", 1.0), Note("E4", 1.0),
    Note("D4", 1.5), Note("C4", 0.5), Note("C4", 2.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Ode to Joy",
        parts: vec![PartSpec {
            clef: Clef::Treble,
            time_signature: TimeSignature::new(4, 4),
            pickup_beats: None,
            events: TREBLE,
        }],
    }
}
