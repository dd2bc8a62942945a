//! Au Clair de la Lune, melody over a slow bass line.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    Note("C4", 1.0), Note("C4", 1.0), Note("C4", 1.0), Note("D4", 1.0),
    Note("E4", 2.0), Note("D4", 2.0),
    Note("C4", 1.0), Note("E4", 1.0), Note("D4", 1.0), Note("D4", 1.0),
    Note("C4", 4.0),
    Note("C4", 1.0), Note("C4", 1.0), Note("C4", 1.0), Note("D4", 1.0),
    Note("E4", 2.0), Note("D4", 2.0),
    Note("C4", 1.0), Note("E4", 1.0), Note("D4", 1.0), Note("D4", 1.0),
    Note("C4", 4.0),
];

const BASS: &[EventSpec] = &[
    Note("C3", 4.0), Note("G3", 4.0), Note("C3", 2.0), Note("G3", 2.0),
    Note("C3", 4.0),
    Note("C3", 4.0), Note("G3", 4.0), Note("C3", 2.0), Note("G3", 2.0),
    Note("C3", 4.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Au Clair De La Lune",
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
