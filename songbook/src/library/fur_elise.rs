//! Für Elise theme, simplified: no tuplets, straight eighths in 3/4.
//!
//! Both hands begin before the first full bar, so both parts carry a
//! two-beat pickup measure.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Note};
use super::{MelodySpec, PartSpec};

const TREBLE: &[EventSpec] = &[
    Note("B4", 1.0), Note("E5", 0.5), Note("D#5", 0.5),

    Note("E5", 0.5), Note("D#5", 0.5), Note("E5", 0.5), Note("B4", 0.5),
    Note("D5", 0.5), Note("C5", 0.5),
    Note("A4", 1.0), Note("C4", 0.5), Note("E4", 0.5), Note("A4", 0.5),
    Note("B4", 0.5),
    Note("B4", 1.0), Note("E4", 0.5), Note("G#4", 0.5), Note("B4", 0.5),
    Note("C5", 0.5),
    Note("C5", 1.0), Note("E4", 0.5), Note("E5", 0.5), Note("D#5", 0.5),

    Note("E5", 0.5), Note("D#5", 0.5), Note("E5", 0.5), Note("B4", 0.5),
    Note("D5", 0.5), Note("C5", 0.5),
    Note("A4", 1.0), Note("C4", 0.5), Note("E4", 0.5), Note("A4", 0.5),
    Note("B4", 0.5),
    Note("B4", 1.0), Note("E4", 0.5), Note("C5", 0.5), Note("B4", 0.5),
    Note("A4", 0.5),
    Note("A4", 2.0), Note("B4", 1.0),
];

const BASS: &[EventSpec] = &[
    // corresponds to the treble pickup
    Note("A2", 2.0),

    Note("A2", 3.0),
    Note("E3", 3.0),
    Note("E3", 3.0),
    Note("A2", 3.0),

    Note("A2", 3.0),
    Note("E3", 3.0),
    Note("A2", 3.0),
    Note("A2", 3.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Fur Elise Simplified",
        parts: vec![
            PartSpec {
                clef: Clef::Treble,
                time_signature: TimeSignature::new(3, 4),
                pickup_beats: Some(2.0),
                events: TREBLE,
            },
            PartSpec {
                clef: Clef::Bass,
                time_signature: TimeSignature::new(3, 4),
                pickup_beats: Some(2.0),
                events: BASS,
            },
        ],
    }
}
