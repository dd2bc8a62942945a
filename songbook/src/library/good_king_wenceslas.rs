//! Good King Wenceslas, bass only, C position.

use crate::primitives::{Clef, TimeSignature};

use super::EventSpec::{self, Note};
use super::{MelodySpec, PartSpec};

const BASS: &[EventSpec] = &[
    // Phrase 1: Good King Wenceslas look'd out, On the feast of Stephen
    Note("C3", 1.0), Note("C3", 1.0), Note("C3", 1.0), Note("D3", 1.0),
    Note("C3", 1.0), Note("C3", 1.0), Note("G2", 2.0),
    Note("A2", 1.0), Note("G2", 1.0), Note("A2", 1.0), Note("B2", 1.0),
    Note("C3", 2.0), Note("C3", 2.0),
    // Phrase 2: When the snow lay round about, Deep and crisp and even
    Note("C3", 1.0), Note("C3", 1.0), Note("C3", 1.0), Note("D3", 1.0),
    Note("C3", 1.0), Note("C3", 1.0), Note("G2", 2.0),
    Note("A2", 1.0), Note("G2", 1.0), Note("A2", 1.0), Note("B2", 1.0),
    Note("C3", 2.0), Note("C3", 2.0),
    // Phrase 3: Brightly shone the moon that night, Though the frost was cruel
    Note("G3", 1.0), Note("F3", 1.0), Note("E3", 1.0), Note("D3", 1.0),
    Note("E3", 1.0), Note("C3", 1.0), Note("G2", 2.0),
    Note("A2", 1.0), Note("G2", 1.0), Note("A2", 1.0), Note("B2", 1.0),
    Note("C3", 2.0), Note("C3", 2.0),
    // Phrase 4: When a poor man came in sight, Gath'ring winter fuel.
    Note("G2", 1.0), Note("G2", 1.0), Note("A2", 1.0), Note("B2", 1.0),
    Note("C3", 1.0), Note("D3", 1.0), Note("E3", 2.0),
    Note("F3", 1.0), Note("E3", 1.0), Note("D3", 1.0), Note("E3", 1.0),
    Note("C3", 2.0), Note("C3", 2.0),
];

pub fn melody() -> MelodySpec {
    MelodySpec {
        title: "Good King Wenceslas",
        parts: vec![PartSpec {
            clef: Clef::Bass,
            time_signature: TimeSignature::new(4, 4),
            pickup_beats: None,
            events: BASS,
        }],
    }
}
