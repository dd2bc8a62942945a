//! Elements, from which a Score is constructed.
//!
//! At first, Events are built from the literal tables of the melody
//! library. Then they are grouped into Measures by `pack`.
//! Then measures are organized into Parts, and parts into a Score,
//! which is rendered to a *.musicxml file.

pub mod event;
pub mod length;
pub mod measure;
pub mod pack;
pub mod part;
pub mod pitch;
pub mod score;

pub use event::{Chord, Event, EventType, Note};
pub use length::Length;
pub use measure::Measure;
pub use pack::{pack, PackError, PackResult};
pub use part::{Clef, Part, TimeSignature};
pub use pitch::{Accidental, NoteName, Pitch, PitchParseError};
pub use score::Score;
