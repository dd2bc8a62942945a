//! A smallest piece of music, that is held by Measure.
use super::{Length, Pitch};

/// One table entry made playable: a note or a chord, paired with
/// its duration. Immutable once constructed.
#[derive(Debug, PartialEq, Clone)]
pub struct Event {
    pub event: EventType,
    pub length: Length,
}
impl Event {
    pub fn new(event: EventType, length: Length) -> Self {
        Self { event, length }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum EventType {
    Note(Note),
    Chord(Chord),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Note {
    pub pitch: Pitch,
}
impl Note {
    pub fn new(pitch: Pitch) -> Self {
        Self { pitch }
    }
}

/// Simultaneous pitches sharing one duration.
#[derive(Debug, PartialEq, Clone)]
pub struct Chord {
    notes: Vec<Note>,
}
impl Chord {
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }
    pub fn push(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
impl Default for Chord {
    fn default() -> Self {
        Self::new()
    }
}
