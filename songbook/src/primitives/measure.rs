//! Measure contains a contiguous run of events of one part.
//!
//! Measures are built incrementally by `pack` and closed either when
//! their capacity is reached or when the event sequence is exhausted.
use super::{Event, Length};

#[derive(Debug, PartialEq, Clone)]
pub struct Measure {
    index: u32,
    events: Vec<Event>,
}
impl Measure {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            events: Vec::new(),
        }
    }

    /// 1-based number, assigned in closure order.
    pub fn index(&self) -> u32 {
        self.index
    }
    pub fn events(&self) -> &[Event] {
        &self.events
    }
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Accumulated duration of all held events.
    pub fn beats(&self) -> Length {
        self.events
            .iter()
            .fold(Length::zero(), |acc, event| acc + event.length)
    }
}
