//! Grouping of a flat event sequence into fixed-capacity measures.

use thiserror::Error;

use super::{Event, Length, Measure};

#[derive(Debug, Error, PartialEq)]
pub enum PackError {
    #[error("event {index} has non-positive duration: {beats}")]
    NonPositiveDuration { index: usize, beats: Length },
    #[error("measure capacity must be positive, got {0}")]
    NonPositiveCapacity(Length),
    #[error("pickup capacity must be positive, got {0}")]
    NonPositivePickup(Length),
}
pub type PackResult<T> = Result<T, PackError>;

/// Group `events` into measures of `capacity` beats.
///
/// Events are consumed strictly in order. A measure closes as soon as
/// its accumulated duration reaches the active threshold, and the
/// last measure is emitted even when partially filled. An event whose
/// duration alone exceeds the threshold closes its measure overfull:
/// events are never split or dropped. Measures are numbered from 1 in
/// closure order.
///
/// `pickup` replaces the threshold of the first measure only, for
/// melodies that begin before the first full bar. Once the first
/// measure has closed, every later one uses `capacity`, however the
/// pickup measure actually filled. When the sequence is exhausted
/// before the pickup threshold is reached, the single accumulated
/// measure is emitted as the trailing partial one.
///
/// # Example
/// ```
/// use songbook::primitives::{pack, Event, EventType, Length, Note};
///
/// let events: Vec<Event> = "C4 D4 E4 F4 G4"
///     .split(' ')
///     .map(|name| {
///         let note = Note::new(name.parse().unwrap());
///         Event::new(EventType::Note(note), Length::from(1.0))
///     })
///     .collect();
/// let measures = pack(events, Length::from(4.0), None).unwrap();
/// assert_eq!(measures.len(), 2);
/// assert_eq!(measures[0].events().len(), 4);
/// assert_eq!(measures[1].events().len(), 1);
/// assert_eq!(measures[1].beats(), Length::from(1.0));
/// ```
pub fn pack(
    events: Vec<Event>,
    capacity: Length,
    pickup: Option<Length>,
) -> PackResult<Vec<Measure>> {
    if !capacity.is_positive() {
        return Err(PackError::NonPositiveCapacity(capacity));
    }
    if let Some(pickup) = pickup {
        if !pickup.is_positive() {
            return Err(PackError::NonPositivePickup(pickup));
        }
    }
    let mut measures = Vec::new();
    let mut current = Measure::new(1);
    let mut beats = Length::zero();
    for (index, event) in events.into_iter().enumerate() {
        if !event.length.is_positive() {
            return Err(PackError::NonPositiveDuration {
                index,
                beats: event.length,
            });
        }
        beats += event.length;
        current.push(event);
        let threshold = match (measures.is_empty(), pickup) {
            (true, Some(pickup)) => pickup,
            _ => capacity,
        };
        if beats >= threshold {
            let number = current.index();
            measures.push(current);
            current = Measure::new(number + 1);
            beats = Length::zero();
        }
    }
    if !current.is_empty() {
        measures.push(current);
    }
    Ok(measures)
}

#[cfg(test)]
mod tests {
    use crate::primitives::{
        pack, Event, EventType, Length, Note, PackError,
    };

    fn note(name: &str, beats: f64) -> Event {
        Event::new(
            EventType::Note(Note::new(
                name.parse().expect("valid pitch literal"),
            )),
            Length::from(beats),
        )
    }

    #[test]
    fn rejects_non_positive_duration() {
        let err = pack(
            vec![note("C4", 1.0), note("D4", 0.0)],
            Length::from(4.0),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            PackError::NonPositiveDuration {
                index: 1,
                beats: Length::from(0.0)
            }
        );
        let err = pack(vec![note("C4", -1.0)], Length::from(4.0), None)
            .unwrap_err();
        assert_eq!(
            err,
            PackError::NonPositiveDuration {
                index: 0,
                beats: Length::from(-1.0)
            }
        );
    }

    #[test]
    fn rejects_non_positive_capacity() {
        let err = pack(vec![note("C4", 1.0)], Length::from(0.0), None)
            .unwrap_err();
        assert_eq!(err, PackError::NonPositiveCapacity(Length::from(0.0)));
        let err = pack(
            vec![note("C4", 1.0)],
            Length::from(4.0),
            Some(Length::from(-2.0)),
        )
        .unwrap_err();
        assert_eq!(err, PackError::NonPositivePickup(Length::from(-2.0)));
    }

    #[test]
    fn empty_input_packs_to_nothing() {
        let measures = pack(Vec::new(), Length::from(4.0), None).unwrap();
        assert!(measures.is_empty());
    }
}
