use itertools::Itertools;
use songbook::primitives::{pack, Event, EventType, Length, Note};

fn note(name: &str, beats: f64) -> Event {
    Event::new(
        EventType::Note(Note::new(name.parse().expect("valid pitch"))),
        Length::from(beats),
    )
}

fn scale() -> Vec<Event> {
    vec![
        note("C4", 1.0),
        note("D4", 1.0),
        note("E4", 1.0),
        note("F4", 1.0),
        note("G4", 1.0),
    ]
}

#[test]
fn test_five_quarters_pack_to_full_and_trailing() {
    let measures = pack(scale(), Length::from(4.0), None).unwrap();
    assert_eq!(measures.len(), 2);
    assert_eq!(measures[0].events().len(), 4);
    assert_eq!(measures[0].beats(), Length::from(4.0));
    assert_eq!(measures[1].events().len(), 1);
    assert_eq!(measures[1].beats(), Length::from(1.0));
}

#[test]
fn test_packing_preserves_event_order() {
    let measures = pack(scale(), Length::from(4.0), None).unwrap();
    measures
        .iter()
        .flat_map(|measure| measure.events().iter())
        .zip_eq(scale().iter())
        .map(|(packed, original)| assert_eq!(packed, original))
        .count();
}

#[test]
fn test_all_measures_but_last_reach_capacity() {
    let events = vec![
        note("C4", 1.5),
        note("D4", 1.5),
        note("E4", 2.0),
        note("F4", 4.0),
        note("G4", 0.5),
    ];
    let capacity = Length::from(4.0);
    let measures = pack(events, capacity, None).unwrap();
    assert_eq!(measures.len(), 3);
    for measure in &measures[..measures.len() - 1] {
        assert!(measure.beats() >= capacity);
    }
    assert_eq!(measures[2].beats(), Length::from(0.5));
}

#[test]
fn test_oversized_event_closes_its_own_measure() {
    let measures =
        pack(vec![note("E4", 5.0)], Length::from(4.0), None).unwrap();
    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].events().len(), 1);
    assert_eq!(measures[0].beats(), Length::from(5.0));
}

#[test]
fn test_overfull_measure_is_not_split() {
    let events = vec![note("C4", 3.0), note("D4", 2.0), note("E4", 1.0)];
    let measures = pack(events, Length::from(4.0), None).unwrap();
    assert_eq!(measures.len(), 2);
    assert_eq!(measures[0].events().len(), 2);
    assert_eq!(measures[0].beats(), Length::from(5.0));
    assert_eq!(measures[1].events().len(), 1);
}

#[test]
fn test_exact_fill_leaves_no_trailing_measure() {
    let events = vec![note("C4", 2.0), note("D4", 2.0)];
    let measures = pack(events, Length::from(4.0), None).unwrap();
    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].beats(), Length::from(4.0));
}

#[test]
fn test_pickup_applies_to_first_measure_only() {
    let events = vec![
        note("B4", 1.0),
        note("C5", 1.0),
        note("D5", 3.0),
        note("E5", 3.0),
    ];
    let measures =
        pack(events, Length::from(3.0), Some(Length::from(2.0))).unwrap();
    assert_eq!(measures.len(), 3);
    assert_eq!(measures[0].events().len(), 2);
    assert_eq!(measures[0].beats(), Length::from(2.0));
    assert_eq!(measures[1].beats(), Length::from(3.0));
    assert_eq!(measures[2].beats(), Length::from(3.0));
}

#[test]
fn test_pickup_sequence_exhaustion_emits_partial_measure() {
    let events = vec![note("B4", 1.0)];
    let measures =
        pack(events, Length::from(3.0), Some(Length::from(2.0))).unwrap();
    assert_eq!(measures.len(), 1);
    assert_eq!(measures[0].index(), 1);
    assert_eq!(measures[0].beats(), Length::from(1.0));
}

#[test]
fn test_measure_numbers_follow_closure_order() {
    let events: Vec<Event> =
        (0..10).map(|_| note("C4", 1.0)).collect();
    let measures = pack(events, Length::from(3.0), None).unwrap();
    let indexes: Vec<u32> =
        measures.iter().map(|measure| measure.index()).collect();
    assert_eq!(indexes, vec![1, 2, 3, 4]);
}
