use pretty_assertions::assert_eq;
use songbook::musicxml_render::{RenderSettings, RendersToMusicxml};
use songbook::primitives::{Chord, Event, EventType, Length, Note};

fn note(name: &str, beats: f64) -> Event {
    Event::new(
        EventType::Note(Note::new(name.parse().expect("valid pitch"))),
        Length::from(beats),
    )
}

#[test]
fn render_quarter_note() {
    let settings = RenderSettings::default();
    assert_eq!(
        note("C4", 1.0).render_musicxml(&settings),
        "<note><pitch><step>C</step><octave>4</octave></pitch>\
         <duration>4</duration><type>quarter</type></note>"
    );
}

#[test]
fn render_altered_notes() {
    let settings = RenderSettings::default();
    assert_eq!(
        note("F#3", 0.5).render_musicxml(&settings),
        "<note><pitch><step>F</step><alter>1</alter><octave>3</octave>\
         </pitch><duration>2</duration><type>eighth</type></note>"
    );
    assert_eq!(
        note("B-3", 0.5).render_musicxml(&settings),
        "<note><pitch><step>B</step><alter>-1</alter><octave>3</octave>\
         </pitch><duration>2</duration><type>eighth</type></note>"
    );
}

#[test]
fn render_dotted_figures() {
    let settings = RenderSettings::default();
    assert_eq!(
        note("C4", 1.5).render_musicxml(&settings),
        "<note><pitch><step>C</step><octave>4</octave></pitch>\
         <duration>6</duration><type>quarter</type><dot/></note>"
    );
    assert_eq!(
        note("A2", 3.0).render_musicxml(&settings),
        "<note><pitch><step>A</step><octave>2</octave></pitch>\
         <duration>12</duration><type>half</type><dot/></note>"
    );
}

#[test]
fn render_whole_and_sixteenth() {
    let settings = RenderSettings::default();
    assert_eq!(
        note("E4", 4.0).render_musicxml(&settings),
        "<note><pitch><step>E</step><octave>4</octave></pitch>\
         <duration>16</duration><type>whole</type></note>"
    );
    assert_eq!(
        note("E4", 0.25).render_musicxml(&settings),
        "<note><pitch><step>E</step><octave>4</octave></pitch>\
         <duration>1</duration><type>16th</type></note>"
    );
}

#[test]
fn unconventional_duration_renders_without_type() {
    let settings = RenderSettings::default();
    assert_eq!(
        note("C4", 1.25).render_musicxml(&settings),
        "<note><pitch><step>C</step><octave>4</octave></pitch>\
         <duration>5</duration></note>"
    );
}

#[test]
fn render_chord_marks_trailing_members() {
    let settings = RenderSettings::default();
    let chord = Chord::new()
        .push(Note::new("C3".parse().unwrap()))
        .push(Note::new("E3".parse().unwrap()))
        .push(Note::new("G3".parse().unwrap()));
    let event = Event::new(EventType::Chord(chord), Length::from(2.0));
    assert_eq!(
        event.render_musicxml(&settings),
        "<note><pitch><step>C</step><octave>3</octave></pitch>\
         <duration>8</duration><type>half</type></note>\
         <note><chord/><pitch><step>E</step><octave>3</octave></pitch>\
         <duration>8</duration><type>half</type></note>\
         <note><chord/><pitch><step>G</step><octave>3</octave></pitch>\
         <duration>8</duration><type>half</type></note>"
    );
}
