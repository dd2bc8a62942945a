//! Pitch spelling as it appears in the melody tables.
//!
//! Tables identify pitches with the usual compact literals:
//! letter, optional accidental, octave, e.g. `"C4"`, `"D#5"`, `"B-3"`.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PitchParseError {
    #[error("empty pitch literal")]
    Empty,
    #[error("unknown note letter `{0}` in pitch literal `{1}`")]
    UnknownLetter(char, String),
    #[error("missing or invalid octave in pitch literal `{0}`")]
    BadOctave(String),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}
impl NoteName {
    /// Step letter of the note name.
    pub fn step(&self) -> char {
        match self {
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}
impl Accidental {
    /// Chromatic alteration in semitones.
    pub fn alter(&self) -> i8 {
        match self {
            Self::Flat => -1,
            Self::Natural => 0,
            Self::Sharp => 1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: i8,
}
impl Pitch {
    pub fn new(name: NoteName, accidental: Accidental, octave: i8) -> Self {
        Self {
            name,
            accidental,
            octave,
        }
    }
}
impl FromStr for Pitch {
    type Err = PitchParseError;

    /// # Example
    /// ```
    /// use songbook::primitives::{Accidental, NoteName, Pitch};
    ///
    /// let p: Pitch = "D#5".parse().unwrap();
    /// assert_eq!(p, Pitch::new(NoteName::D, Accidental::Sharp, 5));
    /// let p: Pitch = "B-3".parse().unwrap();
    /// assert_eq!(p, Pitch::new(NoteName::B, Accidental::Flat, 3));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(PitchParseError::Empty)?;
        let name = match letter.to_ascii_uppercase() {
            'C' => NoteName::C,
            'D' => NoteName::D,
            'E' => NoteName::E,
            'F' => NoteName::F,
            'G' => NoteName::G,
            'A' => NoteName::A,
            'B' => NoteName::B,
            _ => {
                return Err(PitchParseError::UnknownLetter(
                    letter,
                    s.to_string(),
                ))
            }
        };
        let mut rest = chars.as_str();
        let accidental = match rest.bytes().next() {
            Some(b'#') | Some(b's') => {
                rest = &rest[1..];
                Accidental::Sharp
            }
            // `-` doubles as the flat sign in table literals, so it is
            // a flat only when followed by the octave digit.
            Some(b'b') | Some(b'-')
                if rest[1..].starts_with(|c: char| c.is_ascii_digit()) =>
            {
                rest = &rest[1..];
                Accidental::Flat
            }
            _ => Accidental::Natural,
        };
        let octave = rest
            .parse::<i8>()
            .map_err(|_| PitchParseError::BadOctave(s.to_string()))?;
        Ok(Self::new(name, accidental, octave))
    }
}

#[cfg(test)]
mod tests {
    use crate::primitives::{Accidental, NoteName, Pitch, PitchParseError};

    #[test]
    fn parse_naturals() {
        assert_eq!(
            "C4".parse(),
            Ok(Pitch::new(NoteName::C, Accidental::Natural, 4))
        );
        assert_eq!(
            "g2".parse(),
            Ok(Pitch::new(NoteName::G, Accidental::Natural, 2))
        );
    }

    #[test]
    fn parse_accidentals() {
        assert_eq!(
            "F#3".parse(),
            Ok(Pitch::new(NoteName::F, Accidental::Sharp, 3))
        );
        assert_eq!(
            "Gs4".parse(),
            Ok(Pitch::new(NoteName::G, Accidental::Sharp, 4))
        );
        assert_eq!(
            "Bb3".parse(),
            Ok(Pitch::new(NoteName::B, Accidental::Flat, 3))
        );
        assert_eq!(
            "E-4".parse(),
            Ok(Pitch::new(NoteName::E, Accidental::Flat, 4))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Pitch>(), Err(PitchParseError::Empty));
        assert_eq!(
            "H4".parse::<Pitch>(),
            Err(PitchParseError::UnknownLetter('H', "H4".to_string()))
        );
        assert_eq!(
            "C".parse::<Pitch>(),
            Err(PitchParseError::BadOctave("C".to_string()))
        );
        assert_eq!(
            "C#".parse::<Pitch>(),
            Err(PitchParseError::BadOctave("C#".to_string()))
        );
    }
}
