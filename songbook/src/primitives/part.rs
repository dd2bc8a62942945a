use fraction::Fraction;

use super::{Length, Measure};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Clef {
    Treble,
    Bass,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TimeSignature {
    pub numerator: u32,
    pub denominator: u32,
}
impl TimeSignature {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Measure capacity in quarter-note beats.
    ///
    /// # Example
    /// ```
    /// use songbook::primitives::{Length, TimeSignature};
    ///
    /// assert_eq!(TimeSignature::new(4, 4).beats(), Length::from(4.0));
    /// assert_eq!(TimeSignature::new(3, 4).beats(), Length::from(3.0));
    /// assert_eq!(TimeSignature::new(6, 8).beats(), Length::from(3.0));
    /// ```
    pub fn beats(&self) -> Length {
        Length::from(Fraction::new(
            self.numerator as u64 * 4,
            self.denominator as u64,
        ))
    }
}

/// One instrumental line: measures under a clef and time signature.
///
/// Parts of one score are kept duration-aligned measure-by-measure by
/// the melody tables themselves; nothing here enforces it.
#[derive(Debug, PartialEq, Clone)]
pub struct Part {
    pub clef: Clef,
    pub time_signature: TimeSignature,
    measures: Vec<Measure>,
}
impl Part {
    pub fn new(
        clef: Clef,
        time_signature: TimeSignature,
        measures: Vec<Measure>,
    ) -> Self {
        Self {
            clef,
            time_signature,
            measures,
        }
    }
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }
}
