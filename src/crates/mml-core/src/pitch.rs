use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sharp/flat suffix of a relative note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    pub fn from_suffix(c: Option<char>) -> Self {
        match c {
            Some('+') => Accidental::Sharp,
            Some('-') => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    pub fn offset(self) -> i64 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    #[error("no semitone mapping for note letter '{0}'")]
    UnknownLetter(char),
}

/// Semitone offset of a note letter within its octave
pub fn letter_semitone(letter: char) -> Option<i64> {
    match letter {
        'c' => Some(0),
        'd' => Some(2),
        'e' => Some(4),
        'f' => Some(5),
        'g' => Some(7),
        'a' => Some(9),
        'b' => Some(11),
        _ => None,
    }
}

/// Absolute semitone number of a relative note: `octave * 12 + letter + accidental`
///
/// A natural `a` in octave 2 is calibrated two semitones up for the target
/// drum kit. No other octave/letter pair is adjusted.
pub fn absolute(octave: i64, letter: char, accidental: Accidental) -> Result<i64, PitchError> {
    let base = letter_semitone(letter).ok_or(PitchError::UnknownLetter(letter))?;

    let mut value = octave
        .saturating_mul(12)
        .saturating_add(base)
        .saturating_add(accidental.offset());

    if octave == 2 && letter == 'a' && accidental == Accidental::Natural {
        value = value.saturating_add(2);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_octave_c() {
        assert_eq!(absolute(4, 'c', Accidental::Natural), Ok(48));
    }

    #[test]
    fn test_letters() {
        assert_eq!(absolute(3, 'd', Accidental::Natural), Ok(38));
        assert_eq!(absolute(3, 'e', Accidental::Natural), Ok(40));
        assert_eq!(absolute(3, 'f', Accidental::Natural), Ok(41));
        assert_eq!(absolute(3, 'g', Accidental::Natural), Ok(43));
        assert_eq!(absolute(3, 'a', Accidental::Natural), Ok(45));
        assert_eq!(absolute(3, 'b', Accidental::Natural), Ok(47));
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(absolute(2, 'c', Accidental::Sharp), Ok(25));
        assert_eq!(absolute(2, 'c', Accidental::Flat), Ok(23));
        assert_eq!(absolute(0, 'c', Accidental::Flat), Ok(-1));
    }

    #[test]
    fn test_octave_two_a_calibration() {
        assert_eq!(absolute(2, 'a', Accidental::Natural), Ok(35));
        assert_eq!(absolute(2, 'a', Accidental::Sharp), Ok(34));
        assert_eq!(absolute(2, 'a', Accidental::Flat), Ok(32));
        // only octave 2 is calibrated
        assert_eq!(absolute(1, 'a', Accidental::Natural), Ok(21));
        assert_eq!(absolute(3, 'a', Accidental::Natural), Ok(45));
        assert_eq!(absolute(2, 'b', Accidental::Natural), Ok(35));
    }

    #[test]
    fn test_unknown_letter() {
        assert_eq!(
            absolute(4, 'h', Accidental::Natural),
            Err(PitchError::UnknownLetter('h'))
        );
    }

    #[test]
    fn test_accidental_from_suffix() {
        assert_eq!(Accidental::from_suffix(Some('+')), Accidental::Sharp);
        assert_eq!(Accidental::from_suffix(Some('-')), Accidental::Flat);
        assert_eq!(Accidental::from_suffix(None), Accidental::Natural);
    }
}
