//! Pitch Classes
//!
//! The twelve-tone chromatic circle in either sharp or flat spelling, with
//! modular transposition and enharmonic respelling.
//!
//! Index 0 is `A` in both spellings. The circle is relative: it carries no
//! octave and no frequency.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Number of pitch classes on the chromatic circle.
pub const SEMITONES: usize = 12;

/// Errors raised by pitch-class arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// The pitch is not spelled the way the queried sequence is spelled.
    #[error("pitch `{pitch}` is not part of the chromatic sequence")]
    NotInSequence {
        /// The pitch that could not be located.
        pitch: PitchClass,
    },

    /// A note name could not be parsed.
    #[error("unknown note name `{name}`")]
    UnknownName {
        /// The rejected input.
        name: String,
    },
}

/// Accidental preference used to spell the five black-key pitch classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    /// `A♯`, `C♯`, `D♯`, `F♯`, `G♯`
    #[default]
    Sharp,
    /// `B♭`, `D♭`, `E♭`, `G♭`, `A♭`
    Flat,
}

impl Spelling {
    /// The other spelling.
    pub const fn other(self) -> Spelling {
        match self {
            Spelling::Sharp => Spelling::Flat,
            Spelling::Flat => Spelling::Sharp,
        }
    }
}

/// A spelled pitch class.
///
/// Naturals belong to both spellings; the ten accidental variants belong to
/// exactly one of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PitchClass {
    /// A
    A,
    /// A sharp
    ASharp,
    /// B flat
    BFlat,
    /// B
    B,
    /// C
    C,
    /// C sharp
    CSharp,
    /// D flat
    DFlat,
    /// D
    D,
    /// D sharp
    DSharp,
    /// E flat
    EFlat,
    /// E
    E,
    /// F
    F,
    /// F sharp
    FSharp,
    /// G flat
    GFlat,
    /// G
    G,
    /// G sharp
    GSharp,
    /// A flat
    AFlat,
}

const SHARP_SEQUENCE: [PitchClass; SEMITONES] = [
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
];

const FLAT_SEQUENCE: [PitchClass; SEMITONES] = [
    PitchClass::A,
    PitchClass::BFlat,
    PitchClass::B,
    PitchClass::C,
    PitchClass::DFlat,
    PitchClass::D,
    PitchClass::EFlat,
    PitchClass::E,
    PitchClass::F,
    PitchClass::GFlat,
    PitchClass::G,
    PitchClass::AFlat,
];

impl PitchClass {
    /// Position on the chromatic circle, counted from `A`.
    pub const fn index(self) -> usize {
        match self {
            PitchClass::A => 0,
            PitchClass::ASharp | PitchClass::BFlat => 1,
            PitchClass::B => 2,
            PitchClass::C => 3,
            PitchClass::CSharp | PitchClass::DFlat => 4,
            PitchClass::D => 5,
            PitchClass::DSharp | PitchClass::EFlat => 6,
            PitchClass::E => 7,
            PitchClass::F => 8,
            PitchClass::FSharp | PitchClass::GFlat => 9,
            PitchClass::G => 10,
            PitchClass::GSharp | PitchClass::AFlat => 11,
        }
    }

    /// Display name using the `♯` and `♭` glyphs.
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::ASharp => "A♯",
            PitchClass::BFlat => "B♭",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::CSharp => "C♯",
            PitchClass::DFlat => "D♭",
            PitchClass::D => "D",
            PitchClass::DSharp => "D♯",
            PitchClass::EFlat => "E♭",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F♯",
            PitchClass::GFlat => "G♭",
            PitchClass::G => "G",
            PitchClass::GSharp => "G♯",
            PitchClass::AFlat => "A♭",
        }
    }

    /// Whether this pitch appears in the chromatic sequence of `spelling`.
    pub fn is_spelled(self, spelling: Spelling) -> bool {
        chromatic(spelling).contains(&self)
    }

    /// The same pitch class written in `spelling`.
    ///
    /// Unlike [`respell`] this never fails, because the source spelling is
    /// derived from the pitch itself.
    pub const fn in_spelling(self, spelling: Spelling) -> PitchClass {
        match spelling {
            Spelling::Sharp => SHARP_SEQUENCE[self.index()],
            Spelling::Flat => FLAT_SEQUENCE[self.index()],
        }
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = PitchError;

    /// Accepts `♯`/`#` for sharps and `♭`/`b` for flats, e.g. `"C#"`, `"D♭"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PitchError::UnknownName { name: s.to_string() };

        let mut chars = s.trim().chars();
        let letter = chars.next().ok_or_else(unknown)?;
        let accidental = chars.next();
        if chars.next().is_some() {
            return Err(unknown());
        }

        let pitch = match (letter.to_ascii_uppercase(), accidental) {
            ('A', None) => PitchClass::A,
            ('A', Some('♯' | '#')) => PitchClass::ASharp,
            ('A', Some('♭' | 'b')) => PitchClass::AFlat,
            ('B', None) => PitchClass::B,
            ('B', Some('♭' | 'b')) => PitchClass::BFlat,
            ('C', None) => PitchClass::C,
            ('C', Some('♯' | '#')) => PitchClass::CSharp,
            ('D', None) => PitchClass::D,
            ('D', Some('♯' | '#')) => PitchClass::DSharp,
            ('D', Some('♭' | 'b')) => PitchClass::DFlat,
            ('E', None) => PitchClass::E,
            ('E', Some('♭' | 'b')) => PitchClass::EFlat,
            ('F', None) => PitchClass::F,
            ('F', Some('♯' | '#')) => PitchClass::FSharp,
            ('G', None) => PitchClass::G,
            ('G', Some('♯' | '#')) => PitchClass::GSharp,
            ('G', Some('♭' | 'b')) => PitchClass::GFlat,
            _ => return Err(unknown()),
        };
        Ok(pitch)
    }
}

/// The twelve pitch classes in `spelling`, starting at `A`.
pub fn chromatic(spelling: Spelling) -> &'static [PitchClass; SEMITONES] {
    match spelling {
        Spelling::Sharp => &SHARP_SEQUENCE,
        Spelling::Flat => &FLAT_SEQUENCE,
    }
}

/// Move `semitones` steps around `sequence` starting from `from`.
///
/// Negative steps walk backwards. Offsets larger than an octave (a 13th is 21
/// semitones) wrap like any other.
///
/// Returns `Err(PitchError::NotInSequence)` if `from` is spelled differently
/// from `sequence`; respell it first.
pub fn transpose(
    sequence: &[PitchClass],
    from: PitchClass,
    semitones: i32,
) -> Result<PitchClass, PitchError> {
    let start = sequence
        .iter()
        .position(|&p| p == from)
        .ok_or(PitchError::NotInSequence { pitch: from })?;

    let len = sequence.len() as i32;
    let target = (start as i32 + semitones % len).rem_euclid(len);
    Ok(sequence[target as usize])
}

/// Rename `pitch` from its name in `from` to the name at the same index in
/// `to`. Respelling there and back again is the identity.
pub fn respell(pitch: PitchClass, from: Spelling, to: Spelling) -> Result<PitchClass, PitchError> {
    let idx = chromatic(from)
        .iter()
        .position(|&p| p == pitch)
        .ok_or(PitchError::NotInSequence { pitch })?;
    Ok(chromatic(to)[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_start_at_a_and_are_distinct() {
        for spelling in [Spelling::Sharp, Spelling::Flat] {
            let seq = chromatic(spelling);
            assert_eq!(seq[0], PitchClass::A);
            for (i, p) in seq.iter().enumerate() {
                assert_eq!(p.index(), i);
                assert!(p.is_spelled(spelling));
            }
        }
        assert_eq!(chromatic(Spelling::Sharp)[1], PitchClass::ASharp);
        assert_eq!(chromatic(Spelling::Flat)[1], PitchClass::BFlat);
    }

    #[test]
    fn transpose_wraps_forwards_and_backwards() {
        let seq = chromatic(Spelling::Sharp);
        assert_eq!(transpose(seq, PitchClass::E, 4), Ok(PitchClass::GSharp));
        assert_eq!(transpose(seq, PitchClass::G, 5), Ok(PitchClass::C));
        assert_eq!(transpose(seq, PitchClass::E, 21), Ok(PitchClass::CSharp));
        assert_eq!(transpose(seq, PitchClass::A, -1), Ok(PitchClass::GSharp));
        assert_eq!(transpose(seq, PitchClass::C, -12), Ok(PitchClass::C));
        assert_eq!(transpose(seq, PitchClass::C, -27), Ok(PitchClass::A));
    }

    #[test]
    fn transpose_stays_in_sequence() {
        for spelling in [Spelling::Sharp, Spelling::Flat] {
            let seq = chromatic(spelling);
            for &p in seq {
                for n in -40..40 {
                    let out = transpose(seq, p, n).unwrap();
                    assert!(seq.contains(&out), "{p} + {n} left the sequence");
                }
            }
        }
    }

    #[test]
    fn transpose_rejects_foreign_spelling() {
        let err = transpose(chromatic(Spelling::Sharp), PitchClass::BFlat, 2).unwrap_err();
        assert_eq!(err, PitchError::NotInSequence { pitch: PitchClass::BFlat });
    }

    #[test]
    fn respell_round_trips() {
        for spelling in [Spelling::Sharp, Spelling::Flat] {
            for &p in chromatic(spelling) {
                let there = respell(p, spelling, spelling.other()).unwrap();
                let back = respell(there, spelling.other(), spelling).unwrap();
                assert_eq!(back, p);
            }
        }
        assert_eq!(
            respell(PitchClass::GSharp, Spelling::Sharp, Spelling::Flat),
            Ok(PitchClass::AFlat)
        );
        assert_eq!(respell(PitchClass::D, Spelling::Flat, Spelling::Sharp), Ok(PitchClass::D));
        assert!(respell(PitchClass::EFlat, Spelling::Sharp, Spelling::Flat).is_err());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("C#".parse::<PitchClass>(), Ok(PitchClass::CSharp));
        assert_eq!("D♭".parse::<PitchClass>(), Ok(PitchClass::DFlat));
        assert_eq!("bb".parse::<PitchClass>(), Ok(PitchClass::BFlat));
        assert_eq!("e".parse::<PitchClass>(), Ok(PitchClass::E));
        assert!("E#".parse::<PitchClass>().is_err());
        assert!("".parse::<PitchClass>().is_err());
        assert_eq!(PitchClass::FSharp.to_string(), "F♯");
        assert_eq!(PitchClass::FSharp.in_spelling(Spelling::Flat), PitchClass::GFlat);
    }
}
