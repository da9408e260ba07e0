//! Pitch Classes
//!
//! The 12-tone equal-tempered pitch-class model: canonical sharp spelling,
//! enharmonic resolution of note names, and modular transposition arithmetic.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Number of semitones in an octave, the size of the canonical pitch table.
pub const SEMITONES: usize = 12;

/// The canonical table, sharp-spelled, ascending from A.
const NOTE_TABLE: [PitchClass; SEMITONES] = [
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
];

/// Errors when resolving note names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PitchError {
    /// The input did not normalize to one of the 12 canonical note names.
    #[error("unrecognized note `{name}`")]
    InvalidNote {
        /// The input as the caller supplied it.
        name: String,
    },
}

/// Twelve chromatic pitch classes, sharp-spelled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PitchClass {
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
}

impl PitchClass {
    /// The canonical table in ascending order, starting at A.
    pub const fn all() -> [PitchClass; SEMITONES] {
        NOTE_TABLE
    }

    /// Position of this pitch class in the canonical table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `idx` in the canonical table, wrapping modulo 12.
    pub const fn from_index(idx: usize) -> PitchClass {
        NOTE_TABLE[idx % SEMITONES]
    }

    /// Canonical sharp-spelled name.
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
        }
    }

    /// Normalize a note name to its canonical pitch class.
    ///
    /// Accepts one letter A-G, optionally followed by `#` or `b`, in either
    /// case. A flat maps the letter down one semitone through the table with
    /// wraparound, so `Ab` resolves to `G#` and `Cb` to `B`. Anything that
    /// does not land on a canonical name (`H`, `E#`, multi-accidental input)
    /// is [`PitchError::InvalidNote`].
    pub fn resolve(name: &str) -> Result<PitchClass, PitchError> {
        let invalid = || PitchError::InvalidNote {
            name: name.to_string(),
        };
        let mut chars = name.chars();
        let letter = match chars.next() {
            Some(c) => c.to_ascii_uppercase(),
            None => return Err(invalid()),
        };
        let accidental = chars.next();
        if chars.next().is_some() {
            return Err(invalid());
        }
        let natural = match letter {
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            _ => return Err(invalid()),
        };
        match accidental.map(|c| c.to_ascii_lowercase()) {
            None => Ok(natural),
            Some('b') => Ok(natural.flat()),
            Some('#') => match natural {
                // B and E have no sharp spelling in the canonical table
                PitchClass::B | PitchClass::E => Err(invalid()),
                other => Ok(other.sharp()),
            },
            Some(_) => Err(invalid()),
        }
    }

    /// Transpose up by `steps` semitones, wrapping modulo 12.
    ///
    /// Negative `steps` transpose down, so the operation is total over `i32`.
    pub fn up(self, steps: i32) -> PitchClass {
        let offset = steps.rem_euclid(SEMITONES as i32) as usize;
        PitchClass::from_index(self.index() + offset)
    }

    /// Transpose down by `steps` semitones, wrapping modulo 12.
    ///
    /// Negative `steps` transpose up, mirroring [`PitchClass::up`].
    pub fn down(self, steps: i32) -> PitchClass {
        let offset = steps.rem_euclid(SEMITONES as i32) as usize;
        PitchClass::from_index(self.index() + SEMITONES - offset)
    }

    /// Upward semitone distance from `self` to `to`, in `0..12`.
    pub fn diff(self, to: PitchClass) -> usize {
        (to.index() + SEMITONES - self.index()) % SEMITONES
    }

    /// One semitone down.
    pub fn flat(self) -> PitchClass {
        self.down(1)
    }

    /// One semitone up.
    pub fn sharp(self) -> PitchClass {
        self.up(1)
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PitchClass {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::resolve(s)
    }
}

/// A single pitched position on the fretboard grid.
///
/// Holds the current pitch class at one fret. The transposition methods are
/// queries returning the shifted pitch; the stored pitch changes only through
/// the owning string's tuning operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Note {
    pitch: PitchClass,
}

impl Note {
    /// Wrap a pitch class.
    pub fn new(pitch: PitchClass) -> Note {
        Note { pitch }
    }

    /// The current pitch class.
    pub fn pitch(self) -> PitchClass {
        self.pitch
    }

    /// Pitch after transposing by `steps` semitones, in either direction.
    ///
    /// Zero steps return the current pitch unchanged.
    pub fn tuned(self, steps: i32) -> PitchClass {
        self.pitch.up(steps)
    }

    /// Pitch `steps` semitones up.
    pub fn up(self, steps: i32) -> PitchClass {
        self.tuned(steps)
    }

    /// Pitch `steps` semitones down.
    pub fn down(self, steps: i32) -> PitchClass {
        self.pitch.down(steps)
    }

    /// Pitch one semitone down.
    pub fn flat(self) -> PitchClass {
        self.pitch.flat()
    }

    /// Pitch one semitone up.
    pub fn sharp(self) -> PitchClass {
        self.pitch.sharp()
    }

    // Sole mutation path; called from the owning string's tuning operations.
    pub(crate) fn transpose(&mut self, steps: i32) {
        self.pitch = self.pitch.up(steps);
    }
}

impl From<PitchClass> for Note {
    fn from(pitch: PitchClass) -> Note {
        Note::new(pitch)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pitch)
    }
}
