//! Fretboard
//!
//! Strings and the two-dimensional (string x fret) note grid: construction
//! from a tuning, pitch search, and in-place retuning.

use log::debug;
use thiserror::Error;

use crate::pitch::{Note, PitchClass, PitchError, SEMITONES};

/// Fret count of the default instrument.
const DEFAULT_FRETS: usize = 20;

/// Standard guitar tuning, lowest string first.
const DEFAULT_TUNING: [PitchClass; 6] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// Errors when building, retuning, or parsing a fretboard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FretboardError {
    /// A note name in a tuning or key did not resolve.
    #[error("invalid note: {0}")]
    Note(#[from] PitchError),

    /// A string was constructed from an empty key name.
    #[error("string must have a key")]
    InvalidKey,

    /// A retune supplied the wrong number of notes.
    #[error("expected {expected} notes to retune, found {found}")]
    TuningLength {
        /// Strings on the board.
        expected: usize,
        /// Notes the caller supplied.
        found: usize,
    },

    /// Tuning text contained no note tokens.
    #[error("tuning must name at least one string")]
    InvalidTuning,
}

/// One instrument string: an open-string key and a note for every fret.
///
/// Fret 0 is the open string, so a string with `num_frets` frets holds
/// `num_frets + 1` notes. The grid size is fixed at construction; retuning
/// changes pitch content only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrettedString {
    key: PitchClass,
    notes: Vec<Note>,
}

impl FrettedString {
    /// Build a string from an open pitch, populating fret `i` with the pitch
    /// `i` semitones above the key.
    pub fn new(key: PitchClass, num_frets: usize) -> FrettedString {
        let notes = (0..=num_frets)
            .map(|fret| Note::new(key.up((fret % SEMITONES) as i32)))
            .collect();
        FrettedString { key, notes }
    }

    /// Build a string by resolving a key name.
    ///
    /// An empty or blank name is [`FretboardError::InvalidKey`]; a name that
    /// does not resolve surfaces the underlying [`PitchError`].
    pub fn parse(name: &str, num_frets: usize) -> Result<FrettedString, FretboardError> {
        if name.trim().is_empty() {
            return Err(FretboardError::InvalidKey);
        }
        Ok(FrettedString::new(PitchClass::resolve(name)?, num_frets))
    }

    /// The open-string pitch class, always equal to the note at fret 0.
    pub fn key(&self) -> PitchClass {
        self.key
    }

    /// Number of frets after the open position.
    pub fn num_frets(&self) -> usize {
        self.notes.len() - 1
    }

    /// The notes at frets `0..=num_frets`, in fret order.
    ///
    /// Enumerating the slice yields each note with its fret index.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Frets whose note matches the resolved `name`, in ascending order.
    pub fn find(&self, name: &str) -> Result<Vec<usize>, PitchError> {
        Ok(self.find_pitch(PitchClass::resolve(name)?))
    }

    /// Frets whose note matches `pitch`, in ascending order. Empty when the
    /// pitch does not occur on this string.
    pub fn find_pitch(&self, pitch: PitchClass) -> Vec<usize> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| note.pitch() == pitch)
            .map(|(fret, _)| fret)
            .collect()
    }

    /// Retune so the open string lands exactly on `target`.
    ///
    /// Every fret shifts by the same upward interval, preserving the relative
    /// intervals between frets.
    pub fn tune_to(&mut self, target: PitchClass) {
        let steps = self.key.diff(target) as i32;
        for note in &mut self.notes {
            note.transpose(steps);
        }
        self.key = target;
    }

    /// Shift every fret by `steps` semitones, in either direction.
    ///
    /// The key is re-derived from the updated fret 0 afterwards.
    pub fn tune(&mut self, steps: i32) {
        for note in &mut self.notes {
            note.transpose(steps);
        }
        self.key = self.notes[0].pitch();
    }
}

/// Builder for a [`Fretboard`], defaulting to a standard-tuned 20-fret
/// guitar.
pub struct FretboardBuilder {
    tuning: TuningInput,
    num_frets: usize,
}

/// Which construction path `build` takes.
enum TuningInput {
    Text(String),
    Names(Vec<String>),
}

impl FretboardBuilder {
    /// Start from the default instrument: `"EADGBE"`, 20 frets.
    pub fn new() -> Self {
        FretboardBuilder {
            tuning: TuningInput::Text("EADGBE".to_string()),
            num_frets: DEFAULT_FRETS,
        }
    }

    /// Tune from parsable text such as `"DADGAD"` or `"BbEbAbF"`.
    pub fn tuning_text(mut self, text: impl Into<String>) -> Self {
        self.tuning = TuningInput::Text(text.into());
        self
    }

    /// Tune from one note name per string, lowest string first.
    pub fn tuning_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tuning = TuningInput::Names(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the fret count shared by every string.
    pub fn frets(mut self, num_frets: usize) -> Self {
        self.num_frets = num_frets;
        self
    }

    /// Resolve the tuning and build the board.
    ///
    /// Returns:
    /// - `Err(InvalidTuning)` if the tuning names no strings.
    /// - `Err(Note)` if a note name does not resolve.
    pub fn build(self) -> Result<Fretboard, FretboardError> {
        let tuning = match self.tuning {
            TuningInput::Text(text) => parse_tuning(&text)?,
            TuningInput::Names(names) => {
                if names.is_empty() {
                    return Err(FretboardError::InvalidTuning);
                }
                names
                    .iter()
                    .map(|name| PitchClass::resolve(name))
                    .collect::<Result<Vec<_>, PitchError>>()?
            }
        };
        Ok(Fretboard::from_pitches(&tuning, self.num_frets))
    }
}

impl Default for FretboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole instrument: an ordered collection of strings sharing one fret
/// count, lowest string first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    strings: Vec<FrettedString>,
    num_frets: usize,
}

impl Fretboard {
    /// A standard-tuned 20-fret six-string.
    pub fn new() -> Fretboard {
        Fretboard::from_pitches(&DEFAULT_TUNING, DEFAULT_FRETS)
    }

    /// Start customizing with a builder.
    pub fn builder() -> FretboardBuilder {
        FretboardBuilder::new()
    }

    fn from_pitches(tuning: &[PitchClass], num_frets: usize) -> Fretboard {
        let strings = tuning
            .iter()
            .map(|&key| FrettedString::new(key, num_frets))
            .collect();
        debug!("built {}-string board with {num_frets} frets", tuning.len());
        Fretboard { strings, num_frets }
    }

    /// Number of strings.
    pub fn num_strings(&self) -> usize {
        self.strings.len()
    }

    /// Fret count shared by every string.
    pub fn num_frets(&self) -> usize {
        self.num_frets
    }

    /// The strings in construction order, lowest first.
    ///
    /// Enumerating the slice yields each string with its index.
    pub fn strings(&self) -> &[FrettedString] {
        &self.strings
    }

    /// Current open-string pitches, lowest string first.
    ///
    /// Derived from the strings' keys on every call, never stored.
    pub fn tuning(&self) -> Vec<PitchClass> {
        self.strings.iter().map(FrettedString::key).collect()
    }

    /// Matching fret indices for the resolved `name`, one inner sequence per
    /// string in construction order. Strings without a match contribute an
    /// empty sequence, so the outer length always equals the string count.
    pub fn find(&self, name: &str) -> Result<Vec<Vec<usize>>, PitchError> {
        Ok(self.find_pitch(PitchClass::resolve(name)?))
    }

    /// Matching fret indices for `pitch`, one inner sequence per string.
    pub fn find_pitch(&self, pitch: PitchClass) -> Vec<Vec<usize>> {
        self.strings
            .iter()
            .map(|string| string.find_pitch(pitch))
            .collect()
    }

    /// Retune every string to its counterpart in `names`, lowest first.
    ///
    /// All names are resolved and the count checked before any string
    /// changes, so a rejected retune leaves the board untouched.
    pub fn retune<I, S>(&mut self, names: I) -> Result<(), FretboardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = names
            .into_iter()
            .map(|name| PitchClass::resolve(name.as_ref()))
            .collect::<Result<Vec<_>, PitchError>>()?;
        self.retune_pitches(&targets)
    }

    /// Retune from parsable text such as `"DADF#AD"`.
    pub fn retune_text(&mut self, text: &str) -> Result<(), FretboardError> {
        let targets = parse_tuning(text)?;
        self.retune_pitches(&targets)
    }

    fn retune_pitches(&mut self, targets: &[PitchClass]) -> Result<(), FretboardError> {
        if targets.len() != self.strings.len() {
            return Err(FretboardError::TuningLength {
                expected: self.strings.len(),
                found: targets.len(),
            });
        }
        for (string, &target) in self.strings.iter_mut().zip(targets) {
            string.tune_to(target);
        }
        debug!("retuned to {targets:?}");
        Ok(())
    }

    /// Shift every string by the same `steps` semitones via its relative
    /// tune.
    pub fn tune_all(&mut self, steps: i32) {
        for string in &mut self.strings {
            string.tune(steps);
        }
        debug!("shifted all strings by {steps} semitones");
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Fretboard::new()
    }
}

/// Split tuning text into pitch classes, scanning left to right.
///
/// `#` and `b` always extend the pending note token, so they attach to the
/// preceding letter and never start a token; any other upcoming character
/// ends it. Each completed token goes through [`PitchClass::resolve`].
///
/// Returns:
/// - `Err(InvalidTuning)` if the text is empty.
/// - `Err(Note)` if a token does not resolve.
pub fn parse_tuning(text: &str) -> Result<Vec<PitchClass>, FretboardError> {
    let mut tuning = Vec::new();
    let mut token = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        token.push(c);
        if !matches!(chars.peek(), Some('#') | Some('b')) {
            tuning.push(PitchClass::resolve(&token)?);
            token.clear();
        }
    }
    if tuning.is_empty() {
        return Err(FretboardError::InvalidTuning);
    }
    Ok(tuning)
}
