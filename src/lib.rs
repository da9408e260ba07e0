//! # fretboard
//!
//! Pitch-class arithmetic and a fretted-instrument grid model: build a board
//! from an open-string tuning, locate every fret playing a pitch, and retune
//! strings absolutely or relatively.
//!
//! ## Example
//! ```rust
//! use fretboard::Fretboard;
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Build a board (standard tuning, 20 frets by default)
//!     let mut board = Fretboard::builder()
//!         .tuning_text("DADGAD")
//!         .frets(22)
//!         .build()?;
//!
//!     // 2) Locate a pitch across the grid, one fret list per string
//!     let frets = board.find("F#")?;
//!     assert_eq!(frets.len(), board.num_strings());
//!
//!     // 3) Retune in place
//!     board.retune(["D", "A", "D", "F#", "A", "D"])?;
//!     board.tune_all(-2);
//!
//!     Ok(())
//! }
//! ```
//!
//! All pitch values are canonical sharp spellings; flat and lower-case note
//! names are accepted at the parse boundaries and normalized immediately.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Fretboard grid API.
pub use fretboard::{parse_tuning, Fretboard, FretboardBuilder, FretboardError, FrettedString};

/// Pitch-class arithmetic.
pub use pitch::{Note, PitchClass, PitchError, SEMITONES};

/// Strings and the (string x fret) note grid.
pub mod fretboard;

/// Pitch classes, notes, and transposition.
pub mod pitch;
