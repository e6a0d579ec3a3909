//! # fretboard_chords
//!
//! Name the chords formed by notes selected on a fretted-instrument diagram.
//! Pick frets on a tuned board and get back every chord reading of the
//! selection, including inversions and voicings that leave out optional
//! degrees.
//!
//! ## Example
//! ```rust
//! use fretboard_chords::{Fretboard, PitchClass, Spelling};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) A guitar in standard tuning, frets 1-4 visible
//!     let mut board = Fretboard::builder()
//!         .fret_window_size(4)
//!         .spelling(Spelling::Sharp)
//!         .build()?;
//!
//!     // 2) Fret an open E major chord, low string first
//!     for (string, fret) in [(0, 0), (1, 2), (2, 2), (3, 1), (4, 0), (5, 0)] {
//!         board.toggle_selected_fret(string, fret)?;
//!     }
//!
//!     // 3) Ask for the chord
//!     let notes = board.selected_pitch_classes()?;
//!     assert_eq!(notes, [PitchClass::E, PitchClass::B, PitchClass::GSharp]);
//!
//!     if let Some(chord) = board.current_chord()? {
//!         println!("{} ({})", chord.symbol_label(), chord.name_label());
//!     }
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chromatic circle, transposition and respelling.
pub use pitch::{chromatic, respell, transpose, PitchClass, PitchError, Spelling, SEMITONES};

/// Static chord table.
pub use catalog::{
    all_templates, chord_notes, find_by_symbol, resolve_formula, ChordTemplate, CHORD_TEMPLATES,
};

/// Selection state and its configuration.
pub use fretboard::{
    Fretboard, FretboardBuilder, FretboardError, StringSlot, DEFAULT_FRET_WINDOW_SIZE,
    DEFAULT_FRET_WINDOW_START, DEFAULT_SPELLING, DEFAULT_TUNING, FRET_WINDOW_SIZES,
    FRET_WINDOW_STARTS,
};

/// Chord matching over a fretboard.
pub use matcher::{
    annotate_formula, current_chord_pick, match_chords, selected_pitch_classes, FormulaDegree,
    MatchResult,
};

/// Pitch-class arithmetic module.
pub mod pitch;

/// Chord catalog module.
pub mod catalog;

/// Fretboard state module.
pub mod fretboard;

/// Chord matching module.
pub mod matcher;
