//! Fretboard
//!
//! The mutable selection model behind a chord diagram: one tuning and at most
//! one selected fret per string, a movable window of frets, and the
//! accidental spelling everything is displayed in.
//!
//! Selections are stored as positions, not notes. Offset `0` is the open
//! string; offset `n > 0` is the `n`th fret inside the window, so offset `1`
//! sits on `fret_window_start` itself.

use log::debug;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::catalog::ChordTemplate;
use crate::matcher::{self, MatchResult};
use crate::pitch::{chromatic, respell, transpose, PitchClass, PitchError, Spelling, SEMITONES};

/// Standard guitar tuning, low string first.
pub const DEFAULT_TUNING: [PitchClass; 6] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// Fret the window starts on when a board is created.
pub const DEFAULT_FRET_WINDOW_START: usize = 1;

/// Number of frets visible when a board is created.
pub const DEFAULT_FRET_WINDOW_SIZE: usize = 4;

/// Window sizes a board accepts.
pub const FRET_WINDOW_SIZES: [usize; 3] = [3, 4, 5];

/// Positions the window start cycles through when stepped.
pub const FRET_WINDOW_STARTS: RangeInclusive<usize> = 1..=12;

/// Accidental spelling a board starts with.
pub const DEFAULT_SPELLING: Spelling = Spelling::Sharp;

/// Errors raised by fretboard mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// The string index does not exist on this board.
    #[error("string {index} does not exist, board has {strings} strings")]
    StringOutOfRange {
        /// The requested string.
        index: usize,
        /// Number of strings on the board.
        strings: usize,
    },

    /// The fret offset lies beyond the visible window.
    #[error("fret offset {offset} is outside the window of {window_size} frets")]
    FretOutOfRange {
        /// The requested offset.
        offset: usize,
        /// Current window size.
        window_size: usize,
    },

    /// The window cannot start below the first fret.
    #[error("fret window must start at fret 1 or above, got {start}")]
    InvalidWindowStart {
        /// The rejected start.
        start: usize,
    },

    /// The window size is not one of the allowed choices.
    #[error("fret window size {size} is not one of {allowed:?}")]
    InvalidWindowSize {
        /// The rejected size.
        size: usize,
        /// The accepted sizes.
        allowed: &'static [usize],
    },

    /// A board needs at least one string.
    #[error("a fretboard needs at least one string")]
    NoStrings,

    /// Pitch arithmetic failed.
    #[error(transparent)]
    Pitch(#[from] PitchError),
}

/// One playable string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StringSlot {
    /// Open-string pitch, spelled in the board's spelling.
    pub tuning: PitchClass,
    /// Selected position: `Some(0)` is the open string, `None` is unselected.
    pub selected_fret: Option<usize>,
}

impl StringSlot {
    fn new(tuning: PitchClass) -> Self {
        StringSlot {
            tuning,
            selected_fret: None,
        }
    }
}

/// Builder for a [`Fretboard`].
pub struct FretboardBuilder {
    tuning: Vec<PitchClass>,
    fret_window_start: usize,
    fret_window_size: usize,
    spelling: Spelling,
}

impl FretboardBuilder {
    /// Start from the defaults: standard tuning, window 1..=4, sharps.
    pub fn new() -> Self {
        FretboardBuilder {
            tuning: DEFAULT_TUNING.to_vec(),
            fret_window_start: DEFAULT_FRET_WINDOW_START,
            fret_window_size: DEFAULT_FRET_WINDOW_SIZE,
            spelling: DEFAULT_SPELLING,
        }
    }

    /// Set the open-string pitches, low string first.
    pub fn tuning(mut self, tuning: impl IntoIterator<Item = PitchClass>) -> Self {
        self.tuning = tuning.into_iter().collect();
        self
    }

    /// Set the first fret of the window.
    pub fn fret_window_start(mut self, start: usize) -> Self {
        self.fret_window_start = start;
        self
    }

    /// Set the number of visible frets.
    pub fn fret_window_size(mut self, size: usize) -> Self {
        self.fret_window_size = size;
        self
    }

    /// Set the accidental spelling.
    pub fn spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = spelling;
        self
    }

    /// Validate and create the board. Tunings are respelled into the chosen
    /// spelling.
    pub fn build(self) -> Result<Fretboard, FretboardError> {
        if self.tuning.is_empty() {
            return Err(FretboardError::NoStrings);
        }
        check_window_start(self.fret_window_start)?;
        check_window_size(self.fret_window_size)?;

        let strings = self
            .tuning
            .into_iter()
            .map(|p| StringSlot::new(p.in_spelling(self.spelling)))
            .collect();

        Ok(Fretboard {
            strings,
            fret_window_start: self.fret_window_start,
            fret_window_size: self.fret_window_size,
            spelling: self.spelling,
        })
    }
}

impl Default for FretboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_window_start(start: usize) -> Result<(), FretboardError> {
    if start < 1 {
        return Err(FretboardError::InvalidWindowStart { start });
    }
    Ok(())
}

fn check_window_size(size: usize) -> Result<(), FretboardError> {
    if !FRET_WINDOW_SIZES.contains(&size) {
        return Err(FretboardError::InvalidWindowSize {
            size,
            allowed: &FRET_WINDOW_SIZES,
        });
    }
    Ok(())
}

/// Selection state of a fretted instrument diagram.
///
/// All queries borrow the board immutably; a board belongs to a single
/// session and is not meant to be shared between writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    strings: Vec<StringSlot>,
    fret_window_start: usize,
    fret_window_size: usize,
    spelling: Spelling,
}

impl Fretboard {
    /// Return a builder to customize tuning, window and spelling.
    pub fn builder() -> FretboardBuilder {
        FretboardBuilder::new()
    }

    /// A six-string guitar in standard tuning with nothing selected.
    pub fn new() -> Self {
        let strings = DEFAULT_TUNING.iter().map(|&p| StringSlot::new(p)).collect();
        Fretboard {
            strings,
            fret_window_start: DEFAULT_FRET_WINDOW_START,
            fret_window_size: DEFAULT_FRET_WINDOW_SIZE,
            spelling: DEFAULT_SPELLING,
        }
    }

    /// Strings in physical order.
    pub fn strings(&self) -> &[StringSlot] {
        &self.strings
    }

    /// First fret of the window.
    pub fn fret_window_start(&self) -> usize {
        self.fret_window_start
    }

    /// Number of visible frets.
    pub fn fret_window_size(&self) -> usize {
        self.fret_window_size
    }

    /// Current accidental spelling.
    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut StringSlot, FretboardError> {
        let strings = self.strings.len();
        self.strings
            .get_mut(index)
            .ok_or(FretboardError::StringOutOfRange { index, strings })
    }

    fn slot(&self, index: usize) -> Result<&StringSlot, FretboardError> {
        self.strings.get(index).ok_or(FretboardError::StringOutOfRange {
            index,
            strings: self.strings.len(),
        })
    }

    /// Move the window so it starts on fret `start`.
    pub fn set_fret_window_start(&mut self, start: usize) -> Result<(), FretboardError> {
        check_window_start(start)?;
        debug!("fret window start {} -> {}", self.fret_window_start, start);
        self.fret_window_start = start;
        Ok(())
    }

    /// Step the window start through [`FRET_WINDOW_STARTS`], wrapping at
    /// either end.
    pub fn step_fret_window_start(&mut self, delta: i32) {
        let first = *FRET_WINDOW_STARTS.start();
        let count = FRET_WINDOW_STARTS.count();
        let pos = self.fret_window_start.saturating_sub(first) % count;
        let step = delta.rem_euclid(count as i32) as usize;
        let next = (pos + step) % count + first;
        debug!("fret window start {} -> {}", self.fret_window_start, next);
        self.fret_window_start = next;
    }

    /// Show `size` frets. Selections beyond the new window are dropped.
    pub fn set_fret_window_size(&mut self, size: usize) -> Result<(), FretboardError> {
        check_window_size(size)?;
        debug!("fret window size {} -> {}", self.fret_window_size, size);
        self.fret_window_size = size;
        for slot in &mut self.strings {
            if slot.selected_fret.is_some_and(|f| f > size) {
                slot.selected_fret = None;
            }
        }
        Ok(())
    }

    /// Retune one string. The pitch is respelled into the current spelling.
    pub fn set_string_tuning(
        &mut self,
        index: usize,
        pitch: PitchClass,
    ) -> Result<(), FretboardError> {
        let spelling = self.spelling;
        let slot = self.slot_mut(index)?;
        slot.tuning = pitch.in_spelling(spelling);
        debug!("string {} tuned to {}", index, slot.tuning);
        Ok(())
    }

    /// Move one string's tuning `delta` semitones around the circle.
    pub fn step_string_tuning(&mut self, index: usize, delta: i32) -> Result<(), FretboardError> {
        let sequence = chromatic(self.spelling);
        let slot = self.slot_mut(index)?;
        slot.tuning = transpose(sequence, slot.tuning, delta)?;
        debug!("string {} tuned to {}", index, slot.tuning);
        Ok(())
    }

    /// Select `offset` on a string, or clear it if it is already selected.
    pub fn toggle_selected_fret(
        &mut self,
        index: usize,
        offset: usize,
    ) -> Result<(), FretboardError> {
        if offset > self.fret_window_size {
            return Err(FretboardError::FretOutOfRange {
                offset,
                window_size: self.fret_window_size,
            });
        }
        let slot = self.slot_mut(index)?;
        slot.selected_fret = match slot.selected_fret {
            Some(current) if current == offset => None,
            _ => Some(offset),
        };
        debug!("string {} selection: {:?}", index, slot.selected_fret);
        Ok(())
    }

    /// Switch accidentals, respelling every string's tuning to match.
    pub fn set_accidental_spelling(&mut self, spelling: Spelling) -> Result<(), FretboardError> {
        if spelling == self.spelling {
            return Ok(());
        }
        for slot in &mut self.strings {
            slot.tuning = respell(slot.tuning, self.spelling, spelling)?;
        }
        debug!("spelling {:?} -> {:?}", self.spelling, spelling);
        self.spelling = spelling;
        Ok(())
    }

    /// Deselect every string.
    pub fn clear_all_selections(&mut self) {
        for slot in &mut self.strings {
            slot.selected_fret = None;
        }
        debug!("selections cleared");
    }

    /// Whether any string has a selection.
    pub fn has_selection(&self) -> bool {
        self.strings.iter().any(|s| s.selected_fret.is_some())
    }

    /// Pitch sounded by `offset` on string `index`.
    pub fn sounding_pitch(&self, index: usize, offset: usize) -> Result<PitchClass, FretboardError> {
        let slot = self.slot(index)?;
        Ok(fretted_pitch(
            slot.tuning,
            offset,
            self.fret_window_start,
            self.spelling,
        )?)
    }

    /// Pitches for every position of a string: the open string followed by
    /// each fret in the window.
    pub fn fret_pitches(&self, index: usize) -> Result<Vec<PitchClass>, FretboardError> {
        (0..=self.fret_window_size)
            .map(|offset| self.sounding_pitch(index, offset))
            .collect()
    }

    /// See [`matcher::selected_pitch_classes`].
    pub fn selected_pitch_classes(&self) -> Result<Vec<PitchClass>, PitchError> {
        matcher::selected_pitch_classes(self)
    }

    /// See [`matcher::match_chords`].
    pub fn matches(&self) -> Result<Vec<MatchResult>, PitchError> {
        matcher::match_chords(self)
    }

    /// See [`matcher::current_chord_pick`].
    pub fn current_chord(&self) -> Result<Option<MatchResult>, PitchError> {
        Ok(matcher::current_chord_pick(&self.matches()?))
    }

    /// Resolve `template` on `root` in the board's spelling.
    pub fn resolved_formula(
        &self,
        template: &ChordTemplate,
        root: PitchClass,
    ) -> Result<Vec<(PitchClass, &'static str)>, PitchError> {
        crate::catalog::resolve_formula(template, root, self.spelling)
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Fretboard::new()
    }
}

/// Pitch at `offset` on a string tuned to `tuning`, with the window
/// starting at `window_start`.
pub(crate) fn fretted_pitch(
    tuning: PitchClass,
    offset: usize,
    window_start: usize,
    spelling: Spelling,
) -> Result<PitchClass, PitchError> {
    if offset == 0 {
        return Ok(tuning);
    }
    // reduce before the cast; the window start is unbounded
    let semitones = (window_start.saturating_sub(1) % SEMITONES + offset % SEMITONES) as i32;
    transpose(chromatic(spelling), tuning, semitones)
}
