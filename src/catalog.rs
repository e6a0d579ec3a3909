//! Chord Catalog
//!
//! Static table of chord templates. Each template is a formula of semitone
//! offsets from an implicit root, the interval symbol for every offset, and
//! the formula positions that may be left out while still naming the chord.
//!
//! Interval reference for the offsets:
//!
//! ```text
//! offset | 0  1  2  3  4  5  6  7  8  9  10 11
//! degree | 1  ♭2 2  ♭3 3  4  ♭5 5  ♯5 6  ♭7 7
//! offset | 12 13 14 15 16 17 18 19 20 21 22 23
//! degree | -  ♭9 9  ♯9 -  11 ♯11 - ♭13 13 ♯13 -
//! ```

use crate::pitch::{chromatic, transpose, PitchClass, PitchError, Spelling, SEMITONES};

/// An immutable chord definition.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChordTemplate {
    /// Display name, e.g. `"Minor 7th"`.
    pub name: &'static str,
    /// Suffix appended to the root, e.g. `"m7"`.
    pub symbol: &'static str,
    /// Semitone offsets from the root; the first is always 0.
    pub formula: &'static [u8],
    /// Positions in `formula` that may be omitted.
    pub optional_degrees: &'static [usize],
    /// Interval names aligned 1:1 with `formula`.
    pub formula_symbols: &'static [&'static str],
}

impl ChordTemplate {
    /// Whether the formula position `degree` may be omitted.
    pub fn is_optional(&self, degree: usize) -> bool {
        self.optional_degrees.contains(&degree)
    }

    /// Number of notes in the full formula.
    pub fn len(&self) -> usize {
        self.formula.len()
    }

    /// Whether the formula has no notes.
    pub fn is_empty(&self) -> bool {
        self.formula.is_empty()
    }
}

macro_rules! chord {
    ($name:expr, $symbol:expr, [$($off:expr),*], opt [$($opt:expr),*], [$($sym:expr),*]) => {
        ChordTemplate {
            name: $name,
            symbol: $symbol,
            formula: &[$($off),*],
            optional_degrees: &[$($opt),*],
            formula_symbols: &[$($sym),*],
        }
    };
}

/// Number of templates in the catalog.
pub const NUM_TEMPLATES: usize = 43;

#[rustfmt::skip]
const TEMPLATES: [ChordTemplate; NUM_TEMPLATES] = [
    chord!("Power Chord",          "5",          [0, 7],                      opt [],        ["1", "5"]),
    chord!("Major",                "",           [0, 4, 7],                   opt [2],       ["1", "3", "5"]),
    chord!("Minor",                "m",          [0, 3, 7],                   opt [2],       ["1", "♭3", "5"]),
    chord!("Diminished",           "dim",        [0, 3, 6],                   opt [],        ["1", "♭3", "♭5"]),
    chord!("Augmented",            "aug",        [0, 4, 8],                   opt [],        ["1", "3", "♯5"]),
    chord!("Suspended 2nd",        "sus2",       [0, 2, 7],                   opt [],        ["1", "2", "5"]),
    chord!("Suspended 4th",        "sus4",       [0, 5, 7],                   opt [],        ["1", "4", "5"]),
    chord!("Major 7th",            "maj7",       [0, 4, 7, 11],               opt [2],       ["1", "3", "5", "7"]),
    chord!("Major 7th Sharp 11",   "maj7♯11",    [0, 4, 7, 11, 18],           opt [2],       ["1", "3", "5", "7", "♯11"]),
    chord!("Minor Major 7th",      "m(maj7)",    [0, 3, 7, 11],               opt [2],       ["1", "♭3", "5", "7"]),
    chord!("Augmented Major 7th",  "aug(maj7)",  [0, 4, 8, 11],               opt [],        ["1", "3", "♯5", "7"]),
    chord!("Dominant 7th",         "7",          [0, 4, 7, 10],               opt [2],       ["1", "3", "5", "♭7"]),
    chord!("Augmented 7th",        "aug7",       [0, 4, 8, 10],               opt [],        ["1", "3", "♯5", "♭7"]),
    chord!("Minor 7th",            "m7",         [0, 3, 7, 10],               opt [2],       ["1", "♭3", "5", "♭7"]),
    chord!("Half Diminished 7th",  "m7♭5",       [0, 3, 6, 10],               opt [],        ["1", "♭3", "♭5", "♭7"]),
    chord!("Full Diminished 7th",  "dim7",       [0, 3, 6, 9],                opt [],        ["1", "♭3", "♭5", "6"]),
    chord!("7th Suspended 2nd",    "7sus2",      [0, 2, 7, 10],               opt [],        ["1", "2", "5", "♭7"]),
    chord!("7th Suspended 4th",    "7sus4",      [0, 5, 7, 10],               opt [],        ["1", "4", "5", "♭7"]),
    chord!("Major 9th",            "maj9",       [0, 4, 7, 11, 14],           opt [2],       ["1", "3", "5", "7", "9"]),
    chord!("Minor Major 9th",      "m(maj9)",    [0, 3, 7, 11, 14],           opt [2],       ["1", "♭3", "5", "7", "9"]),
    chord!("Augmented Major 9th",  "aug(maj9)",  [0, 4, 8, 11, 14],           opt [],        ["1", "3", "♯5", "7", "9"]),
    chord!("Dominant 9th",         "9",          [0, 4, 7, 10, 14],           opt [2],       ["1", "3", "5", "♭7", "9"]),
    chord!("Minor 9th",            "m9",         [0, 3, 7, 10, 14],           opt [2],       ["1", "♭3", "5", "♭7", "9"]),
    chord!("Augmented 9th",        "aug9",       [0, 4, 8, 10, 14],           opt [],        ["1", "3", "♯5", "♭7", "9"]),
    chord!("Major 11th",           "maj11",      [0, 4, 7, 11, 14, 17],       opt [2, 4],    ["1", "3", "5", "7", "9", "11"]),
    chord!("Minor Major 11th",     "m(maj11)",   [0, 3, 7, 11, 14, 17],       opt [2, 4],    ["1", "♭3", "5", "7", "9", "11"]),
    chord!("Augmented Major 11th", "aug(maj11)", [0, 4, 8, 11, 14, 17],       opt [4],       ["1", "3", "♯5", "7", "9", "11"]),
    chord!("Dominant 11th",        "11",         [0, 4, 7, 10, 14, 17],       opt [2, 4],    ["1", "3", "5", "♭7", "9", "11"]),
    chord!("Minor 11th",           "m11",        [0, 3, 7, 10, 14, 17],       opt [2, 4],    ["1", "♭3", "5", "♭7", "9", "11"]),
    chord!("Augmented 11th",       "aug11",      [0, 4, 8, 10, 14, 17],       opt [4],       ["1", "3", "♯5", "♭7", "9", "11"]),
    chord!("Major 13th",           "maj13",      [0, 4, 7, 11, 14, 17, 21],   opt [2, 4, 5], ["1", "3", "5", "7", "9", "11", "13"]),
    chord!("Minor Major 13th",     "m(maj13)",   [0, 3, 7, 11, 14, 17, 21],   opt [2, 4, 5], ["1", "♭3", "5", "7", "9", "11", "13"]),
    chord!("Augmented Major 13th", "aug(maj13)", [0, 4, 8, 11, 14, 17, 21],   opt [4, 5],    ["1", "3", "♯5", "7", "9", "11", "13"]),
    chord!("Dominant 13th",        "13",         [0, 4, 7, 10, 14, 17, 21],   opt [2, 4, 5], ["1", "3", "5", "♭7", "9", "11", "13"]),
    chord!("Minor 13th",           "m13",        [0, 3, 7, 10, 14, 17, 21],   opt [2, 4, 5], ["1", "♭3", "5", "♭7", "9", "11", "13"]),
    chord!("Added 2nd",            "add2",       [0, 2, 4, 7],                opt [3],       ["1", "2", "3", "5"]),
    chord!("Minor Added 2nd",      "m(add2)",    [0, 2, 3, 7],                opt [3],       ["1", "2", "♭3", "5"]),
    chord!("Added 4th",            "add4",       [0, 4, 5, 7],                opt [3],       ["1", "3", "4", "5"]),
    chord!("Minor Added 4th",      "m(add4)",    [0, 3, 5, 7],                opt [3],       ["1", "♭3", "4", "5"]),
    chord!("6th",                  "6",          [0, 4, 7, 9],                opt [2],       ["1", "3", "5", "6"]),
    chord!("Minor 6th",            "m6",         [0, 3, 7, 9],                opt [2],       ["1", "♭3", "5", "6"]),
    chord!("Major 6-9",            "6-9",        [0, 4, 7, 9, 14],            opt [2],       ["1", "3", "5", "6", "9"]),
    chord!("Minor 6-9",            "m6-9",       [0, 3, 7, 9, 14],            opt [2],       ["1", "♭3", "5", "6", "9"]),
];

const _: () = assert!(catalog_is_well_formed(&TEMPLATES), "malformed chord template");

/// Every known chord, in matching priority order.
pub static CHORD_TEMPLATES: [ChordTemplate; NUM_TEMPLATES] = TEMPLATES;

/// Structural invariants of every template, evaluated at compile time.
const fn catalog_is_well_formed(templates: &[ChordTemplate]) -> bool {
    let mut t = 0;
    while t < templates.len() {
        let tpl = &templates[t];
        if tpl.formula.is_empty()
            || tpl.formula[0] != 0
            || tpl.formula.len() != tpl.formula_symbols.len()
        {
            return false;
        }

        let mut o = 0;
        while o < tpl.optional_degrees.len() {
            let degree = tpl.optional_degrees[o];
            if degree == 0 || degree >= tpl.formula.len() {
                return false;
            }
            o += 1;
        }

        // no two offsets may land on the same pitch class
        let mut seen = [false; SEMITONES];
        let mut f = 0;
        while f < tpl.formula.len() {
            let pc = tpl.formula[f] as usize % SEMITONES;
            if seen[pc] {
                return false;
            }
            seen[pc] = true;
            f += 1;
        }
        t += 1;
    }
    true
}

/// All templates in matching priority order.
pub fn all_templates() -> &'static [ChordTemplate] {
    &CHORD_TEMPLATES
}

/// Look up a template by its symbol suffix (`""` is the major triad).
pub fn find_by_symbol(symbol: &str) -> Option<&'static ChordTemplate> {
    CHORD_TEMPLATES.iter().find(|t| t.symbol == symbol)
}

/// Resolve `template` against `root`, pairing every chord note with its
/// interval symbol in formula order.
///
/// `root` must be spelled in `spelling`.
pub fn resolve_formula(
    template: &ChordTemplate,
    root: PitchClass,
    spelling: Spelling,
) -> Result<Vec<(PitchClass, &'static str)>, PitchError> {
    let sequence = chromatic(spelling);
    template
        .formula
        .iter()
        .zip(template.formula_symbols)
        .map(|(&offset, &symbol)| Ok((transpose(sequence, root, i32::from(offset))?, symbol)))
        .collect()
}

/// The literal notes of `template` built on `root`, in formula order.
pub fn chord_notes(
    template: &ChordTemplate,
    root: PitchClass,
    spelling: Spelling,
) -> Result<Vec<PitchClass>, PitchError> {
    let sequence = chromatic(spelling);
    template
        .formula
        .iter()
        .map(|&offset| transpose(sequence, root, i32::from(offset)))
        .collect()
}
