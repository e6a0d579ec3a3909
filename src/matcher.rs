//! Chord Matcher
//!
//! Names the chords formed by the notes selected on a [`Fretboard`].
//!
//! A template built on a candidate root matches when every selected pitch
//! class belongs to the template's full formula and every non-optional
//! degree of the formula is selected. Candidate roots are the selected
//! pitch classes themselves, so a chord is only named from a root that is
//! actually sounded.

use log::{debug, trace};
use std::fmt::Display;

use crate::catalog::{all_templates, resolve_formula, ChordTemplate};
use crate::fretboard::{fretted_pitch, Fretboard};
use crate::pitch::{PitchClass, PitchError, Spelling};

/// A chord reading of the current selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The matched catalog entry.
    pub template: &'static ChordTemplate,
    /// Root the template was built on.
    pub root: PitchClass,
    /// Note on the lowest selected string.
    pub lowest: PitchClass,
    /// The lowest note is not the root.
    pub is_inversion: bool,
    /// Fewer notes are selected than the full formula contains.
    pub is_partial: bool,
}

impl MatchResult {
    /// Short chord symbol, e.g. `E7` or `E7 / G♯` for an inversion.
    pub fn symbol_label(&self) -> String {
        if self.is_inversion {
            format!("{}{} / {}", self.root, self.template.symbol, self.lowest)
        } else {
            format!("{}{}", self.root, self.template.symbol)
        }
    }

    /// Spoken chord name, e.g. `E Dominant 7th over G♯`.
    pub fn name_label(&self) -> String {
        if self.is_inversion {
            format!("{} {} over {}", self.root, self.template.name, self.lowest)
        } else {
            format!("{} {}", self.root, self.template.name)
        }
    }

    /// Whether `pitch` is this chord's root.
    pub fn is_root(&self, pitch: PitchClass) -> bool {
        self.root == pitch
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol_label())
    }
}

/// One degree of a resolved chord formula.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FormulaDegree {
    /// The note this degree resolves to.
    pub pitch: PitchClass,
    /// Interval name, e.g. `"♭7"`.
    pub symbol: &'static str,
    /// The note is among the selected pitch classes.
    pub is_sounded: bool,
}

/// Distinct selected pitch classes in physical string order.
///
/// The first element is the note on the lowest selected string, which is
/// the bass note used for inversion detection.
pub fn selected_pitch_classes(board: &Fretboard) -> Result<Vec<PitchClass>, PitchError> {
    let mut notes: Vec<PitchClass> = Vec::with_capacity(board.strings().len());
    for slot in board.strings() {
        let Some(offset) = slot.selected_fret else {
            continue;
        };
        let pitch = fretted_pitch(
            slot.tuning,
            offset,
            board.fret_window_start(),
            board.spelling(),
        )?;
        if !notes.contains(&pitch) {
            notes.push(pitch);
        }
    }
    Ok(notes)
}

/// Every (template, root) reading of the selection.
///
/// Results are ordered by catalog position first and root name second; an
/// empty selection yields no results.
pub fn match_chords(board: &Fretboard) -> Result<Vec<MatchResult>, PitchError> {
    debug_assert!(
        board.strings().iter().all(|s| s.tuning.is_spelled(board.spelling())),
        "string tunings out of sync with {:?} spelling",
        board.spelling()
    );
    let selected = selected_pitch_classes(board)?;
    let Some(&lowest) = selected.first() else {
        return Ok(Vec::new());
    };

    let mut roots = selected.clone();
    roots.sort_by_key(|p| p.name());

    let mut matches = Vec::new();
    for template in all_templates() {
        for &root in &roots {
            let resolved = resolve_formula(template, root, board.spelling())?;
            if !is_match(template, &resolved, &selected) {
                continue;
            }
            trace!("{}{} matches {:?}", root, template.symbol, selected);
            matches.push(MatchResult {
                template,
                root,
                lowest,
                is_inversion: root != lowest,
                is_partial: template.len() > selected.len(),
            });
        }
    }

    debug!("{} chord readings for {:?}", matches.len(), selected);
    Ok(matches)
}

fn is_match(
    template: &ChordTemplate,
    resolved: &[(PitchClass, &'static str)],
    selected: &[PitchClass],
) -> bool {
    let in_full = selected
        .iter()
        .all(|note| resolved.iter().any(|(pitch, _)| pitch == note));
    let core_present = resolved
        .iter()
        .enumerate()
        .filter(|(degree, _)| !template.is_optional(*degree))
        .all(|(_, (pitch, _))| selected.contains(pitch));
    in_full && core_present
}

/// The reading to display: the first root-position match, or the first match
/// of any kind if every reading is an inversion.
pub fn current_chord_pick(matches: &[MatchResult]) -> Option<MatchResult> {
    let pick = matches
        .iter()
        .find(|m| !m.is_inversion)
        .or_else(|| matches.first())
        .copied();
    if let Some(chord) = &pick {
        debug!("current chord: {}", chord);
    }
    pick
}

/// The resolved formula of `result`, flagging which degrees are selected.
pub fn annotate_formula(
    result: &MatchResult,
    selected: &[PitchClass],
    spelling: Spelling,
) -> Result<Vec<FormulaDegree>, PitchError> {
    Ok(resolve_formula(result.template, result.root, spelling)?
        .into_iter()
        .map(|(pitch, symbol)| FormulaDegree {
            pitch,
            symbol,
            is_sounded: selected.contains(&pitch),
        })
        .collect())
}
