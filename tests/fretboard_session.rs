//! A diagram session driven through the public API, one UI event at a time.

use fretboard_chords::{
    find_by_symbol, respell, Fretboard, FretboardError, PitchClass, Spelling, DEFAULT_TUNING,
};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn select(board: &mut Fretboard, frets: &[(usize, usize)]) {
    for &(string, fret) in frets {
        board.toggle_selected_fret(string, fret).unwrap();
    }
}

#[test]
fn power_chord_on_a_and_d_strings() {
    init_logger();

    let mut board = Fretboard::new();
    // open A, E on the D string's second fret
    select(&mut board, &[(1, 0), (2, 2)]);

    assert_eq!(
        board.selected_pitch_classes().unwrap(),
        vec![PitchClass::A, PitchClass::E]
    );
    let matches = board.matches().unwrap();
    assert!(matches
        .iter()
        .any(|m| m.template.formula == [0, 7] && m.root == PitchClass::A));
    assert_eq!(board.current_chord().unwrap().unwrap().symbol_label(), "A5");
}

#[test]
fn g_major_then_first_inversion() {
    init_logger();

    let mut board = Fretboard::builder().fret_window_size(3).build().unwrap();
    // open G chord: G B D G B G
    select(&mut board, &[(0, 3), (1, 2), (2, 0), (3, 0), (4, 0), (5, 3)]);
    let pick = board.current_chord().unwrap().unwrap();
    assert_eq!(pick.symbol_label(), "G");
    assert!(!pick.is_inversion);
    assert!(!pick.is_partial);

    // mute the low string, leaving B in the bass
    board.toggle_selected_fret(0, 3).unwrap();
    let pick = board.current_chord().unwrap().unwrap();
    assert_eq!(pick.symbol_label(), "G / B");
    assert_eq!(pick.name_label(), "G Major over B");
    assert!(pick.is_inversion);
}

#[test]
fn moving_the_window_changes_the_chord() {
    init_logger();

    let mut board = Fretboard::new();
    // E-shape barre, index finger on the window's first fret
    select(&mut board, &[(0, 1), (1, 3), (2, 3), (3, 2), (4, 1), (5, 1)]);
    assert_eq!(board.current_chord().unwrap().unwrap().symbol_label(), "F");

    board.set_fret_window_start(3).unwrap();
    assert_eq!(board.current_chord().unwrap().unwrap().symbol_label(), "G");

    board.step_fret_window_start(-1);
    assert_eq!(board.fret_window_start(), 2);
    assert_eq!(board.current_chord().unwrap().unwrap().symbol_label(), "F♯");

    board.set_accidental_spelling(Spelling::Flat).unwrap();
    assert_eq!(board.current_chord().unwrap().unwrap().symbol_label(), "G♭");
}

#[test]
fn accidental_toggle_preserves_tuning() {
    init_logger();

    let mut board = Fretboard::new();
    board.step_string_tuning(0, -1).unwrap(); // E -> D#
    board.set_string_tuning(5, PitchClass::AFlat).unwrap();
    let original: Vec<_> = board.strings().iter().map(|s| s.tuning).collect();
    assert_eq!(original[0], PitchClass::DSharp);
    assert_eq!(original[5], PitchClass::GSharp);

    board.set_accidental_spelling(Spelling::Flat).unwrap();
    assert_eq!(board.strings()[0].tuning, PitchClass::EFlat);
    for (slot, &before) in board.strings().iter().zip(&original) {
        assert_eq!(
            Ok(slot.tuning),
            respell(before, Spelling::Sharp, Spelling::Flat)
        );
    }

    board.set_accidental_spelling(Spelling::Sharp).unwrap();
    let restored: Vec<_> = board.strings().iter().map(|s| s.tuning).collect();
    assert_eq!(restored, original);
}

#[test]
fn clearing_and_invalid_events() {
    init_logger();

    let mut board = Fretboard::new();
    select(&mut board, &[(1, 0), (2, 2), (3, 2), (4, 1), (5, 0)]);
    assert_eq!(board.current_chord().unwrap().unwrap().symbol_label(), "Am");

    assert!(matches!(
        board.toggle_selected_fret(9, 0),
        Err(FretboardError::StringOutOfRange { index: 9, .. })
    ));
    assert!(matches!(
        board.set_fret_window_size(2),
        Err(FretboardError::InvalidWindowSize { size: 2, .. })
    ));

    board.clear_all_selections();
    assert!(board.selected_pitch_classes().unwrap().is_empty());
    assert!(board.matches().unwrap().is_empty());
    assert_eq!(board.current_chord().unwrap(), None);
    assert_eq!(board.strings().len(), DEFAULT_TUNING.len());
}

#[test]
fn resolved_formula_for_display() {
    init_logger();

    let board = Fretboard::builder().spelling(Spelling::Flat).build().unwrap();
    let m7b5 = find_by_symbol("m7♭5").unwrap();
    let formula = board.resolved_formula(m7b5, PitchClass::B).unwrap();
    assert_eq!(
        formula,
        vec![
            (PitchClass::B, "1"),
            (PitchClass::D, "♭3"),
            (PitchClass::F, "♭5"),
            (PitchClass::A, "♭7"),
        ]
    );
}
