//! Integration tests for string and board construction, pitch search, and
//! retuning.

use fretboard::{
    parse_tuning, Fretboard, FretboardError, FrettedString, PitchClass, PitchError,
};
use pretty_assertions::assert_eq;

fn tuning_of(board: &Fretboard) -> Vec<&'static str> {
    board.tuning().iter().map(|p| p.name()).collect()
}

fn note_names(string: &FrettedString) -> Vec<&'static str> {
    string.notes().iter().map(|n| n.pitch().name()).collect()
}

#[test]
fn default_board_is_a_standard_tuned_guitar() {
    let board = Fretboard::new();
    assert_eq!(board.num_frets(), 20);
    assert_eq!(board.num_strings(), 6);
    assert_eq!(tuning_of(&board), ["E", "A", "D", "G", "B", "E"]);
    for (string, key) in board.strings().iter().zip(board.tuning()) {
        assert_eq!(string.key(), key);
        assert_eq!(string.num_frets(), 20);
    }
    assert_eq!(board, Fretboard::default());
    assert_eq!(board, Fretboard::builder().build().unwrap());
}

#[test]
fn builder_accepts_tuning_text() {
    let board = Fretboard::builder().tuning_text("EADG").build().unwrap();
    assert_eq!(board.num_strings(), 4);
    assert_eq!(tuning_of(&board), ["E", "A", "D", "G"]);

    let board = Fretboard::builder().tuning_text("BbEbAbF").build().unwrap();
    assert_eq!(tuning_of(&board), ["A#", "D#", "G#", "F"]);
}

#[test]
fn builder_accepts_note_names_and_fret_count() {
    let board = Fretboard::builder()
        .tuning_names(["D", "A", "D", "F#", "A", "D"])
        .frets(24)
        .build()
        .unwrap();
    assert_eq!(tuning_of(&board), ["D", "A", "D", "F#", "A", "D"]);
    assert_eq!(board.num_frets(), 24);

    let board = Fretboard::builder().tuning_text("E").frets(1).build().unwrap();
    assert_eq!(board.num_frets(), 1);
    assert_eq!(board.num_strings(), 1);
}

#[test]
fn builder_rejects_unresolvable_and_empty_tunings() {
    assert!(matches!(
        Fretboard::builder().tuning_text("EHDG").build(),
        Err(FretboardError::Note(PitchError::InvalidNote { .. }))
    ));
    assert!(matches!(
        Fretboard::builder().tuning_text("").build(),
        Err(FretboardError::InvalidTuning)
    ));
    assert!(matches!(
        Fretboard::builder().tuning_names(Vec::<String>::new()).build(),
        Err(FretboardError::InvalidTuning)
    ));
}

#[test]
fn string_construction_populates_every_fret() {
    let string = FrettedString::new(PitchClass::A, 12);
    assert_eq!(
        note_names(&string),
        ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A"]
    );
    assert_eq!(string.key(), PitchClass::A);
    assert_eq!(string.key(), string.notes()[0].pitch());
    assert_eq!(string.num_frets(), 12);
    assert_eq!(string.notes().len(), 13);
}

#[test]
fn string_parse_validates_the_key() {
    assert!(matches!(
        FrettedString::parse("", 20),
        Err(FretboardError::InvalidKey)
    ));
    assert!(matches!(
        FrettedString::parse("  ", 20),
        Err(FretboardError::InvalidKey)
    ));
    assert!(matches!(
        FrettedString::parse("H", 20),
        Err(FretboardError::Note(PitchError::InvalidNote { .. }))
    ));
    let string = FrettedString::parse("Db", 4).unwrap();
    assert_eq!(string.key(), PitchClass::Cs);
}

#[test]
fn find_returns_ascending_fret_indices() {
    let string = FrettedString::new(PitchClass::E, 24);
    assert_eq!(string.find("E").unwrap(), vec![0, 12, 24]);
    assert_eq!(string.find_pitch(PitchClass::Fs), vec![2, 14]);
    assert!(string.find("H").is_err());
}

#[test]
fn board_find_covers_every_string() {
    let ostrich = Fretboard::builder()
        .tuning_text("AAAAAA")
        .frets(12)
        .build()
        .unwrap();
    assert_eq!(ostrich.find("A").unwrap(), vec![vec![0, 12]; 6]);
}

#[test]
fn board_find_keeps_empty_matches_in_place() {
    // on one fret the strings cover E-F and B-C, so B matches only string 2
    let board = Fretboard::builder().tuning_text("EB").frets(1).build().unwrap();
    assert_eq!(board.find("B").unwrap(), vec![vec![], vec![0]]);
    assert_eq!(board.find_pitch(PitchClass::Ds), vec![Vec::<usize>::new(); 2]);
}

#[test]
fn tune_to_shifts_every_fret_and_lands_on_target() {
    let mut string = FrettedString::new(PitchClass::A, 6);
    string.tune_to(PitchClass::E);
    assert_eq!(note_names(&string), ["E", "F", "F#", "G", "G#", "A", "A#"]);
    assert_eq!(string.key(), PitchClass::E);

    string.tune_to(PitchClass::B);
    assert_eq!(string.key(), PitchClass::B);
    assert_eq!(string.key(), string.notes()[0].pitch());
}

#[test]
fn relative_tune_rederives_the_key_from_fret_zero() {
    let mut string = FrettedString::new(PitchClass::C, 8);
    string.tune(-3);
    assert_eq!(string.key(), PitchClass::A);
    assert_eq!(
        note_names(&string),
        ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F"]
    );
    string.tune(3);
    assert_eq!(string.key(), PitchClass::C);
    assert_eq!(
        note_names(&string),
        ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"]
    );
}

#[test]
fn retune_changes_all_strings() {
    let mut board = Fretboard::new();
    board.retune(["D", "A", "D", "F#", "A", "D"]).unwrap();
    assert_eq!(tuning_of(&board), ["D", "A", "D", "F#", "A", "D"]);
}

#[test]
fn retune_text_parses_like_construction() {
    let mut board = Fretboard::new();
    board.retune_text("DADF#AD").unwrap();
    assert_eq!(tuning_of(&board), ["D", "A", "D", "F#", "A", "D"]);
}

#[test]
fn rejected_retune_leaves_the_board_unchanged() {
    let mut board = Fretboard::builder().tuning_text("ABC").build().unwrap();
    let err = board.retune_text("ABCD").unwrap_err();
    assert_eq!(
        err,
        FretboardError::TuningLength {
            expected: 3,
            found: 4
        }
    );
    assert_eq!(err.to_string(), "expected 3 notes to retune, found 4");
    assert_eq!(tuning_of(&board), ["A", "B", "C"]);

    // resolution failures are caught before any string moves too
    assert!(board.retune(["D", "H", "E"]).is_err());
    assert_eq!(tuning_of(&board), ["A", "B", "C"]);
}

#[test]
fn tune_all_matches_direct_construction_and_inverts() {
    let mut board = Fretboard::builder().tuning_text("ABC").build().unwrap();
    board.tune_all(3);
    assert_eq!(
        board,
        Fretboard::builder().tuning_text("CDD#").build().unwrap()
    );
    board.tune_all(-3);
    assert_eq!(
        board,
        Fretboard::builder().tuning_text("ABC").build().unwrap()
    );
}

#[test]
fn parse_tuning_handles_sharps_and_flats() {
    assert_eq!(
        parse_tuning("AA#BCC#DD#EFF#GG#").unwrap(),
        PitchClass::all().to_vec()
    );
    assert_eq!(
        parse_tuning("AbBC#Gb").unwrap(),
        vec![PitchClass::Gs, PitchClass::B, PitchClass::Cs, PitchClass::Fs]
    );
}

#[test]
fn parse_tuning_rejects_empty_and_garbage() {
    assert_eq!(parse_tuning(""), Err(FretboardError::InvalidTuning));
    assert!(matches!(
        parse_tuning("A#b"),
        Err(FretboardError::Note(PitchError::InvalidNote { .. }))
    ));
}
