use std::io::Write;

use rolling_block::core::cell::Cell;
use rolling_block::puzzle::{Puzzle, PuzzleError};
use rolling_block::search::SearchError;
use rolling_block::terrain::{Grid, Terrain};

#[test]
fn parses_tiles_markers_and_ragged_rows() {
    let text = "

ooo
-So..G
 o

";
    let p = Puzzle::parse("ragged", text).unwrap();
    assert_eq!(p.name, "ragged");
    assert_eq!(p.grid.rows(), 3);
    assert_eq!(p.grid.cols(), 6);
    assert_eq!(p.start, Cell::new(1, 1));
    assert_eq!(p.goal, Cell::new(1, 5));
    assert_eq!(p.grid.traversable_count(), 7);
    assert!(p.grid.is_traversable(Cell::new(2, 1)));
    assert!(!p.grid.is_traversable(Cell::new(2, 0)));
    assert!(!p.grid.is_traversable(Cell::new(1, 3)));
    assert!(!p.grid.is_traversable(Cell::new(2, 5)));
    p.validate().unwrap();
}

#[test]
fn rejects_unknown_tiles_with_position() {
    let err = Puzzle::parse("bad", "So\noxG").unwrap_err();
    assert!(matches!(
        err,
        PuzzleError::UnknownTile {
            tile: 'x',
            row: 1,
            col: 1
        }
    ));
}

#[test]
fn requires_exactly_one_start_and_goal() {
    assert!(matches!(
        Puzzle::parse("no_start", "oooG").unwrap_err(),
        PuzzleError::MissingMarker('S')
    ));
    assert!(matches!(
        Puzzle::parse("no_goal", "Sooo").unwrap_err(),
        PuzzleError::MissingMarker('G')
    ));
    assert!(matches!(
        Puzzle::parse("two_goals", "SoGoG").unwrap_err(),
        PuzzleError::DuplicateMarker {
            marker: 'G',
            row: 0,
            col: 4
        }
    ));
    assert!(matches!(
        Puzzle::parse("blank", "\n   \n").unwrap_err(),
        PuzzleError::Empty
    ));
}

#[test]
fn validate_rejects_start_off_the_terrain() {
    let grid = Grid::filled(2, 2);
    let p = Puzzle::new("off", grid, Cell::new(5, 5), Cell::new(0, 0));
    let err = p.validate().unwrap_err();
    assert!(matches!(err, SearchError::InvalidPuzzle { .. }));
    assert!(err.to_string().contains("start (5, 5)"));
}

#[test]
fn loads_level_files_named_after_their_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.level");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "SoooooG").unwrap();
    drop(f);

    let p = Puzzle::from_file(&path).unwrap();
    assert_eq!(p.name, "tiny");
    assert_eq!(p.solver().solve().len(), 4);

    let missing = Puzzle::from_file(dir.path().join("missing.level")).unwrap_err();
    assert!(matches!(missing, PuzzleError::Io { .. }));
}
