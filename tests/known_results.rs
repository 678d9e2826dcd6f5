use rolling_block::core::cell::Cell;
use rolling_block::core::moves::Move::{self, Down, Left, Right, Up};
use rolling_block::puzzles;
use rolling_block::search::bfs::{solve, Outcome, Solver};
use rolling_block::solution::{format_moves, is_solution};
use rolling_block::terrain::Grid;

fn open_3x4(c: Cell) -> bool {
    (0..=2).contains(&c.row) && (0..=3).contains(&c.col)
}

#[test]
fn open_field_goal_three_columns_away_takes_two_right_tilts() {
    let moves = solve(Cell::new(0, 0), Cell::new(0, 3), &open_3x4);
    assert_eq!(moves, vec![Right, Right]);
}

#[test]
fn start_equal_to_goal_needs_no_moves() {
    let anywhere = |_: Cell| true;
    let p = Cell::new(7, -3);
    assert!(solve(p, p, &anywhere).is_empty());

    let res = Solver::new(p, p, &anywhere).search().unwrap();
    assert_eq!(res.outcome, Outcome::AlreadyAtGoal);
    assert_eq!(res.stats.expanded, 1);
}

#[test]
fn disconnected_goal_is_unreachable() {
    let p = puzzles::islands().unwrap();
    assert!(solve(p.start, p.goal, &p.grid).is_empty());

    let res = p.solver().search().unwrap();
    assert_eq!(res.outcome, Outcome::Unreachable);
    assert!(!res.outcome.is_reachable());
    assert!(res.stats.expanded > 1);
    assert_eq!(res.stats.expanded, res.stats.enqueued);
}

#[test]
fn corridor_is_crossed_in_standing_lying_hops() {
    let p = puzzles::corridor().unwrap();
    assert_eq!(p.solver().solve(), vec![Right; 4]);
}

#[test]
fn corridor_one_tile_too_long_is_unreachable() {
    let p = puzzles::corridor_off_by_one().unwrap();
    let res = p.solver().search().unwrap();
    assert_eq!(res.outcome, Outcome::Unreachable);
    // standing 0, lying 1-2, standing 3, lying 4-5, standing 6
    assert_eq!(res.stats.enqueued, 5);
}

#[test]
fn classic_first_level_takes_seven_moves() {
    let p = puzzles::level_one().unwrap();
    p.validate().unwrap();
    assert_eq!(p.start, Cell::new(1, 1));
    assert_eq!(p.goal, Cell::new(4, 7));

    let moves = p.solver().solve();
    assert_eq!(moves, vec![Right, Right, Down, Right, Right, Right, Down]);
    assert_eq!(format_moves(&moves), "RRDRRRD");
    assert!(is_solution(p.start, p.goal, &moves, &p.grid));
}

#[test]
fn open_5x5_field_paths_to_interior_cells() {
    let grid = Grid::filled(5, 5);
    let origin = Cell::new(0, 0);

    let to_center = solve(origin, Cell::new(2, 2), &grid);
    assert_eq!(to_center, vec![Right, Down, Down, Right, Up, Left, Down]);

    let to_diag = solve(origin, Cell::new(1, 1), &grid);
    assert_eq!(to_diag, vec![Right, Down, Left, Down, Right, Up]);
}

#[test]
fn open_5x5_field_lengths_from_corner() {
    #[rustfmt::skip]
    let expected: [[usize; 5]; 5] = [
        [0, 3, 4, 2, 5],
        [3, 6, 6, 3, 6],
        [4, 6, 7, 4, 6],
        [2, 3, 4, 4, 5],
        [5, 6, 6, 5, 6],
    ];
    let grid = Grid::filled(5, 5);
    for (r, row) in expected.iter().enumerate() {
        for (c, &len) in row.iter().enumerate() {
            let goal = Cell::new(r as i32, c as i32);
            let moves: Vec<Move> = solve(Cell::new(0, 0), goal, &grid);
            assert_eq!(moves.len(), len, "goal {goal}");
            assert!(is_solution(Cell::new(0, 0), goal, &moves, &grid));
        }
    }
}

#[test]
fn every_built_in_puzzle_loads_and_validates() {
    for name in puzzles::names() {
        let p = puzzles::by_name(name).unwrap().unwrap();
        assert_eq!(&p.name, name);
        p.validate().unwrap();
    }
    assert!(puzzles::by_name("no_such_level").unwrap().is_none());
}
