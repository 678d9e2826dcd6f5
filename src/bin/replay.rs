use rolling_block::puzzle::Puzzle;
use rolling_block::puzzles;
use rolling_block::solution::{parse_moves, replay};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!(
            "Usage: replay <puzzle | level-file> <moves>\n\nMoves are letters (\"RRDL\") or names (\"right,down\").\nBuilt-in puzzles:\n  - {}",
            puzzles::names().join("\n  - ")
        );
        std::process::exit(2);
    }

    rolling_block::logging::init("rolling_block=warn");

    let puzzle = match puzzles::by_name(&args[1]) {
        Ok(Some(p)) => p,
        Ok(None) => match Puzzle::from_file(&args[1]) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Failed to load puzzle {}: {e}", args[1]);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Failed to load puzzle {}: {e}", args[1]);
            std::process::exit(1);
        }
    };

    let moves = match parse_moves(&args[2]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let path = match replay(puzzle.start, &moves, &puzzle.grid) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Illegal sequence: {e}");
            std::process::exit(1);
        }
    };

    println!("{:>3}  {:<6} {}", 0, "", path[0]);
    for (i, (mv, block)) in moves.iter().zip(&path[1..]).enumerate() {
        println!("{:>3}  {:<6} {}", i + 1, mv.name(), block);
    }

    let end = path[path.len() - 1];
    if end.stands_on(puzzle.goal) {
        println!("Reached goal {} in {} moves.", puzzle.goal, moves.len());
    } else {
        println!("Ended at {end}, goal is {}.", puzzle.goal);
        std::process::exit(3);
    }
}
