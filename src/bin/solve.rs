use std::path::Path;

use rolling_block::config::{OutputFormat, SolverConfig};
use rolling_block::puzzle::Puzzle;
use rolling_block::puzzles;
use rolling_block::solution::{format_moves, SolutionReport, SolutionStatus};
use tracing::info;

const DEFAULT_LOG_FILTER: &str = "rolling_block=info";

fn usage() -> String {
    format!(
        "Usage: solve <puzzle | level-file> [--config <file.toml>] [--json]\n\nBuilt-in puzzles:\n  - {}",
        puzzles::names().join("\n  - ")
    )
}

fn load_puzzle(arg: &str) -> Puzzle {
    match puzzles::by_name(arg) {
        Ok(Some(p)) => return p,
        Ok(None) => {}
        Err(e) => {
            eprintln!("Failed to load built-in puzzle {arg}: {e}");
            std::process::exit(1);
        }
    }

    if !Path::new(arg).exists() {
        eprintln!("Unknown puzzle: {arg}\n\n{}", usage());
        std::process::exit(2);
    }
    match Puzzle::from_file(arg) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to load level file {arg}: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", usage());
        std::process::exit(2);
    }

    let mut config = SolverConfig::new();
    let mut force_json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--config requires a file argument");
                    std::process::exit(2);
                };
                config = match SolverConfig::load(path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Failed to load config {path}: {e}");
                        std::process::exit(1);
                    }
                };
                i += 2;
            }
            "--json" => {
                force_json = true;
                i += 1;
            }
            x => {
                eprintln!("Unknown option: {x}\n\n{}", usage());
                std::process::exit(2);
            }
        }
    }
    if force_json {
        config = config.with_format(OutputFormat::Json);
    }

    rolling_block::logging::init(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER));

    let mut puzzle = load_puzzle(&args[1]);
    if let Some(limits) = config.limits {
        puzzle = puzzle.with_limits(limits);
    }
    if let Err(e) = puzzle.validate() {
        eprintln!("Puzzle {} is invalid: {e}", puzzle.name);
        std::process::exit(1);
    }

    info!(
        puzzle = %puzzle.name,
        rows = puzzle.grid.rows(),
        cols = puzzle.grid.cols(),
        tiles = puzzle.grid.traversable_count(),
        "solving"
    );

    let result = match puzzle.solver().search() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };
    let report = SolutionReport::new(&puzzle, &result);

    match config.format {
        OutputFormat::Json => match report.to_json_pretty() {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        },
        OutputFormat::Text => {
            println!("Puzzle: {}", report.puzzle);
            println!("  start: {}", report.start);
            println!("  goal: {}", report.goal);
            match report.status {
                SolutionStatus::AlreadyAtGoal => println!("  already at goal"),
                SolutionStatus::Unreachable => println!("  goal is unreachable"),
                SolutionStatus::Solved => {
                    println!("  moves ({}): {}", report.length, format_moves(&report.moves));
                }
            }
            println!(
                "  expanded: {}, enqueued: {}, peak frontier: {}",
                report.stats.expanded, report.stats.enqueued, report.stats.peak_frontier
            );
        }
    }

    if report.status == SolutionStatus::Unreachable {
        std::process::exit(3);
    }
}
