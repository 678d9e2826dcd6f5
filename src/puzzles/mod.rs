//! Built-in levels (compile-time text).

use crate::puzzle::{Puzzle, PuzzleError};
use crate::search::resources::ResourceLimits;

const OPEN_FIELD: &str = "
SooG
oooo
oooo
";

const CORRIDOR: &str = "
SoooooG
";

/// One tile too long: a standing block covers three cells per two tilts.
const CORRIDOR_OFF_BY_ONE: &str = "
SooooooG
";

const ISLANDS: &str = "
Soo---ooG
ooo---ooo
ooo---ooo
";

const LEVEL_ONE: &str = "
ooo-------
oSoooo----
ooooooooo-
-ooooooooo
-----ooGoo
------ooo-
";

fn demo_limits() -> ResourceLimits {
    ResourceLimits {
        max_states: 100_000,
        max_runtime_steps: 100_000,
    }
}

fn built_in(name: &str, text: &str) -> Result<Puzzle, PuzzleError> {
    Ok(Puzzle::parse(name, text)?.with_limits(demo_limits()))
}

/// 3x4 open field, start and goal on the top row.
pub fn open_field() -> Result<Puzzle, PuzzleError> {
    built_in("open_field", OPEN_FIELD)
}

pub fn corridor() -> Result<Puzzle, PuzzleError> {
    built_in("corridor", CORRIDOR)
}

pub fn corridor_off_by_one() -> Result<Puzzle, PuzzleError> {
    built_in("corridor_off_by_one", CORRIDOR_OFF_BY_ONE)
}

/// Two 3x3 islands separated by a three-column gap.
pub fn islands() -> Result<Puzzle, PuzzleError> {
    built_in("islands", ISLANDS)
}

/// The classic first level of the rolling-block game.
pub fn level_one() -> Result<Puzzle, PuzzleError> {
    built_in("level_one", LEVEL_ONE)
}

/// Return a built-in level by name.
pub fn by_name(name: &str) -> Result<Option<Puzzle>, PuzzleError> {
    match name {
        "open_field" => Ok(Some(open_field()?)),
        "corridor" => Ok(Some(corridor()?)),
        "corridor_off_by_one" => Ok(Some(corridor_off_by_one()?)),
        "islands" => Ok(Some(islands()?)),
        "level_one" => Ok(Some(level_one()?)),
        _ => Ok(None),
    }
}

/// Names of all built-in levels.
pub fn names() -> &'static [&'static str] {
    &[
        "open_field",
        "corridor",
        "corridor_off_by_one",
        "islands",
        "level_one",
    ]
}
