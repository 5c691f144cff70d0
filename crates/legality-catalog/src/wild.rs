//! Balls a wild capture can legally use, per origin game.

use legality_core::{Ball, BallSet, CreatureRecord, GameVersion, Generation};
use serde::{Deserialize, Serialize};

/// One row of the wild ball table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WildBallEntry {
    pub generation: Generation,
    /// Restricts the row to specific games; empty means every game of the generation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<GameVersion>,
    pub balls: BallSet,
}

impl WildBallEntry {
    fn matches(&self, game: GameVersion) -> bool {
        self.generation == game.generation() && (self.games.is_empty() || self.games.contains(&game))
    }
}

/// Ordered wild ball table; the first matching row wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WildBallTable {
    entries: Vec<WildBallEntry>,
}

impl WildBallTable {
    pub fn new(entries: Vec<WildBallEntry>) -> Self {
        Self { entries }
    }

    /// Balls available to wild captures in `game`.
    ///
    /// Games with no row get the empty set, so every ball fails.
    pub fn balls_for(&self, game: GameVersion) -> BallSet {
        self.entries
            .iter()
            .find(|entry| entry.matches(game))
            .map(|entry| entry.balls)
            .unwrap_or(BallSet::EMPTY)
    }

    /// Balls available to a wild capture of `record` in its origin game.
    pub fn balls_for_record(&self, record: &CreatureRecord) -> BallSet {
        self.balls_for(record.origin_game)
    }

    /// Returns true if some row without a game filter covers `generation`.
    pub fn covers(&self, generation: Generation) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.generation == generation && entry.games.is_empty())
    }

    /// Returns true if `ball` is wild-legal for `record`.
    pub fn allows(&self, record: &CreatureRecord, ball: Ball) -> bool {
        self.balls_for_record(record).contains(ball)
    }

    pub fn entries(&self) -> &[WildBallEntry] {
        &self.entries
    }
}
