use rocket::serde::Serialize;

use crate::database::LeaderboardEntry;

/// The top scores of one game, best first, in the order the store returned them.
#[derive(Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Leaderboard {
    game: String,
    leaderboard: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(game: String, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            game,
            leaderboard: entries,
        }
    }
}
