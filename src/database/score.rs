use chrono::NaiveDateTime;
use rocket::serde::{
    json::serde_json::{self, Number, Value},
    Deserialize, Serialize,
};

use super::DEFAULT_GAME_NAME;

pub type GameScore = i64;

/// Name recorded for players that do not give one.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Player names are cut to this many characters before being stored.
pub const MAX_PLAYER_NAME_LENGTH: usize = 50;

/// A score as submitted by a client. Every field is optional; a `null` counts as absent.
#[derive(Clone, Default, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreSubmission {
    pub player_name: Option<String>,
    pub game_name: Option<String>,
    pub score: Option<Number>,
}

impl ScoreSubmission {
    /// Parses a request body. Anything that is not a well-formed JSON object
    /// with correctly typed fields reads as an empty submission.
    pub fn from_body(body: Option<&str>) -> Self {
        body.and_then(|body| serde_json::from_str::<Value>(body).ok())
            .filter(Value::is_object)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}

/// A normalized score, exactly as it is written to the store and echoed back.
#[derive(Clone, Serialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreRecord {
    pub player_name: String,
    pub game_name: String,
    pub score: GameScore,
}

impl From<ScoreSubmission> for ScoreRecord {
    fn from(submission: ScoreSubmission) -> Self {
        let player_name = submission
            .player_name
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_owned());

        Self {
            player_name: truncate_player_name(player_name),
            game_name: submission
                .game_name
                .unwrap_or_else(|| DEFAULT_GAME_NAME.to_owned()),
            score: submission.score.as_ref().map_or(0, score_from_number),
        }
    }
}

fn truncate_player_name(mut player_name: String) -> String {
    if let Some((index, _)) = player_name.char_indices().nth(MAX_PLAYER_NAME_LENGTH) {
        player_name.truncate(index);
    }
    player_name
}

/// Fractions round half away from zero; out of range values saturate.
fn score_from_number(number: &Number) -> GameScore {
    if let Some(score) = number.as_i64() {
        score
    } else if number.is_u64() {
        GameScore::MAX
    } else {
        number.as_f64().map_or(0, |score| score.round() as GameScore)
    }
}

/// One row of a leaderboard.
#[derive(Clone, Serialize, sqlx::FromRow, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: GameScore,
    pub created_at: Option<NaiveDateTime>,
}

/// Body of a successful score submission.
#[derive(Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreSaved {
    pub success: bool,
    pub message: &'static str,
    pub data: ScoreRecord,
}

impl ScoreSaved {
    pub fn new(data: ScoreRecord) -> Self {
        Self {
            success: true,
            message: "Score saved",
            data,
        }
    }
}
