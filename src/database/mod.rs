use rocket::serde::json::Json;
use rocket::*;

mod connection;
mod guard;
mod request_error;
pub mod requests;
mod score;

pub use connection::ScoreConnection;
pub use guard::Database;
pub use request_error::*;
pub use score::*;

/// Number of entries returned by a top-scores read.
pub const TOP_SCORES_LIMIT: i64 = 10;

/// Game used when a request does not name one.
pub const DEFAULT_GAME_NAME: &str = "snake";
