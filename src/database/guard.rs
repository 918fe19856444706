use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use super::*;
use crate::settings::Settings;

/// The configured score store. Resolving it is the configuration check every data
/// request goes through; it never opens a connection by itself.
pub struct Database<'r> {
    url: &'r str,
}

impl<'r> Database<'r> {
    pub fn new(url: &'r str) -> Self {
        Self { url }
    }

    /// Fetches the leaderboard of `game_name` over a connection of its own.
    pub async fn top_scores(&self, game_name: &str) -> sqlx::Result<Vec<LeaderboardEntry>> {
        let mut connection = ScoreConnection::open(self.url).await?;
        let entries = connection.top_scores(game_name, TOP_SCORES_LIMIT).await;
        release(connection).await;
        entries
    }

    /// Persists `record` over a connection of its own.
    pub async fn insert_score(&self, record: &ScoreRecord) -> sqlx::Result<()> {
        let mut connection = ScoreConnection::open(self.url).await?;
        let inserted = connection.insert_score(record).await;
        release(connection).await;
        inserted
    }
}

/// Closes `connection` whether or not the work done over it succeeded.
/// A failed close does not fail the request: the read or commit has already happened.
async fn release(connection: ScoreConnection) {
    if let Err(error) = connection.close().await {
        tracing::warn!(%error, "failed to close database connection");
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Database<'r> {
    type Error = RequestError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let url = request
            .rocket()
            .state::<Settings>()
            .and_then(|settings| settings.database_url.as_deref());

        match url {
            Some(url) => Outcome::Success(Database::new(url)),
            None => Outcome::Error((
                Status::InternalServerError,
                RequestError::DatabaseNotConfigured,
            )),
        }
    }
}
