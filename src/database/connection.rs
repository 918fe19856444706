use sqlx::{Connection, PgConnection, SqliteConnection};

use super::{LeaderboardEntry, ScoreRecord};

/// `created_at` may be `TIMESTAMP` or `TIMESTAMPTZ`; the cast reads both as a naive timestamp
/// in the session time zone.
const SELECT_TOP_SCORES_POSTGRES: &str = "SELECT player_name, CAST(score AS BIGINT) AS score, \
     CAST(created_at AS TIMESTAMP) AS created_at \
     FROM leaderboard WHERE game_name = $1 ORDER BY score DESC LIMIT $2";

/// SQLite stores `CURRENT_TIMESTAMP` as text, which a `TIMESTAMP` cast would turn into a number.
const SELECT_TOP_SCORES_SQLITE: &str = "SELECT player_name, CAST(score AS BIGINT) AS score, created_at \
     FROM leaderboard WHERE game_name = $1 ORDER BY score DESC LIMIT $2";

const INSERT_SCORE: &str =
    "INSERT INTO leaderboard (player_name, game_name, score) VALUES ($1, $2, $3)";

/// A single connection to the score store. The backend is picked from the url scheme:
/// PostgreSQL in production, SQLite for local runs and tests.
pub enum ScoreConnection {
    Postgres(PgConnection),
    Sqlite(SqliteConnection),
}

impl ScoreConnection {
    pub async fn open(url: &str) -> sqlx::Result<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres(PgConnection::connect(url).await?))
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite(SqliteConnection::connect(url).await?))
        } else {
            Err(sqlx::Error::Configuration(
                "unsupported database url scheme".into(),
            ))
        }
    }

    /// Best `limit` scores of `game_name`, highest first.
    pub async fn top_scores(
        &mut self,
        game_name: &str,
        limit: i64,
    ) -> sqlx::Result<Vec<LeaderboardEntry>> {
        match self {
            Self::Postgres(connection) => {
                sqlx::query_as::<_, LeaderboardEntry>(SELECT_TOP_SCORES_POSTGRES)
                    .bind(game_name)
                    .bind(limit)
                    .fetch_all(connection)
                    .await
            }
            Self::Sqlite(connection) => {
                sqlx::query_as::<_, LeaderboardEntry>(SELECT_TOP_SCORES_SQLITE)
                    .bind(game_name)
                    .bind(limit)
                    .fetch_all(connection)
                    .await
            }
        }
    }

    /// Inserts `record` in its own transaction. The transaction rolls back if it is
    /// dropped before the commit.
    pub async fn insert_score(&mut self, record: &ScoreRecord) -> sqlx::Result<()> {
        match self {
            Self::Postgres(connection) => {
                let mut transaction = connection.begin().await?;
                sqlx::query(INSERT_SCORE)
                    .bind(record.player_name.as_str())
                    .bind(record.game_name.as_str())
                    .bind(record.score)
                    .execute(&mut *transaction)
                    .await?;
                transaction.commit().await
            }
            Self::Sqlite(connection) => {
                let mut transaction = connection.begin().await?;
                sqlx::query(INSERT_SCORE)
                    .bind(record.player_name.as_str())
                    .bind(record.game_name.as_str())
                    .bind(record.score)
                    .execute(&mut *transaction)
                    .await?;
                transaction.commit().await
            }
        }
    }

    pub async fn close(self) -> sqlx::Result<()> {
        match self {
            Self::Postgres(connection) => connection.close().await,
            Self::Sqlite(connection) => connection.close().await,
        }
    }
}
