use rocket::data::ByteUnit;
use tracing::Level;

/// Largest score submission read when `BODY_LIMIT` is not set.
pub const DEFAULT_BODY_LIMIT: ByteUnit = ByteUnit::MiB;

/// Process-wide configuration, resolved once at startup and handed to the rocket.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Connection url of the score store. `None` when the service is not configured.
    pub database_url: Option<String>,
    pub log_level: Level,
    /// Largest request body read by the score writer.
    pub body_limit: ByteUnit,
}

impl Settings {
    /// Reads the settings from the environment, loading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let database_url = dotenv::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let log_level = dotenv::var("LOG_LEVEL")
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::INFO);
        let body_limit = dotenv::var("BODY_LIMIT")
            .ok()
            .and_then(|limit| limit.parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT);

        Self {
            database_url,
            log_level,
            body_limit,
        }
    }

    /// Installs the global tracing subscriber. Rocket's own log output is bridged into it.
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level)
            .with_timer(tracing_subscriber::fmt::time())
            .with_level(true)
            .compact()
            .init();
    }
}
