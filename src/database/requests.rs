use rocket::{data::Data, http::Status};

use crate::leaderboard::Leaderboard;
use crate::request_id::RequestId;
use crate::response::{Cors, Preflight};
use crate::settings::Settings;

use super::*;

/// Answers cross-origin preflight checks. Works without a configured store.
#[options("/")]
pub fn preflight(request_id: RequestId) -> Preflight {
    tracing::debug!(%request_id, "preflight");
    Preflight
}

/// Fetches the best scores of the game named by the `game` query parameter,
/// `snake` if there is none.
#[get("/?<game>")]
pub async fn top_scores(
    game: Option<String>,
    database: Result<Database<'_>, RequestError>,
    request_id: RequestId,
) -> RequestResult<Cors<Json<Leaderboard>>> {
    let database = database?;
    let game = game.unwrap_or_else(|| DEFAULT_GAME_NAME.to_owned());

    let entries = database.top_scores(&game).await?;

    tracing::info!(%request_id, %game, entries = entries.len(), "fetched top scores");
    Ok(Cors(Json(Leaderboard::new(game, entries))))
}

/// Records a new score. The body is optional, unreadable bodies count as empty,
/// and the stored values are echoed back. Bodies over the configured limit are
/// rejected rather than recorded with defaults.
#[post("/", data = "<data>")]
pub async fn add_score(
    data: Data<'_>,
    database: Result<Database<'_>, RequestError>,
    settings: &State<Settings>,
    request_id: RequestId,
) -> RequestResult<Cors<(Status, Json<ScoreSaved>)>> {
    let database = database?;

    let body = match data.open(settings.body_limit).into_string().await {
        Ok(body) if body.is_complete() => Some(body.into_inner()),
        Ok(_) => return Err(RequestError::PayloadTooLarge),
        Err(error) => {
            tracing::debug!(%request_id, %error, "unreadable score body");
            None
        }
    };
    let record = ScoreRecord::from(ScoreSubmission::from_body(body.as_deref()));

    database.insert_score(&record).await?;

    tracing::info!(
        %request_id,
        player_name = %record.player_name,
        game = %record.game_name,
        score = record.score,
        "saved score"
    );
    Ok(Cors((Status::Created, Json(ScoreSaved::new(record)))))
}
