use rocket::*;

mod database;
mod leaderboard;
mod request_id;
mod response;
mod settings;

use settings::Settings;

#[launch]
fn rocket() -> _ {
    let settings = Settings::from_env();
    settings.init_logging();
    server(settings)
}

/// Builds the leaderboard endpoint around explicit settings.
pub fn server(settings: Settings) -> Rocket<Build> {
    if settings.database_url.is_none() {
        tracing::warn!("DATABASE_URL is not set, score requests will fail");
    }

    rocket::build()
        .mount(
            "/",
            routes![
                database::requests::preflight,
                database::requests::top_scores,
                database::requests::add_score
            ],
        )
        .mount("/", response::MethodNotAllowed)
        .manage(settings)
}
