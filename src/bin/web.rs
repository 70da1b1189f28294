//! Single binary web server: JSON API over the league scheduler.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_scheduler::{
    create_season_playoffs, write_matches_csv, ClubId, Locale, PlayoffOverrides, ScheduleError,
    Season, SeasonConfig, SeasonId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-season entry: season data + last activity time (for auto-cleanup).
struct SeasonEntry {
    season: Season,
    last_activity: Instant,
}

/// In-memory state: seasons by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<SeasonId, SeasonEntry>>>;

/// Inactivity threshold: seasons not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreatePlayoffsBody {
    /// Qualified clubs, best first.
    qualified: Vec<ClubId>,
    #[serde(default)]
    overrides: Option<PlayoffOverrides>,
}

#[derive(Deserialize)]
struct CsvQuery {
    #[serde(default)]
    locale: Locale,
}

/// Path segment: season id (e.g. /api/seasons/{id})
#[derive(Deserialize)]
struct SeasonPath {
    id: SeasonId,
}

fn schedule_error(e: &ScheduleError) -> HttpResponse {
    HttpResponse::BadRequest()
        .json(serde_json::json!({ "error": e.code(), "message": e.to_string() }))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "season_not_found" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-scheduler",
    })
}

/// Create a season and its regular-season calendar.
#[post("/api/seasons")]
async fn api_create_season(state: AppState, body: Json<SeasonConfig>) -> HttpResponse {
    let season = match Season::new(Uuid::new_v4(), body.into_inner()) {
        Ok(season) => season,
        Err(e) => return schedule_error(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&season);
    g.insert(
        season.id,
        SeasonEntry {
            season,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a season by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/seasons/{id}")]
async fn api_get_season(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.season)
        }
        None => not_found(),
    }
}

/// Confirm every regular-season match is played.
#[post("/api/seasons/{id}/finish")]
async fn api_finish_regular_season(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match entry.season.confirm_regular_season_finished() {
        Ok(()) => HttpResponse::Ok().json(&entry.season),
        Err(e) => schedule_error(&e),
    }
}

/// Build the playoff bracket from the qualified clubs.
#[post("/api/seasons/{id}/playoffs")]
async fn api_create_playoffs(
    state: AppState,
    path: Path<SeasonPath>,
    body: Json<CreatePlayoffsBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    match create_season_playoffs(&mut entry.season, &body.qualified, body.overrides.as_ref()) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => schedule_error(&e),
    }
}

/// All scheduled matches of a season as CSV.
#[get("/api/seasons/{id}/matches.csv")]
async fn api_matches_csv(
    state: AppState,
    path: Path<SeasonPath>,
    query: Query<CsvQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    let mut body = Vec::new();
    if let Err(e) = write_matches_csv(&mut body, entry.season.all_matches(), query.locale) {
        log::error!("CSV export failed for season {}: {}", path.id, e);
        return HttpResponse::InternalServerError().body("csv error");
    }
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(body)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<SeasonId, SeasonEntry>::new()));

    // Background task: every 30 minutes, remove seasons inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive season(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_season)
            .service(api_get_season)
            .service(api_finish_regular_season)
            .service(api_create_playoffs)
            .service(api_matches_csv)
    })
    .bind(bind)?
    .run()
    .await
}
