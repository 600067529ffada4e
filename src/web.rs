use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::PlannerError;
use crate::request::{validate_request, TimetableRequest};
use crate::schedule::{generate_timetable, TimetableEntry};

/// Shared, read-only server state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Reference date used instead of the system clock when set
    pub fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    timetable: Vec<TimetableEntry>,
}

/// Server bind settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

// Timetable generation endpoint
async fn generate(
    req: web::Json<TimetableRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PlannerError> {
    let req = req.into_inner();
    validate_request(&req)?;

    let today = state.today();
    debug!(subjects = req.subjects.len(), hours = req.study_hours_per_day, %today, "Generating timetable");

    let timetable = generate_timetable(today, &req.subjects, req.study_hours_per_day);
    info!(entries = timetable.len(), "Timetable generated");

    Ok(HttpResponse::Ok().json(TimetableResponse { timetable }))
}

// Planner page
async fn index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected timetable request: {}", err);
    PlannerError::Payload(err.to_string()).into()
}

/// Registers the planner routes; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(index))
        .route("/generate-timetable", web::post().to(generate));
}

pub async fn start_server(config: ServerConfig, state: AppState) -> std::io::Result<()> {
    let app_state = web::Data::new(state);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    info!("Listening on http://{}:{}", config.host, config.port);
    server.bind((config.host.as_str(), config.port))?.run().await
}
