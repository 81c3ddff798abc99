use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{Config, QueryConfig};
use crate::error::RhymeError;
use crate::location::Location;
use crate::nikkud::{self, NikkudMark, NIKKUD};
use crate::rhyme_index::RhymeIndex;
use crate::rhymer::RhymeEntry;

#[derive(Deserialize)]
pub struct RhymeRequest {
    pub ending: String,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct RhymeResponse {
    pub ending: String,
    pub total_count: usize,
    pub count: usize,
    pub offset: usize,
    pub results: Vec<RhymeEntry>,
    pub processing_time_ms: u128,
}

#[derive(Serialize)]
pub struct VerseResponse {
    pub location: Location,
    pub reference: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct NikkudResponse {
    pub marks: &'static [NikkudMark],
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct AppState {
    pub index: Arc<RhymeIndex>,
    pub query: QueryConfig,
}

fn error_response(err: &RhymeError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
    };

    match err {
        RhymeError::Format(_) => HttpResponse::BadRequest().json(body),
        RhymeError::UnknownBook(_)
        | RhymeError::UnknownWord(_)
        | RhymeError::OutOfRange(_)
        | RhymeError::LocationMismatch { .. } => HttpResponse::NotFound().json(body),
        RhymeError::CorpusFormat { .. }
        | RhymeError::DuplicateBook(_)
        | RhymeError::Io { .. } => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

fn rhyme_response(data: &AppState, request: &RhymeRequest) -> HttpResponse {
    let start_time = std::time::Instant::now();

    let offset = request.offset.unwrap_or(0);
    let limit = data.query.page_limit(request.limit);
    let page = data.index.rhymer().report_page(&request.ending, offset, limit);

    let processing_time = start_time.elapsed().as_millis();
    log::debug!(
        "ending {:?}: {} matches, returning {} from {} in {} ms",
        request.ending,
        page.total_count,
        page.results.len(),
        offset,
        processing_time
    );

    let response = RhymeResponse {
        ending: request.ending.clone(),
        total_count: page.total_count,
        count: page.results.len(),
        offset: page.offset,
        results: page.results,
        processing_time_ms: processing_time,
    };

    HttpResponse::Ok().json(response)
}

pub async fn rhymes_get_handler(
    data: web::Data<AppState>,
    query: web::Query<RhymeRequest>,
) -> Result<HttpResponse> {
    Ok(rhyme_response(&data, &query))
}

pub async fn rhymes_post_handler(
    data: web::Data<AppState>,
    request: web::Json<RhymeRequest>,
) -> Result<HttpResponse> {
    Ok(rhyme_response(&data, &request))
}

pub async fn stats_handler(data: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(data.index.get_stats()))
}

pub async fn nikkud_handler() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(NikkudResponse { marks: NIKKUD }))
}

pub async fn nikkud_mark_handler(path: web::Path<String>) -> Result<HttpResponse> {
    let name = path.into_inner();

    match nikkud::lookup(&name) {
        Some(entry) => Ok(HttpResponse::Ok().json(entry)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse {
            error: format!("unknown nikkud mark `{name}`"),
        })),
    }
}

pub async fn verse_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let reference = path.into_inner();

    let verse = Location::parse(&reference).and_then(|location| {
        let text = data.index.corpus().get(&location.book)?.get(&location)?;
        Ok(VerseResponse {
            reference: location.to_string(),
            text: text.to_string(),
            location,
        })
    });

    match verse {
        Ok(verse) => Ok(HttpResponse::Ok().json(verse)),
        Err(err) => Ok(error_response(&err)),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/rhymes", web::get().to(rhymes_get_handler))
        .route("/api/rhymes", web::post().to(rhymes_post_handler))
        .route("/api/stats", web::get().to(stats_handler))
        .route("/api/nikkud", web::get().to(nikkud_handler))
        .route("/api/nikkud/{name}", web::get().to(nikkud_mark_handler))
        .route("/api/verse/{location}", web::get().to(verse_handler));
}

pub async fn start_web_server(index: RhymeIndex, config: &Config) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        index: Arc::new(index),
        query: config.query,
    });

    let (host, port) = config.bind_address();
    log::info!("starting web server on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
