//! # API REST
//!
//! HTTP presentation shell for the ECOG Performance Status recorder.
//!
//! Handles:
//! - The server-rendered assessment form at `/`
//! - JSON endpoints over the reference table and note formatter
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS)
//!
//! Uses `api-shared` for wire types and `ecog-core` for all domain logic.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod html;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AssessmentReq, AssessmentRes, ErrorRes, HealthRes, HealthService, ListScoresRes,
    ScoreDefinitionRes,
};
use ecog_core::{definitions, Assessment, EcogError, EcogScore};

pub use config::ServerConfig;

#[derive(OpenApi)]
#[openapi(
    paths(form, health, list_scores, get_score, create_assessment),
    components(schemas(
        HealthRes,
        ErrorRes,
        ScoreDefinitionRes,
        ListScoresRes,
        AssessmentReq,
        AssessmentRes,
    ))
)]
pub struct ApiDoc;

/// Current form state, carried in the query string.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormQuery {
    /// Patient name or identifier (optional)
    pub patient_id: Option<String>,
    /// Assessment date as `YYYY-MM-DD` (defaults to today)
    pub assessment_date: Option<String>,
    /// Selected score, 0 to 5 (defaults to 0)
    pub score: Option<String>,
}

impl FormQuery {
    fn to_assessment(&self) -> Result<Assessment, EcogError> {
        let score = match self.score.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => text.parse::<EcogScore>()?,
            None => EcogScore::default(),
        };
        Assessment::from_input(
            self.patient_id.as_deref(),
            self.assessment_date.as_deref(),
            i64::from(score.value()),
        )
    }
}

/// Builds the application router with every route, Swagger UI and CORS.
pub fn router() -> Router {
    Router::new()
        .route("/", get(form))
        .route("/health", get(health))
        .route("/api/scores", get(list_scores))
        .route("/api/scores/:score", get(get_score))
        .route("/api/assessments", post(create_assessment))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
}

/// Binds the configured address and serves [`router`] until the process is stopped.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("-- ECOG REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}

fn bad_request(err: EcogError) -> (StatusCode, Json<ErrorRes>) {
    tracing::warn!("Rejected assessment input: {}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorRes {
            error: err.to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/",
    params(FormQuery),
    responses(
        (status = 200, description = "Assessment form with result, summary and note", content_type = "text/html", body = String),
        (status = 400, description = "Invalid score or date", content_type = "text/html", body = String)
    )
)]
/// Render the assessment form
///
/// Every interaction resubmits the form, and the page is recomputed from the query string.
///
/// # Errors
/// Returns `400 Bad Request` with an error page if:
/// - the score is not an integer between 0 and 5, or
/// - the date is not `YYYY-MM-DD`.
async fn form(Query(query): Query<FormQuery>) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match query.to_assessment() {
        Ok(assessment) => Ok(Html(html::render_form_page(&assessment))),
        Err(e) => {
            tracing::warn!("Rejected form input: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Html(html::render_error_page(&e.to_string())),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/scores",
    responses(
        (status = 200, description = "All six ECOG definitions in score order", body = ListScoresRes)
    )
)]
/// List the ECOG reference table
async fn list_scores() -> Json<ListScoresRes> {
    Json(ListScoresRes {
        scores: definitions().iter().map(ScoreDefinitionRes::from).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/scores/{score}",
    params(("score" = i64, Path, description = "ECOG score, 0 to 5")),
    responses(
        (status = 200, description = "Definition for the score", body = ScoreDefinitionRes),
        (status = 400, description = "Score out of range", body = ErrorRes)
    )
)]
/// Look up one ECOG definition
///
/// # Errors
/// Returns `400 Bad Request` if the score is outside 0 to 5.
async fn get_score(
    Path(score): Path<i64>,
) -> Result<Json<ScoreDefinitionRes>, (StatusCode, Json<ErrorRes>)> {
    let score = EcogScore::new(score).map_err(bad_request)?;
    Ok(Json(ScoreDefinitionRes::from(score.definition())))
}

#[utoipa::path(
    post,
    path = "/api/assessments",
    request_body = AssessmentReq,
    responses(
        (status = 200, description = "Derived description, summary and clinical note", body = AssessmentRes),
        (status = 400, description = "Invalid score or date", body = ErrorRes)
    )
)]
/// Render an assessment
///
/// Nothing is stored; the response is computed from the request alone.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the score is outside 0 to 5, or
/// - the date is not `YYYY-MM-DD`.
async fn create_assessment(
    Json(req): Json<AssessmentReq>,
) -> Result<Json<AssessmentRes>, (StatusCode, Json<ErrorRes>)> {
    let assessment = req.to_assessment().map_err(bad_request)?;
    Ok(Json(AssessmentRes::from_assessment(&assessment)))
}
