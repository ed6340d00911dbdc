use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::analyze::{AnalysisRequest, AnalysisResult, SentimentCategory, SentimentEngine};
use crate::config;
use crate::error::AnalyzeError;
use crate::language::LanguageEntry;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<SentimentEngine>,
    expose_error_details: bool,
}

impl AppState {
    pub fn new(engine: Arc<SentimentEngine>, expose_error_details: bool) -> Self {
        Self {
            engine,
            expose_error_details,
        }
    }

    /// Error details follow the deployment environment (`SHUTTLE_ENV`).
    pub fn from_env(engine: Arc<SentimentEngine>) -> Self {
        Self::new(engine, config::is_dev_env())
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/languages", get(languages))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

/// Convenience: router over `engine` with environment-derived settings.
pub fn router(engine: Arc<SentimentEngine>) -> Router {
    create_router(AppState::from_env(engine))
}

#[derive(Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResp {
    text: String,
    language: String,
    sentiment: SentimentCategory,
    score: i32,
    comparative: f64,
    positive_words: Vec<String>,
    negative_words: Vec<String>,
    word_count: usize,
    details: AnalyzeDetails,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeDetails {
    num_words: usize,
    language: String,
}

impl From<AnalysisResult> for AnalyzeResp {
    fn from(r: AnalysisResult) -> Self {
        Self {
            text: r.normalized_text,
            language: r.language_display_name,
            sentiment: r.sentiment_category,
            score: r.score,
            comparative: r.comparative,
            positive_words: r.positive_words,
            negative_words: r.negative_words,
            word_count: r.word_count,
            details: AnalyzeDetails {
                num_words: r.word_count,
                language: r.language_code,
            },
        }
    }
}

/// Error envelope: `{"error": "...", "details": "..."}`; `details` only in dev.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                details: None,
            },
        }
    }

    fn from_analyze(err: AnalyzeError, expose_details: bool) -> Self {
        let status = match err {
            AnalyzeError::InvalidInput => StatusCode::BAD_REQUEST,
            AnalyzeError::AnalysisFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let mut out = Self::new(status, err.public_message());
        if expose_details {
            out.body.details = err.detail().map(str::to_string);
        }
        out
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeReq>, JsonRejection>,
) -> Result<Json<AnalyzeResp>, ApiError> {
    let Json(body) = payload.map_err(|rej| {
        warn!(error = %rej.body_text(), "rejected /analyze body");
        let mut e = ApiError::new(StatusCode::BAD_REQUEST, "Invalid request body");
        if state.expose_error_details {
            e.body.details = Some(rej.body_text());
        }
        e
    })?;

    let text = body.text.unwrap_or_default();
    let req = AnalysisRequest {
        text,
        language: body.language,
    };

    let result = state
        .engine
        .analyze(&req)
        .map_err(|e| ApiError::from_analyze(e, state.expose_error_details))?;
    Ok(Json(result.into()))
}

async fn languages(State(state): State<AppState>) -> Json<Vec<LanguageEntry>> {
    Json(state.engine.languages().to_vec())
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Route not found")
}
