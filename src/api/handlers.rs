//! HTTP request handlers

use super::page::{form_page, message_page, result_page};
use super::types::{ErrorResponse, HealthResponse, ReasonResponse};
use super::AppState;
use crate::render::render_html;
use crate::session::{run_session, ReasoningForm, SessionResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_form))
        .route("/reason", post(reason_html))
        .route("/api/reason", post(reason_json))
        .route("/health", get(health))
        .with_state(state)
}

async fn serve_form(State(state): State<AppState>) -> Html<String> {
    Html(form_page(&state.config))
}

async fn run(state: &AppState, form: ReasoningForm) -> SessionResponse {
    run_session(
        form,
        state.client_factory.clone(),
        state.shutdown.child_token(),
    )
    .await
}

/// Form submission; always answers with a page
async fn reason_html(State(state): State<AppState>, Form(form): Form<ReasoningForm>) -> Response {
    match run(&state, form).await {
        SessionResponse::Completed(outcome) => {
            Html(result_page(&render_html(&outcome))).into_response()
        }
        SessionResponse::Invalid(e) => {
            (StatusCode::BAD_REQUEST, Html(message_page(&e.to_string()))).into_response()
        }
        SessionResponse::Failed(message) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Html(message_page(&message))).into_response()
        }
    }
}

async fn reason_json(
    State(state): State<AppState>,
    Json(form): Json<ReasoningForm>,
) -> Result<Json<ReasonResponse>, AppError> {
    match run(&state, form).await {
        SessionResponse::Completed(outcome) => Ok(Json(ReasonResponse::from(&outcome))),
        SessionResponse::Invalid(e) => Err(AppError::BadRequest(e.to_string())),
        SessionResponse::Failed(message) => Err(AppError::Internal(message)),
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
