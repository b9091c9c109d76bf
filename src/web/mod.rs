//! HTTP surface of the planner.
//!
//! - `GET  /`          empty trip form
//! - `POST /`          submit the form, render the itinerary or an error banner
//! - `POST /api/plan`  same flow with a JSON body, returns the plan payload
//! - `GET  /health`    liveness plus whether an API key is configured

pub mod templates;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use tera::Tera;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::{
    core::TripPlanner,
    error::{PlannerError, Result},
    types::{PlanOutcome, TripForm, TripRequest},
};

pub use templates::{init_templates, PageState};

#[derive(Clone)]
pub struct AppState {
    planner: Arc<TripPlanner>,
    templates: Arc<Tera>,
}

impl AppState {
    pub fn new(planner: TripPlanner) -> Result<Self> {
        Ok(Self {
            planner: Arc::new(planner),
            templates: init_templates()?,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/plan", post(plan_json))
        .route("/health", get(health))
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!(bind_address = %address, "itinerary planner listening");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(wait_for_shutdown())
        .await
}

async fn wait_for_shutdown() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

async fn show_form(State(state): State<AppState>) -> Response {
    render_page(&state, StatusCode::OK, &PageState::AwaitingSubmission)
}

async fn submit_form(State(state): State<AppState>, Form(form): Form<TripForm>) -> Response {
    let destination = form.destination_text();
    let (status, outcome) = plan_from_form(&state, form).await;
    render_page(&state, status, &PageState::rendered(destination, outcome))
}

async fn plan_json(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TripForm>, JsonRejection>,
) -> Response {
    let request = payload
        .map_err(|rejection| {
            PlannerError::InvalidInput(format!("Invalid JSON body: {}", rejection.body_text()))
        })
        .and_then(|Json(form)| TripRequest::try_from(form));

    match request {
        Ok(request) => Json(state.planner.plan(&request).await).into_response(),
        Err(err) => {
            warn!(error = %err, "rejected plan request");
            (StatusCode::BAD_REQUEST, Json(err.to_error_payload())).into_response()
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "api_key_configured": state.planner.api_key_configured(),
    }))
}

async fn plan_from_form(state: &AppState, form: TripForm) -> (StatusCode, PlanOutcome) {
    match TripRequest::try_from(form) {
        Ok(request) => (StatusCode::OK, state.planner.plan(&request).await),
        Err(err) => {
            warn!(error = %err, "rejected trip form");
            (StatusCode::BAD_REQUEST, PlanOutcome::failed(err.user_message()))
        }
    }
}

fn render_page(state: &AppState, status: StatusCode, page: &PageState) -> Response {
    match page.render(&state.templates) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(error = %err, "failed to render planner page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<h1>Template Error</h1><p>{}</p>", err.user_message())),
            )
                .into_response()
        }
    }
}
