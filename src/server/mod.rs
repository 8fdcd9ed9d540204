//! HTTP surface of the dashboard
//!
//! `GET /` serves the page, `GET /api/initial` renders every chart from the
//! dropdown defaults and `POST /api/update` dispatches one dropdown change to
//! its bindings. The record table is shared read-only across requests.

pub mod page;

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::bindings::{BindingTable, ChartUpdate};
use crate::config::ServerConfig;
use crate::data::RecordTable;
use crate::error::{DashboardError, Result};
use crate::layout::PageLayout;

/// Shared, immutable server context
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RecordTable>,
    pub bindings: Arc<BindingTable>,
    pub layout: Arc<PageLayout>,
}

impl AppState {
    pub fn new(table: RecordTable) -> Self {
        Self {
            table: Arc::new(table),
            bindings: Arc::new(BindingTable::loan_dashboard()),
            layout: Arc::new(PageLayout::loan_dashboard()),
        }
    }
}

/// A dropdown change reported by the page
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub source: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateBatch {
    pub updates: Vec<ChartUpdate>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl DashboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::UnknownEventSource { .. } => StatusCode::NOT_FOUND,
            DashboardError::UnknownSelection { .. }
            | DashboardError::ColumnNotAllowed { .. }
            | DashboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(%status, "{}", self);
        let body = ErrorBody {
            error: self.title(),
            message: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/initial", get(initial))
        .route("/api/update", post(update))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&state.layout))
}

async fn layout(State(state): State<AppState>) -> Json<PageLayout> {
    Json(state.layout.as_ref().clone())
}

async fn initial(State(state): State<AppState>) -> Result<Json<UpdateBatch>> {
    let updates = state.bindings.initial_render(&state.table, &state.layout)?;
    Ok(Json(UpdateBatch { updates }))
}

async fn update(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<UpdateBatch>> {
    let Json(request) =
        payload.map_err(|rejection| DashboardError::InvalidRequest(rejection.body_text()))?;
    tracing::debug!(source = %request.source, value = %request.value, "dropdown changed");
    let updates = state
        .bindings
        .dispatch(&state.table, &request.source, &request.value)?;
    Ok(Json(UpdateBatch { updates }))
}

async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.address()).await?;
    tracing::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::figure::Trace;
    use crate::constants::ids;
    use crate::data::fixtures;
    use axum::extract::FromRequest;
    use axum::http::header;

    fn state() -> AppState {
        AppState::new(fixtures::sample_table())
    }

    fn request(
        source: &str,
        value: &str,
    ) -> std::result::Result<Json<UpdateRequest>, JsonRejection> {
        Ok(Json(UpdateRequest {
            source: source.to_string(),
            value: value.to_string(),
        }))
    }

    async fn decode(body: &'static str) -> std::result::Result<Json<UpdateRequest>, JsonRejection> {
        let req = Request::builder()
            .method("POST")
            .uri("/api/update")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        Json::<UpdateRequest>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_initial_renders_four_charts() {
        let Json(batch) = initial(State(state())).await.unwrap();
        assert_eq!(batch.updates.len(), 4);
    }

    #[tokio::test]
    async fn test_update_returns_rendered_figures() {
        let Json(batch) = update(State(state()), request(ids::PIE_DROPDOWN, "previous_loan"))
            .await
            .unwrap();

        assert_eq!(batch.updates.len(), 1);
        assert_eq!(batch.updates[0].output, ids::PIE_CHART);
        match &batch.updates[0].figure.data[0] {
            Trace::Pie(trace) => assert_eq!(trace.labels, vec!["Yes", "No"]),
            other => panic!("expected pie trace, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_errors_map_to_status() {
        let err = update(State(state()), request(ids::SCATTER_DROPDOWN, "bogus"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = update(State(state()), request("bogus-dropdown", "age"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_body_gets_json_error() {
        let payload = decode("{\"source\": \"pie-dropdown\"").await;
        assert!(payload.is_err());

        let response = update(State(state()), payload)
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid Request");
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request"));
    }

    #[tokio::test]
    async fn test_missing_field_gets_json_error() {
        let payload = decode("{\"value\": \"age\"}").await;
        let err = update(State(state()), payload).await.unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_update_body_serializes_as_plotly_figure() {
        let Json(batch) = update(State(state()), request(ids::HIST_DROPDOWN, "age"))
            .await
            .unwrap();
        let value = serde_json::to_value(&batch).unwrap();

        assert_eq!(value["updates"][0]["output"], "histogram");
        assert_eq!(value["updates"][0]["figure"]["data"][0]["type"], "histogram");
        assert_eq!(value["updates"][1]["figure"]["data"][0]["type"], "heatmap");
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let Html(body) = index(State(state())).await;
        assert!(body.contains("Loan Data Dashboard"));
    }
}
