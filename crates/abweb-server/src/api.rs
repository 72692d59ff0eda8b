//! Routes and handlers for the session API.
//!
//! All routes live under `/api/sessions/{session}`; a session is created
//! lazily on first touch. Mutating handlers respond with the updated render
//! projection so the client can redraw without a second round trip.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::{delete, get, post, put};
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use abweb_core::NodeId;
use abweb_graph::document::WebDocument;
use abweb_graph::projection::{node_summaries, NodeSummary, Projection};
use abweb_graph::store::{GraphError, Web};

use crate::state::AppState;

/// Fallback text when an add-above/add-below request carries a blank body,
/// mirroring the sidebar's placeholder.
const DEFAULT_QUESTION: &str = "How might we … ?";

/// Handler error: status code plus a plain-text message.
type ApiError = (StatusCode, String);

/// Request body carrying a statement text.
#[derive(Debug, Deserialize)]
struct TextBody {
    text: String,
}

/// Request body carrying a node id.
#[derive(Debug, Deserialize)]
struct CurrentBody {
    id: u64,
}

/// The projection plus the editing pointers, returned by every mutating
/// endpoint and by `GET .../graph`.
#[derive(Debug, Serialize)]
struct GraphResponse {
    #[serde(flatten)]
    projection: Projection,
    current_id: Option<u64>,
    root_id: Option<u64>,
}

impl GraphResponse {
    fn from_web(web: &Web) -> Self {
        Self {
            projection: Projection::from_web(web),
            current_id: web.current().map(NodeId::as_u64),
            root_id: web.root().map(NodeId::as_u64),
        }
    }
}

/// Node summaries for picker controls.
#[derive(Debug, Serialize)]
struct NodesResponse {
    nodes: Vec<NodeSummary>,
    current_id: Option<u64>,
    root_id: Option<u64>,
}

fn map_graph_error(err: GraphError) -> ApiError {
    match err {
        GraphError::NodeNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/sessions/:session/graph", get(get_graph))
        .route("/api/sessions/:session/nodes", get(get_nodes))
        .route("/api/sessions/:session/root", post(create_root))
        .route("/api/sessions/:session/nodes/:id/above", post(add_above))
        .route("/api/sessions/:session/nodes/:id/below", post(add_below))
        .route("/api/sessions/:session/nodes/:id/text", put(edit_text))
        .route("/api/sessions/:session/nodes/:id", delete(delete_node))
        .route("/api/sessions/:session/current", put(set_current))
        .route("/api/sessions/:session/export", get(export_document))
        .route("/api/sessions/:session/import", post(import_document))
        .layer(cors)
        .with_state(state)
}

/// GET /api/health - liveness probe.
async fn health() -> &'static str {
    "OK"
}

/// GET /api/sessions/{s}/graph - the render projection.
async fn get_graph(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<Json<GraphResponse>, ApiError> {
    let response = state.with_session(&session, |web| GraphResponse::from_web(web))?;
    Ok(Json(response))
}

/// GET /api/sessions/{s}/nodes - node summaries for pickers.
async fn get_nodes(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<Json<NodesResponse>, ApiError> {
    let response = state.with_session(&session, |web| NodesResponse {
        nodes: node_summaries(web),
        current_id: web.current().map(NodeId::as_u64),
        root_id: web.root().map(NodeId::as_u64),
    })?;
    Ok(Json(response))
}

/// POST /api/sessions/{s}/root - create the root question.
///
/// Blank text (after trimming) is rejected; the root control requires a
/// real statement.
async fn create_root(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(body): Json<TextBody>,
) -> Result<Json<GraphResponse>, ApiError> {
    let text = body.text.trim().to_owned();
    if text.is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "root text must not be blank".to_owned()));
    }
    let response = state.with_session(&session, |web| {
        let id = web.set_root(text);
        info!(%session, %id, "created root");
        GraphResponse::from_web(web)
    })?;
    Ok(Json(response))
}

/// POST /api/sessions/{s}/nodes/{id}/above - add a more abstract node.
async fn add_above(
    State(state): State<Arc<AppState>>,
    Path((session, id)): Path<(String, u64)>,
    Json(body): Json<TextBody>,
) -> Result<Json<GraphResponse>, ApiError> {
    let text = question_or_placeholder(&body.text);
    state
        .with_session(&session, |web| {
            let new_id = web.add_above(NodeId::new(id), text)?;
            info!(%session, %new_id, above = id, "added node above");
            Ok(GraphResponse::from_web(web))
        })?
        .map(Json)
        .map_err(map_graph_error)
}

/// POST /api/sessions/{s}/nodes/{id}/below - add a more concrete node.
async fn add_below(
    State(state): State<Arc<AppState>>,
    Path((session, id)): Path<(String, u64)>,
    Json(body): Json<TextBody>,
) -> Result<Json<GraphResponse>, ApiError> {
    let text = question_or_placeholder(&body.text);
    state
        .with_session(&session, |web| {
            let new_id = web.add_below(NodeId::new(id), text)?;
            info!(%session, %new_id, below = id, "added node below");
            Ok(GraphResponse::from_web(web))
        })?
        .map(Json)
        .map_err(map_graph_error)
}

/// PUT /api/sessions/{s}/nodes/{id}/text - replace a node's text.
async fn edit_text(
    State(state): State<Arc<AppState>>,
    Path((session, id)): Path<(String, u64)>,
    Json(body): Json<TextBody>,
) -> Result<Json<GraphResponse>, ApiError> {
    let text = body.text.trim().to_owned();
    state
        .with_session(&session, |web| {
            web.edit_text(NodeId::new(id), text)?;
            Ok(GraphResponse::from_web(web))
        })?
        .map(Json)
        .map_err(map_graph_error)
}

/// PUT /api/sessions/{s}/current - switch the current node.
async fn set_current(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(body): Json<CurrentBody>,
) -> Result<Json<GraphResponse>, ApiError> {
    state
        .with_session(&session, |web| {
            web.set_current(NodeId::new(body.id))?;
            Ok(GraphResponse::from_web(web))
        })?
        .map(Json)
        .map_err(map_graph_error)
}

/// DELETE /api/sessions/{s}/nodes/{id} - delete a node.
///
/// The store may empty itself; any "keep at least one node" gate is client
/// chrome.
async fn delete_node(
    State(state): State<Arc<AppState>>,
    Path((session, id)): Path<(String, u64)>,
) -> Result<Json<GraphResponse>, ApiError> {
    state
        .with_session(&session, |web| {
            web.delete_node(NodeId::new(id))?;
            info!(%session, id, "deleted node");
            Ok(GraphResponse::from_web(web))
        })?
        .map(Json)
        .map_err(map_graph_error)
}

/// GET /api/sessions/{s}/export - the wire document, pretty-printed.
async fn export_document(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let document = state.with_session(&session, |web| WebDocument::from_web(web))?;
    let text = document
        .to_json_string()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], text))
}

/// POST /api/sessions/{s}/import - wholesale replace from a document.
///
/// The document is validated before the session store is touched, so a
/// malformed upload leaves the prior web intact.
async fn import_document(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(document): Json<WebDocument>,
) -> Result<Json<GraphResponse>, ApiError> {
    let imported =
        document.into_web().map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    let response = state.with_session(&session, |web| {
        *web = imported;
        info!(%session, nodes = web.node_count(), "imported document");
        GraphResponse::from_web(web)
    })?;
    Ok(Json(response))
}

fn question_or_placeholder(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        DEFAULT_QUESTION.to_owned()
    } else {
        trimmed.to_owned()
    }
}
