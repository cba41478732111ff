//! HTTP transport.
//!
//! Streamable HTTP on `/mcp` plus the legacy HTTP+SSE pair (`/sse`,
//! `/message`). Sessions are identified by the `Mcp-Session-Id` header (or a
//! `sessionId` query parameter for legacy clients); events are buffered per
//! session so SSE reconnects with `Last-Event-ID` replay what was missed.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::protocol::{JsonRpcRequest, McpHandler, SERVER_NAME};
use super::session::{BufferedEvent, Session, SessionManager};

/// Session header defined by the streamable HTTP transport.
pub const SESSION_HEADER: &str = "Mcp-Session-Id";

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Query parameters accepted by the session-aware endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

/// Shared state for HTTP handlers.
pub struct HttpState {
    pub handler: McpHandler,
    pub sessions: Arc<SessionManager>,
    /// Base URL for endpoint announcements.
    pub base_url: String,
}

/// Create the HTTP router for MCP.
///
/// `base_url` is announced to legacy SSE clients; it defaults to
/// `http://localhost:{port}`.
pub fn create_router(handler: McpHandler, port: u16, base_url: Option<String>) -> Router {
    let sessions = Arc::new(SessionManager::new());
    Arc::clone(&sessions).start_cleanup_task();

    let base_url = base_url
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| format!("http://localhost:{port}"));

    let state = Arc::new(HttpState { handler, sessions, base_url });

    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Streamable HTTP transport
        .route("/mcp", post(handle_mcp_post).get(handle_mcp_get).delete(handle_mcp_delete))
        // Legacy HTTP+SSE transport
        .route("/sse", get(handle_sse_legacy))
        .route("/message", post(handle_mcp_post))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readiness_check(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let ctx = state.handler.context();
    Json(serde_json::json!({
        "status": "ready",
        "service": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.sessions.session_count().await,
        "tools": state.handler.tool_count(),
        "cachedContent": ctx.content_cache.entry_count(),
        "cachedResponses": ctx.client.cached_responses()
    }))
}

/// Session id from the header, falling back to the query string.
fn requested_session<'a>(headers: &'a HeaderMap, query: &'a SessionQuery) -> Option<&'a str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .or(query.session_id.as_deref())
}

fn last_event_id(headers: &HeaderMap) -> u64 {
    headers
        .get("Last-Event-ID")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn with_session_header(mut response: Response, session: &Session) -> Response {
    if let Ok(value) = HeaderValue::from_str(&session.id) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    response
}

/// POST `/mcp` and `/message`: one JSON-RPC message in, one response out.
async fn handle_mcp_post(
    State(state): State<Arc<HttpState>>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
    Json(req): Json<JsonRpcRequest>,
) -> Response {
    tracing::debug!(method = %req.method, "Handling MCP POST request");

    let session = state.sessions.get_or_create_session(requested_session(&headers, &query)).await;

    let Some(response) = state.handler.handle(&req).await else {
        return with_session_header(StatusCode::ACCEPTED.into_response(), &session);
    };

    // Tool results are also buffered so an SSE client can replay them.
    if req.method == "tools/call" {
        if let Ok(data) = serde_json::to_string(&response) {
            session.push_event("message", data).await;
        }
    }

    with_session_header(Json(response).into_response(), &session)
}

/// DELETE `/mcp`: end the session named in the header.
async fn handle_mcp_delete(
    State(state): State<Arc<HttpState>>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
) -> StatusCode {
    match requested_session(&headers, &query) {
        Some(id) if state.sessions.remove_session(id).await => StatusCode::NO_CONTENT,
        Some(_) => StatusCode::NOT_FOUND,
        None => StatusCode::BAD_REQUEST,
    }
}

/// GET `/mcp`: SSE stream of the session's events.
async fn handle_mcp_get(
    State(state): State<Arc<HttpState>>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
) -> Response {
    let last_event_id = last_event_id(&headers);
    let session = state.sessions.get_or_create_session(requested_session(&headers, &query)).await;

    tracing::info!(session_id = %session.id, last_event_id, "New SSE stream connection");

    let stream = replay_then_live(&session, last_event_id).await;
    with_session_header(sse_response(stream), &session)
}

/// GET `/sse`: legacy transport. Announces the `/message` endpoint first.
async fn handle_sse_legacy(
    State(state): State<Arc<HttpState>>,
    headers: HeaderMap,
    Query(query): Query<SessionQuery>,
) -> Response {
    let last_event_id = last_event_id(&headers);
    let session = state.sessions.get_or_create_session(requested_session(&headers, &query)).await;

    tracing::info!(session_id = %session.id, last_event_id, "New legacy SSE connection");

    let endpoint = format!("{}/message?sessionId={}", state.base_url, session.id);
    let announce = (last_event_id == 0).then(|| {
        Ok::<_, Infallible>(Event::default().event("endpoint").data(endpoint))
    });

    let stream = stream::iter(announce).chain(replay_then_live(&session, last_event_id).await);
    with_session_header(sse_response(stream), &session)
}

fn sse_response<S>(stream: S) -> Response
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    (
        [("X-Accel-Buffering", "no"), ("Cache-Control", "no-cache, no-store, must-revalidate")],
        Sse::new(stream).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL).text("ping")),
    )
        .into_response()
}

/// Buffered events after `last_event_id`, then live events.
async fn replay_then_live(
    session: &Session,
    last_event_id: u64,
) -> impl Stream<Item = Result<Event, Infallible>> + use<> {
    let (missed, receiver) = session.replay_from(last_event_id).await;

    let replay = stream::iter(missed.into_iter().map(|e| {
        tracing::debug!(event_id = e.id, "Replaying missed event");
        Ok(e.to_sse_event())
    }));

    let live = BroadcastStream::new(receiver).filter_map(|result: Result<BufferedEvent, _>| async move {
        match result {
            Ok(event) => Some(Ok(event.to_sse_event())),
            Err(e) => {
                tracing::debug!(error = %e, "SSE subscriber lagged");
                None
            }
        }
    });

    replay.chain(live)
}
