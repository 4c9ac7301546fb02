//! POST /ask: answers a question about the portfolio owner.

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use tracing::{debug, error};

use crate::{
    core::app_state::AppState,
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Prefix of the answer when anything on the request path failed.
pub const AI_ERROR_PREFIX: &str = "AI ERROR:";

/// Handler: POST /ask
///
/// Always responds 200 once the body is accepted; failures are reported as
/// `{"answer": "AI ERROR: ..."}`.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"Tell me about your VPC project"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AskRequest>,
) -> Json<AskResponse> {
    let request_id = headers
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-");

    debug!(request_id = %request_id, question = %body.question, "ask: start");

    let answer = match state.assistant.ask(&body.question).await {
        Ok(answer) => {
            debug!(
                request_id = %request_id,
                intent = %answer.intent.map(|i| i.as_str()).unwrap_or("-"),
                source = ?answer.source,
                "ask: answered"
            );
            answer.text
        }
        Err(err) => {
            error!(request_id = %request_id, error = %err, "ask: failed");
            format!("{AI_ERROR_PREFIX} {err}")
        }
    };

    Json(AskResponse { answer })
}
