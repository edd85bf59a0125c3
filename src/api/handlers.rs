use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::Value;
use std::sync::Arc;

use crate::relay::{MinwonQuery, RelayClient, RelayError};

use super::models::RelayFailure;

/// Relays one similarity lookup to the upstream minwon API. Failures are
/// absorbed into the payload rather than surfaced as HTTP fault statuses;
/// existing callers inspect the body shape, not the status code.
pub async fn minwon_handler(
    State(relay): State<Arc<RelayClient>>,
    Query(query): Query<MinwonQuery>,
) -> Json<Value> {
    match relay.similar_complaints(&query).await {
        Ok(body) => Json(body),
        Err(err) => {
            tracing::warn!("relay failed: {err:#}");
            let failure = match err {
                RelayError::UpstreamStatus { ref body, .. } => RelayFailure {
                    error: err.to_string(),
                    response: Some(body.clone()),
                },
                RelayError::Transport(_) => RelayFailure {
                    error: err.to_string(),
                    response: None,
                },
            };
            Json(serde_json::to_value(failure).unwrap_or_else(|_| Value::Null))
        }
    }
}
