//! Relay HTTP service: validates submissions and forwards them to the chat webhook

use super::message::{compose_chat_message, RelayFirm};
use super::{RelayAck, RelayErrorBody};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Route that accepts form submissions
pub const SUBMIT_PATH: &str = "/api/submit-form";

/// Shared state for relay handlers
#[derive(Debug, Clone)]
pub struct RelayState {
    webhook_url: Option<String>,
    http: reqwest::Client,
}

impl RelayState {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
            http: reqwest::Client::new(),
        }
    }

    pub fn has_webhook(&self) -> bool {
        self.webhook_url.is_some()
    }
}

/// Failures while relaying a submission
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Server configuration error")]
    Configuration,
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("webhook request failed: {0}")]
    Webhook(#[from] reqwest::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::InvalidBody(_) | Self::Webhook(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> RelayErrorBody {
        match self {
            Self::InvalidBody(_) | Self::Webhook(_) => RelayErrorBody {
                error: "Internal server error".to_string(),
                message: Some("Failed to process form submission".to_string()),
            },
            _ => RelayErrorBody {
                error: self.to_string(),
                message: None,
            },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidBody(_) | Self::Webhook(_) => {
                tracing::error!("Error processing form submission: {self}")
            }
            Self::Configuration => tracing::error!("Chat webhook URL is not configured"),
            _ => tracing::warn!("Rejected form submission: {self}"),
        }
        (
            self.status(),
            [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(self.body()),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitBody {
    #[serde(default)]
    firms: Option<Value>,
    #[serde(default)]
    user_email: Option<Value>,
}

/// Build the relay router
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(SUBMIT_PATH, any(submit_form))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn submit_form(State(state): State<RelayState>, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return (
            StatusCode::OK,
            [
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
                (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            ],
        )
            .into_response();
    }

    match relay_submission(&state, &method, &body).await {
        Ok(ack) => (
            StatusCode::OK,
            [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(ack),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

async fn relay_submission(
    state: &RelayState,
    method: &Method,
    body: &[u8],
) -> Result<RelayAck, RelayError> {
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let body: SubmitBody = serde_json::from_slice(body)?;
    let firms = match body.firms {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(RelayError::MissingFields),
    };
    let webhook_url = state
        .webhook_url
        .as_deref()
        .ok_or(RelayError::Configuration)?;

    let firms = firms
        .into_iter()
        .map(serde_json::from_value::<RelayFirm>)
        .collect::<Result<Vec<_>, _>>()?;
    let user_email = body.user_email.as_ref().and_then(Value::as_str);
    let message = compose_chat_message(&firms, user_email, Utc::now());

    state
        .http
        .post(webhook_url)
        .json(&message)
        .send()
        .await?
        .error_for_status()?;

    tracing::info!(
        "Relayed submission with {} firms from {}",
        firms.len(),
        user_email.unwrap_or("unknown sender")
    );
    Ok(RelayAck {
        success: true,
        message: "Form submitted successfully".to_string(),
    })
}
