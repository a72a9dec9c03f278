//! Mapping of domain errors onto HTTP responses.

use crate::comment_actor::CommentError;
use crate::customer_actor::CustomerError;
use crate::error::{Error, ErrorKind};
use crate::order_actor::OrderError;
use crate::payment_actor::PaymentError;
use crate::reaction_actor::ReactionError;
use crate::restaurant_actor::RestaurantError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

/// Error returned by handlers, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// The request itself is malformed; nothing reached an actor.
    BadRequest(String),
    Unauthorized,
    Domain(Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Domain(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Unauthorized => "Invalid or missing admin token".to_string(),
            ApiError::Domain(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if status.is_server_error() {
            error!(%status, %detail, "Request failed");
        } else {
            warn!(%status, %detail, "Request rejected");
        }
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

macro_rules! from_domain {
    ($($source:ty),+) => {
        $(
            impl From<$source> for ApiError {
                fn from(e: $source) -> Self {
                    ApiError::Domain(e.into())
                }
            }
        )+
    };
}

from_domain!(
    Error,
    RestaurantError,
    CustomerError,
    OrderError,
    PaymentError,
    CommentError,
    ReactionError
);
