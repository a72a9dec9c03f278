use super::error::ApiError;
use super::AppState;
use crate::model::{
    CommentId, CustomerId, Order, OrderId, OrderStatus, PlaceOrder, ReactOutcome, ReactionTally,
    RestaurantId,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body of `POST /comments/:comment_id/react`. Both fields are required; they are optional
/// here so a missing one is reported by name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactRequest {
    pub customer_id: Option<CustomerId>,
    pub is_like: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusRequest {
    pub order_ids: Vec<OrderId>,
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusResponse {
    pub updated_count: usize,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn react(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    body: Result<Json<ReactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReactOutcome>), ApiError> {
    let Path(comment_id) = path?;
    let Json(body) = body?;
    let customer = body
        .customer_id
        .ok_or_else(|| ApiError::BadRequest("customerId is required".into()))?;
    let is_like = body
        .is_like
        .ok_or_else(|| ApiError::BadRequest("isLike is required".into()))?;

    let outcome = state
        .clients
        .reactions
        .react(customer, CommentId(comment_id), is_like)
        .await?;
    let status = if outcome.status.is_creation() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome)))
}

pub async fn reactions(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<ReactionTally>, ApiError> {
    let Path(comment_id) = path?;
    let comment = CommentId(comment_id);
    state.clients.comments.fetch(comment).await?;
    Ok(Json(state.clients.reactions.tally(comment).await?))
}

pub async fn place_order(
    State(state): State<AppState>,
    body: Result<Json<PlaceOrder>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(request) = body?;
    let order = state.clients.orders.place_order(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `PATCH|PUT /orders/status`. Admin only when a token is configured.
pub async fn bulk_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<BulkStatusRequest>, JsonRejection>,
) -> Result<Json<BulkStatusResponse>, ApiError> {
    authorize(&state, &headers)?;
    let Json(request) = body?;
    let updated_count = state
        .clients
        .orders
        .bulk_set_status(&request.order_ids, request.status)
        .await?;
    Ok(Json(BulkStatusResponse { updated_count }))
}

pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(restaurant_id) = path?;
    state
        .clients
        .delete_restaurant(RestaurantId(restaurant_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Accepts `Authorization: Token <admin token>`.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = state.admin_token.as_deref() else {
        return Ok(());
    };
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Token "));
    match presented {
        Some(token) if token.trim() == expected => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}
