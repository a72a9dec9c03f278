//! # Comment Actor
//!
//! Customer comments on restaurants. Comments are soft-deactivated through
//! [`CommentClient::deactivate`](crate::clients::CommentClient::deactivate); the reaction
//! ledger refuses reactions on inactive comments.

use crate::clients::{CommentClient, CustomerClient, RestaurantClient};
use crate::customer_actor::CustomerError;
use crate::model::{required, Comment, CommentCreate, CommentId, CommentQuery, CommentUpdate, NoAction};
use crate::restaurant_actor::RestaurantError;
use actor_framework::{ActorEntity, ResourceActor};
use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentError {
    /// The comment, its author or its restaurant was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Comment validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl_actor_error!(CommentError);
impl_error_from!(CommentError <- CustomerError, RestaurantError);

/// Author and subject lookups for new comments.
pub type CommentContext = (CustomerClient, RestaurantClient);

/// Creates a new Comment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Comment>, CommentClient) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, CommentClient::new(client))
}

fn validate_rating(rating: Option<u8>) -> Result<Option<u8>, CommentError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => Err(CommentError::ValidationError(format!(
            "rating must be between 1 and 5, got {}",
            r
        ))),
        _ => Ok(rating),
    }
}

#[async_trait]
impl ActorEntity for Comment {
    type Id = CommentId;
    type Create = CommentCreate;
    type Update = CommentUpdate;
    type Action = NoAction;
    type ActionResult = ();
    type Query = CommentQuery;
    type Key = ();
    type Context = CommentContext;
    type Error = CommentError;

    fn from_create_params(id: CommentId, params: CommentCreate) -> Result<Self, Self::Error> {
        let now = Utc::now();
        Ok(Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            text: required("text", &params.text).map_err(CommentError::ValidationError)?,
            rating: validate_rating(params.rating)?,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn matches(&self, query: &CommentQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, ctx: &CommentContext) -> Result<(), Self::Error> {
        let (customers, restaurants) = ctx;
        customers.fetch(self.customer).await?;
        restaurants.fetch(self.restaurant).await?;
        Ok(())
    }

    async fn on_update(&mut self, update: CommentUpdate, _ctx: &CommentContext) -> Result<(), Self::Error> {
        if let Some(text) = update.text {
            self.text = required("text", &text).map_err(CommentError::ValidationError)?;
        }
        if let Some(rating) = update.rating {
            self.rating = validate_rating(rating)?;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &CommentContext) -> Result<(), Self::Error> {
        match action {}
    }
}
