use super::{CustomerId, RestaurantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_id!(Comment, "comment");

/// A customer's comment on a restaurant.
///
/// Comments are deactivated rather than deleted; an inactive comment accepts no new reactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub customer: CustomerId,
    pub restaurant: RestaurantId,
    pub text: String,
    /// 1 to 5.
    pub rating: Option<u8>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreate {
    pub customer: CustomerId,
    pub restaurant: RestaurantId,
    pub text: String,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdate {
    pub text: Option<String>,
    /// `Some(None)` (JSON `null`) clears the rating; absent leaves it alone.
    #[serde(default, deserialize_with = "super::present")]
    pub rating: Option<Option<u8>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct CommentQuery {
    pub customer: Option<CustomerId>,
    pub restaurant: Option<RestaurantId>,
    pub is_active: Option<bool>,
}

impl CommentQuery {
    pub fn matches(&self, c: &Comment) -> bool {
        self.customer.map_or(true, |id| id == c.customer)
            && self.restaurant.map_or(true, |id| id == c.restaurant)
            && self.is_active.map_or(true, |a| a == c.is_active)
    }
}
