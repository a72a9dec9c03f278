use crate::comment_actor::CommentError;
use crate::model::*;
use tracing::instrument;

entity_client!(Comment, CommentError);

impl CommentClient {
    /// Soft-deletes a comment. It stays listed but accepts no further reactions.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: CommentId) -> Result<Comment, CommentError> {
        let update = CommentUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        Ok(self.inner.update(id, update).await?)
    }
}
