use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Post storage port.
///
/// Every method maps to a single atomic statement in the backing store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first (ties broken by descending id).
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Insert a new post; the store assigns `id` and `created_at`.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Replace title and content of an existing post.
    ///
    /// Returns [`RepoError::NotFound`] when no post has the given id.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError>;

    /// Delete a post by id.
    ///
    /// Returns [`RepoError::NotFound`] when no post has the given id.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}
