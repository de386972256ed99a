//! In-memory post repository - same contract as the PostgreSQL one, no database.
//!
//! Data is lost on process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    last_id: PostId,
}

/// In-memory post repository backed by a `Vec` under an async `RwLock`.
///
/// Ids are assigned from a counter that is never rewound, so deleted ids are
/// not reused.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.store.read().await.posts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;

        let mut posts = store.posts.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(posts)
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        store.last_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id sequence exhausted".to_string()))?;

        let (title, content) = draft.into_parts();
        let post = Post {
            id: store.last_id,
            title,
            content,
            created_at: Utc::now(),
        };
        store.posts.push(post.clone());

        Ok(post)
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        let (title, content) = draft.into_parts();
        post.title = title;
        post.content = content;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);

        if store.posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
