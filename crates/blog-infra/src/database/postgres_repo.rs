//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, SqlErr};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn repo_error(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return RepoError::Constraint(msg),
        _ => {}
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(count = result.len(), "Listed posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let (title, content) = draft.into_parts();

        let model = post::ActiveModel {
            title: Set(title),
            content: Set(content),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, "Created post");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let (title, content) = draft.into_parts();

        let model = post::ActiveModel {
            id: Unchanged(id),
            title: Set(title),
            content: Set(content),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => repo_error(other),
        })?;

        tracing::debug!(post_id = id, "Updated post");
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}
