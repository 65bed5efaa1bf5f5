//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, TransactionError,
    TransactionTrait,
};

use folio_core::domain::{NewTimelinePost, TimelinePost};
use folio_core::error::RepoError;
use folio_core::ports::TimelinePostRepository;

use super::entity::timeline_post::{self, Entity as TimelinePostEntity};

/// PostgreSQL timeline repository backed by a SeaORM connection pool.
pub struct PostgresTimelineRepository {
    db: DbConn,
}

impl PostgresTimelineRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimelinePostRepository for PostgresTimelineRepository {
    async fn insert(&self, post: NewTimelinePost) -> Result<TimelinePost, RepoError> {
        let active: timeline_post::ActiveModel = post.into();
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn list_newest_first(&self) -> Result<Vec<TimelinePost>, RepoError> {
        let rows = TimelinePostEntity::find()
            .order_by_desc(timeline_post::Column::CreatedAt)
            .order_by_desc(timeline_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_newest(&self) -> Result<i64, RepoError> {
        // Select-max then conditional delete, inside one transaction so two
        // concurrent callers never both succeed against the same row.
        let result = self
            .db
            .transaction::<_, i64, RepoError>(|txn| {
                Box::pin(async move {
                    let newest = TimelinePostEntity::find()
                        .order_by_desc(timeline_post::Column::Id)
                        .one(txn)
                        .await
                        .map_err(|e| RepoError::Query(e.to_string()))?;

                    let Some(post) = newest else {
                        return Err(RepoError::Empty);
                    };

                    let deleted = TimelinePostEntity::delete_many()
                        .filter(timeline_post::Column::Id.eq(post.id))
                        .exec(txn)
                        .await
                        .map_err(|e| RepoError::Query(e.to_string()))?;

                    if deleted.rows_affected == 0 {
                        return Err(RepoError::Vanished(post.id));
                    }

                    Ok(post.id)
                })
            })
            .await;

        result.map_err(|e| match e {
            TransactionError::Connection(db_err) => RepoError::Connection(db_err.to_string()),
            TransactionError::Transaction(repo_err) => repo_err,
        })
    }
}
