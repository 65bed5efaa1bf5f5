//! TimelinePost entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::{NewTimelinePost, TimelinePost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timeline_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain TimelinePost.
impl From<Model> for TimelinePost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            content: model.content,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from a validated submission to an insert-ready ActiveModel.
/// `id` stays unset so the database sequence assigns it; `created_at` is the
/// server's current time.
impl From<NewTimelinePost> for ActiveModel {
    fn from(post: NewTimelinePost) -> Self {
        Self {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(post.name),
            email: Set(post.email),
            content: Set(post.content),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
