use sea_orm::entity::prelude::DateTime;
use sea_orm::{
    ColumnTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::{categories, locations, posts};

/// Records that carry a publication switch and a creation stamp.
pub trait PublishedFlagged {
    fn is_published(&self) -> bool;
    fn created_at(&self) -> DateTime;
}

macro_rules! impl_published_flagged {
    ($($model:ty),+ $(,)?) => {
        $(
            impl PublishedFlagged for $model {
                fn is_published(&self) -> bool {
                    self.is_published
                }

                fn created_at(&self) -> DateTime {
                    self.created_at
                }
            }
        )+
    };
}

impl_published_flagged!(categories::Model, locations::Model, posts::Model);

/// Narrows a post query to what an anonymous visitor may see.
///
/// A post is visible when its own flag is set, its `pub_date` is not after
/// `now`, and it belongs to a published category. Posts without a category
/// are hidden. The location's flag is deliberately not consulted.
///
/// Every listing and lookup of posts for visitors goes through this filter.
pub trait PublishedPosts: Sized {
    fn published(self, now: DateTime) -> Self;

    /// `pub_date` descending, newest first, `id` breaking ties.
    fn latest_first(self) -> Self;
}

impl PublishedPosts for Select<posts::Entity> {
    fn published(self, now: DateTime) -> Self {
        self.join(JoinType::InnerJoin, posts::Relation::Category.def())
            .filter(posts::Column::IsPublished.eq(true))
            .filter(posts::Column::PubDate.lte(now))
            .filter(categories::Column::IsPublished.eq(true))
    }

    fn latest_first(self) -> Self {
        self.order_by_desc(posts::Column::PubDate)
            .order_by_desc(posts::Column::Id)
    }
}
