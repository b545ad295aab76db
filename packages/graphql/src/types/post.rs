use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use models::{categories, locations, users};
use repositories::{CategoryPage, PostWithRelations};
use uuid::Uuid;

#[derive(SimpleObject)]
pub struct Author {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
}

impl From<users::Model> for Author {
    fn from(user: users::Model) -> Self {
        Author {
            display_name: user.display_name(),
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(SimpleObject)]
pub struct Location {
    pub id: i32,
    /// Placeholder text while the location is unpublished.
    pub name: String,
    pub is_published: bool,
}

impl From<locations::Model> for Location {
    fn from(location: locations::Model) -> Self {
        Location {
            id: location.id,
            name: location.display_name().to_string(),
            is_published: location.is_published,
        }
    }
}

#[derive(SimpleObject)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub slug: String,
}

impl From<categories::Model> for Category {
    fn from(category: categories::Model) -> Self {
        Category {
            id: category.id,
            title: category.title,
            description: category.description,
            slug: category.slug,
        }
    }
}

#[derive(SimpleObject)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub pub_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub author: Author,
    pub location: Option<Location>,
    pub category: Option<Category>,
}

impl From<PostWithRelations> for Post {
    fn from(row: PostWithRelations) -> Self {
        Post {
            id: row.post.id,
            title: row.post.title,
            text: row.post.text,
            pub_date: row.post.pub_date,
            created_at: row.post.created_at,
            author: row.author.into(),
            location: row.location.map(Into::into),
            category: row.category.map(Into::into),
        }
    }
}

#[derive(SimpleObject)]
pub struct CategoryPosts {
    pub category: Category,
    pub posts: Vec<Post>,
}

impl From<CategoryPage> for CategoryPosts {
    fn from(page: CategoryPage) -> Self {
        CategoryPosts {
            category: page.category.into(),
            posts: page.posts.into_iter().map(Into::into).collect(),
        }
    }
}
