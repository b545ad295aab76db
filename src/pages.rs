// src/pages.rs

use models::locations;
use repositories::{CategoryPage, PostWithRelations};
use serde::Serialize;
use tera::{Context, Tera};

const DATE_FORMAT: &str = "%d %B %Y, %H:%M";

pub(crate) const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");
pub(crate) const SERVER_ERROR_PAGE: &str = include_str!("../templates/errors/500.html");

#[derive(Serialize)]
struct CategoryLink {
    title: String,
    slug: String,
}

/// What a template needs to show one post.
#[derive(Serialize)]
struct PostCard {
    id: i32,
    title: String,
    text: String,
    pub_date: String,
    author_name: String,
    /// Placeholder unless the location is set and published.
    location: String,
    category: Option<CategoryLink>,
}

impl From<&PostWithRelations> for PostCard {
    fn from(row: &PostWithRelations) -> Self {
        PostCard {
            id: row.post.id,
            title: row.post.title.clone(),
            text: row.post.text.clone(),
            pub_date: row.post.pub_date.format(DATE_FORMAT).to_string(),
            author_name: row.author.display_name(),
            location: row
                .location
                .as_ref()
                .map_or(locations::UNDISCLOSED_NAME, |l| l.display_name())
                .to_string(),
            category: row.category.as_ref().map(|c| CategoryLink {
                title: c.title.clone(),
                slug: c.slug.clone(),
            }),
        }
    }
}

/// Compiled page templates, shared by every worker.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("includes/post_card.html", include_str!("../templates/includes/post_card.html")),
            ("blog/index.html", include_str!("../templates/blog/index.html")),
            ("blog/category.html", include_str!("../templates/blog/category.html")),
            ("blog/detail.html", include_str!("../templates/blog/detail.html")),
        ])?;
        Ok(Templates { tera })
    }

    pub fn index(&self, posts: &[PostWithRelations]) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("post_list", &cards(posts));
        self.tera.render("blog/index.html", &context)
    }

    pub fn category(&self, page: &CategoryPage) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("category", &page.category);
        context.insert("post_list", &cards(&page.posts));
        self.tera.render("blog/category.html", &context)
    }

    pub fn detail(&self, post: &PostWithRelations) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("post", &PostCard::from(post));
        self.tera.render("blog/detail.html", &context)
    }
}

fn cards(posts: &[PostWithRelations]) -> Vec<PostCard> {
    posts.iter().map(PostCard::from).collect()
}
