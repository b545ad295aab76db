// src/views.rs

use actix_web::{get, http::header::ContentType, web, HttpResponse};
use chrono::Utc;
use repositories::PostRepository;
use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::pages::Templates;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(category_posts).service(post_detail);
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

#[get("/")]
async fn index(
    db: web::Data<DatabaseConnection>,
    templates: web::Data<Templates>,
) -> Result<HttpResponse, AppError> {
    let posts = PostRepository::recent_posts(&db, Utc::now().naive_utc()).await?;
    Ok(html(templates.index(&posts)?))
}

#[get("/category/{slug}/")]
async fn category_posts(
    db: web::Data<DatabaseConnection>,
    templates: web::Data<Templates>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let page = PostRepository::category_posts(&db, &slug, Utc::now().naive_utc()).await?;
    Ok(html(templates.category(&page)?))
}

#[get("/posts/{post_id}/")]
async fn post_detail(
    db: web::Data<DatabaseConnection>,
    templates: web::Data<Templates>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    // anything but an integer id cannot name a post
    let post_id: i32 = post_id.parse().map_err(|_| AppError::NotFound)?;

    let post = PostRepository::post_detail(&db, post_id, Utc::now().naive_utc()).await?;
    Ok(html(templates.detail(&post)?))
}
