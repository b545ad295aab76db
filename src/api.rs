// src/api.rs

use actix_web::{get, http::header::ContentType, post, web, HttpResponse};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use graphql::BlogSchema;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(graphql_playground).service(graphql_request);
}

#[get("/graphql")]
async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

#[post("/graphql")]
async fn graphql_request(
    schema: web::Data<BlogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}
