use async_graphql::MergedObject;
mod posts;

#[derive(MergedObject, Default)]
pub struct Queries(posts::PostQueries);
