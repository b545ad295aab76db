use repositories::RepositoryError;

/// Visitors get `null` for anything missing or hidden; storage faults are
/// logged and reported without detail.
pub fn not_found_as_none<T>(
    result: Result<T, RepositoryError>,
) -> async_graphql::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RepositoryError::NotFound) => Ok(None),
        Err(e) => Err(internal(e)),
    }
}

pub fn internal(e: RepositoryError) -> async_graphql::Error {
    tracing::error!(error = %e, "graphql query failed");
    async_graphql::Error::new("Internal server error")
}
