use std::fmt::Display;
use std::sync::Arc;

/// Resolver-facing error adapters.
///
/// async-graphql turns anything `Display` into an `Error`, so these traits
/// only decide what a client gets to see. Input problems (bad IDs, bad rank
/// strings) keep their detail; database failures are logged server-side and
/// surface as the bare context string.
pub trait ResultExt<T> {
    /// `Uuid::parse_str(id).gql_err("Invalid tournament ID")?`
    fn gql_err(self, context: &str) -> Result<T, async_graphql::Error>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn gql_err(self, context: &str) -> Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

/// Sanitizing adapter for database results. Connection strings, SQL text
/// and constraint names stay in the server log.
pub trait DbResultExt<T> {
    fn db_err(self, context: &str) -> Result<T, async_graphql::Error>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn db_err(self, context: &str) -> Result<T, async_graphql::Error> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            async_graphql::Error::new(context.to_string())
        })
    }
}

// DataLoader batches share one error per batch.
impl<T> DbResultExt<T> for Result<T, Arc<sqlx::Error>> {
    fn db_err(self, context: &str) -> Result<T, async_graphql::Error> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            async_graphql::Error::new(context.to_string())
        })
    }
}
