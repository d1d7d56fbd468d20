/// Shared Postgres pool type used across repos and the API layer.
pub type Db = sqlx::PgPool;
