/// Shared connection pool type used by every repo.
pub type Db = sqlx::PgPool;
