use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    const INIT_MIGRATION: &str = include_str!("../../migrations/20240101000000_init.sql");

    /// Table whose `CREATE TABLE` block contains each `ON DELETE CASCADE`.
    fn cascading_tables(sql: &str) -> Vec<&str> {
        let mut current = "";
        let mut tables = Vec::new();
        for line in sql.lines() {
            if let Some(rest) = line.trim().strip_prefix("CREATE TABLE ") {
                current = rest.split_whitespace().next().unwrap_or_default();
            }
            if line.contains("ON DELETE CASCADE") && !tables.contains(&current) {
                tables.push(current);
            }
        }
        tables
    }

    #[test]
    fn only_join_tables_cascade() {
        assert_eq!(
            cascading_tables(INIT_MIGRATION),
            vec!["user_follows", "articles_tags"]
        );
    }
}
