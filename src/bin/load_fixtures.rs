// src/bin/load_fixtures.rs
use anyhow::{Context, Result};
use folio_core::application::fixtures::{FixtureLoader, FixtureOptions};
use folio_core::config::default_database_url;
use folio_core::infrastructure::{
    database, repositories::postgres_repositories, security::password::Argon2PasswordHasher,
    time::SystemClock, util::DefaultSlugGenerator,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
    let mut options = FixtureOptions::default();
    if let Ok(seed) = env::var("FIXTURE_SEED") {
        options.seed = seed.parse().context("FIXTURE_SEED must be an unsigned integer")?;
    }

    let pool = database::init_pool(&database_url).await?;
    database::run_migrations(&pool).await?;

    let loader = FixtureLoader::new(
        postgres_repositories(&pool),
        Arc::new(Argon2PasswordHasher),
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
    );
    let report = loader.load(&options).await?;
    println!(
        "loaded {} users, {} categories, {} tags, {} articles, {} comments",
        report.users, report.categories, report.tags, report.articles, report.comments
    );
    Ok(())
}
