use anyhow::Result;
use folio_core::application::services::{ApplicationServices, Ports, Repositories};
use folio_core::config::AppConfig;
use folio_core::infrastructure::{
    database,
    markdown::PulldownMarkdownRenderer,
    repositories::postgres_repositories,
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::LocalFileStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{
    routes::{RouterOptions, build_app},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let token_manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let ports = Ports {
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager: Arc::new(token_manager),
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
        storage: Arc::new(LocalFileStorage::new(config.upload_dir().clone(), "/uploads")),
        markdown: Arc::new(PulldownMarkdownRenderer),
    };

    let services = Arc::new(ApplicationServices::new(postgres_repositories(&pool), ports));
    let state = HttpState {
        services,
        upload_dir: config.upload_dir().clone(),
    };
    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };

    let app = build_app(state, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, upload_dir = %config.upload_dir().display(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
