use anyhow::Result;
use newsdesk::application::services::ApplicationServices;
use newsdesk::config::AppConfig;
use newsdesk::domain::{
    article::ArticleRepository, comment::CommentRepository, topic::TopicRepository,
    user::UserRepository,
};
use newsdesk::infrastructure::{
    database,
    repositories::{
        PostgresArticleRepository, PostgresCommentRepository, PostgresTopicRepository,
        PostgresUserRepository,
    },
};
use newsdesk::presentation::http::{routes::build_router_with_origins, state::HttpState};
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

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(PostgresArticleRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let topic_repo: Arc<dyn TopicRepository> =
        Arc::new(PostgresTopicRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        comment_repo,
        topic_repo,
        user_repo,
    ));

    let state = HttpState { services };
    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
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
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
