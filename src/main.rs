//! Wheel of Life submission server.
//!
//! Stores submissions in SQLite, renders a PDF report per submission and
//! emails it to the coach when delivery is configured.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wheel_of_life::adapters::http::{build_router, RouterOptions, SubmissionAppState};
use wheel_of_life::adapters::{sqlite, PandocPdfRenderer, ResendConfig, ResendEmailSender};
use wheel_of_life::application::CoachNotifier;
use wheel_of_life::config::{AppConfig, EmailConfig};
use wheel_of_life::ports::DocumentRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.server.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    config.validate().context("validating configuration")?;
    let addr = config.server.socket_addr()?;

    info!("Starting Wheel of Life server");
    info!("  Environment: {:?}", config.server.environment);
    info!("  Database: {}", config.database.url);

    let pool = sqlite::connect(&config.database.url, config.database.max_connections)
        .await
        .context("opening database")?;
    sqlite::migrate(&pool).await.context("migrating database")?;
    let repository = Arc::new(sqlite::SqliteSubmissionRepository::new(pool));

    let mut documents = PandocPdfRenderer::new().with_pdf_timeout(config.document.pdf_timeout_secs);
    if let Some(path) = &config.document.pandoc_path {
        documents = documents.with_pandoc_path(path);
    }
    if !documents.is_available().await {
        warn!("pandoc not found; submissions will be stored but reports will fail");
    }

    let notifier = coach_notifier(&config.email);
    if notifier.is_none() {
        info!("Email delivery not configured; coach notifications disabled");
    }

    let state = SubmissionAppState::new(
        repository,
        Arc::new(documents),
        notifier,
        config.admin.api_key.clone(),
    );
    let options = RouterOptions {
        cors_origins: config.server.cors_origins_list(),
        body_limit_bytes: config.server.body_limit_bytes,
    };
    let app = build_router(state, &options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn coach_notifier(email: &EmailConfig) -> Option<CoachNotifier> {
    let (api_key, coach) = email.delivery()?;
    let sender = ResendEmailSender::new(
        ResendConfig::new(api_key.clone(), email.from_header()).with_base_url(&email.api_url),
    );
    Some(CoachNotifier::new(Arc::new(sender), coach))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
