use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codepix::api::{create_router, AppState};
use codepix::config::Config;
use codepix::llm::{Gateway, ProviderId};

#[derive(Parser)]
#[command(name = "codepix")]
#[command(about = "Code generation, explanation, translation and optimization over Gemini and Groq")]
struct Args {
    /// Interface to bind. Overrides CODEPIX_HOST.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on. Overrides PORT.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codepix=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    for provider in ProviderId::all() {
        let provider_config = config.provider(provider);
        if provider_config.is_configured() {
            tracing::info!(
                "{} client initialized (default model: {})",
                provider.display_name(),
                provider_config.model
            );
        } else {
            tracing::warn!(
                "{} not set - {} requests will fail until it is configured",
                provider.env_var(),
                provider.display_name()
            );
        }
    }

    let gateway = Gateway::new(&config)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, gateway);
    let app = create_router(state);

    tracing::info!("CodePix starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  API docs:     http://{}/api/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/openapi.json", addr);

    let cancel_token = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel_token.clone()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(cancel_token.cancelled_owned())
        .await?;

    tracing::info!("CodePix stopped");
    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests...");
    cancel_token.cancel();
}
