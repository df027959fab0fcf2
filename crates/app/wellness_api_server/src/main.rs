//! Wellness chatbot API server binary.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use wellness_core::ai::{AiClient, AiConfig};
use wellness_core::responder::Responder;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "wellness_api_server", about = "Wellness chatbot API server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3100")]
    bind_addr: String,

    /// HS256 secret used to verify bearer tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Upper bound on a completion-provider call, in seconds.
    ///
    /// Overrides `AI_TIMEOUT_SECS` from the provider settings. Must be at least 1.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    ai_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,wellness_api=debug,wellness_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    let mut ai_config = AiConfig::from_env();
    if let Some(secs) = args.ai_timeout_secs {
        ai_config.timeout = Duration::from_secs(secs);
    }

    if ai_config.is_configured() {
        info!(
            model = %ai_config.model,
            timeout_secs = ai_config.timeout.as_secs(),
            "AI provider configured"
        );
    } else {
        warn!("OPENROUTER_API_KEY not set; /api/chat/ai will respond 501");
    }

    let config = wellness_api::config::ApiConfig::new(args.bind_addr, args.jwt_secret)?;

    let state = wellness_api::AppState {
        config: config.clone(),
        responder: Arc::new(Responder::new()),
        ai: Arc::new(AiClient::new(ai_config)?),
    };

    let app = wellness_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
