use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::{info, warn};

use advice_service::AdviceService;
use error_common::{log_error, MediVoiceError, Result};
use medivoice_server::{config::AppConfig, create_app, AppState};
use speech_synthesis_service::SynthesisService;
use voice_recognition_service::VoiceService;

/// MediVoice HTTP server
#[derive(Parser, Debug)]
#[command(name = "medivoice-server")]
#[command(about = "Voice and text symptom chat with spoken advice")]
#[command(version)]
struct Args {
    /// Server bind address (overrides the configuration file)
    #[arg(long, env = "MEDIVOICE_HOST")]
    host: Option<String>,

    /// Server port (overrides the configuration file)
    #[arg(short, long, env = "MEDIVOICE_PORT")]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long, env = "MEDIVOICE_CONFIG", default_value = "medivoice.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long, env = "MEDIVOICE_VERBOSE")]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "MEDIVOICE_JSON_LOGS")]
    json_logs: bool,
}

impl Args {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
        if self.json_logs {
            config.logging.json = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside development
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let args = Args::parse();

    let config = args.apply(AppConfig::load(&args.config)?);
    config.validate()?;

    logger_redacted::init_tracing(&config.logging, "medivoice_server")
        .map_err(|e| MediVoiceError::InternalError(e.to_string()))?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting MediVoice server");
    info!(config_file = %args.config, dotenv_loaded, "Configuration loaded");

    if let Err(e) = run(config).await {
        log_error("server", &e);
        return Err(e);
    }
    Ok(())
}

async fn run(config: AppConfig) -> Result<()> {
    if config.advice.api_key.as_deref().map_or(true, str::is_empty) {
        warn!("No OpenAI API key configured; advice requests will return the fallback message");
    }

    let transcriber = VoiceService::new(config.transcription.clone())
        .map_err(|e| MediVoiceError::ConfigError(format!("transcription: {e}")))?;
    let advisor = AdviceService::new(config.advice.clone())
        .map_err(|e| MediVoiceError::ConfigError(format!("advice: {e}")))?;
    let synthesizer = SynthesisService::new(config.synthesis.clone())
        .map_err(|e| MediVoiceError::ConfigError(format!("synthesis: {e}")))?;

    let state = AppState::new(
        Arc::new(transcriber),
        Arc::new(advisor),
        Arc::new(synthesizer),
        config.server.limits(),
    )
    .map_err(|e| MediVoiceError::InternalError(format!("Failed to load page template: {e}")))?;

    let app = create_app(state);

    let bind_target = (config.server.host.as_str(), config.server.port);
    let listener = tokio::net::TcpListener::bind(bind_target).await.map_err(|e| {
        MediVoiceError::NetworkError(format!(
            "Failed to bind to {}:{}: {e}",
            config.server.host, config.server.port
        ))
    })?;
    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| MediVoiceError::NetworkError(format!("Failed to read bound address: {e}")))?;

    info!(%addr, "MediVoice server listening");
    info!("Chat page available at http://{addr}/");
    info!("API documentation available at http://{addr}/docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MediVoiceError::ServerError(format!("HTTP server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
