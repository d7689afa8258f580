//! Attune CLI — the main entry point.
//!
//! A thin caller around the engine: reads a message (or a REPL loop of
//! messages), hands each one to `ChatEngine::respond`, and prints the
//! reply. Failures render as inline error lines, never as fabricated
//! replies.

use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use attune_config::AppConfig;
use attune_context::{ContextProvider, SysinfoProbe, WeatherCache, WttrSource};
use attune_emotion::EmotionProfiler;
use attune_engine::ChatEngine;

mod repl;

#[derive(Parser)]
#[command(
    name = "attune",
    about = "Attune — emotion-aware chat assistant",
    version,
    author
)]
struct Cli {
    /// Send a single message instead of entering interactive mode
    #[arg(short, long)]
    message: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let engine = Arc::new(build_engine(&config));

    if let Some(message) = cli.message {
        match engine.respond(&message).await {
            Ok(reply) => println!("{reply}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    repl::run(engine, &config).await
}

fn build_engine(config: &AppConfig) -> ChatEngine {
    let classifier = attune_providers::classifier_from_config(config);
    let chat = attune_providers::chat_from_config(config);

    let weather = WeatherCache::new(
        Arc::new(WttrSource::new(&config.weather.url)),
        Duration::from_secs(config.weather.cache_seconds),
        Duration::from_millis(config.weather.fetch_timeout_ms),
    );
    let context = ContextProvider::new(Arc::new(SysinfoProbe::new()), weather);

    ChatEngine::new(EmotionProfiler::new(classifier), context, chat, config)
}
