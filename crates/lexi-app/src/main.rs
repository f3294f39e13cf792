use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lexi_config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod command;
pub mod controller;
pub mod events;
pub mod oneshot;
pub mod render;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "lexi", version, about = "Look up English words and keep favorites for the session")]
struct Args {
    /// JSON config file; defaults plus environment are used when missing
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Look up a single word, print it and exit
    #[arg(long)]
    word: Option<String>,

    /// With --word, print the result as JSON
    #[arg(long, requires = "word")]
    json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    let capacity = config.ui.channel_capacity;
    let state = Arc::new(AppState::from_config(config)?);

    if let Some(word) = args.word {
        print!("{}", oneshot::lookup_once(&state, &word, args.json).await?);
        return Ok(());
    }

    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,lexi=info,lexi_core=info,lexi_provider=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
