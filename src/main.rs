mod catalog;
mod config;
mod core;
mod error;
mod logging;
mod models;
mod providers;

use crate::config::Config;
use crate::core::runtime::Runtime;
use crate::models::{PostType, Topic};

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "coco-poster", about = "Scheduled marketing posts for a Telegram channel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Verify the channel, send a test post and post on schedule (default)
    Run,
    /// Compose and send a single post right away
    Post {
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        post_type: Option<PostType>,
    },
    /// Compose a day's batch and print it without sending
    Preview {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    if let Err(e) = dotenv() {
        eprintln!("Error loading .env file: {}", e);
    }
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let _guard = logging::init(&config.log_file)?;
    let runtime = Runtime::new(config);

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let shutdown = CancellationToken::new();
            tokio::spawn(shutdown_on_signal(shutdown.clone()));

            if let Err(e) = runtime.start(shutdown).await {
                error!(error = %e, "Failed to start bot");
                return Err(e.into());
            }
            info!("Bot stopped");
        }
        Command::Post { topic, post_type } => {
            runtime.verify_connection().await?;
            let topic = topic.as_deref().map(Topic::from);
            if let Some(topic) = topic.as_ref().filter(|t| !t.is_recognized()) {
                warn!(topic = %topic, "Unknown topic, generic content will be used");
            }
            if !runtime.manual_post(topic, post_type).await {
                return Err(anyhow::anyhow!("Manual post was not delivered"));
            }
        }
        Command::Preview { count, json } => {
            let posts = runtime.preview(count).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                for (i, post) in posts.iter().enumerate() {
                    println!("=== #{} {} ({}) ===", i + 1, post.topic, post.post_type);
                    println!("{}\n", post.content);
                }
            }
        }
    }

    Ok(())
}

async fn shutdown_on_signal(shutdown: CancellationToken) {
    wait_for_signal().await;
    shutdown.cancel();
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            error!(error = %e, "Cannot listen for SIGTERM, falling back to Ctrl-C only");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT"),
        _ = terminate.recv() => info!("Received SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Received Ctrl-C");
}
