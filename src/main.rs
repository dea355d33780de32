//! Movie Recs - genre based movie recommendations
//!
//! Runs the HTTP API by default, or answers a single request from the
//! command line.

use std::io::Write;
use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_recs::api::{create_router, timed_recommendations};
use movie_recs::models::RecommendationQuery;
use movie_recs::recommend::{parse_limit, validate_genre, validate_limit};
use movie_recs::{spawn_cleanup_task, AppState, Config};

const INVALID_GENRE: &str = "Invalid genre. Please enter a valid genre with only letters and spaces.";
const INVALID_LIMIT: &str = "Limit must be between 1 and 10.";

/// Movie recommendations by genre
#[derive(Parser)]
#[command(name = "movie_recs")]
#[command(about = "Ranked movie recommendations from a remote catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,

    /// Ask for a genre and a limit interactively
    Cli,

    /// Print recommendations for a genre and exit
    Recommend {
        /// Genre to recommend (letters and spaces)
        #[arg(long)]
        genre: String,

        /// Number of recommendations (1-10)
        #[arg(long, default_value = "5")]
        limit: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so CLI output stays plain JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config).context("Failed to build catalog client")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, state).await,
        Command::Cli => {
            let mut input = BufReader::new(tokio::io::stdin());
            let (genre, limit) = prompt_request(&mut input, &mut std::io::stdout()).await?;
            print_recommendations(&state, &genre, limit).await;
            Ok(())
        }
        Command::Recommend { genre, limit } => {
            let query = RecommendationQuery {
                genre: Some(genre),
                limit: Some(limit),
            };
            let (genre, limit) = query.validate()?;
            print_recommendations(&state, &genre, limit).await;
            Ok(())
        }
    }
}

/// Starts the HTTP server and blocks until shutdown.
async fn serve(config: Config, state: AppState) -> Result<()> {
    info!("Starting movie recommendation server");
    info!(
        "Configuration loaded: catalog={}, cache_ttl={}s, retries={} ({:?}s), port={}",
        config.api_base_url,
        config.cache_ttl,
        config.retry_attempts,
        config.retry_delays,
        config.server_port
    );

    let cleanup_handle = spawn_cleanup_task(state.catalog.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn print_recommendations(state: &AppState, genre: &str, limit: usize) {
    match timed_recommendations(&state.catalog, genre, limit).await {
        Ok(recommendations) => match serde_json::to_string_pretty(&recommendations) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("An error occurred: {}", e),
        },
        Err(e) => println!("An error occurred: {}", e),
    }
}

/// Asks until a valid genre and a valid limit have been entered.
async fn prompt_request<R, W>(input: &mut R, out: &mut W) -> Result<(String, usize)>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let genre = loop {
        let line = prompt(input, out, "Enter the movie genre you're interested in: ").await?;
        let genre = line.trim();
        if validate_genre(genre) {
            break genre.to_string();
        }
        writeln!(out, "{}", INVALID_GENRE)?;
    };

    let limit = loop {
        let line = prompt(
            input,
            out,
            "Enter the number of movie recommendations you want (1-10): ",
        )
        .await?;
        match parse_limit(&line) {
            Some(n) => match validate_limit(n) {
                Some(limit) => break limit,
                None => writeln!(out, "{}", INVALID_LIMIT)?,
            },
            None => writeln!(out, "Please enter a valid number.")?,
        }
    };

    Ok((genre, limit))
}

async fn prompt<R, W>(input: &mut R, out: &mut W, message: &str) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Err(anyhow!("Input closed before a valid answer was given"));
    }
    Ok(line)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
