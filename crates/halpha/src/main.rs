mod page;
mod routes;
mod state;
mod table;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use halpha_core::client::{FeedSource, HttpFeedSource};
use halpha_core::config::DashboardConfig;
use halpha_core::icons::verify_icons;
use halpha_core::poll::{Clock, PollLoop, SystemClock};
use halpha_core::view::StatusSnapshot;
use state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "GONG H-alpha site status dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the feed forever and serve the dashboard over HTTP
    Serve(ServeArgs),
    /// Fetch the feed once and print the status table
    Snapshot(SnapshotArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Address to serve the dashboard on
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Status feed endpoint
    #[arg(long)]
    feed_url: Option<String>,
    /// Directory holding the status icons
    #[arg(long)]
    icons_dir: Option<PathBuf>,
    /// Seconds to count down between polls
    #[arg(long)]
    refresh_secs: Option<u32>,
}

impl ServeArgs {
    /// Flags take precedence over values loaded from the environment.
    fn apply(self, config: &mut DashboardConfig) {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(feed_url) = self.feed_url {
            config.feed_url = feed_url;
        }
        if let Some(icons_dir) = self.icons_dir {
            config.icons_dir = icons_dir;
        }
        if let Some(refresh_secs) = self.refresh_secs {
            config.refresh_secs = refresh_secs;
        }
    }
}

#[derive(Args, Debug, Default)]
struct SnapshotArgs {
    /// Status feed endpoint
    #[arg(long)]
    feed_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => handle_serve(args).await,
        Command::Snapshot(args) => handle_snapshot(args).await,
    }
}

fn load_config() -> Result<DashboardConfig> {
    dotenvy::dotenv().ok();
    DashboardConfig::from_env().context("failed to load dashboard configuration")
}

async fn handle_serve(args: ServeArgs) -> Result<()> {
    let mut config = load_config()?;
    args.apply(&mut config);
    config.validate()?;

    verify_icons(&config.icons_dir).context("status icons are required to serve the dashboard")?;

    let source = HttpFeedSource::new(config.feed_url.clone(), config.request_timeout)?;
    let (poll_loop, receiver) = PollLoop::new(Arc::new(source), config.refresh_secs);

    let app_state = Arc::new(AppState::new(receiver, config.icons_dir.clone()));
    let router = routes::router(app_state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(feed_url = %config.feed_url, "dashboard listening on http://{}", listener.local_addr()?);

    tokio::select! {
        result = poll_loop.run() => result.context("status feed polling stopped"),
        result = axum::serve(listener, router).into_future() => {
            result.context("dashboard server stopped")
        }
    }
}

async fn handle_snapshot(args: SnapshotArgs) -> Result<()> {
    let mut config = load_config()?;
    if let Some(feed_url) = args.feed_url {
        config.feed_url = feed_url;
    }
    config.validate()?;

    let source = HttpFeedSource::new(config.feed_url.clone(), config.request_timeout)?;
    let fetched_at = SystemClock.now();
    let envelope = source
        .fetch()
        .await
        .with_context(|| format!("failed to fetch {}", source.url()))?;
    let snapshot = StatusSnapshot::from_envelope(&envelope, fetched_at);

    println!("{}", snapshot.title);
    println!("{}", table::render_table(&snapshot));
    println!("{}", snapshot.footer_html.trim());
    println!("Last updated {}", snapshot.last_updated());

    Ok(())
}
