//! Cinegrid static host.
//!
//! Serves the built frontend assets over HTTP with an SPA fallback to
//! `index.html`. All application state lives in the browser; this binary
//! holds none.

use std::path::{Path, PathBuf};

use axum::Router;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Command-line interface for the Cinegrid static host.
#[derive(Parser)]
#[command(
    name = "cinegrid-server",
    version,
    about = "Static host for the Cinegrid movie search app"
)]
struct Cli {
    /// Directory containing the built frontend assets
    #[arg(short, long, default_value = "frontend/dist")]
    site: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app = create_router(&cli.site);
    let addr = format!("127.0.0.1:{}", cli.port);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Serving {} at http://{addr}", cli.site.display());
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

/// Router serving the site directory.
///
/// Unknown paths fall back to `index.html` so the single-page app owns
/// routing on the client.
fn create_router(site_root: &Path) -> Router {
    let index = site_root.join("index.html");

    Router::new()
        .fallback_service(ServeDir::new(site_root).not_found_service(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
}

/// Initialize tracing with the specified verbosity level.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
