//! Task bridge server - exposes bridge tasks to sandboxed test specifications over loopback HTTP.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use taskbridge::dispatch::Dispatcher;
use taskbridge::exit_codes;
use taskbridge::io::config::{CONFIG_FILE, load_config};
use taskbridge::io::paths::BridgePaths;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "taskbridge-server", version)]
#[command(about = "Serve filesystem and status tasks to end-to-end test specifications")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3005")]
    port: u16,

    /// Project directory; relative task paths, logs and the run summary live here
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Config file (defaults to taskbridge.toml in the project directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    taskbridge::logging::init();
    if let Err(err) = run(Args::parse()) {
        error!(error = %format!("{err:#}"), "taskbridge-server failed");
        std::process::exit(exit_codes::INVALID);
    }
    std::process::exit(exit_codes::OK);
}

#[tokio::main]
async fn run(args: Args) -> anyhow::Result<()> {
    let project_dir = args.project_dir.canonicalize().unwrap_or(args.project_dir);
    let config_path = args
        .config
        .unwrap_or_else(|| project_dir.join(CONFIG_FILE));
    let cfg = load_config(&config_path)?;
    info!(
        project_dir = %project_dir.display(),
        config = %config_path.display(),
        "starting taskbridge-server"
    );

    let state = AppState::new(Dispatcher::new(BridgePaths::new(&project_dir, &cfg)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::task_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state.clone());

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(state.exit_requested())
        .await?;

    info!("exit requested, shutting down");
    Ok(())
}
