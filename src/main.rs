//! User directory entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*};
use utoipa::OpenApi;

use user_directory::api::{create_router, ApiDoc, AppState};
use user_directory::config::Config;
use user_directory::error::AppError;
use user_directory::metrics;
use user_directory::ui::{render_html, render_text, Presenter, UsersClient};
use user_directory::utils::shutdown_signal;

/// Mock user directory API and presenter.
#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(about = "Serve a mock user directory and render it as a table")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default).
    Serve {
        /// HTTP server port. Overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch users once through the presenter and print the table.
    Fetch {
        /// API base URL. Overrides API_BASE_URL.
        #[arg(long)]
        base_url: Option<String>,

        /// Print the HTML table instead of a text summary.
        #[arg(long)]
        html: bool,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load();

    let log_config = config.as_ref().cloned().unwrap_or_default();
    init_tracing(&log_config, args.verbose);

    metrics::init_metrics();

    match args.command {
        Some(Command::Serve { port }) => cmd_serve(config, port).await,
        Some(Command::Fetch { base_url, html }) => cmd_fetch(config, base_url, html).await,
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Openapi) => cmd_openapi(),
        None => cmd_serve(config, None).await,
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = config.log_filter(verbose);

    if config.json_logs() {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_current_span(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

fn loaded(config: Result<Config, AppError>) -> anyhow::Result<Config> {
    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(AppError::InvalidConfig(e).into());
    }

    Ok(config)
}

/// Run the HTTP API until a shutdown signal arrives.
async fn cmd_serve(config: Result<Config, AppError>, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = loaded(config)?;
    if let Some(port) = port {
        config.port = port;
    }

    if config.metrics_enabled {
        metrics::install_exporter(config.metrics_port)?;
    }

    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(AppState::new());
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the presenter once and print what it would display.
async fn cmd_fetch(
    config: Result<Config, AppError>,
    base_url: Option<String>,
    html: bool,
) -> anyhow::Result<()> {
    let mut config = config?;
    if let Some(base_url) = base_url {
        config.api_base_url = base_url;
    }
    let config = loaded(Ok(config))?;

    let client = UsersClient::new(&config)?;
    info!("Fetching users from {}", client.users_url());

    let mut presenter = Presenter::new(client);
    presenter.init().await;

    let state = presenter.state();
    if html {
        print!("{}", render_html(&state));
    } else {
        print!("{}", render_text(&state));
    }

    match state.error {
        Some(e) => Err(anyhow::anyhow!(e)),
        None => Ok(()),
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Result<Config, AppError>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("USER DIRECTORY - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match config {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.bind_addr, config.port);
    println!("  Users URL: {}", config.users_url());
    match config.http_timeout_ms {
        Some(ms) => println!("  HTTP Timeout: {}ms", ms),
        None => println!("  HTTP Timeout: none"),
    }
    println!("  Log Format: {}", config.log_format);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled {
            format!("Enabled (port {})", config.metrics_port)
        } else {
            "Disabled".to_string()
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
