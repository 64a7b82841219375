//! Pivori Studio
//!
//! Run with: cargo run -- serve
//!
//! Serves the built dashboard bundle and prints the route table and
//! service catalog.
//!
//! # Configuration
//!
//! Config file (`--config`, or the default locations) with environment
//! overrides:
//! - `PIVORI_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PIVORI_PORT`: Port to listen on (default: 8084)
//! - `PIVORI_DIST_DIR`: Built bundle directory (default: pivori-ui/dist)
//! - `PIVORI_LOG_LEVEL` / `PIVORI_LOG_FORMAT`: Logging (default: info / pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use clap::{Parser, Subcommand};
use pivori_studio::catalog::services;
use pivori_studio::config::{generate_default_config, Config, ConfigSource, LoggingConfig};
use pivori_studio::router::Page;
use pivori_studio::server::{serve, AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pivori-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pivori Studio service dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built bundle
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Print the route table
    Routes,

    /// Print the service catalog
    Services,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        dist: None,
    }) {
        Commands::Serve { host, port, dist } => {
            let (mut config, source) = match &cli.config {
                Some(path) => (Config::load_with_env(path)?, ConfigSource::file(path)),
                None => Config::load_default(),
            };

            init_logging(&config.logging);
            tracing::info!("Starting Pivori Studio v{}", env!("CARGO_PKG_VERSION"));
            source.log();

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            if !config.server.shell_path().is_file() {
                tracing::warn!(
                    "No index.html in {:?}; build pivori-ui with trunk first",
                    config.server.dist_dir
                );
            }

            serve(AppState::new(config.server.clone()), &config.server).await?;
        }

        Commands::Routes => {
            for page in Page::ALL {
                println!("{:<12} {}", page.path(), page.label());
            }
        }

        Commands::Services => {
            println!("{:<14} {:>6}  STATUS", "SERVICE", "PORT");
            for service in services() {
                println!("{:<14} {:>6}  {}", service.name, service.port, service.status);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("pivori_studio={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
