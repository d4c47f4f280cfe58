//! Command-line client: argument parsing, configuration, logging, and the
//! two entry points (`serve`, `doctor`).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stockroom::api::InventoryApi;
use stockroom::config::{InventoryConfig, DEFAULT_CONFIG_FILE};
use stockroom::http::{self, SharedApi};
use stockroom::store::json_backend::JsonBackend;
use stockroom::store::photos::PhotoStore;
use stockroom::store::DoctorReport;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Inventory service with photo storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML). Defaults to ./stockroom.toml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind, overrides the configured host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Clear dangling photo references and remove orphan photo files
    Doctor,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            handle_serve(config)
        }
        Commands::Doctor => handle_doctor(config),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "stockroom=debug,tower_http=debug"
    } else {
        "stockroom=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<InventoryConfig> {
    let file = match explicit {
        Some(path) if !path.exists() => bail!("config file not found: {}", path.display()),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    let config = InventoryConfig::load(&file)
        .with_context(|| format!("invalid configuration in {}", file.display()))?;
    config.check().map_err(anyhow::Error::msg)?;
    Ok(config)
}

fn build_api(config: &InventoryConfig) -> Result<SharedApi> {
    let photos = PhotoStore::new(&config.photo_dir);
    photos
        .ensure_directory()
        .with_context(|| format!("cannot create {}", config.photo_dir.display()))?;

    if let Some(parent) = config.data_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
    }

    let backend = Box::new(JsonBackend::new(&config.data_file));
    Ok(Arc::new(InventoryApi::new(backend, photos)))
}

fn handle_serve(config: InventoryConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(async move {
        let api = build_api(&config)?;
        let app = http::app(api, config.max_upload_bytes);

        let listener = tokio::net::TcpListener::bind(config.bind_address())
            .await
            .with_context(|| format!("cannot bind {}", config.bind_address()))?;
        tracing::info!(
            address = %listener.local_addr()?,
            data_file = %config.data_file.display(),
            photo_dir = %config.photo_dir.display(),
            version = LONG_VERSION,
            "Starting stockroom"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok::<(), anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

fn handle_doctor(config: InventoryConfig) -> Result<()> {
    let api = build_api(&config)?;
    let report = api.doctor()?;
    for line in doctor_messages(&report) {
        println!("{}", line);
    }
    Ok(())
}

fn doctor_messages(report: &DoctorReport) -> Vec<String> {
    if report.is_clean() {
        return vec!["No inconsistencies found.".to_string()];
    }

    let mut lines = vec!["Inconsistencies found and fixed:".to_string()];
    if report.cleared_dangling_refs > 0 {
        lines.push(format!(
            "  - Cleared {} photo reference(s) pointing at missing files.",
            report.cleared_dangling_refs
        ));
    }
    if report.removed_orphans > 0 {
        lines.push(format!(
            "  - Removed {} orphan photo file(s).",
            report.removed_orphans
        ));
    }
    if report.failed_removals > 0 {
        lines.push(format!(
            "  - Could not remove {} orphan photo file(s), see log.",
            report.failed_removals
        ));
    }
    lines
}
