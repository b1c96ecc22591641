//! # aircond: smart air-conditioner controller
//!
//! Composition root that wires the rule engine into the command line and the
//! HTTP server.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Build the rule catalog and engine, then the climate service
//! - `evaluate`: decide for one snapshot given as flags or a JSON file
//! - `rules`: print the catalog
//! - `serve`: build the axum router, bind to a TCP port and serve until
//!   SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It only wires components together; decision logic lives in the domain.

mod config;
mod facts;
mod logging;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use aircon_adapter_http_axum::state::AppState;
use aircon_app::services::climate_service::ClimateService;
use aircon_domain::catalog::RuleCatalog;
use aircon_domain::engine::RuleEngine;
use aircon_domain::fact::RawFacts;

use crate::config::Config;
use crate::facts::JsonFileSource;
use crate::render::{Report, RuleListing};

#[derive(Parser)]
#[command(
    name = "aircond",
    version,
    about = "Rule-based decision system for a smart home air conditioner"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "aircon.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide the AC setting for one snapshot of home conditions.
    Evaluate(EvaluateArgs),
    /// Print the rule catalog in declaration order.
    Rules {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Serve the JSON API and the HTML controller page.
    Serve,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Read the snapshot from a JSON file instead of flags.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["temperature", "humidity", "occupancy", "time_of_day", "windows_open"])]
    facts: Option<PathBuf>,

    /// Indoor temperature in °C.
    #[arg(long, required_unless_present = "facts", allow_negative_numbers = true)]
    temperature: Option<f64>,

    /// Relative humidity in %.
    #[arg(long, required_unless_present = "facts")]
    humidity: Option<f64>,

    /// OCCUPIED or EMPTY.
    #[arg(long, required_unless_present = "facts")]
    occupancy: Option<String>,

    /// MORNING, AFTERNOON, EVENING or NIGHT.
    #[arg(long, required_unless_present = "facts")]
    time_of_day: Option<String>,

    /// Whether any window is open.
    #[arg(long)]
    windows_open: bool,

    /// Print the evaluation as JSON.
    #[arg(long)]
    json: bool,
}

impl EvaluateArgs {
    fn raw_facts(&self) -> RawFacts {
        RawFacts {
            temperature: self.temperature,
            humidity: self.humidity,
            occupancy: self.occupancy.clone(),
            time_of_day: self.time_of_day.clone(),
            windows_open: Some(self.windows_open),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    logging::init(&config.logging.filter);

    let service = ClimateService::new(RuleEngine::new(Arc::new(RuleCatalog::standard())));

    match cli.command {
        Command::Evaluate(args) => evaluate(&service, &args).await,
        Command::Rules { json } => rules(&service, json),
        Command::Serve => serve(service, &config).await,
    }
}

async fn evaluate(service: &ClimateService, args: &EvaluateArgs) -> anyhow::Result<()> {
    let (facts, evaluation) = match &args.facts {
        Some(path) => service
            .decide_from(&JsonFileSource::new(path))
            .await
            .with_context(|| format!("evaluating {}", path.display()))?,
        None => service
            .decide_from(&args.raw_facts())
            .await
            .context("evaluating command-line facts")?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!(
            "{}",
            Report {
                facts: Some(&facts),
                evaluation: &evaluation,
            }
        );
    }
    Ok(())
}

fn rules(service: &ClimateService, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(service.rules())?);
    } else {
        print!("{}", RuleListing(service.rules()));
    }
    Ok(())
}

async fn serve(service: ClimateService, config: &Config) -> anyhow::Result<()> {
    tracing::info!(rules = service.rules().len(), "rule catalog loaded");

    let state = AppState::new(service);
    let app = aircon_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "aircond listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("aircond stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
