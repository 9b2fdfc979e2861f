//! OctoFit CLI
//!
//! Command-line interface for OctoFit:
//! - List a collection as a table, JSON or CSV
//! - Resolve a front-end path and print its view
//! - Run the web front end
//! - Run the demo API
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use octofit::config::{generate_default_config, Config};
use octofit::demo::{self, seed::DEFAULT_SEED, DemoData};
use octofit::fetch::{CancellationToken, ResourceClient};
use octofit::logging::{init_stderr_tracing, init_tracing};
use octofit::server::{serve, AppState};
use octofit::view::{self, OutputFormat, RenderTarget, ViewStatus};
use octofit::{Resource, Route};

#[derive(Parser)]
#[command(name = "octofit-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OctoFit Tracker - fitness activities, teams and leaderboard")]
#[command(long_about = "OctoFit Tracker reads activities, leaderboard, teams, users and workouts\nfrom the OctoFit REST API and renders them in the terminal or the browser.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fitness API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a collection (activities, leaderboard, teams, users, workouts)
    List {
        /// Collection name
        resource: Resource,
    },

    /// Resolve a front-end path and print its view
    Route {
        /// Path such as "/", "/teams" or "/leaderboard/"
        path: String,
    },

    /// Run the web front end
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the read-only demo API
    DemoApi {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: String,
        /// Seed for generated activities and scores
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from(cli.config.as_deref())?;
    if let Some(url) = cli.api_url.clone() {
        config.api.base_url = Some(url);
    }

    match cli.command {
        Commands::List { resource } => {
            init_stderr_tracing(&config.logging);
            let client = ResourceClient::new(config.api.client_config())?;

            if !print_view(&client, resource, cli.format).await? {
                std::process::exit(1);
            }
        }

        Commands::Route { path } => {
            init_stderr_tracing(&config.logging);
            let route = Route::resolve(&path);

            match route {
                Route::Home => {
                    println!("OctoFit Tracker");
                    println!();
                    for resource in Resource::ALL {
                        println!("  {:<14} {}", resource.route(), view::title(resource));
                    }
                }
                Route::Resource(resource) => {
                    let client = ResourceClient::new(config.api.client_config())?;
                    if !print_view(&client, resource, cli.format).await? {
                        std::process::exit(1);
                    }
                }
                Route::NotFound(path) => {
                    eprintln!("No page at {}", path);
                    std::process::exit(1);
                }
            }
        }

        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_tracing(&config.logging);
            let state = AppState::from_config(&config).context("failed to create API client")?;
            serve(state, &config.server).await?;
        }

        Commands::DemoApi { addr, seed } => {
            init_tracing(&config.logging);
            let data = DemoData::generate(seed, chrono::Utc::now().date_naive());

            tracing::info!(
                "Demo data: {} users, {} activities, {} workouts",
                data.users.len(),
                data.activities.len(),
                data.workouts.len()
            );
            demo::serve(data, &addr).await?;
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Fetch and print one view; false when it ended in the error state
async fn print_view(
    client: &ResourceClient,
    resource: Resource,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let rendered = view::load_and_render(
        client,
        resource,
        CancellationToken::new(),
        RenderTarget::Output(format),
    )
    .await?;

    print!("{}", rendered.body);

    if rendered.status == ViewStatus::Error {
        eprintln!();
        eprintln!("Make sure the OctoFit API is running at {}", client.base_url());
        eprintln!("  octofit-cli demo-api");
        return Ok(false);
    }

    Ok(true)
}
