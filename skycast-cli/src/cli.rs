use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use skycast_core::{City, Config, ProviderId, provider::provider_from_config};
use skycast_http::{AppState, create_router, serve, shutdown_signal};
use tokio::net::TcpListener;
use tracing::info;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Fake weather service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP service: `/api/weather` plus the static site.
    Serve {
        #[arg(long, env = "HOST")]
        host: Option<String>,

        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Directory holding the static site.
        #[arg(long, env = "SKYCAST_PUBLIC_DIR")]
        public_dir: Option<PathBuf>,

        /// "seeded" or "simulated".
        #[arg(long, env = "SKYCAST_PROVIDER", value_parser = parse_provider)]
        provider: Option<ProviderId>,
    },

    /// Print a report for one city.
    Show {
        city: String,

        #[arg(long, value_parser = parse_provider)]
        provider: Option<ProviderId>,

        /// Print the JSON the API would return.
        #[arg(long)]
        json: bool,
    },

    /// Interactively edit the config file.
    Configure,
}

fn parse_provider(value: &str) -> Result<ProviderId, String> {
    ProviderId::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Serve {
                host,
                port,
                public_dir,
                provider,
            } => {
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                if let Some(dir) = public_dir {
                    config.server.public_dir = dir;
                }
                if let Some(id) = provider {
                    config.set_default_provider(id);
                }
                run_server(config).await
            }
            Command::Show {
                city,
                provider,
                json,
            } => {
                let id = match provider {
                    Some(id) => id,
                    None => config.default_provider_id()?,
                };
                let city = City::try_from(city.as_str())?;
                let report = provider_from_config(id, &config).report(&city, Local::now());

                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", output::render(&report));
                }
                Ok(())
            }
            Command::Configure => configure(config),
        }
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    info!(provider = %state.provider.id(), "configuration loaded");

    let app = create_router(state, &config.server.public_dir);
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    serve(listener, app, shutdown_signal()).await
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.default_provider_id()?;
    let providers = ProviderId::all().to_vec();
    let start = providers.iter().position(|p| *p == current).unwrap_or(0);

    let provider = Select::new("Default provider:", providers)
        .with_starting_cursor(start)
        .prompt()?;
    config.set_default_provider(provider);

    config.server.host = Text::new("Listen host:")
        .with_default(&config.server.host)
        .prompt()?;

    config.server.port = CustomType::<u16>::new("Listen port:")
        .with_default(config.server.port)
        .with_error_message("Please enter a port between 0 and 65535")
        .prompt()?;

    let public_dir = config.server.public_dir.display().to_string();
    config.server.public_dir = Text::new("Static site directory:")
        .with_default(&public_dir)
        .prompt()?
        .into();

    if provider == ProviderId::Simulated {
        config.simulated.seed = CustomType::<u64>::new("Fixed seed (Esc for fresh randomness):")
            .prompt_skippable()?;
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
