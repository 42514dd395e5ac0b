//! Core application

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::ApiServer;
use crate::core::banner;
use crate::core::cli::{self, CliConfig, Commands, SampleKind};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::domain::MockDataService;

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub mock: Arc<MockDataService>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let app = Self::init(&cli_config)?;

        match command {
            Some(Commands::Sample { kind }) => app.print_sample(&kind),
            Some(Commands::Start) | None => Self::start_server(app).await,
        }
    }

    fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        let mock = Arc::new(MockDataService::new(config.mock.seed));
        let shutdown = ShutdownService::new();

        Ok(Self {
            shutdown,
            config,
            mock,
        })
    }

    /// Print one generated payload, same shape the API returns
    fn print_sample(&self, kind: &SampleKind) -> Result<()> {
        let json = match kind {
            SampleKind::Traders => {
                serde_json::to_string_pretty(&self.mock.traders(self.config.mock.traders_count))
            }
            SampleKind::Profile { address } => {
                serde_json::to_string_pretty(&self.mock.profile(address))
            }
            SampleKind::Trades => {
                serde_json::to_string_pretty(&self.mock.trades(self.config.mock.trades_count))
            }
        }
        .context("Failed to serialize sample")?;

        println!("{}", json);
        Ok(())
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers FIRST (before any blocking calls)
        app.shutdown.install_signal_handlers();

        banner::print_banner(&app.config);

        let server = ApiServer::new(app);
        let app = server.start().await?;
        app.shutdown.trigger();

        tracing::debug!("Shutdown complete");
        Ok(())
    }
}
