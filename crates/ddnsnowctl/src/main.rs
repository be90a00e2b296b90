// # ddnsnowctl - DDNS Now record manager
//
// A THIN front end: it reads configuration, initialises logging and runs
// exactly one verb against `ddnsnow-provider`. All record logic lives in
// ddnsnow-core.
//
// ## Configuration
//
// Credentials and transport settings come from environment variables only:
//
// - `DDNSNOW_USERNAME`: account domain (required)
// - `DDNSNOW_PASSWORD_HASH`: password hash from the login cookie (required)
// - `DDNSNOW_API_TOKEN`: update API token (only for `api-update`)
// - `DDNSNOW_SERVER`: base URL (default: https://f5.si)
// - `DDNSNOW_UKEY`: account token submitted with panel updates
// - `DDNSNOW_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)
// - `DDNSNOW_MODE`: set to `dry-run` to skip submissions
// - `DDNSNOW_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export DDNSNOW_USERNAME=example
// export DDNSNOW_PASSWORD_HASH=0123456789abcdef
//
// ddnsnowctl list
// ddnsnowctl create TXT "v=spf1 -all"
// ddnsnowctl update A 192.0.2.1 192.0.2.2
// ddnsnowctl delete TXT "v=spf1 -all"
// ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use ddnsnow_core::{ProviderConfig, Record, RecordClient, RecordKind};
use ddnsnow_provider::DdnsNowProvider;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Verb completed
/// - 1: Configuration error
/// - 2: Runtime error (transport, validation or provider rejection)
#[derive(Debug, Clone, Copy)]
enum CtlExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<CtlExitCode> for ExitCode {
    fn from(code: CtlExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Debug, Parser)]
#[command(name = "ddnsnowctl", version, about = "Manage DDNS Now records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every stored record and the wildcard flag
    List,
    /// Print one record (VALUE is required for NS and TXT)
    Get { kind: RecordKind, value: Option<String> },
    /// Add a record
    Create { kind: RecordKind, value: String },
    /// Replace a record value
    Update {
        kind: RecordKind,
        old: String,
        new: String,
    },
    /// Remove a record
    Delete { kind: RecordKind, value: String },
    /// Set a record through the update API
    ApiUpdate { kind: RecordKind, value: String },
}

/// Application configuration
struct Config {
    provider: ProviderConfig,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let username = env::var("DDNSNOW_USERNAME")
            .map_err(|_| anyhow::anyhow!("DDNSNOW_USERNAME is required"))?;
        let password_hash = env::var("DDNSNOW_PASSWORD_HASH")
            .map_err(|_| anyhow::anyhow!("DDNSNOW_PASSWORD_HASH is required"))?;

        let mut provider = ProviderConfig::new(username, password_hash);
        provider.api_token = env::var("DDNSNOW_API_TOKEN").ok();
        if let Ok(server) = env::var("DDNSNOW_SERVER") {
            provider.server = server;
        }
        if let Ok(ukey) = env::var("DDNSNOW_UKEY") {
            provider.ukey = ukey;
        }
        if let Ok(timeout) = env::var("DDNSNOW_TIMEOUT_SECS") {
            provider.timeout_secs = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("DDNSNOW_TIMEOUT_SECS must be a number. Got: {}", timeout))?;
        }
        provider.dry_run = env::var("DDNSNOW_MODE")
            .unwrap_or_default()
            .eq_ignore_ascii_case("dry-run");

        Ok(Self {
            provider,
            log_level: env::var("DDNSNOW_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.provider.validate()?;

        if !(1..=300).contains(&self.provider.timeout_secs) {
            anyhow::bail!(
                "DDNSNOW_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {}",
                self.provider.timeout_secs
            );
        }

        let hash_lower = self.provider.password_hash.to_lowercase();
        if hash_lower.contains("your_hash") || hash_lower.contains("replace_me") {
            anyhow::bail!(
                "DDNSNOW_PASSWORD_HASH appears to be a placeholder. \
                Copy the password_hash value from the panel's login cookie."
            );
        }

        log_level(&self.log_level)?;

        Ok(())
    }
}

fn log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "DDNSNOW_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            level
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return CtlExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let level = log_level(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CtlExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run(config, cli.command).await {
            Ok(()) => CtlExitCode::Success,
            Err(e) => {
                error!("{}", e);
                CtlExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Run one verb
async fn run(config: Config, command: Command) -> Result<()> {
    let provider = DdnsNowProvider::new(config.provider)?;
    info!("Using provider: {}", provider.provider_name());

    match command {
        Command::List => {
            let settings = provider.settings().await?;
            for record in settings.records() {
                println!("{}", record);
            }
            println!("wildcard {}", settings.wildcard_enabled());
        }
        Command::Get { kind, value } => {
            let record = provider.get_record(kind, value.as_deref()).await?;
            println!("{}", record);
        }
        Command::Create { kind, value } => {
            let record = provider.create_record(Record::new(kind, value)).await?;
            println!("created {}", record);
        }
        Command::Update { kind, old, new } => {
            let record = provider
                .update_record(&Record::new(kind, old), Record::new(kind, new))
                .await?;
            println!("updated {}", record);
        }
        Command::Delete { kind, value } => {
            let record = Record::new(kind, value);
            provider.delete_record(&record).await?;
            println!("deleted {}", record);
        }
        Command::ApiUpdate { kind, value } => {
            let record = Record::new(kind, value);
            provider.update_via_api(&record).await?;
            println!("updated {} via API", record);
        }
    }

    Ok(())
}
