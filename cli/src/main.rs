use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use keyring::{KeyringConfig, StoreBackend, config::DEFAULT_CONFIG_FILE};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "tfhe-keyring")]
#[command(about = "Provision a TFHE key pair and encrypt or decrypt single bits")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, env = "TFHE_KEYRING_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Key store backend, overriding the configuration. Only `dotenv`
    /// persists keys between invocations; `env` and `memory` lose them
    /// when the process exits.
    #[arg(long, global = true, value_enum)]
    backend: Option<Backend>,

    /// Key file used by the dotenv backend
    #[arg(long, global = true)]
    store_path: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    /// Process environment, lost on exit
    Env,
    /// `.env`-style key file
    Dotenv,
    /// In-process map, lost on exit
    Memory,
}

impl From<Backend> for StoreBackend {
    fn from(b: Backend) -> Self {
        match b {
            Backend::Env => StoreBackend::Env,
            Backend::Dotenv => StoreBackend::Dotenv,
            Backend::Memory => StoreBackend::Memory,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and store the key pair unless it already exists
    Generate(commands::generate::GenerateArgs),
    /// Encrypt a single bit with the stored secret key
    Encrypt(commands::encrypt::EncryptArgs),
    /// Decrypt a single-bit ciphertext with the stored secret key
    Decrypt(commands::decrypt::DecryptArgs),
    /// Check the stored key pair
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "tfhe_keyring=debug,keyring=debug"
    } else {
        "tfhe_keyring=info,keyring=info"
    };
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = KeyringConfig::load_from(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if let Some(backend) = cli.backend {
        config.store.backend = backend.into();
    }
    if let Some(path) = cli.store_path {
        config.store.path = path;
    }
    tracing::debug!(backend = ?config.store.backend, "configuration loaded");
    if config.store.backend != StoreBackend::Dotenv {
        tracing::warn!(
            backend = ?config.store.backend,
            "store backend does not persist across invocations, keys vanish when this process exits"
        );
    }

    let ctx = commands::Context { config };

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &ctx),
        Commands::Encrypt(args) => commands::encrypt::run(args, &ctx),
        Commands::Decrypt(args) => commands::decrypt::run(args, &ctx),
        Commands::Status => commands::status::run(&ctx),
    }
}
