use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;

#[derive(Args)]
pub struct GenerateArgs {
    /// Minimum security level in bits (default from configuration)
    #[arg(long)]
    pub security_level: Option<u32>,
    /// Comma-separated seed words (default from configuration)
    #[arg(long, value_delimiter = ',')]
    pub seed: Option<Vec<u32>>,
}

pub fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let security_level = args.security_level.unwrap_or(ctx.config.security_level);
    let seed = args.seed.unwrap_or_else(|| ctx.config.seed.clone());

    let mut keyring = ctx.keyring();
    let existed = keyring.has_keys().context("Failed to query key store")?;
    let names = keyring
        .ensure_keys(security_level, &seed)
        .context("Failed to provision key pair")?;

    if existed {
        println!("Keys already exist: {}, {}", names.secret, names.cloud);
    } else {
        println!("Keys generated and stored: {}, {}", names.secret, names.cloud);
    }
    Ok(())
}
