use anyhow::{Context as _, Result};
use clap::Args;
use keyring::ciphertext_entry;

use super::Context;

#[derive(Args)]
pub struct DecryptArgs {
    /// Serialized ciphertext (comma-separated samples)
    #[arg(required_unless_present = "from")]
    pub ciphertext: Option<String>,
    /// Read the ciphertext stored under this label instead
    #[arg(long, conflicts_with = "ciphertext")]
    pub from: Option<String>,
}

pub fn run(args: DecryptArgs, ctx: &Context) -> Result<()> {
    let keyring = ctx.keyring();
    let secret = &ctx.config.names.secret;

    let bit = match (args.ciphertext, args.from) {
        (_, Some(label)) => {
            let entry = ciphertext_entry(&label);
            keyring
                .decrypt_stored_bit(&entry, secret)
                .with_context(|| format!("Failed to decrypt {entry}"))?
        }
        (Some(token), None) => {
            let expected = keyring
                .ciphertext_len(secret)
                .context("Failed to load secret key")?;
            keyring
                .decrypt_bit(token.trim(), secret, expected)
                .context("Failed to decrypt")?
        }
        (None, None) => anyhow::bail!("Either a ciphertext or --from is required"),
    };

    println!("{bit}");
    Ok(())
}
