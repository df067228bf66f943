use anyhow::{Context as _, Result};
use clap::Args;
use keyring::{Bit, ciphertext_entry};

use super::Context;

#[derive(Args)]
pub struct EncryptArgs {
    /// Bit to encrypt: 0 or 1
    pub bit: Bit,
    /// Also store the ciphertext under this label
    #[arg(long)]
    pub store_as: Option<String>,
}

pub fn run(args: EncryptArgs, ctx: &Context) -> Result<()> {
    let mut keyring = ctx.keyring();
    let secret = ctx.config.names.secret.clone();

    let token = match args.store_as {
        Some(label) => {
            let entry = ciphertext_entry(&label);
            keyring
                .encrypt_bit_into(args.bit, &secret, &entry)
                .with_context(|| format!("Failed to encrypt into {entry}"))?
        }
        None => keyring.encrypt_bit(args.bit, &secret).context("Failed to encrypt")?,
    };

    println!("{token}");
    Ok(())
}
