use anyhow::{Context as _, Result};

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let keyring = ctx.keyring();
    let info = keyring.inspect().context("Failed to inspect key pair")?;

    println!("secret key:      {} ({} bytes)", info.names.secret, info.secret_key_bytes);
    println!("cloud key:       {} ({} bytes)", info.names.cloud, info.cloud_key_bytes);
    println!("security level:  {}", info.params.security_level);
    println!("lwe dimension:   {}", info.params.n);
    println!("ciphertext len:  {}", info.ciphertext_len);
    Ok(())
}
