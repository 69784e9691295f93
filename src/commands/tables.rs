use anyhow::{Context, Result};

use rankwise::config::Config;

/// Print the active reference tables as TOML
pub fn tables(config: &Config) -> Result<()> {
    let rendered =
        toml::to_string_pretty(&config.reference).context("Failed to serialize reference tables")?;
    println!("{rendered}");
    Ok(())
}
