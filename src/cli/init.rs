//! `init` command.

use anyhow::{Result, bail};
use std::path::Path;

use crate::{config::UtilConfig, log};

/// Write the default config to `path`.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn init_config(path: &Path, force: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", toml::to_string_pretty(&UtilConfig::default())?);
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    UtilConfig::write_default(path)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
