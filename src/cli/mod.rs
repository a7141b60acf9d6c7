//! Command-line interface module.

mod args;
pub mod file;
pub mod init;
pub mod json;
pub mod path;

pub use args::{Cli, Commands, JsonArgs};

use anyhow::Result;
use std::path::Path;

use crate::config::UtilConfig;

/// Run the parsed command.
pub fn run(cli: &Cli, config: &UtilConfig, cwd: &Path) -> Result<()> {
    match &cli.command {
        Commands::Split { path } => println!("{}", path::split(path)),
        Commands::Join { base, path } => println!("{}", crate::path::join_path(base, path)),
        Commands::ChildOf {
            path,
            parent,
            allow_self,
        } => println!("{}", crate::path::is_path_child_of(path, parent, !*allow_self)),
        Commands::Relative { source, target, url } => {
            println!("{}", path::relative(source, target, *url)?);
        }
        Commands::Url {
            items,
            trailing_slash,
        } => {
            let flag = trailing_slash.map_or(config.trailing_slash(), |t| t.as_flag());
            println!("{}", crate::url::build_url(items, flag));
        }
        Commands::DependentUrl { url, suffix, ext } => {
            println!("{}", crate::url::get_dependent_url(url, suffix, ext.as_deref()));
        }
        Commands::Which { name, cwd: dir } => {
            let dir = dir.as_deref().unwrap_or(cwd);
            println!("{}", file::which(config, name, dir)?.display());
        }
        Commands::Write { path, from } => file::write(path, from.as_deref())?,
        Commands::Prune { path, base } => file::prune(path, base)?,
        Commands::Json { args } => println!("{}", json::run(args)?),
        Commands::Init { force, dry } => init::init_config(&cwd.join(&cli.config), *force, *dry)?,
    }
    Ok(())
}
