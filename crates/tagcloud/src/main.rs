//! tagcloud CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use tagcloud::{Cli, Commands, commands};
use tagcloud_core::Config;
use tagcloud_core::config::{ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, config_sources) =
        load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    let max_input = config.input_limit();
    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        config_file = ?config_sources.primary_file(),
        max_input,
        "CLI initialized"
    );

    let result = match command {
        Commands::Generate(args) => {
            commands::generate::cmd_generate(args, cli.json, &config, max_input)
        }
        Commands::Frequencies(args) => {
            commands::frequencies::cmd_frequencies(args, cli.json, &config, max_input)
        }
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

/// Layer project config found from the working directory under an explicit
/// `--config` file, if one was given.
fn load_config(explicit: Option<&std::path::Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = utf8(cwd, "current directory")?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path.to_path_buf(), "config path")?);
    }
    Ok(loader.load()?)
}

fn utf8(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}
