//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::WalkOptions;
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = cli
        .command
        .as_ref()
        .ok_or_else(|| CliError::Usage("no command given, see --help".into()))?;

    if let Commands::Completion { shell } = command {
        print_completions(*shell);
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Solve {
            file,
            start,
            terminal,
            max_steps,
        } => {
            let options = override_options(
                container.settings.walk_options(),
                start.as_deref(),
                terminal.as_deref(),
                *max_steps,
            )?;
            _solve(&container, file, &options)
        }
        Commands::Verify { data_dir } => {
            let data_dir = data_dir
                .clone()
                .unwrap_or_else(|| container.settings.data_dir.clone());
            _verify(&container, &data_dir)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => _config_show(&container.settings),
            ConfigCommands::Path => _config_path(cli.config.as_deref()),
        },
        Commands::Completion { .. } => Ok(()),
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Apply command-line overrides on top of configured walk options.
pub fn override_options(
    mut options: WalkOptions,
    start: Option<&str>,
    terminal: Option<&str>,
    max_steps: Option<u64>,
) -> CliResult<WalkOptions> {
    if let Some(start) = start {
        if start.trim().is_empty() {
            return Err(CliError::InvalidArgs("--start must not be empty".into()));
        }
        options.start = start.trim().to_string();
    }
    if let Some(terminal) = terminal {
        if terminal.trim().is_empty() {
            return Err(CliError::InvalidArgs("--terminal must not be empty".into()));
        }
        options.terminal = terminal.trim().to_string();
    }
    if max_steps.is_some() {
        options.max_steps = max_steps;
    }
    Ok(options)
}

#[instrument(skip(container))]
fn _solve(container: &ServiceContainer, file: &Path, options: &WalkOptions) -> CliResult<()> {
    let steps = container.puzzle().solve(file, options)?;
    output::info(&steps);
    Ok(())
}

#[instrument(skip(container))]
fn _verify(container: &ServiceContainer, data_dir: &Path) -> CliResult<()> {
    let fixtures = &container.settings.fixtures;
    output::header(&format!(
        "Verifying {} fixtures in {}",
        fixtures.len(),
        data_dir.display()
    ));

    let outcomes = container.puzzle().verify(
        fixtures,
        data_dir,
        &container.settings.walk_options(),
        |outcome| output::success(&format!("{}: {}", outcome.name, outcome.steps)),
    )?;

    output::detail(&format!("{} of {} passed", outcomes.len(), fixtures.len()));
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path(local: Option<&Path>) -> CliResult<()> {
    let describe = |path: PathBuf| {
        let state = if path.exists() { "" } else { " (not found)" };
        format!("{}{}", path.display(), state)
    };

    match global_config_path() {
        Some(path) => output::info(&format!("global: {}", describe(path))),
        None => output::info("global: <no config directory>"),
    }
    let local = local
        .map(Path::to_path_buf)
        .unwrap_or_else(local_config_path);
    output::info(&format!("local:  {}", describe(local)));
    Ok(())
}
