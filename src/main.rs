use anyhow::Result;
use clap::Parser;
use console::style;
use l10n_workflow::cli::{Command, RootArgs};
use l10n_workflow::config::{load_config_file, resolve_config_path, WorkflowConfig};
use l10n_workflow::delegate::CommandRunner;
use l10n_workflow::remote::StatsClient;
use l10n_workflow::selection::LinePrompter;
use l10n_workflow::workflow::{run_full, run_pending};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: RootArgs) -> Result<()> {
    let config_path = resolve_config_path(args.config.as_deref());
    tracing::debug!(path = %config_path.display(), "loading config");
    let file = load_config_file(&config_path)?;

    match args.command {
        Command::WorkflowFull(full) => {
            let config = WorkflowConfig::resolve(file, full.target.overrides())?;
            let client = StatsClient::new(&config);
            let mut prompter = LinePrompter::stdio();
            let mut runner = CommandRunner::new(config.steps.clone());
            let outcome = run_full(
                &config,
                &client,
                &mut prompter,
                &mut runner,
                &mut io::stdout(),
            )?;
            tracing::debug!(?outcome, "workflow finished");
        }
        Command::ModulesPending(pending) => {
            let config = WorkflowConfig::resolve(file, pending.target.overrides())?;
            let client = StatsClient::new(&config);
            run_pending(&config, &client, pending.json, &mut io::stdout())?;
        }
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "l10n_workflow=debug"
    } else {
        "l10n_workflow=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
