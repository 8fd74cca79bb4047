//! CLI argument parsing.
//!
//! Command names mirror the translator tooling they sit next to
//! (`workflow:full`, `module:translate`, ...).
use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "l10n-workflow",
    version,
    about = "Pick the next module to translate from remote l10n stats",
    after_help = "Examples:\n  l10n-workflow workflow:full\n  l10n-workflow workflow:full -r gnome-3-12 -l es\n  l10n-workflow modules:pending -l gl --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Path to config.yaml (default: $L10N_WORKFLOW_CONFIG, then next to the executable)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch stats, pick a module, then translate, commit and push it
    #[command(name = "workflow:full")]
    WorkflowFull(WorkflowFullArgs),
    /// List modules that still need translation, closest to done first
    #[command(name = "modules:pending")]
    ModulesPending(PendingArgs),
}

/// Release set and language overrides shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// The release set to translate
    #[arg(long, short = 'r', value_name = "RELEASE_SET")]
    pub release_set: Option<String>,

    /// The language to translate into
    #[arg(long, short = 'l', value_name = "LANG")]
    pub language: Option<String>,
}

impl TargetArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            release_set: self.release_set.clone(),
            language: self.language.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct WorkflowFullArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Args, Debug)]
pub struct PendingArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}
