//! Delegated per-module steps: translate, commit, push.
//!
//! The steps themselves live in external commands configured as templates in
//! `config.yaml`. This module only expands the templates, runs the commands in
//! order, and stops at the first step that does not succeed.
use crate::config::StepCommands;
use crate::stats::ModuleStat;
use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::{PathBuf, MAIN_SEPARATOR};
use std::process::Command;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Translate,
    Commit,
    Push,
}

impl Step {
    /// Fixed execution order for one module.
    pub const ORDER: [Step; 3] = [Step::Translate, Step::Commit, Step::Push];

    pub fn name(self) -> &'static str {
        match self {
            Step::Translate => "module:translate",
            Step::Commit => "module:commit",
            Step::Push => "module:push",
        }
    }

    /// Key under `steps:` in `config.yaml`.
    pub fn config_key(self) -> &'static str {
        match self {
            Step::Translate => "translate",
            Step::Commit => "commit",
            Step::Push => "push",
        }
    }

    fn template(self, commands: &StepCommands) -> Option<&str> {
        match self {
            Step::Translate => commands.translate.as_deref(),
            Step::Commit => commands.commit.as_deref(),
            Step::Push => commands.push.as_deref(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Success,
    /// Non-zero exit; `None` when the process was killed by a signal.
    Failed(Option<i32>),
}

/// Executes one delegated step for one module.
pub trait StepRunner {
    fn run_step(&mut self, step: Step, module: &ModuleStat) -> Result<StepStatus>;
}

/// Result of running every step for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Completed,
    /// `step` did not succeed; later steps were not attempted.
    Aborted { step: Step, reason: String },
}

/// Run translate, commit and push in order, stopping at the first failure.
pub fn dispatch_module(runner: &mut dyn StepRunner, module: &ModuleStat) -> DispatchOutcome {
    for step in Step::ORDER {
        let reason = match runner.run_step(step, module) {
            Ok(StepStatus::Success) => continue,
            Ok(StepStatus::Failed(Some(code))) => format!("exited with status {code}"),
            Ok(StepStatus::Failed(None)) => "terminated by signal".to_string(),
            Err(err) => format!("{err:#}"),
        };
        tracing::warn!(%step, module = %module.name, %reason, "step failed");
        return DispatchOutcome::Aborted { step, reason };
    }
    DispatchOutcome::Completed
}

/// Runs steps as external processes built from [`StepCommands`] templates.
///
/// Children inherit the terminal so interactive steps (editors, credential
/// prompts) keep working.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    commands: StepCommands,
}

impl CommandRunner {
    pub fn new(commands: StepCommands) -> Self {
        CommandRunner { commands }
    }
}

impl StepRunner for CommandRunner {
    fn run_step(&mut self, step: Step, module: &ModuleStat) -> Result<StepStatus> {
        let template = step.template(&self.commands).ok_or_else(|| {
            anyhow!(
                "no command configured for {step} (steps.{})",
                step.config_key()
            )
        })?;
        let args = expand_template(template, module)?;
        let program = resolve_program(&args[0])?;

        let start = Instant::now();
        let status = Command::new(&program)
            .args(&args[1..])
            .status()
            .with_context(|| format!("spawn {step} command: {}", args[0]))?;

        tracing::info!(
            %step,
            module = %module.name,
            elapsed_ms = start.elapsed().as_millis(),
            status = ?status.code(),
            "step complete"
        );
        if status.success() {
            Ok(StepStatus::Success)
        } else {
            Ok(StepStatus::Failed(status.code()))
        }
    }
}

/// Split a command template and substitute `{module}` and `{branch}`.
pub fn expand_template(template: &str, module: &ModuleStat) -> Result<Vec<String>> {
    let words =
        shell_words::split(template).with_context(|| format!("parse command: {template}"))?;
    if words.is_empty() {
        return Err(anyhow!("command template is empty"));
    }
    Ok(words
        .into_iter()
        .map(|word| {
            word.replace("{module}", &module.name)
                .replace("{branch}", &module.branch)
        })
        .collect())
}

fn resolve_program(program: &str) -> Result<PathBuf> {
    if program.contains(MAIN_SEPARATOR) || program.contains('/') {
        return Ok(PathBuf::from(program));
    }
    which::which(program).with_context(|| format!("{program} not found on PATH"))
}
