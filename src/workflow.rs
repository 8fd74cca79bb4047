//! The interactive translation workflow.
//!
//! One pass is: fetch stats, rank pending modules, ask which one to work on,
//! run the delegated steps for it. Passes repeat until nothing is pending,
//! the user quits, or input runs out. Fetch failures are fatal.
use crate::candidates::select_candidates;
use crate::config::WorkflowConfig;
use crate::delegate::{dispatch_module, DispatchOutcome, StepRunner};
use crate::output;
use crate::remote::StatsClient;
use crate::selection::{resolve_selection, Prompter, Selection};
use crate::stats::ModuleStat;
use anyhow::{Context, Result};
use std::io::Write;

const ALL_TRANSLATED: &str = "All modules translated! Go to rest!";

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullOutcome {
    /// No module has pending strings.
    AllTranslated,
    /// The user quit or input was exhausted.
    Quit,
}

/// Run the `workflow:full` loop.
pub fn run_full(
    config: &WorkflowConfig,
    client: &StatsClient,
    prompter: &mut dyn Prompter,
    runner: &mut dyn StepRunner,
    out: &mut dyn Write,
) -> Result<FullOutcome> {
    output::comment(
        out,
        &format!(
            "Full workflow for {} [{}]...",
            config.release_set, config.language
        ),
    )?;

    let mut candidates = fetch_candidates(config, client, out)?;
    loop {
        if candidates.is_empty() {
            writeln!(out, "{ALL_TRANSLATED}")?;
            return Ok(FullOutcome::AllTranslated);
        }
        let Some(module) = prompt_for_module(config, &candidates, prompter, out)? else {
            return Ok(FullOutcome::Quit);
        };

        match dispatch_module(runner, &module) {
            DispatchOutcome::Completed => output::success(
                out,
                &format!("   {} translated, committed and pushed", module.name),
            )?,
            DispatchOutcome::Aborted { step, reason } => output::error(
                out,
                &format!(
                    "{step} failed for {}: {reason}; remaining steps skipped",
                    module.name
                ),
            )?,
        }

        candidates = fetch_candidates(config, client, out)?;
    }
}

/// Fetch and rank without prompting, for `modules:pending`.
pub fn run_pending(
    config: &WorkflowConfig,
    client: &StatsClient,
    json: bool,
    out: &mut dyn Write,
) -> Result<Vec<ModuleStat>> {
    let stats = client.fetch_stats(&config.release_set, &config.language)?;
    let candidates = select_candidates(&stats);
    if json {
        let text =
            serde_json::to_string_pretty(&candidates).context("serialize pending modules")?;
        writeln!(out, "{text}")?;
    } else if candidates.is_empty() {
        writeln!(out, "{ALL_TRANSLATED}")?;
    } else {
        write!(out, "{}", output::render_pending(&candidates))?;
    }
    Ok(candidates)
}

fn fetch_candidates(
    config: &WorkflowConfig,
    client: &StatsClient,
    out: &mut dyn Write,
) -> Result<Vec<ModuleStat>> {
    write!(out, "   Fetching DL stats...")?;
    out.flush()?;
    let stats = match client.fetch_stats(&config.release_set, &config.language) {
        Ok(stats) => stats,
        Err(err) => {
            writeln!(out)?;
            return Err(err.into());
        }
    };
    output::done(out)?;
    Ok(select_candidates(&stats))
}

/// Ask until the answer names a candidate. `None` when the user quits.
fn prompt_for_module(
    config: &WorkflowConfig,
    candidates: &[ModuleStat],
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<Option<ModuleStat>> {
    let question = format!(
        "{}   Which module do you want to translate [0]: ",
        output::render_menu(candidates)
    );
    loop {
        writeln!(
            out,
            "   Modules with translations needed in {}/{}",
            config.language, config.release_set
        )?;
        out.flush()?;
        let Some(answer) = prompter
            .ask(&question)
            .map_err(crate::error::WorkflowError::from)?
        else {
            return Ok(None);
        };

        match resolve_selection(&answer, candidates) {
            Selection::Module(index) => return Ok(Some(candidates[index].clone())),
            Selection::Quit => return Ok(None),
            Selection::Ambiguous(names) => output::error(
                out,
                &format!(
                    "'{}' matches several modules: {}",
                    answer.trim(),
                    names.join(", ")
                ),
            )?,
            Selection::Unknown(input) => {
                output::error(out, &format!("unknown module '{input}'"))?
            }
        }
    }
}
