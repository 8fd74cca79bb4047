//! Shared test infrastructure for integration tests.

#![allow(dead_code)]

use anyhow::Result;
use l10n_workflow::config::{ConfigFile, Overrides, WorkflowConfig};
use l10n_workflow::delegate::{Step, StepRunner, StepStatus};
use l10n_workflow::selection::Prompter;
use l10n_workflow::stats::ModuleStat;
use std::collections::VecDeque;
use std::io;

pub const RELEASE_SET: &str = "gnome-3-12";
pub const LANGUAGE: &str = "es";
pub const STATS_PATH: &str = "/languages/es/gnome-3-12/xml";

/// One `<module>` element with a single domain.
pub fn module_xml(id: &str, branch: &str, translated: u64, untranslated: u64, fuzzy: u64) -> String {
    format!(
        "<module id=\"{id}\" branch=\"{branch}\"><domain id=\"po\">\
         <translated>{translated}</translated>\
         <untranslated>{untranslated}</untranslated>\
         <fuzzy>{fuzzy}</fuzzy></domain></module>"
    )
}

/// A stats document with one `<category>` per inner slice.
pub fn stats_xml(categories: &[&[String]]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<categories>");
    for (index, modules) in categories.iter().enumerate() {
        xml.push_str(&format!("<category id=\"cat{index}\">"));
        for module in modules.iter() {
            xml.push_str(module);
        }
        xml.push_str("</category>");
    }
    xml.push_str("</categories>");
    xml
}

pub fn config_for(service_url: &str) -> WorkflowConfig {
    let file = ConfigFile {
        release_set: Some(RELEASE_SET.to_string()),
        language: Some(LANGUAGE.to_string()),
        service_url: Some(service_url.to_string()),
        ..ConfigFile::default()
    };
    WorkflowConfig::resolve(file, Overrides::default()).expect("test config")
}

/// Answers menu questions from a fixed script; `None` once exhausted.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompter {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Records every step invocation, optionally failing one step.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: Vec<(Step, String, String)>,
    pub fail_at: Option<Step>,
}

impl StepRunner for RecordingRunner {
    fn run_step(&mut self, step: Step, module: &ModuleStat) -> Result<StepStatus> {
        self.calls
            .push((step, module.name.clone(), module.branch.clone()));
        if self.fail_at == Some(step) {
            return Ok(StepStatus::Failed(Some(1)));
        }
        Ok(StepStatus::Success)
    }
}

/// Output with color escapes removed.
pub fn plain(out: &[u8]) -> String {
    console::strip_ansi_codes(&String::from_utf8_lossy(out)).into_owned()
}
