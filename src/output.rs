//! User-facing status lines.
//!
//! Color follows the usual console convention: yellow comments, green success,
//! red errors. `console` drops the escapes when stdout is not a terminal.
use crate::stats::ModuleStat;
use console::style;
use std::io::{self, Write};

pub fn comment(out: &mut dyn Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", style(text).yellow())
}

pub fn done(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", style(" DONE").green())
}

pub fn success(out: &mut dyn Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", style(text).green())
}

pub fn error(out: &mut dyn Write, text: &str) -> io::Result<()> {
    writeln!(out, "\t{}", style(text).red())
}

/// Numbered candidate lines, one per module.
pub fn render_menu(candidates: &[ModuleStat]) -> String {
    let mut menu = String::new();
    for (index, module) in candidates.iter().enumerate() {
        menu.push_str(&format!(
            "\t[{index}] {} - {} ~ {} untranslated, {} fuzzy\n",
            style(&module.name).yellow(),
            module.branch,
            module.counts.untranslated,
            module.counts.fuzzy
        ));
    }
    menu
}

/// Plain table for the non-interactive listing.
pub fn render_pending(candidates: &[ModuleStat]) -> String {
    let width = candidates
        .iter()
        .map(|module| module.name.len())
        .max()
        .unwrap_or(0);
    let mut text = String::new();
    for module in candidates {
        text.push_str(&format!(
            "{:<width$}  {:>6} untranslated  {:>6} fuzzy  {}\n",
            module.name, module.counts.untranslated, module.counts.fuzzy, module.branch
        ));
    }
    text
}
