//! Menu input handling.
//!
//! Answers are resolved against the current candidate list only; anything that
//! does not name a candidate is reported back so the caller can re-prompt.
use crate::stats::ModuleStat;
use std::io::{self, BufRead, Write};

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Outcome of resolving one line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Index into the candidate list.
    Module(usize),
    Quit,
    /// A prefix shared by several candidate names.
    Ambiguous(Vec<String>),
    Unknown(String),
}

/// Resolve input in priority order: empty (first candidate), exact name,
/// quit word, index, unique name prefix.
pub fn resolve_selection(input: &str, candidates: &[ModuleStat]) -> Selection {
    let input = input.trim();
    if input.is_empty() {
        return if candidates.is_empty() {
            Selection::Unknown(String::new())
        } else {
            Selection::Module(0)
        };
    }
    if let Some(pos) = candidates.iter().position(|c| c.name == input) {
        return Selection::Module(pos);
    }
    if QUIT_WORDS.contains(&input.to_ascii_lowercase().as_str()) {
        return Selection::Quit;
    }
    if let Ok(index) = input.parse::<usize>() {
        return if index < candidates.len() {
            Selection::Module(index)
        } else {
            Selection::Unknown(input.to_string())
        };
    }

    let matches: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name.starts_with(input))
        .map(|(pos, _)| pos)
        .collect();
    match matches.as_slice() {
        [] => Selection::Unknown(input.to_string()),
        [only] => Selection::Module(*only),
        many => Selection::Ambiguous(
            many.iter()
                .map(|&pos| candidates[pos].name.clone())
                .collect(),
        ),
    }
}

/// Source of menu answers.
pub trait Prompter {
    /// Show `question` and read one answer. `None` means input is exhausted.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LinePrompter { reader, writer }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        LinePrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
