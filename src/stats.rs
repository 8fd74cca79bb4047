//! Module translation statistics and their XML form.
//!
//! The stats service answers with a document shaped like:
//!
//! ```text
//! <categories>
//!   <category id="...">
//!     <module id="gedit" branch="master">
//!       <domain id="po">
//!         <translated>120</translated>
//!         <untranslated>4</untranslated>
//!         <fuzzy>2</fuzzy>
//!       </domain>
//!     </module>
//!   </category>
//! </categories>
//! ```
//!
//! Parsing is best effort past the document shape: counters that are missing or
//! not numeric read as zero, the same way a loose integer cast would.
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// String-state counters taken from a module's `domain` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DomainCounts {
    pub translated: u64,
    pub untranslated: u64,
    pub fuzzy: u64,
}

impl DomainCounts {
    /// Strings that still need a translator: untranslated plus fuzzy.
    pub fn pending(&self) -> u64 {
        self.untranslated.saturating_add(self.fuzzy)
    }
}

/// One localizable module as reported by the stats service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleStat {
    pub name: String,
    pub branch: String,
    #[serde(flatten)]
    pub counts: DomainCounts,
}

impl ModuleStat {
    pub fn pending(&self) -> u64 {
        self.counts.pending()
    }
}

/// Modules keyed by id, iterated in first-seen document order.
///
/// Re-inserting an id replaces the stored record but keeps its original
/// position, so duplicates across categories are last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct ModuleStats {
    entries: Vec<ModuleStat>,
    index: BTreeMap<String, usize>,
}

impl ModuleStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stat: ModuleStat) {
        match self.index.get(&stat.name) {
            Some(&slot) => self.entries[slot] = stat,
            None => {
                self.index.insert(stat.name.clone(), self.entries.len());
                self.entries.push(stat);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ModuleStat> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleStat> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ModuleStat> for ModuleStats {
    fn from_iter<I: IntoIterator<Item = ModuleStat>>(iter: I) -> Self {
        let mut stats = ModuleStats::new();
        for stat in iter {
            stats.insert(stat);
        }
        stats
    }
}

/// Parse a `categories > category > module > domain` document.
pub fn parse_stats_xml(text: &str) -> Result<ModuleStats> {
    if text.trim().is_empty() {
        return Err(anyhow!("empty response body"));
    }
    let doc = roxmltree::Document::parse(text).context("parse stats XML")?;
    let root = doc.root_element();
    if !root.has_tag_name("categories") {
        return Err(anyhow!(
            "unexpected root element <{}>, expected <categories>",
            root.tag_name().name()
        ));
    }

    let mut stats = ModuleStats::new();
    for category in root.children().filter(|node| node.has_tag_name("category")) {
        for module in category.children().filter(|node| node.has_tag_name("module")) {
            let Some(id) = module.attribute("id") else {
                tracing::debug!("skipping module without id");
                continue;
            };
            let counts = module
                .children()
                .find(|node| node.has_tag_name("domain"))
                .map(|domain| DomainCounts {
                    translated: counter(domain, "translated"),
                    untranslated: counter(domain, "untranslated"),
                    fuzzy: counter(domain, "fuzzy"),
                })
                .unwrap_or_default();
            stats.insert(ModuleStat {
                name: id.to_string(),
                branch: module.attribute("branch").unwrap_or_default().to_string(),
                counts,
            });
        }
    }
    Ok(stats)
}

fn counter(domain: roxmltree::Node<'_, '_>, tag: &str) -> u64 {
    domain
        .children()
        .find(|node| node.has_tag_name(tag))
        .and_then(|node| node.text())
        .map(leading_integer)
        .unwrap_or(0)
}

fn leading_integer(text: &str) -> u64 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    // Digits only, so a parse failure is overflow.
    digits.parse().unwrap_or(u64::MAX)
}
