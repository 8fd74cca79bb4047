//! Ranking of modules that still need translation work.
use crate::stats::{ModuleStat, ModuleStats};

/// Keep modules with pending strings, closest to completion first.
///
/// The sort is stable: modules with equal pending totals keep document order.
pub fn select_candidates(stats: &ModuleStats) -> Vec<ModuleStat> {
    let mut candidates: Vec<ModuleStat> = stats
        .iter()
        .filter(|stat| stat.pending() > 0)
        .cloned()
        .collect();
    candidates.sort_by_key(ModuleStat::pending);

    tracing::debug!(
        total = stats.len(),
        pending = candidates.len(),
        "candidates selected"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DomainCounts;

    fn stat(name: &str, untranslated: u64, fuzzy: u64) -> ModuleStat {
        ModuleStat {
            name: name.to_string(),
            branch: "master".to_string(),
            counts: DomainCounts {
                translated: 100,
                untranslated,
                fuzzy,
            },
        }
    }

    fn names(candidates: &[ModuleStat]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn excludes_fully_translated_modules() {
        let stats: ModuleStats = vec![
            stat("done", 0, 0),
            stat("fuzzy-only", 0, 3),
            stat("untranslated-only", 2, 0),
        ]
        .into_iter()
        .collect();

        let candidates = select_candidates(&stats);
        assert_eq!(names(&candidates), ["untranslated-only", "fuzzy-only"]);
        assert!(candidates.iter().all(|c| c.pending() > 0));
    }

    #[test]
    fn orders_by_pending_total_and_keeps_ties_stable() {
        let stats: ModuleStats = vec![
            stat("big", 40, 10),
            stat("tie-first", 3, 2),
            stat("small", 1, 0),
            stat("tie-second", 5, 0),
            stat("tie-third", 0, 5),
        ]
        .into_iter()
        .collect();

        let candidates = select_candidates(&stats);
        assert_eq!(
            names(&candidates),
            ["small", "tie-first", "tie-second", "tie-third", "big"]
        );
        for pair in candidates.windows(2) {
            assert!(pair[0].pending() <= pair[1].pending());
        }
    }

    #[test]
    fn all_translated_yields_nothing() {
        let stats: ModuleStats = vec![stat("a", 0, 0), stat("b", 0, 0)]
            .into_iter()
            .collect();
        assert!(select_candidates(&stats).is_empty());
        assert!(select_candidates(&ModuleStats::new()).is_empty());
    }
}
