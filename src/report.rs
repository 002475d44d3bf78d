/// Summary of one driver run: both solvers on the same deck, with timings and
/// the triples on which they disagree (expected to be none).

use std::time::Instant;

use serde::Serialize;

use crate::deck::Deck;
use crate::set::Triple;
use crate::solver::{SolveStats, brute_solve, difference, solve_with_stats};
use crate::utils::created_a_total_of;

#[derive(Debug, Clone, Serialize)]
pub struct SolverRun {
    pub sets: usize,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairStats {
    pub pairs: u64,
    pub candidates: u64,
    pub hits: u64,
}

impl From<SolveStats> for PairStats {
    fn from(s: SolveStats) -> Self {
        Self {
            pairs: s.pairs,
            candidates: s.candidates,
            hits: s.hits,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub domain_size: u8,
    pub deck_size: usize,
    pub deck: Vec<String>,
    pub brute: SolverRun,
    pub pair: SolverRun,
    pub pair_stats: PairStats,
    pub difference: Vec<[String; 3]>,
}

impl Report {
    /// Run both solvers on the deck and compare their results
    pub fn run(deck: &Deck) -> Report {
        let start = Instant::now();
        let brute_sets = brute_solve(deck);
        let brute_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let (pair_sets, stats) = solve_with_stats(deck);
        let pair_secs = start.elapsed().as_secs_f64();

        let diff: Vec<Triple> = difference(&brute_sets, &pair_sets);
        Report {
            domain_size: deck.domain().size(),
            deck_size: deck.len(),
            deck: deck.codes(),
            brute: SolverRun {
                sets: brute_sets.len(),
                elapsed_secs: brute_secs,
            },
            pair: SolverRun {
                sets: pair_sets.len(),
                elapsed_secs: pair_secs,
            },
            pair_stats: stats.into(),
            difference: diff.iter().map(|t| t.codes()).collect(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.difference.is_empty()
    }

    /// Human readable lines, as printed by the driver
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "   ... deck of {} cards (domain 1..={})",
                self.deck_size, self.domain_size
            ),
            created_a_total_of(self.brute.sets, "brute force", self.brute.elapsed_secs),
            created_a_total_of(self.pair.sets, "pair solver", self.pair.elapsed_secs),
        ];
        if self.is_consistent() {
            lines.push("   ... difference between the results: none".to_string());
        } else {
            lines.push(format!(
                "   ... difference between the results: {} sets",
                self.difference.len()
            ));
            for codes in &self.difference {
                lines.push(format!("         ({} {} {})", codes[0], codes[1], codes[2]));
            }
        }
        lines
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
