//! Find all the sets in a deck
//!
//! Two solvers are provided:
//!     - `solve`: for every pair of cards, compute the card(s) which would
//!       complete the pair into a set and look them up in the deck. This is
//!       O(n^2 * m) where m is the number of completions per pair (m = 1 in
//!       the standard 3-value domain).
//!     - `brute_solve`: test every triple of cards, O(n^3). Slow, but simple
//!       enough to serve as a reference.
//!
//! Each set contains 3 pairs, so `solve` finds it 3 times: results are
//! collected as canonical `Triple`s in a BTreeSet, which keeps one copy.

use std::collections::BTreeSet;

use separator::Separatable;

use crate::card::Card;
use crate::completion::completions;
use crate::deck::{Deck, Membership};
use crate::set::{Triple, is_set};
use crate::utils::debug_print;

/// Counters gathered by one run of the pair solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub pairs: u64,      // pairs of deck positions visited
    pub candidates: u64, // completing cards computed
    pub hits: u64,       // completing cards found in the deck
    pub sets: u64,       // distinct sets found
}

/// true if the deck holds a copy of `c3` at a position other than the two
/// cards of the pair (c1, c2)
fn found_at_third_position(index: &Membership, c1: &Card, c2: &Card, c3: &Card) -> bool {
    // copies of c3 already used by the pair itself
    let used = (c1 == c3) as u32 + (c2 == c3) as u32;
    index.count(c3) > used
}

/// All the sets of the deck, in canonical order
pub fn solve(deck: &Deck) -> Vec<Triple> {
    solve_with_stats(deck).0
}

/// Same as `solve`, with the work counters
///
/// A completing card only counts as found if the deck holds a copy of it at a
/// position other than the two cards of the pair, so that decks with repeated
/// cards give the same sets as `brute_solve`.
pub fn solve_with_stats(deck: &Deck) -> (Vec<Triple>, SolveStats) {
    let domain = deck.domain();
    let cards = deck.cards();
    let index = Membership::new(deck);
    let mut found: BTreeSet<Triple> = BTreeSet::new();
    let mut stats = SolveStats::default();

    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (c1, c2) = (cards[i], cards[j]);
            stats.pairs += 1;
            for c3 in completions(domain, &c1, &c2) {
                stats.candidates += 1;
                if found_at_third_position(&index, &c1, &c2, &c3) {
                    stats.hits += 1;
                    found.insert(Triple::new(c1, c2, c3));
                }
            }
        }
    }
    stats.sets = found.len() as u64;

    debug_print(&format!(
        "solve: {} cards, {} pairs, {} candidates, {} hits, {} sets",
        n,
        stats.pairs.separated_string(),
        stats.candidates.separated_string(),
        stats.hits.separated_string(),
        stats.sets.separated_string()
    ));
    return (found.into_iter().collect(), stats);
}

/// Any one set of the deck, or None if the deck has no set
pub fn find_any(deck: &Deck) -> Option<Triple> {
    let domain = deck.domain();
    let cards = deck.cards();
    let index = Membership::new(deck);
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (c1, c2) = (cards[i], cards[j]);
            for c3 in completions(domain, &c1, &c2) {
                if found_at_third_position(&index, &c1, &c2, &c3) {
                    return Some(Triple::new(c1, c2, c3));
                }
            }
        }
    }
    return None;
}

/// All the sets of the deck, by testing every triple of positions i < j < k.
/// Sets are listed in the order they are met.
pub fn brute_solve(deck: &Deck) -> Vec<Triple> {
    let cards = deck.cards();
    let n = cards.len();
    let mut sets = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_set(&cards[i], &cards[j], &cards[k]) {
                    sets.push(Triple::new(cards[i], cards[j], cards[k]));
                }
            }
        }
    }
    debug_print(&format!("brute_solve: {} cards, {} sets", n, sets.len()));
    return sets;
}

/// Collapse a list of sets into its set of distinct triples
pub fn canonicalize(sets: &[Triple]) -> BTreeSet<Triple> {
    sets.iter().copied().collect()
}

/// Triples found in one solution and not in the other (either way round)
pub fn difference(a: &[Triple], b: &[Triple]) -> Vec<Triple> {
    canonicalize(a)
        .symmetric_difference(&canonicalize(b))
        .copied()
        .collect()
}
