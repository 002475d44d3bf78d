/// Validity of a set (a triple of cards), and the canonical triple used to
/// count each set only once.
///
/// For every attribute, the 3 cards must show either the same value or 3
/// different values. Two equal and one different on any attribute breaks the
/// whole set.

use std::fmt::{Display, Formatter};

use crate::card::{Attribute, Card};
use crate::error::{SetError, SetResult};

/// true if the attribute is all-equal or all-different across the 3 cards
pub fn attribute_ok(attribute: Attribute, a: &Card, b: &Card, c: &Card) -> bool {
    let (x, y, z) = (a.get(attribute), b.get(attribute), c.get(attribute));
    let same = x == y && y == z && x == z;
    let diff = x != y && y != z && x != z;
    same || diff
}

/// true if the 3 cards form a valid set
///
/// Only pairwise comparisons are used, so the result does not depend on the
/// order of the arguments.
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL
        .iter()
        .all(|&attribute| attribute_ok(attribute, a, b, c))
}

/// Same as `is_set`, for a slice which must hold exactly 3 cards
pub fn is_valid_triple(cards: &[Card]) -> SetResult<bool> {
    match cards {
        [a, b, c] => Ok(is_set(a, b, c)),
        _ => Err(SetError::InvalidInput(format!(
            "a set is made of exactly 3 cards, got {}",
            cards.len()
        ))),
    }
}

/// A triple of cards in canonical (sorted) order: the same 3 cards give the
/// same Triple whatever the order in which they were found.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triple {
    cards: [Card; 3],
}

impl Triple {
    pub fn new(a: Card, b: Card, c: Card) -> Self {
        let mut cards = [a, b, c];
        cards.sort();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    pub fn is_valid(&self) -> bool {
        let [a, b, c] = &self.cards;
        is_set(a, b, c)
    }

    pub fn codes(&self) -> [String; 3] {
        self.cards.map(|c| c.to_code())
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let [a, b, c] = &self.cards;
        write!(f, "({} {} {})", a, b, c)
    }
}
