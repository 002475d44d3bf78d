//! The domain of attribute values: every attribute of a card takes a value in
//! 1..=size. The standard game uses size 3, i.e. 81 cards.
//!
//! Each card of the universe also has a dense index in 0..size^4, the
//! base-size number whose digits are the card attributes minus one (number is
//! the most significant digit):
//!     1111 -> 0, 1112 -> 1, ... 3333 -> 80    (size 3)

use std::ops::RangeInclusive;

use crate::card::{ATTRIBUTES, Card};
use crate::error::{SetError, SetResult};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Domain {
    size: u8,
}

impl Domain {
    /// At least 3 values, so that "all different" is possible
    pub const MIN_SIZE: u8 = 3;
    /// At most 9 values, so that a card code keeps one digit per attribute
    pub const MAX_SIZE: u8 = 9;

    /// The 81-card game
    pub const STANDARD: Domain = Domain { size: 3 };

    pub fn new(size: u8) -> SetResult<Domain> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(SetError::InvalidDomain(size));
        }
        return Ok(Domain { size });
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn values(&self) -> RangeInclusive<u8> {
        1..=self.size
    }

    pub fn contains(&self, value: u8) -> bool {
        value >= 1 && value <= self.size
    }

    /// Number of distinct cards: size^4
    pub fn universe_size(&self) -> usize {
        (self.size as usize).pow(ATTRIBUTES as u32)
    }

    /// Dense index of a card (the card must fit in this domain)
    pub fn index_of(&self, card: &Card) -> usize {
        let base = self.size as usize;
        card.values()
            .iter()
            .fold(0, |acc, &v| acc * base + (v as usize - 1))
    }

    /// Card at a given dense index, None if the index is out of the universe
    pub fn card_at(&self, index: usize) -> Option<Card> {
        if index >= self.universe_size() {
            return None;
        }
        let base = self.size as usize;
        let mut rem = index;
        let mut values = [0u8; ATTRIBUTES];
        for j in (0..ATTRIBUTES).rev() {
            values[j] = (rem % base) as u8 + 1;
            rem /= base;
        }
        return Some(Card::from_values(values));
    }

    /// All the cards of the domain, in dense index order
    pub fn universe(&self) -> Vec<Card> {
        (0..self.universe_size())
            .filter_map(|i| self.card_at(i))
            .collect()
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Domain::new(2), Err(SetError::InvalidDomain(2)));
        assert_eq!(Domain::new(10), Err(SetError::InvalidDomain(10)));
        assert_eq!(Domain::new(3), Ok(Domain::STANDARD));
        assert_eq!(Domain::default().size(), 3);
        assert_eq!(Domain::new(4).unwrap().values().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_universe() {
        let d = Domain::STANDARD;
        let cards = d.universe();
        assert_eq!(cards.len(), 81);
        assert_eq!(cards[0].to_code(), "1111");
        assert_eq!(cards[1].to_code(), "1112");
        assert_eq!(cards[3].to_code(), "1121");
        assert_eq!(cards[80].to_code(), "3333");
        let distinct: std::collections::HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(distinct.len(), 81);
        assert_eq!(Domain::new(5).unwrap().universe().len(), 625);
    }

    #[test]
    fn test_index_isomorphism() {
        for size in [3, 4, 7] {
            let d = Domain::new(size).unwrap();
            for i in 0..d.universe_size() {
                let card = d.card_at(i).unwrap();
                assert!(card.fits(d));
                assert_eq!(d.index_of(&card), i);
            }
            assert_eq!(d.card_at(d.universe_size()), None);
        }
    }
}
