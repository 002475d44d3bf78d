/// A deck: an ordered list of cards of a given domain, as dealt on the table.
///
/// The deck may be any subset of the universe (at most size^4 cards). The
/// same card may appear more than once; the solvers then treat each copy as
/// its own position.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::domain::Domain;
use crate::error::{SetError, SetResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    domain: Domain,
    cards: Vec<Card>,
}

impl Deck {
    /// Check every card against the domain, and the deck size against the
    /// universe size
    pub fn new(domain: Domain, cards: Vec<Card>) -> SetResult<Deck> {
        if cards.len() > domain.universe_size() {
            return Err(SetError::InvalidInput(format!(
                "a deck holds at most {} cards, got {}",
                domain.universe_size(),
                cards.len()
            )));
        }
        if let Some(card) = cards.iter().find(|c| !c.fits(domain)) {
            return Err(SetError::InvalidInput(format!(
                "card {} is outside of the domain 1..={}",
                card,
                domain.size()
            )));
        }
        return Ok(Deck { domain, cards });
    }

    /// The whole universe, in dense index order
    pub fn full(domain: Domain) -> Deck {
        Deck {
            domain,
            cards: domain.universe(),
        }
    }

    /// `n` distinct cards picked at random in the universe
    pub fn sample<R: Rng + ?Sized>(domain: Domain, n: usize, rng: &mut R) -> SetResult<Deck> {
        let mut cards = domain.universe();
        if n > cards.len() {
            return Err(SetError::InvalidInput(format!(
                "cannot sample {} cards out of {}",
                n,
                cards.len()
            )));
        }
        let (picked, _) = cards.partial_shuffle(rng, n);
        let cards = picked.to_vec();
        return Ok(Deck { domain, cards });
    }

    /// Build a deck from 4-digit card codes
    pub fn from_codes(domain: Domain, codes: &[&str]) -> SetResult<Deck> {
        let cards = codes
            .iter()
            .map(|code| Card::from_code(domain, code))
            .collect::<SetResult<Vec<Card>>>()?;
        Deck::new(domain, cards)
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.to_code()).collect()
    }
}

/// Number of copies of each card of the universe present in a deck, indexed
/// by the card dense index. Built once per solve, O(1) lookups.
pub struct Membership {
    domain: Domain,
    counts: Vec<u32>,
}

impl Membership {
    pub fn new(deck: &Deck) -> Self {
        let domain = deck.domain();
        let mut counts = vec![0u32; domain.universe_size()];
        for card in deck.cards() {
            counts[domain.index_of(card)] += 1;
        }
        Self { domain, counts }
    }

    /// Number of copies of `card` in the deck
    pub fn count(&self, card: &Card) -> u32 {
        if !card.fits(self.domain) {
            return 0;
        }
        self.counts[self.domain.index_of(card)]
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.count(card) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn test_new_rejects_bad_decks() {
        let d = Domain::STANDARD;
        let wide = Domain::new(4).unwrap();
        let outside = Card::from_code(wide, "1141").unwrap();
        assert!(matches!(
            Deck::new(d, vec![outside]),
            Err(SetError::InvalidInput(_))
        ));
        let too_many: Vec<Card> = d.universe().into_iter().chain(d.universe()).collect();
        assert!(matches!(Deck::new(d, too_many), Err(SetError::InvalidInput(_))));
        assert!(Deck::new(d, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_from_codes() {
        let d = Domain::STANDARD;
        let deck = Deck::from_codes(d, &["1111", "2222", "1111"]).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.codes(), vec!["1111", "2222", "1111"]);
        assert!(matches!(
            Deck::from_codes(d, &["1111", "4111"]),
            Err(SetError::Parse(_))
        ));
    }

    #[test]
    fn test_sample() {
        let d = Domain::STANDARD;
        let mut rng = SmallRng::seed_from_u64(42);
        for n in [0, 3, 12, 40, 81] {
            let deck = Deck::sample(d, n, &mut rng).unwrap();
            assert_eq!(deck.len(), n);
            let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
            assert_eq!(distinct.len(), n);
        }
        assert!(Deck::sample(d, 82, &mut rng).is_err());

        let a = Deck::sample(d, 20, &mut SmallRng::seed_from_u64(7)).unwrap();
        let b = Deck::sample(d, 20, &mut SmallRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_membership() {
        let d = Domain::STANDARD;
        let deck = Deck::from_codes(d, &["1111", "2222", "1111"]).unwrap();
        let index = Membership::new(&deck);
        let card = |code| Card::from_code(d, code).unwrap();
        assert_eq!(index.count(&card("1111")), 2);
        assert_eq!(index.count(&card("2222")), 1);
        assert!(!index.contains(&card("3333")));
        let wide = Domain::new(4).unwrap();
        assert!(!index.contains(&Card::from_code(wide, "4444").unwrap()));

        let full = Membership::new(&Deck::full(d));
        assert!(d.universe().iter().all(|c| full.count(c) == 1));
    }
}
