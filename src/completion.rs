/// Completion of a pair of cards into a set
///
/// Given 2 cards, each attribute of a completing third card is constrained on
/// its own:
///     - same value on both cards: the third card must show that value too
///     - two different values: the third card must show any other value of the
///       domain (exactly one value when the domain has 3 values)
/// The completing cards are all the combinations of these per-attribute
/// candidates, so there are (size - 2)^k of them where k is the number of
/// attributes on which the pair differs.
///
/// `Completions` walks these combinations lazily, with an odometer over small
/// fixed-size arrays (no heap allocation). Calling `completions()` again
/// restarts the sequence.

use crate::card::{ATTRIBUTES, Attribute, Card};
use crate::domain::Domain;

const MAX_VALUES: usize = Domain::MAX_SIZE as usize;

/// Lazy, finite sequence of the cards completing a pair into a set
#[derive(Debug, Clone)]
pub struct Completions {
    // candidate values per attribute, valid up to lens[i]
    candidates: [[u8; MAX_VALUES]; ATTRIBUTES],
    lens: [u8; ATTRIBUTES],
    // odometer position, shape turns fastest
    cursor: [u8; ATTRIBUTES],
    remaining: usize,
}

/// All the cards which form a valid set with `a` and `b`
///
/// Both cards must fit in `domain`. Every card yielded is a valid completion,
/// and every valid completion is yielded exactly once.
pub fn completions(domain: Domain, a: &Card, b: &Card) -> Completions {
    let mut candidates = [[0u8; MAX_VALUES]; ATTRIBUTES];
    let mut lens = [0u8; ATTRIBUTES];
    for attribute in Attribute::ALL {
        let i = attribute as usize;
        let (x, y) = (a.get(attribute), b.get(attribute));
        if x == y {
            candidates[i][0] = x;
            lens[i] = 1;
        } else {
            for v in domain.values() {
                if v != x && v != y {
                    candidates[i][lens[i] as usize] = v;
                    lens[i] += 1;
                }
            }
        }
    }
    let remaining = lens.iter().map(|&l| l as usize).product();
    Completions {
        candidates,
        lens,
        cursor: [0; ATTRIBUTES],
        remaining,
    }
}

impl Iterator for Completions {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        let mut values = [0u8; ATTRIBUTES];
        for i in 0..ATTRIBUTES {
            values[i] = self.candidates[i][self.cursor[i] as usize];
        }
        // advance the odometer
        for i in (0..ATTRIBUTES).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.lens[i] {
                break;
            }
            self.cursor[i] = 0;
        }
        self.remaining -= 1;
        Some(Card::from_values(values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Completions {}

/// The unique card completing a set with `a` and `b` in the standard 3-value
/// domain: on each attribute the three values sum to 0 modulo 3.
///
/// None if the domain is not the standard one, or if a card does not fit in
/// it: wider domains may have several completions, see `completions()`.
pub fn next_to_set(domain: Domain, a: &Card, b: &Card) -> Option<Card> {
    if domain != Domain::STANDARD || !a.fits(domain) || !b.fits(domain) {
        return None;
    }
    let mut values = [0u8; ATTRIBUTES];
    for attribute in Attribute::ALL {
        let (x, y) = (a.get(attribute), b.get(attribute));
        values[attribute as usize] = (8 - x - y) % 3 + 1;
    }
    Some(Card::from_values(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::is_set;

    fn card(code: &str) -> Card {
        Card::from_code(Domain::STANDARD, code).unwrap()
    }

    #[test]
    fn test_known_completion() {
        let found: Vec<Card> =
            completions(Domain::STANDARD, &card("1111"), &card("2222")).collect();
        assert_eq!(found, vec![card("3333")]);
        let found: Vec<Card> =
            completions(Domain::STANDARD, &card("1213"), &card("1123")).collect();
        assert_eq!(found, vec![card("1333")]);
    }

    #[test]
    fn test_same_card_completes_to_itself() {
        let c = card("2132");
        let found: Vec<Card> = completions(Domain::STANDARD, &c, &c).collect();
        assert_eq!(found, vec![c]);
    }

    #[test]
    fn test_wider_domain_yields_product() {
        let d = Domain::new(5).unwrap();
        let a = Card::from_code(d, "1115").unwrap();
        let b = Card::from_code(d, "2215").unwrap();
        // number and color differ: 3 candidates each
        let found: Vec<Card> = completions(d, &a, &b).collect();
        assert_eq!(found.len(), 9);
        assert_eq!(completions(d, &a, &b).len(), 9);
        assert_eq!(found[0].to_code(), "3315");
        assert_eq!(found[1].to_code(), "3415");
        assert_eq!(found[8].to_code(), "5515");
        let distinct: std::collections::HashSet<Card> = found.iter().copied().collect();
        assert_eq!(distinct.len(), 9);
    }

    #[test]
    fn test_restartable() {
        let d = Domain::new(4).unwrap();
        let a = Card::from_code(d, "1234").unwrap();
        let b = Card::from_code(d, "4321").unwrap();
        let first: Vec<Card> = completions(d, &a, &b).collect();
        let second: Vec<Card> = completions(d, &a, &b).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 16);

        let mut it = completions(d, &a, &b);
        it.next();
        let cloned: Vec<Card> = it.clone().collect();
        let rest: Vec<Card> = it.collect();
        assert_eq!(cloned, rest);
        assert_eq!(rest.len(), 15);
    }

    #[test]
    fn test_soundness_and_exhaustiveness_standard() {
        let d = Domain::STANDARD;
        let cards = d.universe();
        for a in &cards {
            for b in &cards {
                let found: Vec<Card> = completions(d, a, b).collect();
                assert_eq!(found.len(), 1);
                for c in &found {
                    assert!(is_set(a, b, c), "{} {} {}", a, b, c);
                }
                for c in &cards {
                    if is_set(a, b, c) {
                        assert!(found.contains(c), "{} missing for {} {}", c, a, b);
                    }
                }
                assert_eq!(Some(found[0]), next_to_set(d, a, b));
            }
        }
    }

    #[test]
    fn test_next_to_set_only_in_standard_domain() {
        let wide = Domain::new(9).unwrap();
        let c = Card::from_code(wide, "9999").unwrap();
        assert_eq!(next_to_set(wide, &c, &c), None);

        let d4 = Domain::new(4).unwrap();
        let c = Card::from_code(d4, "4444").unwrap();
        assert_eq!(next_to_set(d4, &c, &c), None);
        // a card of a wider domain is rejected even with the standard domain
        assert_eq!(next_to_set(Domain::STANDARD, &c, &card("1111")), None);

        assert_eq!(
            next_to_set(Domain::STANDARD, &card("1111"), &card("2222")),
            Some(card("3333"))
        );
    }

    #[test]
    fn test_soundness_and_exhaustiveness_domain_4() {
        let d = Domain::new(4).unwrap();
        let cards = d.universe();
        for a in cards.iter().step_by(5) {
            for b in &cards {
                let found: Vec<Card> = completions(d, a, b).collect();
                let differing = (0..ATTRIBUTES)
                    .filter(|&i| a.values()[i] != b.values()[i])
                    .count();
                assert_eq!(found.len(), 2usize.pow(differing as u32));
                for c in &found {
                    assert!(c.fits(d));
                    assert!(is_set(a, b, c));
                }
                let expected = cards.iter().filter(|c| is_set(a, b, c)).count();
                assert_eq!(found.len(), expected);
            }
        }
    }
}
