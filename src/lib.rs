//! Find all the sets in a deck of Set cards
//!
//! A set is 3 cards such that, on each of the 4 attributes (number, color,
//! fill, shape), the cards show either the same value or 3 different values.
//! The pair solver completes every pair of cards into the card(s) needed for
//! a set and looks them up in the deck; the brute force solver checks every
//! triple and serves as a reference.

pub mod card;
pub mod completion;
pub mod deck;
pub mod domain;
pub mod error;
pub mod report;
pub mod set;
pub mod solver;
pub mod utils;

pub use card::{ATTRIBUTES, Attribute, Card};
pub use completion::{Completions, completions, next_to_set};
pub use deck::{Deck, Membership};
pub use domain::Domain;
pub use error::{SetError, SetResult};
pub use set::{Triple, attribute_ok, is_set, is_valid_triple};
pub use solver::{SolveStats, brute_solve, canonicalize, difference, find_any, solve, solve_with_stats};
