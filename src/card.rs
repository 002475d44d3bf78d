/// A Set card: 4 attributes (number, color, fill, shape), each one a value
/// taken in the domain 1..=size.
///
/// Cards are small `Copy` values: equality, ordering and hashing all work on
/// the attribute tuple, so two cards built from the same values are the same
/// card wherever they come from.

use std::fmt::{Display, Formatter, Result};

use crate::domain::Domain;
use crate::error::{SetError, SetResult};

/// Number of attributes on a card
pub const ATTRIBUTES: usize = 4;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Attribute {
    Number = 0,
    Color = 1,
    Fill = 2,
    Shape = 3,
}

impl Attribute {
    pub const ALL: [Attribute; ATTRIBUTES] = [
        Attribute::Number,
        Attribute::Color,
        Attribute::Fill,
        Attribute::Shape,
    ];
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match self {
                Attribute::Number => "number",
                Attribute::Color => "color",
                Attribute::Fill => "fill",
                Attribute::Shape => "shape",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    values: [u8; ATTRIBUTES],
}

impl Card {
    /// Build a card, checking every attribute against the domain
    pub fn new(domain: Domain, values: [u8; ATTRIBUTES]) -> SetResult<Card> {
        for attribute in Attribute::ALL {
            let value = values[attribute as usize];
            if !domain.contains(value) {
                return Err(SetError::InvalidAttribute {
                    attribute,
                    value,
                    domain_size: domain.size(),
                });
            }
        }
        return Ok(Card { values });
    }

    /// Build a card from values already known to be in the domain
    pub(crate) fn from_values(values: [u8; ATTRIBUTES]) -> Card {
        Card { values }
    }

    pub fn number(&self) -> u8 {
        self.values[Attribute::Number as usize]
    }
    pub fn color(&self) -> u8 {
        self.values[Attribute::Color as usize]
    }
    pub fn fill(&self) -> u8 {
        self.values[Attribute::Fill as usize]
    }
    pub fn shape(&self) -> u8 {
        self.values[Attribute::Shape as usize]
    }

    pub fn get(&self, attribute: Attribute) -> u8 {
        self.values[attribute as usize]
    }

    pub fn values(&self) -> [u8; ATTRIBUTES] {
        self.values
    }

    /// true if every attribute of the card lies in the given domain
    pub fn fits(&self, domain: Domain) -> bool {
        self.values.iter().all(|&v| domain.contains(v))
    }

    /// Packed structural key, see `From<Card> for u32`
    pub fn key(&self) -> u32 {
        u32::from(*self)
    }

    /// Return the 4-digit code of the card, e.g. "1231"
    pub fn to_code(&self) -> String {
        self.values.iter().map(|v| char::from(b'0' + v)).collect()
    }

    /// Parse a 4-digit code, one digit per attribute, every digit in the domain
    pub fn from_code(domain: Domain, code: &str) -> SetResult<Card> {
        let digits: Vec<char> = code.chars().collect();
        if digits.len() != ATTRIBUTES {
            return Err(SetError::Parse(format!(
                "card code {:?} must have exactly {} digits",
                code, ATTRIBUTES
            )));
        }
        let mut values = [0u8; ATTRIBUTES];
        for (i, c) in digits.iter().enumerate() {
            let value = match c.to_digit(10) {
                Some(d) => d as u8,
                None => {
                    return Err(SetError::Parse(format!(
                        "card code {:?}: {:?} is not a digit",
                        code, c
                    )));
                }
            };
            if !domain.contains(value) {
                return Err(SetError::Parse(format!(
                    "card code {:?}: {} is not in 1..={}",
                    code,
                    value,
                    domain.size()
                )));
            }
            values[i] = value;
        }
        return Ok(Card { values });
    }
}

/// u32 isomorphism
/// one byte per attribute, number in the most significant byte
/// 1231
/// 0x01020301
impl From<Card> for u32 {
    fn from(c: Card) -> u32 {
        u32::from_be_bytes(c.values)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.to_code())
    }
}
