/// Errors raised when building cards, decks and triples

use crate::card::Attribute;

pub type SetResult<T> = Result<T, SetError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// Textual card code with a wrong length or a digit outside the domain
    Parse(String),

    /// Attribute value outside the domain at card construction
    InvalidAttribute {
        attribute: Attribute,
        value: u8,
        domain_size: u8,
    },

    /// A collection that is not exactly 3 cards, or not a well-formed deck
    InvalidInput(String),

    /// Domain size outside of the supported range
    InvalidDomain(u8),
}

impl std::fmt::Display for SetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetError::Parse(msg) => write!(f, "Parse error: {}", msg),
            SetError::InvalidAttribute { attribute, value, domain_size } => write!(
                f,
                "Invalid attribute: {} = {} is not in 1..={}",
                attribute, value, domain_size
            ),
            SetError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SetError::InvalidDomain(size) => write!(
                f,
                "Invalid domain: size {} is not in {}..={}",
                size,
                crate::domain::Domain::MIN_SIZE,
                crate::domain::Domain::MAX_SIZE
            ),
        }
    }
}

impl std::error::Error for SetError {}
