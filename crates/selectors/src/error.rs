//! Selector parse errors.
//! Spec: <https://www.w3.org/TR/selectors-3/#w3cselgrammar>

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Error produced when selector text is malformed.
///
/// Positions are byte offsets into the original input. A selector that
/// parses with an error matches nothing and must not be partially applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The input (or one slot of a comma-separated list) has no compound.
    EmptySelector,
    /// A byte that cannot start any simple selector or combinator.
    UnexpectedChar { ch: char, at: usize },
    /// An identifier was required (after `.`, `#`, `[` or `=`) but missing.
    ExpectedIdentifier { at: usize },
    /// An attribute selector `[` was never closed with `]`.
    UnclosedAttribute { at: usize },
    /// A quoted attribute value was never closed with its quote.
    UnclosedString { at: usize },
    /// A combinator with no compound on one of its sides.
    DanglingCombinator { at: usize },
}

impl Display for SelectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SelectorError::EmptySelector => write!(f, "empty selector"),
            SelectorError::UnexpectedChar { ch, at } => {
                write!(f, "unexpected character '{ch}' at byte {at}")
            }
            SelectorError::ExpectedIdentifier { at } => {
                write!(f, "expected an identifier at byte {at}")
            }
            SelectorError::UnclosedAttribute { at } => {
                write!(f, "unclosed attribute selector starting at byte {at}")
            }
            SelectorError::UnclosedString { at } => {
                write!(f, "unclosed string starting at byte {at}")
            }
            SelectorError::DanglingCombinator { at } => {
                write!(f, "dangling combinator at byte {at}")
            }
        }
    }
}

impl Error for SelectorError {}
