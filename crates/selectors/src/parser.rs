//! CSS selector parsing.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! Parsing is strict: any byte that does not fit the grammar subset produces
//! a [`SelectorError`] instead of being skipped, so a malformed selector can
//! be rejected before any document work happens.

use crate::error::SelectorError;
use crate::{Combinator, ComplexSelector, CompoundSelector, SelectorList, SimpleSelector};
use core::mem::take;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Internal tokenizer token kinds.
pub(crate) enum Tok {
    /// An explicit combinator with the byte offset where it appeared.
    Combinator { combinator: Combinator, at: usize },
    /// Whitespace between tokens that implies a descendant combinator.
    DescendantWS,
    /// A simple selector token (type, class, id, attribute, universal).
    Simple(SimpleSelector),
    /// A selector list separator with the byte offset where it appeared.
    Comma { at: usize },
}

/// True for bytes that may start an identifier.
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'-' || byte == b'_'
}

/// True for bytes that may continue an identifier.
fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Tokenizer over a selector string.
pub(crate) struct SelectorTokenizer {
    /// Underlying owned bytes for the selector.
    input_bytes: Vec<u8>,
    /// Current cursor index into `input_bytes`.
    index: usize,
}

impl SelectorTokenizer {
    /// Construct a tokenizer from input.
    #[inline]
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input_bytes: input.as_bytes().to_vec(),
            index: 0,
        }
    }

    /// Return the next selector token, if any.
    ///
    /// Whitespace between two tokens is reported as [`Tok::DescendantWS`]
    /// before the token it precedes; trailing whitespace produces nothing.
    pub(crate) fn next(&mut self) -> Result<Option<Tok>, SelectorError> {
        if self.skip_spaces() && self.input_bytes.get(self.index).is_some() {
            return Ok(Some(Tok::DescendantWS));
        }
        let Some(&current) = self.input_bytes.get(self.index) else {
            return Ok(None);
        };
        match current {
            b'*' => {
                self.index = self.index.saturating_add(1);
                Ok(Some(Tok::Simple(SimpleSelector::Universal)))
            }
            b'.' => self.consume_class().map(Some),
            b'#' => self.consume_id().map(Some),
            b'[' => self.consume_attr().map(Some),
            b'>' => Ok(Some(self.consume_combinator(Combinator::Child))),
            b'+' => Ok(Some(self.consume_combinator(Combinator::NextSibling))),
            b'~' => Ok(Some(self.consume_combinator(Combinator::SubsequentSibling))),
            b',' => {
                let at = self.index;
                self.index = self.index.saturating_add(1);
                Ok(Some(Tok::Comma { at }))
            }
            _ if is_ident_start(current) => self.consume_type().map(Some),
            _ => Err(SelectorError::UnexpectedChar {
                ch: self.char_at(self.index),
                at: self.index,
            }),
        }
    }

    /// Consume a single-byte combinator token.
    #[inline]
    fn consume_combinator(&mut self, combinator: Combinator) -> Tok {
        let at = self.index;
        self.index = self.index.saturating_add(1);
        Tok::Combinator { combinator, at }
    }

    /// Consume an identifier of ASCII alphanumerics, '-' and '_'.
    /// The first byte must not be a digit.
    fn consume_ident(&mut self) -> Result<String, SelectorError> {
        if !self
            .input_bytes
            .get(self.index)
            .is_some_and(|&byte| is_ident_start(byte))
        {
            return Err(SelectorError::ExpectedIdentifier { at: self.index });
        }
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if is_ident_continue(byte) {
                self.index = self.index.saturating_add(1);
            } else {
                break;
            }
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        Ok(String::from_utf8_lossy(slice).to_string())
    }

    /// Parse a type selector identifier into a `SimpleSelector::Type`.
    /// Tag names compare case-insensitively, so the identifier is lowercased.
    #[inline]
    fn consume_type(&mut self) -> Result<Tok, SelectorError> {
        let ident = self.consume_ident()?;
        Ok(Tok::Simple(SimpleSelector::Type(
            ident.to_ascii_lowercase(),
        )))
    }

    /// Parse a class selector following '.' into `SimpleSelector::Class`.
    /// Class tokens are case-sensitive and kept as written.
    #[inline]
    fn consume_class(&mut self) -> Result<Tok, SelectorError> {
        // skip '.'
        self.index = self.index.saturating_add(1);
        let ident = self.consume_ident()?;
        Ok(Tok::Simple(SimpleSelector::Class(ident)))
    }

    /// Parse an id selector following '#' into `SimpleSelector::IdSelector`.
    /// Ids are case-sensitive and kept as written.
    #[inline]
    fn consume_id(&mut self) -> Result<Tok, SelectorError> {
        // skip '#'
        self.index = self.index.saturating_add(1);
        let ident = self.consume_ident()?;
        Ok(Tok::Simple(SimpleSelector::IdSelector(ident)))
    }

    /// Parse an attribute selector, supporting `[name]` and `[name=value]`
    /// with quoted or unquoted values. Unquoted values follow identifier
    /// rules; anything else must be quoted.
    fn consume_attr(&mut self) -> Result<Tok, SelectorError> {
        let opened_at = self.index;
        // skip '['
        self.index = self.index.saturating_add(1);
        self.skip_spaces();
        if self.input_bytes.get(self.index).is_none() {
            return Err(SelectorError::UnclosedAttribute { at: opened_at });
        }
        let name = self.consume_ident()?.to_ascii_lowercase();
        self.skip_spaces();
        match self.input_bytes.get(self.index).copied() {
            None => Err(SelectorError::UnclosedAttribute { at: opened_at }),
            Some(b']') => {
                self.index = self.index.saturating_add(1);
                Ok(Tok::Simple(SimpleSelector::AttrExists { name }))
            }
            Some(b'=') => {
                self.index = self.index.saturating_add(1);
                self.skip_spaces();
                let value = match self.input_bytes.get(self.index).copied() {
                    Some(quote) if quote == b'"' || quote == b'\'' => {
                        let quote_at = self.index;
                        self.index = self.index.saturating_add(1);
                        self.consume_quoted_attr_value(quote, quote_at)?
                    }
                    _ => self.consume_ident()?,
                };
                self.skip_spaces();
                match self.input_bytes.get(self.index).copied() {
                    Some(b']') => {
                        self.index = self.index.saturating_add(1);
                        Ok(Tok::Simple(SimpleSelector::AttrEquals { name, value }))
                    }
                    None => Err(SelectorError::UnclosedAttribute { at: opened_at }),
                    Some(_) => Err(SelectorError::UnexpectedChar {
                        ch: self.char_at(self.index),
                        at: self.index,
                    }),
                }
            }
            Some(_) => Err(SelectorError::UnexpectedChar {
                ch: self.char_at(self.index),
                at: self.index,
            }),
        }
    }

    /// Consume a quoted attribute value until the matching quote byte.
    fn consume_quoted_attr_value(
        &mut self,
        quote: u8,
        opened_at: usize,
    ) -> Result<String, SelectorError> {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(&byte) if byte != quote) {
            self.index = self.index.saturating_add(1);
        }
        if self.input_bytes.get(self.index).is_none() {
            return Err(SelectorError::UnclosedString { at: opened_at });
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        // skip the closing quote
        self.index = self.index.saturating_add(1);
        Ok(String::from_utf8_lossy(slice).to_string())
    }

    /// Skip ASCII whitespace, reporting whether any was consumed.
    fn skip_spaces(&mut self) -> bool {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(byte) if byte.is_ascii_whitespace()) {
            self.index = self.index.saturating_add(1);
        }
        self.index > start
    }

    /// Decode the character at a byte offset for error reporting.
    fn char_at(&self, at: usize) -> char {
        self.input_bytes.get(at..).map_or('\u{FFFD}', |tail| {
            String::from_utf8_lossy(tail).chars().next().unwrap_or('\u{FFFD}')
        })
    }
}

/// Parse a selector list from CSS text.
/// Spec: Section 3, 4, 5–8, 11
///
/// # Errors
/// Returns the first [`SelectorError`] found. Every slot of a
/// comma-separated list must hold a well-formed complex selector.
pub fn parse_selector_list(input: &str) -> Result<SelectorList, SelectorError> {
    let mut tokens = SelectorTokenizer::new(input);
    let mut list = SelectorList::default();
    loop {
        let (complex, comma) = parse_one_complex(&mut tokens)?;
        list.selectors.push(complex);
        if comma.is_none() {
            return Ok(list);
        }
    }
}

/// Parse exactly one complex selector from CSS text.
/// Spec: Section 11 — Combinators; Section 5–8 — simple selectors
///
/// # Errors
/// Returns a [`SelectorError`] for malformed input, including a stray comma
/// where a single selector was expected.
pub fn parse_complex_selector(input: &str) -> Result<ComplexSelector, SelectorError> {
    let mut tokens = SelectorTokenizer::new(input);
    let (complex, comma) = parse_one_complex(&mut tokens)?;
    if let Some(at) = comma {
        return Err(SelectorError::UnexpectedChar { ch: ',', at });
    }
    Ok(complex)
}

/// Parse one complex selector from the token stream, stopping at a comma or
/// the end of input. Returns the byte offset of the comma when one stopped
/// the parse, so list parsing can continue after it.
fn parse_one_complex(
    tokens: &mut SelectorTokenizer,
) -> Result<(ComplexSelector, Option<usize>), SelectorError> {
    let mut sequence: Vec<(CompoundSelector, Option<Combinator>)> = Vec::new();
    let mut current = CompoundSelector::default();
    let mut pending_combinator: Option<(Combinator, usize)> = None;
    let mut pending_descendant = false;

    loop {
        match tokens.next()? {
            Some(Tok::DescendantWS) => {
                // Whitespace implies a descendant combinator, unless an
                // explicit combinator claims the gap.
                if !current.simples.is_empty() && pending_combinator.is_none() {
                    pending_descendant = true;
                }
            }
            Some(Tok::Combinator { combinator, at }) => {
                if current.simples.is_empty() || pending_combinator.is_some() {
                    return Err(SelectorError::DanglingCombinator { at });
                }
                pending_combinator = Some((combinator, at));
                pending_descendant = false;
            }
            Some(Tok::Simple(simple)) => {
                if let Some((combinator, _)) = pending_combinator.take() {
                    sequence.push((take(&mut current), Some(combinator)));
                } else if pending_descendant {
                    sequence.push((take(&mut current), Some(Combinator::Descendant)));
                }
                pending_descendant = false;
                current.simples.push(simple);
            }
            Some(Tok::Comma { at }) => {
                return finish_complex(sequence, current, pending_combinator)
                    .map(|complex| (complex, Some(at)));
            }
            None => {
                return finish_complex(sequence, current, pending_combinator)
                    .map(|complex| (complex, None));
            }
        }
    }
}

/// Seal a complex selector once its tokens run out.
fn finish_complex(
    mut sequence: Vec<(CompoundSelector, Option<Combinator>)>,
    current: CompoundSelector,
    pending_combinator: Option<(Combinator, usize)>,
) -> Result<ComplexSelector, SelectorError> {
    if let Some((_, at)) = pending_combinator {
        return Err(SelectorError::DanglingCombinator { at });
    }
    if current.simples.is_empty() {
        return Err(SelectorError::EmptySelector);
    }
    sequence.push((current, None));
    Ok(ComplexSelector { sequence })
}
