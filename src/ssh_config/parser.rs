pub(crate) mod lexer;

use std::io;

use log::{debug, trace};

use self::lexer::Token;
use super::Section;

pub(crate) const HOST_KEYWORD: &str = "Host";

pub(crate) type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The first token of the input was not `Host`.
    #[error("line {line}: expected Host")]
    ExpectedHost { line: usize },
    /// The input contained no tokens at all (only blank lines and comments).
    #[error("expected Host, but found no input")]
    EmptyInput,
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Whether this is a structural error in the input, as opposed to a failure reading it.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::ExpectedHost { .. } | Self::EmptyInput)
    }

    /// Line of the offending token, if there was one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ExpectedHost { line } => Some(*line),
            Self::EmptyInput | Self::Io(_) => None,
        }
    }
}

/// Irregularities the parser absorbs instead of rejecting.
///
/// Every other shape of input (stray tokens, empty values) is just paired up as key and value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Leniency {
    /// A key whose value never arrived because `Host` (or EOF) came first is dropped.
    DropDanglingKey,
}

impl Leniency {
    fn absorb(self, token: &Token) {
        match self {
            Self::DropDanglingKey => {
                debug!("line {}: dropping key {:?} without value", token.line, token.value)
            }
        }
    }
}

/// Groups a token stream into [`Section`]s.
pub(crate) struct Parser<I> {
    tokens: I,
}

impl<I> Parser<I>
where
    I: Iterator<Item = io::Result<Token>>,
{
    pub(crate) fn new(tokens: I) -> Self {
        Self { tokens }
    }

    fn next_token(&mut self) -> ParseResult<Option<Token>> {
        Ok(self.tokens.next().transpose()?)
    }

    // consume everything so the producer is never left behind with unread input
    fn drain(&mut self) {
        for token in self.tokens.by_ref() {
            if let Err(e) = token {
                debug!("ignoring read error while draining input: {e}");
                break;
            }
        }
    }

    pub(crate) fn parse(&mut self) -> ParseResult<Vec<Section>> {
        match self.next_token()? {
            Some(token) if token.value == HOST_KEYWORD => {}
            Some(token) => {
                debug!("line {}: expected Host, but found {:?}", token.line, token.value);
                self.drain();
                return Err(ParseError::ExpectedHost { line: token.line });
            }
            None => return Err(ParseError::EmptyInput),
        }

        let mut sections = Vec::new();

        // each iteration starts right after a `Host` token
        while let Some(name) = self.next_token()? {
            let mut section = Section::new(name.value);
            let more = self.parse_entries(&mut section)?;
            trace!(
                "line {}: parsed Host {:?} with {} entries",
                name.line,
                section.name(),
                section.len()
            );
            sections.push(section);

            if !more {
                break;
            }
        }

        Ok(sections)
    }

    /// Fills `section` with key/value pairs until the next `Host` token.
    ///
    /// Returns whether a `Host` token was found, i.e. another section follows.
    fn parse_entries(&mut self, section: &mut Section) -> ParseResult<bool> {
        let mut key: Option<Token> = None;

        while let Some(token) = self.next_token()? {
            if token.value == HOST_KEYWORD {
                if let Some(key) = key {
                    Leniency::DropDanglingKey.absorb(&key);
                }
                return Ok(true);
            }

            match key.take() {
                Some(key) => section.insert(key.value, token.value),
                None => key = Some(token),
            }
        }

        if let Some(key) = key {
            Leniency::DropDanglingKey.absorb(&key);
        }
        Ok(false)
    }
}
