mod parser;

pub use self::parser::ParseError;

use std::io::{BufRead, BufReader, Read};

use ordered_multimap::ListOrderedMultimap;

use self::parser::lexer::Lexer;
use self::parser::Parser;

/// A `Host` block and its directives, e.g.
///
/// ```text
/// Host test
///     ConfigOption yes
///     OtherOption no
/// ```
///
/// where `test` is the name and the options end up in the values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    name: String,
    values: ListOrderedMultimap<String, String>,
}

impl Section {
    pub fn new(name: String) -> Self {
        Self {
            name,
            values: Default::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.values.keys_len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all directives in the order their keys first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        // `ListOrderedMultimap::iter()` follows value order, which changes on overwrite
        self.values
            .keys()
            .filter_map(|k| self.values.get(k).map(|v| (k.as_str(), v.as_str())))
    }
}

/// Parses SSH client style configuration into its `Host` sections.
///
/// The input must start with a `Host` line (blank lines and comments aside), otherwise
/// [`ParseError::ExpectedHost`] or [`ParseError::EmptyInput`] is returned. Sections are returned in
/// input order. Anything else is accepted leniently: a key that is not followed by a value before
/// the next `Host` token is dropped, and repeated keys keep their last value.
pub fn parse<R: Read>(reader: R) -> Result<Vec<Section>, ParseError> {
    parse_buf(BufReader::new(reader))
}

pub fn parse_buf<R: BufRead>(reader: R) -> Result<Vec<Section>, ParseError> {
    Parser::new(Lexer::new(reader)).parse()
}

pub fn parse_str(data: &str) -> Result<Vec<Section>, ParseError> {
    parse_buf(data.as_bytes())
}
