use std::io::{self, BufRead, Lines};

const SPACES: [char; 2] = [' ', '\t'];

const COMMENT: char = '#';

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) line: usize,
    pub(crate) value: String,
}

impl Token {
    pub(crate) fn new(line: usize, value: &str) -> Self {
        Self {
            line,
            value: value.to_owned(),
        }
    }
}

/// Splits a line into its key and value tokens.
///
/// Blank and comment lines produce nothing. A key without a value (or followed only by a comment)
/// still gets an empty value token, so keys and values always come in pairs.
pub(crate) fn tokenize_line(line: usize, text: &str) -> Option<(Token, Token)> {
    let text = text.trim_start_matches(SPACES);
    if text.is_empty() || text.starts_with(COMMENT) {
        return None;
    }

    let end = text.find(SPACES).unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    let (key, rest) = text.split_at(end);

    let rest = rest.trim_matches(SPACES);
    let value = match rest.find(COMMENT) {
        Some(end) => &rest[..end],
        None => rest,
    };

    Some((Token::new(line, key), Token::new(line, value.trim_matches(SPACES))))
}

/// Lazily turns a reader into a stream of [`Token`]s, one line at a time.
///
/// Line numbers are 1-based. The first read error is yielded and ends the stream.
#[derive(Debug)]
pub(crate) struct Lexer<R> {
    lines: Lines<R>,
    line: usize,
    pending: Option<Token>,
    done: bool,
}

impl<R: BufRead> Lexer<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            pending: None,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some(Ok(value));
        }

        while !self.done {
            let text = match self.lines.next() {
                Some(Ok(text)) => text,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            };
            self.line += 1;

            if let Some((key, value)) = tokenize_line(self.line, &text) {
                self.pending = Some(value);
                return Some(Ok(key));
            }
        }

        None
    }
}
