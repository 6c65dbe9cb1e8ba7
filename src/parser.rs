use crate::error::{Error, Kind};
use crate::literal;
use crate::source::Source;
use crate::string;
use crate::value::{Map, Position, Value};
use encoding_rs::Encoding;
use log::{debug, trace};
use std::mem;

pub type ParseResult = std::result::Result<Value, Error>;

#[derive(Debug, Clone)]
pub struct Options {
    /// Name of the input used in diagnostics.
    pub origin: String,
    /// Maximum number of arrays and objects open at the same time.
    pub max_depth: usize,
    /// Encoding of byte input. When unset, UTF-8 is assumed unless a byte
    /// order mark says otherwise.
    pub encoding: Option<&'static Encoding>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            origin: String::from("unknown.json"),
            max_depth: 512,
            encoding: None,
        }
    }
}

impl Options {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }
}

/// A container whose closing delimiter has not been read yet.
enum Frame {
    Array(Vec<Value>),
    /// `key` holds the key read before the last `:` until its value is
    /// committed.
    Object { entries: Map, key: Option<String> },
}

fn is_sp(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn insert(entries: &mut Map, key: String, value: Value) -> Result<(), Kind> {
    if entries.contains_key(&key) {
        return Err(Kind::DuplicateKey(key));
    }

    entries.insert(key, value);

    Ok(())
}

/// Single pass parser reading one character at a time.
///
/// Nesting is tracked on an explicit stack of frames rather than through
/// recursion. Between delimiters the parser holds at most one of a pending
/// value (a quoted string or a closed container) and a token buffer with the
/// characters of an unquoted literal.
pub struct Parser<I: Iterator<Item = char>> {
    source: Source<I>,
    max_depth: usize,
    frames: Vec<Frame>,
    pending: Option<Value>,
    token: String,
    /// Where the last `,` was read, until something follows it.
    comma_at: Option<Position>,
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn new(chars: I, options: &Options) -> Self {
        Self {
            source: Source::new(chars, options.origin.as_str()),
            max_depth: options.max_depth,
            frames: Vec::new(),
            pending: None,
            token: String::new(),
            comma_at: None,
        }
    }

    pub fn parse(mut self) -> ParseResult {
        debug!("parsing {}", self.source.origin());

        let result = self.run();

        match &result {
            Ok(value) => debug!(
                "parsed {} as {} ({} lines)",
                self.source.origin(),
                value.kind(),
                self.source.position().line
            ),
            Err(e) => debug!("failed to parse {}", e),
        }

        result
    }

    fn run(&mut self) -> ParseResult {
        loop {
            match self.source.next() {
                Some('"') => {
                    self.expect_nothing_pending('"')?;
                    let string = string::decode(&mut self.source)?;
                    self.pending = Some(Value::String(string));
                }
                Some('[') => {
                    self.expect_nothing_pending('[')?;
                    self.open(Frame::Array(Vec::new()))?;
                }
                Some('{') => {
                    self.expect_nothing_pending('{')?;
                    self.open(Frame::Object {
                        entries: Map::new(),
                        key: None,
                    })?;
                }
                Some(',') => self.comma()?,
                Some(':') => self.colon()?,
                Some(']') => {
                    if let Some(root) = self.close_array()? {
                        return self.finish_root(root);
                    }
                }
                Some('}') => {
                    if let Some(root) = self.close_object()? {
                        return self.finish_root(root);
                    }
                }
                Some(c) if is_sp(c) => {
                    self.resolve_token()?;
                    self.space(c)?;
                }
                Some(c) => {
                    self.token.push(c);
                    self.comma_at = None;
                }
                None => {
                    self.resolve_token()?;
                    return self.finish();
                }
            }
        }
    }

    fn space(&mut self, c: char) -> Result<(), Error> {
        match c {
            '\r' | '\n' => self.source.line_break(c),
            _ => Ok(()),
        }
    }

    fn expect_nothing_pending(&mut self, c: char) -> Result<(), Error> {
        if self.pending.is_some() || !self.token.is_empty() {
            return Err(self.source.error(Kind::UnexpectedChar(c)));
        }

        self.comma_at = None;

        Ok(())
    }

    /// Takes whatever sits between two delimiters, classifying a token
    /// buffer if there is one.
    fn take_pending(&mut self) -> Result<Option<Value>, Error> {
        if self.token.is_empty() {
            return Ok(self.pending.take());
        }

        let token = mem::take(&mut self.token);

        if self.pending.is_some() {
            return Err(self.source.error(Kind::UnexpectedLiteral(token)));
        }

        match literal::classify(&token) {
            Some(value) => Ok(Some(value)),
            None => Err(self.source.error(Kind::MalformedLiteral(token))),
        }
    }

    fn resolve_token(&mut self) -> Result<(), Error> {
        if !self.token.is_empty() {
            self.pending = self.take_pending()?;
        }

        Ok(())
    }

    fn open(&mut self, frame: Frame) -> Result<(), Error> {
        if self.frames.len() >= self.max_depth {
            return Err(self.source.error(Kind::TooDeep(self.max_depth)));
        }

        self.frames.push(frame);
        trace!("opened container at depth {}", self.frames.len());

        Ok(())
    }

    fn comma(&mut self) -> Result<(), Error> {
        let value = match self.take_pending()? {
            Some(value) => value,
            None => return Err(self.source.error(Kind::UnexpectedComma)),
        };

        match self.frames.last_mut() {
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Object { entries, key }) => {
                let key = match key.take() {
                    Some(key) => key,
                    None => return Err(self.source.error(Kind::UnexpectedComma)),
                };

                insert(entries, key, value).map_err(|kind| self.source.error(kind))?;
            }
            None => return Err(self.source.error(Kind::UnexpectedComma)),
        }

        self.comma_at = Some(self.source.position());

        Ok(())
    }

    fn colon(&mut self) -> Result<(), Error> {
        if !self.token.is_empty() {
            return Err(self.source.error(Kind::UnexpectedColon));
        }

        let key = match self.pending.take() {
            Some(Value::String(key)) => key,
            _ => return Err(self.source.error(Kind::UnexpectedColon)),
        };

        match self.frames.last_mut() {
            Some(Frame::Object { key: slot, .. }) if slot.is_none() => {
                *slot = Some(key);
                Ok(())
            }
            _ => Err(self.source.error(Kind::UnexpectedColon)),
        }
    }

    fn close_array(&mut self) -> Result<Option<Value>, Error> {
        let mut items = match self.frames.pop() {
            Some(Frame::Array(items)) => items,
            _ => return Err(self.source.error(Kind::UnmatchedBracket)),
        };

        match self.take_pending()? {
            Some(value) => items.push(value),
            None => {
                if let Some(position) = self.comma_at {
                    return Err(self.trailing_comma(position, ']'));
                }
            }
        }

        Ok(self.close(Value::Array(items)))
    }

    fn close_object(&mut self) -> Result<Option<Value>, Error> {
        let (mut entries, key) = match self.frames.pop() {
            Some(Frame::Object { entries, key }) => (entries, key),
            _ => return Err(self.source.error(Kind::UnmatchedBrace)),
        };

        match (self.take_pending()?, key) {
            (Some(value), Some(key)) => {
                insert(&mut entries, key, value).map_err(|kind| self.source.error(kind))?;
            }
            (Some(_), None) => return Err(self.source.error(Kind::UnexpectedCloseBrace)),
            (None, Some(key)) => return Err(self.source.error(Kind::MissingValue(key))),
            (None, None) => {
                if let Some(position) = self.comma_at {
                    return Err(self.trailing_comma(position, '}'));
                }
            }
        }

        Ok(self.close(Value::Object(entries)))
    }

    fn trailing_comma(&self, position: Position, close: char) -> Error {
        Error::new(self.source.origin(), position, Kind::TrailingComma(close))
    }

    /// Returns the container when it was the root, otherwise leaves it
    /// pending for the enclosing one.
    fn close(&mut self, value: Value) -> Option<Value> {
        trace!("closed {} at depth {}", value.kind(), self.frames.len() + 1);

        self.comma_at = None;

        if self.frames.is_empty() {
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    fn finish_root(&mut self, root: Value) -> ParseResult {
        loop {
            match self.source.next() {
                None => return Ok(root),
                Some(c) if is_sp(c) => self.space(c)?,
                Some(c) => return Err(self.source.error(Kind::CharsAfterRoot(c))),
            }
        }
    }

    fn finish(&mut self) -> ParseResult {
        match self.frames.last() {
            Some(Frame::Array(_)) => Err(self.source.error(Kind::UnclosedArray)),
            Some(Frame::Object { .. }) => Err(self.source.error(Kind::UnclosedObject)),
            None => self
                .pending
                .take()
                .ok_or_else(|| self.source.error(Kind::EmptyDocument)),
        }
    }
}
