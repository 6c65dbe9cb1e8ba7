use crate::error::{Error, Kind};
use crate::value::Position;
use std::iter::Fuse;

/// Character input with a single character of pushback and position
/// tracking for diagnostics.
pub struct Source<I: Iterator<Item = char>> {
    chars: Fuse<I>,
    unread: Option<char>,
    origin: String,
    line: usize,
    col: usize,
}

impl<I: Iterator<Item = char>> Source<I> {
    pub fn new(chars: I, origin: impl Into<String>) -> Self {
        Self {
            chars: chars.fuse(),
            unread: None,
            origin: origin.into(),
            line: 1,
            col: 0,
        }
    }

    /// Next character, or `None` once the input is exhausted. Exhaustion is
    /// stable: every later call returns `None` too.
    pub fn next(&mut self) -> Option<char> {
        let c = self.unread.take().or_else(|| self.chars.next())?;
        self.col += 1;

        Some(c)
    }

    /// Hands `c` back so the following `next` returns it.
    pub fn pushback(&mut self, c: char) -> Result<(), Error> {
        if self.unread.is_some() {
            return Err(self.error(Kind::DuplicateUnread));
        }

        self.unread = Some(c);
        self.col = self.col.saturating_sub(1);

        Ok(())
    }

    /// Accounts for a line break that started with `c`. A `\r` swallows a
    /// following `\n`; any other character after it is pushed back.
    pub fn line_break(&mut self, c: char) -> Result<(), Error> {
        if c == '\r' {
            if let Some(next) = self.next() {
                if next != '\n' {
                    self.pushback(next)?;
                }
            }
        }

        self.line += 1;
        self.col = 0;

        Ok(())
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn error(&self, kind: Kind) -> Error {
        Error::new(self.origin.as_str(), self.position(), kind)
    }
}
