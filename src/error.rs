use crate::value::Position;
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Kind {
    #[error("unexpected '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected ','")]
    UnexpectedComma,
    #[error("unexpected ':'")]
    UnexpectedColon,
    #[error("unmatched ']'")]
    UnmatchedBracket,
    #[error("unmatched '}}'")]
    UnmatchedBrace,
    #[error("unexpected '}}' after a value without a key")]
    UnexpectedCloseBrace,
    #[error("unexpected literal '{0}'")]
    UnexpectedLiteral(String),
    #[error("malformed literal '{0}'")]
    MalformedLiteral(String),
    #[error("string is not terminated")]
    UnterminatedString,
    #[error("escape sequence is not terminated")]
    UnterminatedEscape,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("invalid hex digit '{0}' in unicode escape")]
    InvalidUnicodeEscape(char),
    #[error("trailing ',' before '{0}'")]
    TrailingComma(char),
    #[error("missing value for key \"{0}\"")]
    MissingValue(String),
    #[error("duplicate key \"{0}\"")]
    DuplicateKey(String),
    #[error("array is not closed")]
    UnclosedArray,
    #[error("object is not closed")]
    UnclosedObject,
    #[error("unexpected '{0}' after the root value")]
    CharsAfterRoot(char),
    #[error("no value found")]
    EmptyDocument,
    #[error("nested deeper than {0} levels")]
    TooDeep(usize),
    // Only reachable through a bug in the parser, never through input.
    #[error("duplicate unread of character")]
    DuplicateUnread,
}

/// A parse failure located in the input.
///
/// Displays as `origin(line,col): message`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{origin}({position}): {kind}")]
pub struct Error {
    pub origin: String,
    pub position: Position,
    pub kind: Kind,
}

impl Error {
    pub fn new(origin: impl Into<String>, position: Position, kind: Kind) -> Self {
        Self {
            origin: origin.into(),
            position,
            kind,
        }
    }
}

/// Failure of the entry points that read their input themselves.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("index {index} in \"{path}\" is out of range for an array of length {len}")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}
