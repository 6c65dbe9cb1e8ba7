#![forbid(unsafe_code)]
#![warn(clippy::all)]
//! This crate is a single pass JSON parser that reads its input one character at a time and builds a [`Value`](value::Value) tree. Every error carries the name of the input, the line and the column where parsing stopped. The tree can be serialized with [serde](https://serde.rs/) and queried with `/` separated paths.
//!
//! ## How does it work ?
//!
//! The parser never recurses. Open arrays and objects live on an explicit stack until their closing delimiter is read, so deeply nested documents are only limited by [`Options::max_depth`].
//!
//! Unquoted tokens are collected until the next delimiter and then classified: `true`, `false`, `null`, a 32 bit integer, or a float. Integers that do not fit in 32 bits are read as floats.
//!
//! ## How to use it ?
//!
//! ### Parsing
//!
//! ```rust
//! use plain_json_parser::{parse, value::Value};
//!
//! let parsed = parse(r#"{"hello": [1, 2.5, null]}"#).unwrap();
//!
//! let hello = parsed.as_object().unwrap().get("hello").unwrap();
//! assert_eq!(hello.as_array().unwrap()[0], Value::Integer(1));
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use plain_json_parser::{parse_chars, Options};
//!
//! let options = Options::default().with_origin("settings.json");
//! let error = parse_chars("[1, 2".chars(), &options).unwrap_err();
//!
//! assert_eq!(error.to_string(), "settings.json(1,5): array is not closed");
//! ```
//!
//! ### Paths
//!
//! ```rust
//! use plain_json_parser::{parse, walk::value_at_path};
//!
//! let parsed = parse(r#"{"a": [1, 2, 3]}"#).unwrap();
//!
//! assert_eq!(value_at_path(&parsed, "a/1", -1), Ok(2));
//! assert_eq!(value_at_path(&parsed, "b", -1), Ok(-1));
//! assert!(value_at_path(&parsed, "a/9", -1).is_err());
//! ```

extern crate encoding_rs;
extern crate encoding_rs_io;
extern crate indexmap;
extern crate log;
extern crate nom;
extern crate serde;

mod literal;
mod parser;
mod ser;
mod source;
mod string;

pub mod error;
pub mod value;
pub mod walk;

use encoding_rs_io::DecodeReaderBytesBuilder;
use error::LoadError;
use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use value::Value;

pub use parser::{Options, ParseResult, Parser};
pub use walk::value_at_path;

/// Parses `s` with the default [`Options`].
pub fn parse(s: &str) -> ParseResult {
    parse_chars(s.chars(), &Options::default())
}

/// Parses characters from any iterator. `options` names the input in errors
/// and bounds the nesting depth.
pub fn parse_chars<I>(chars: I, options: &Options) -> ParseResult
where
    I: IntoIterator<Item = char>,
{
    Parser::new(chars.into_iter(), options).parse()
}

/// Decodes all of `reader` and parses it.
///
/// A UTF-8 or UTF-16 byte order mark selects the encoding and is skipped.
/// Without one, [`Options::encoding`] is used, UTF-8 by default.
pub fn parse_reader<R: Read>(reader: R, options: &Options) -> Result<Value, LoadError> {
    let mut text = String::new();

    DecodeReaderBytesBuilder::new()
        .encoding(options.encoding)
        .bom_override(true)
        .strip_bom(true)
        .build(reader)
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            origin: options.origin.clone(),
            source,
        })?;

    Ok(parse_chars(text.chars(), options)?)
}

/// Parses the file at `path`, naming it by its path in errors.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value, LoadError> {
    parse_file_with(path, Options::default())
}

/// Like [`parse_file`], with the encoding and depth limit taken from
/// `options`. The origin is replaced by the path.
pub fn parse_file_with<P: AsRef<Path>>(path: P, options: Options) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let options = options.with_origin(path.display().to_string());

    debug!("opening {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Io {
        origin: options.origin.clone(),
        source,
    })?;

    parse_reader(io::BufReader::new(file), &options)
}
