//! Strict recursive-descent JSON parser.
//!
//! One pull-model lexer and one LL(1) parser share a forward-only cursor
//! over a single input buffer and produce a [`Value`] tree. Parsing is
//! synchronous and reentrant: every call owns its own cursor, so
//! independent parses can run concurrently without locking.
//!
//! ```
//! use ll1_json::{parse, Value};
//!
//! let value = parse(r#"{"name": "Ada", "scores": [1, 2.5]}"#).unwrap();
//! assert_eq!(value["name"].as_str(), Some("Ada"));
//! assert_eq!(value["scores"][1], Value::Float(2.5));
//! ```
//!
//! The grammar is RFC 8259 with three documented deviations: `\u` escapes
//! are never combined into surrogate pairs, numeric range is whatever
//! `i64`/`f64` hold, and object enumeration order is unspecified.

pub mod decode;
pub mod error;
pub mod value;

use serde::de::DeserializeOwned;

pub use crate::error::{Error, ErrorKind};
pub use crate::value::{Object, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a JSON document into a [`Value`]. The whole input must be one
/// value plus optional whitespace; anything after it fails with
/// [`ErrorKind::TrailingData`].
pub fn parse(input: &str) -> Result<Value> {
    decode::parse_str(input)
}

/// Parses a JSON document from raw bytes, decoding UTF-8 first.
pub fn parse_slice(input: &[u8]) -> Result<Value> {
    decode::parse_slice(input)
}

/// Parses and deserializes into a concrete type.
pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    decode::from_str(input)
}
