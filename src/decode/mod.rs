pub mod parser;
pub mod scanner;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::value::Value;
use crate::Result;

use self::parser::Parser;

/// Parses one complete JSON document into a [`Value`] tree.
pub fn parse_str(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input)?;
    let value = parser.parse_value()?;
    parser.finish()?;
    Ok(value)
}

/// Like [`parse_str`], decoding the bytes as UTF-8 first. Bytes that are
/// not text fail with `InvalidArgument` before the lexer runs.
pub fn parse_slice(input: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(input)
        .map_err(|err| Error::invalid_argument(format!("input is not valid UTF-8 text: {err}")))?;
    parse_str(text)
}

/// Typed decoding: parse to a value tree, then deserialize through
/// `serde_json::from_value`.
pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    let value = parse_str(input)?;
    serde_json::from_value(value.into())
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}
