use std::fmt;

/// Failure categories surfaced by the parser. Callers can branch on the
/// kind instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not text at all (e.g. bytes that are not valid UTF-8).
    InvalidArgument,
    /// A character that starts no token, or a misspelled keyword literal.
    UnexpectedCharacter,
    /// A string literal left open at end of input.
    UnterminatedString,
    /// A backslash followed by an unrecognized escape, or `\u` without
    /// four hex digits.
    InvalidEscape,
    /// A malformed numeric literal.
    InvalidNumber,
    /// The lookahead token does not match what the grammar requires.
    UnexpectedToken,
    /// Non-whitespace content after a complete top-level value.
    TrailingData,
    /// Typed decoding failed after a successful parse.
    Deserialize,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte offset into the input where the failure was detected.
    pub offset: Option<usize>,
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            offset: None,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn unexpected_character(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter, message)
    }

    pub fn unterminated_string(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnterminatedString, message)
    }

    pub fn invalid_escape(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidEscape, message)
    }

    pub fn invalid_number(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber, message)
    }

    pub fn unexpected_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedToken, message)
    }

    pub fn trailing_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TrailingData, message)
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Deserialize, message)
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "{} at offset {offset}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}
