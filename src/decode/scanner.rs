use crate::error::Error;
use crate::Result;

/// One lexical unit. `String` carries the decoded text, `Number` the raw
/// matched text; whether a number becomes an integer or a float is the
/// parser's call.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    String(String),
    Number(String),
    True,
    False,
    Null,
    Eof,
}

impl Token {
    pub fn describe(&self) -> &'static str {
        match self {
            Token::LeftBracket => "'['",
            Token::RightBracket => "']'",
            Token::LeftBrace => "'{'",
            Token::RightBrace => "'}'",
            Token::Comma => "','",
            Token::Colon => "':'",
            Token::String(_) => "STRING",
            Token::Number(_) => "NUMBER",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Null => "NULL",
            Token::Eof => "<EOF>",
        }
    }
}

/// Single-pass lexer over one input buffer. The position only ever moves
/// forward; lookahead is one character.
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    pub fn offset(&self) -> usize {
        self.position
    }

    fn peek(&self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.position) {
            Some(&byte) if byte.is_ascii() => Some(byte as char),
            Some(_) => self.input[self.position..].chars().next(),
            None => None,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.position) {
            Some(&byte) if byte.is_ascii() => {
                self.position += 1;
                Some(byte as char)
            }
            Some(_) => {
                let ch = self.input[self.position..].chars().next()?;
                self.position += ch.len_utf8();
                Some(ch)
            }
            None => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skips whitespace and returns the next token. Dispatch is on a
    /// single lookahead character.
    pub fn scan_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        match self.peek() {
            None => Ok(Token::Eof),
            Some('[') => {
                self.advance();
                Ok(Token::LeftBracket)
            }
            Some(']') => {
                self.advance();
                Ok(Token::RightBracket)
            }
            Some('{') => {
                self.advance();
                Ok(Token::LeftBrace)
            }
            Some('}') => {
                self.advance();
                Ok(Token::RightBrace)
            }
            Some(',') => {
                self.advance();
                Ok(Token::Comma)
            }
            Some(':') => {
                self.advance();
                Ok(Token::Colon)
            }
            Some('"') => self.scan_string(),
            Some('t') => self.scan_keyword("true", Token::True),
            Some('f') => self.scan_keyword("false", Token::False),
            Some('n') => self.scan_keyword("null", Token::Null),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => self.scan_number(),
            Some(ch) => Err(Error::unexpected_character(format!(
                "unknown token start {ch:?}"
            ))
            .at(self.position)),
        }
    }

    fn scan_keyword(&mut self, literal: &'static str, token: Token) -> Result<Token> {
        for expected in literal.chars() {
            match self.peek() {
                Some(ch) if ch == expected => {
                    self.advance();
                }
                Some(ch) => {
                    return Err(Error::unexpected_character(format!(
                        "expected {expected:?} in {literal:?}, found {ch:?}"
                    ))
                    .at(self.position))
                }
                None => {
                    return Err(Error::unexpected_character(format!(
                        "expected {expected:?} in {literal:?}, found end of input"
                    ))
                    .at(self.position))
                }
            }
        }
        Ok(token)
    }

    fn scan_string(&mut self) -> Result<Token> {
        // Opening quote.
        self.advance();

        let mut value = String::new();
        loop {
            match self.advance() {
                None => {
                    return Err(Error::unterminated_string(
                        "string not closed before end of input",
                    )
                    .at(self.position))
                }
                Some('"') => return Ok(Token::String(value)),
                Some('\\') => value.push(self.scan_escape()?),
                Some(ch) => value.push(ch),
            }
        }
    }

    fn scan_escape(&mut self) -> Result<char> {
        match self.advance() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.scan_unicode_escape(),
            Some(ch) => Err(Error::invalid_escape(format!(
                "invalid character after backslash: {ch:?}"
            ))
            .at(self.position)),
            None => Err(Error::invalid_escape("end of input after backslash").at(self.position)),
        }
    }

    /// `\u` plus exactly four hex digits. Each escape decodes on its own:
    /// surrogate halves are never combined, and a lone half has no scalar
    /// representation, so it comes out as U+FFFD.
    fn scan_unicode_escape(&mut self) -> Result<char> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.advance() {
                Some(ch) => match ch.to_digit(16) {
                    Some(digit) => code = code * 16 + digit,
                    None => {
                        return Err(Error::invalid_escape(format!(
                            "invalid hex digit after \\u: {ch:?}"
                        ))
                        .at(self.position))
                    }
                },
                None => {
                    return Err(Error::invalid_escape(
                        "\\u requires four hex digits, found end of input",
                    )
                    .at(self.position))
                }
            }
        }
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`; the raw text is
    /// kept for the parser to materialize.
    fn scan_number(&mut self) -> Result<Token> {
        let mut text = String::new();

        if self.peek() == Some('-') {
            text.push('-');
            self.advance();
        }

        match self.peek() {
            Some(first) if first.is_ascii_digit() => {
                text.push(first);
                self.advance();
                if first == '0' {
                    if matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                        return Err(Error::invalid_number(
                            "leading zero followed by another digit",
                        )
                        .at(self.position));
                    }
                } else {
                    self.push_digits(&mut text);
                }
            }
            _ => {
                return Err(Error::invalid_number("no digit after '-'").at(self.position));
            }
        }

        if self.peek() == Some('.') {
            text.push('.');
            self.advance();
            if !matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                return Err(Error::invalid_number("no digit after '.'").at(self.position));
            }
            self.push_digits(&mut text);
        }

        if let Some(marker @ ('e' | 'E')) = self.peek() {
            text.push(marker);
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                text.push(sign);
                self.advance();
            }
            if !matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                return Err(Error::invalid_number("no digit in exponent").at(self.position));
            }
            self.push_digits(&mut text);
        }

        Ok(Token::Number(text))
    }

    fn push_digits(&mut self, text: &mut String) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
    }
}
