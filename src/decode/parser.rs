use crate::error::Error;
use crate::value::{Object, Value};
use crate::Result;

use super::scanner::{Scanner, Token};

/// LL(1) recursive-descent parser. Holds the scanner plus one token of
/// lookahead; each grammar rule consumes the tokens it expects and leaves
/// the lookahead on the first token after its production.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    token: Token,
}

impl<'a> Parser<'a> {
    /// Primes the first token so `parse_value` always has a lookahead.
    pub fn new(input: &'a str) -> Result<Self> {
        let mut scanner = Scanner::new(input);
        let token = scanner.scan_token()?;
        Ok(Self { scanner, token })
    }

    fn advance(&mut self) -> Result<()> {
        self.token = self.scanner.scan_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        if std::mem::discriminant(&self.token) == std::mem::discriminant(&expected) {
            self.advance()
        } else {
            Err(Error::unexpected_token(format!(
                "expected token {}, found {}",
                expected.describe(),
                self.token.describe()
            ))
            .at(self.scanner.offset()))
        }
    }

    /// value := array | object | STRING | NUMBER | TRUE | FALSE | NULL
    pub fn parse_value(&mut self) -> Result<Value> {
        match self.token {
            Token::LeftBracket => self.parse_array(),
            Token::LeftBrace => self.parse_object(),
            Token::String(_) => Ok(Value::String(self.parse_string()?)),
            Token::Number(_) => self.parse_number(),
            Token::True => {
                self.advance()?;
                Ok(Value::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(Value::Bool(false))
            }
            Token::Null => {
                self.advance()?;
                Ok(Value::Null)
            }
            ref token => Err(Error::unexpected_token(format!(
                "expected a value, found {}",
                token.describe()
            ))
            .at(self.scanner.offset())),
        }
    }

    /// object := '{' '}' | '{' members '}'
    fn parse_object(&mut self) -> Result<Value> {
        let mut object = Object::new();
        self.expect(Token::LeftBrace)?;
        if self.token != Token::RightBrace {
            self.parse_members(&mut object)?;
        }
        self.expect(Token::RightBrace)?;
        Ok(Value::Object(object))
    }

    /// members := STRING ':' value (',' STRING ':' value)*
    fn parse_members(&mut self, object: &mut Object) -> Result<()> {
        let key = self.parse_string()?;
        self.expect(Token::Colon)?;
        let value = self.parse_value()?;
        // Repeated key: last write wins.
        object.insert(key, value);
        while self.token == Token::Comma {
            self.advance()?;
            let key = self.parse_string()?;
            self.expect(Token::Colon)?;
            let value = self.parse_value()?;
            object.insert(key, value);
        }
        Ok(())
    }

    /// array := '[' ']' | '[' elements ']'
    fn parse_array(&mut self) -> Result<Value> {
        let mut items = Vec::new();
        self.expect(Token::LeftBracket)?;
        if self.token != Token::RightBracket {
            self.parse_elements(&mut items)?;
        }
        self.expect(Token::RightBracket)?;
        Ok(Value::Array(items))
    }

    /// elements := value (',' value)*
    fn parse_elements(&mut self, items: &mut Vec<Value>) -> Result<()> {
        items.push(self.parse_value()?);
        while self.token == Token::Comma {
            self.advance()?;
            items.push(self.parse_value()?);
        }
        Ok(())
    }

    fn parse_string(&mut self) -> Result<String> {
        match std::mem::replace(&mut self.token, Token::Eof) {
            Token::String(text) => {
                self.advance()?;
                Ok(text)
            }
            token => Err(Error::unexpected_token(format!(
                "expected token STRING, found {}",
                token.describe()
            ))
            .at(self.scanner.offset())),
        }
    }

    /// Text containing `.`, `e`, or `E` becomes a `Float`; everything else
    /// an `Integer`, falling back to `Float` when the magnitude exceeds
    /// the i64 range.
    fn parse_number(&mut self) -> Result<Value> {
        let text = match std::mem::replace(&mut self.token, Token::Eof) {
            Token::Number(text) => text,
            token => {
                return Err(Error::unexpected_token(format!(
                    "expected token NUMBER, found {}",
                    token.describe()
                ))
                .at(self.scanner.offset()))
            }
        };
        self.advance()?;

        if text.contains('.') || text.contains('e') || text.contains('E') {
            return parse_float(&text).map(Value::Float);
        }
        match text.parse::<i64>() {
            Ok(int) => Ok(Value::Integer(int)),
            Err(_) => parse_float(&text).map(Value::Float),
        }
    }

    /// After the top-level value, the only token left must be EOF.
    pub fn finish(&self) -> Result<()> {
        if self.token == Token::Eof {
            Ok(())
        } else {
            Err(Error::trailing_data(format!(
                "extra data after top-level value, found {}",
                self.token.describe()
            ))
            .at(self.scanner.offset()))
        }
    }
}

fn parse_float(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|err| Error::invalid_number(format!("malformed number literal {text:?}: {err}")))
}
