//! Literal-only parser for the argument values of an embedded plot call.
//!
//! Accepts the subset of JavaScript that describes data: objects, arrays,
//! strings, numbers, `true`, `false` and `null`. Anything executable
//! (identifiers, calls, operators) is rejected with a [`LiteralError`].
//!
//! Object keys may be quoted or bare identifiers, strings may use single or
//! double quotes, and trailing commas are tolerated. The whole literal may be
//! wrapped in parentheses.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Maximum nesting of objects, arrays and parentheses.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unexpected character {found:?} at byte {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("invalid number at byte {offset}")]
    InvalidNumber { offset: usize },

    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },

    #[error("identifier `{name}` is not a literal (byte {offset})")]
    Identifier { name: String, offset: usize },

    #[error("nesting deeper than {max} levels")]
    TooDeep { max: usize },

    #[error("trailing input at byte {offset}")]
    Trailing { offset: usize },
}

/// Parse a single literal value from `src`.
pub fn parse_literal(src: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser::new(src);
    let value = parser.parse_wrapped()?;
    parser.skip_ws();
    if parser.pos < src.len() {
        return Err(LiteralError::Trailing { offset: parser.pos });
    }
    Ok(value)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(found) => LiteralError::Unexpected {
                found,
                offset: self.pos,
            },
            None => LiteralError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, want: char) -> Result<(), LiteralError> {
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn enter(&mut self) -> Result<(), LiteralError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(LiteralError::TooDeep { max: MAX_DEPTH });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// A value optionally enclosed in grouping parentheses.
    fn parse_wrapped(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        if self.peek() != Some('(') {
            return self.parse_value();
        }
        self.bump();
        self.enter()?;
        let value = self.parse_wrapped()?;
        self.skip_ws();
        self.expect(')')?;
        self.leave();
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        self.skip_ws();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(q @ ('"' | '\'')) => self.parse_string(q).map(Value::String),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number()
            }
            Some(c) if is_ident_start(c) => {
                let offset = self.pos;
                match self.parse_ident() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    other => Err(LiteralError::Identifier {
                        name: other.to_string(),
                        offset,
                    }),
                }
            }
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_object(&mut self) -> Result<Value, LiteralError> {
        self.expect('{')?;
        self.enter()?;
        let mut map = Map::new();
        loop {
            self.skip_ws();
            if self.peek() == Some('}') {
                self.bump();
                break;
            }
            let key = self.parse_key()?;
            self.skip_ws();
            self.expect(':')?;
            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some('}') => break,
                Some(found) => {
                    return Err(LiteralError::Unexpected {
                        found,
                        offset: self.pos - found.len_utf8(),
                    })
                }
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_key(&mut self) -> Result<String, LiteralError> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => self.parse_string(q),
            Some(c) if is_ident_start(c) => Ok(self.parse_ident().to_string()),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
                Ok(self.src[start..self.pos].to_string())
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_array(&mut self) -> Result<Value, LiteralError> {
        self.expect('[')?;
        self.enter()?;
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(']') {
                self.bump();
                break;
            }
            items.push(self.parse_value()?);

            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(']') => break,
                Some(found) => {
                    return Err(LiteralError::Unexpected {
                        found,
                        offset: self.pos - found.len_utf8(),
                    })
                }
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_ident(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_ident_continue(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    fn parse_string(&mut self, quote: char) -> Result<String, LiteralError> {
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            let offset = self.pos;
            match self.bump() {
                None => return Err(LiteralError::UnexpectedEnd),
                Some(c) if c == quote => return Ok(out),
                Some('\n') | Some('\r') => {
                    return Err(LiteralError::Unexpected {
                        found: '\n',
                        offset,
                    })
                }
                Some('\\') => self.parse_escape(offset, &mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, offset: usize, out: &mut String) -> Result<(), LiteralError> {
        let invalid = LiteralError::InvalidEscape { offset };
        match self.bump().ok_or(LiteralError::UnexpectedEnd)? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let code = self.hex_digits(2).ok_or(invalid)?;
                out.push(char::from_u32(code).ok_or(LiteralError::InvalidEscape { offset })?);
            }
            'u' => {
                let high = self.hex_digits(4).ok_or(invalid.clone())?;
                let code = if (0xD800..0xDC00).contains(&high) {
                    // Surrogate pair: a second `\uXXXX` must follow.
                    if !self.src[self.pos..].starts_with("\\u") {
                        return Err(invalid);
                    }
                    self.pos += 2;
                    let low = self.hex_digits(4).ok_or(invalid.clone())?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(invalid);
                    }
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    high
                };
                out.push(char::from_u32(code).ok_or(invalid)?);
            }
            // Line continuation.
            '\n' => {}
            '\r' => {
                if self.peek() == Some('\n') {
                    self.pos += 1;
                }
            }
            '0'..='9' => return Err(invalid),
            other => out.push(other),
        }
        Ok(())
    }

    fn hex_digits(&mut self, count: usize) -> Option<u32> {
        let digits = self.src.get(self.pos..self.pos + count)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        self.pos += count;
        u32::from_str_radix(digits, 16).ok()
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let invalid = LiteralError::InvalidNumber { offset: start };

        if matches!(self.peek(), Some('-' | '+')) {
            self.pos += 1;
        }
        let int_digits = self.digits();
        let mut is_float = false;
        if self.peek() == Some('.') {
            self.pos += 1;
            is_float = true;
            if self.digits() == 0 && int_digits == 0 {
                return Err(invalid);
            }
        } else if int_digits == 0 {
            return Err(invalid);
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            is_float = true;
            if matches!(self.peek(), Some('-' | '+')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                return Err(invalid);
            }
        }
        if self.peek().is_some_and(is_ident_continue) {
            return Err(invalid);
        }

        let text = self.src[start..self.pos].trim_start_matches('+');
        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(n.into()));
            }
            if let Ok(n) = text.parse::<u64>() {
                return Ok(Value::Number(n.into()));
            }
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(invalid)
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
