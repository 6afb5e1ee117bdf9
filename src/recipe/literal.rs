//! Strict reader for the list literals recipe tables store as text,
//! e.g. `['egg', "baker's flour"]` or `[51.5, 0.0, 13.0]`.
//!
//! Only flat lists of quoted strings or plain numbers are accepted.
//! Nothing is ever evaluated.

use std::iter::Peekable;
use std::str::Chars;

/// Parse a list of quoted strings
pub fn parse_string_list(text: &str) -> Result<Vec<String>, String> {
    Cursor::new(text).list(Cursor::string)
}

/// Parse a list of numbers
pub fn parse_number_list(text: &str) -> Result<Vec<f64>, String> {
    Cursor::new(text).list(Cursor::number)
}

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            pos: 0,
        }
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, want: char) -> Result<(), String> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(format!("expected '{}' at {}, found '{}'", want, self.pos - 1, c)),
            None => Err(format!("expected '{}', found end of input", want)),
        }
    }

    /// `[ item (, item)* ,? ]` followed only by whitespace
    fn list<T>(mut self, item: fn(&mut Self) -> Result<T, String>) -> Result<Vec<T>, String> {
        let mut out = Vec::new();
        self.skip_ws();
        self.expect('[')?;
        self.skip_ws();
        if self.peek() == Some(']') {
            self.bump();
        } else {
            loop {
                out.push(item(&mut self)?);
                self.skip_ws();
                match self.bump() {
                    Some(',') => {
                        self.skip_ws();
                        if self.peek() == Some(']') {
                            self.bump();
                            break;
                        }
                    }
                    Some(']') => break,
                    Some(c) => return Err(format!("unexpected '{}' at {}", c, self.pos - 1)),
                    None => return Err("unterminated list".to_string()),
                }
            }
        }
        self.skip_ws();
        match self.peek() {
            None => Ok(out),
            Some(c) => Err(format!("trailing '{}' after list", c)),
        }
    }

    fn string(&mut self) -> Result<String, String> {
        let quote = match self.bump() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => {
                return Err(format!(
                    "expected quoted string at {}, found '{}'",
                    self.pos - 1,
                    c
                ))
            }
            None => return Err("expected quoted string, found end of input".to_string()),
        };
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err("unterminated string".to_string()),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, String> {
        match self.bump() {
            Some('\\') => Ok('\\'),
            Some('\'') => Ok('\''),
            Some('"') => Ok('"'),
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('x') => self.hex_char(2),
            Some('u') => self.hex_char(4),
            Some(c) => Err(format!("unsupported escape '\\{}'", c)),
            None => Err("unterminated escape".to_string()),
        }
    }

    fn hex_char(&mut self, digits: usize) -> Result<char, String> {
        let mut code = 0u32;
        for _ in 0..digits {
            let d = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| "invalid hex escape".to_string())?;
            code = code * 16 + d;
        }
        char::from_u32(code).ok_or_else(|| format!("invalid code point {:#x}", code))
    }

    fn number(&mut self) -> Result<f64, String> {
        let start = self.pos;
        let mut buf = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E') {
                buf.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if buf.is_empty() {
            return Err(format!("expected number at {}", start));
        }
        buf.parse::<f64>()
            .map_err(|_| format!("invalid number '{}' at {}", buf, start))
    }
}
