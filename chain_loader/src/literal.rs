//! Object Literal Parser
//!
//! Registry entries are JavaScript modules, so their payload is an object
//! literal rather than strict JSON: keys may be bare identifiers, strings may
//! use single quotes, trailing commas and comments are common. This module
//! parses that data subset into a [`serde_json::Value`] without evaluating
//! anything. Expressions other than literals are rejected.

use crate::error::LiteralError;
use serde_json::{Map, Number, Value};

const MAX_DEPTH: usize = 128;

/* Parse the object literal at the start of `src` (leading whitespace and comments allowed).
   Returns the value and the byte offset just past its closing brace. */
pub fn parse_object_literal(src: &str) -> Result<(Value, usize), LiteralError> {
    let mut parser = LiteralParser { src, pos: 0 };
    parser.skip_trivia()?;
    if parser.peek() != Some('{') {
        return Err(parser.error("expected '{'"));
    }
    let value = parser.parse_object(0)?;
    Ok((value, parser.pos))
}

struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

fn integer_value(negative: bool, magnitude: u64) -> Option<Value> {
    if !negative {
        return Some(Value::from(magnitude));
    }
    i64::try_from(magnitude).ok().map(|m| Value::from(-m))
}

impl<'a> LiteralParser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", expected)))
        }
    }

    fn error(&self, message: impl Into<String>) -> LiteralError {
        LiteralError {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> LiteralError {
        LiteralError {
            offset,
            message: message.into(),
        }
    }

    /* Skip whitespace, line comments and block comments */
    fn skip_trivia(&mut self) -> Result<(), LiteralError> {
        let src = self.src;
        loop {
            let rest = &src[self.pos..];
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if rest.starts_with("//") => match rest.find('\n') {
                    Some(end) => self.pos += end + 1,
                    None => self.pos = self.src.len(),
                },
                Some('/') if rest.starts_with("/*") => match rest[2..].find("*/") {
                    Some(end) => self.pos += end + 4,
                    None => return Err(self.error("unterminated block comment")),
                },
                _ => return Ok(()),
            }
        }
    }

    /* `None` means `undefined`: dropped from objects, `null` inside arrays */
    fn parse_value(&mut self, depth: usize) -> Result<Option<Value>, LiteralError> {
        if depth > MAX_DEPTH {
            return Err(self.error("literal nested too deeply"));
        }
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => self.parse_object(depth).map(Some),
            Some('[') => self.parse_array(depth).map(Some),
            Some(quote @ ('"' | '\'' | '`')) => self.parse_string(quote).map(|s| Some(Value::String(s))),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number().map(Some)
            }
            Some(c) if is_ident_start(c) => {
                let start = self.pos;
                match self.parse_identifier() {
                    "true" => Ok(Some(Value::Bool(true))),
                    "false" => Ok(Some(Value::Bool(false))),
                    "null" => Ok(Some(Value::Null)),
                    "undefined" => Ok(None),
                    other => Err(self.error_at(start, format!("unsupported expression '{}'", other))),
                }
            }
            Some(c) => Err(self.error(format!("unexpected character '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia()?;
            if self.eat('}') {
                return Ok(Value::Object(map));
            }

            let key = self.parse_key()?;
            self.skip_trivia()?;
            self.expect(':')?;
            match self.parse_value(depth + 1)? {
                Some(value) => {
                    map.insert(key, value);
                }
                None => {
                    map.remove(&key);
                }
            }

            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            if self.eat('}') {
                return Ok(Value::Object(map));
            }
            return Err(self.error("expected ',' or '}'"));
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, LiteralError> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.eat(']') {
                return Ok(Value::Array(items));
            }

            let value = self.parse_value(depth + 1)?;
            items.push(value.unwrap_or(Value::Null));

            self.skip_trivia()?;
            if self.eat(',') {
                continue;
            }
            if self.eat(']') {
                return Ok(Value::Array(items));
            }
            return Err(self.error("expected ',' or ']'"));
        }
    }

    fn parse_key(&mut self) -> Result<String, LiteralError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_string(quote),
            Some(c) if c.is_ascii_digit() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.bump();
                }
                Ok(self.src[start..self.pos].to_string())
            }
            Some(c) if is_ident_start(c) => Ok(self.parse_identifier().to_string()),
            Some('[') => Err(self.error("computed keys are not supported")),
            Some(c) => Err(self.error(format!("unexpected character '{}' in object key", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_identifier(&mut self) -> &'a str {
        let src = self.src;
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.bump();
        }
        &src[start..self.pos]
    }

    fn parse_string(&mut self, quote: char) -> Result<String, LiteralError> {
        let start = self.pos;
        self.bump();
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error_at(start, "unterminated string"));
            };
            match c {
                c if c == quote => return Ok(out),
                '\\' => self.parse_escape(&mut out)?,
                '\n' | '\r' if quote != '`' => {
                    return Err(self.error_at(start, "line break in string literal"));
                }
                '$' if quote == '`' && self.peek() == Some('{') => {
                    return Err(self.error("template interpolation is not supported"));
                }
                c => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), LiteralError> {
        let escape_start = self.pos - 1;
        let Some(c) = self.bump() else {
            return Err(self.error("unterminated escape sequence"));
        };
        match c {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let code = self.parse_hex_digits(2)?;
                out.push(self.code_point(escape_start, code)?);
            }
            'u' => {
                let code = self.parse_unicode_escape()?;
                out.push(self.code_point(escape_start, code)?);
            }
            /* line continuation */
            '\r' => {
                self.eat('\n');
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            c if c.is_ascii_digit() => {
                return Err(self.error_at(escape_start, "octal escapes are not supported"));
            }
            other => out.push(other),
        }
        Ok(())
    }

    fn parse_unicode_escape(&mut self) -> Result<u32, LiteralError> {
        if self.eat('{') {
            let start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.bump();
            }
            let digits = &self.src[start..self.pos];
            if digits.is_empty() || digits.len() > 6 {
                return Err(self.error_at(start, "invalid unicode escape"));
            }
            let code = u32::from_str_radix(digits, 16)
                .map_err(|_| self.error_at(start, "invalid unicode escape"))?;
            self.expect('}')?;
            return Ok(code);
        }

        let high = self.parse_hex_digits(4)?;
        if (0xD800..0xDC00).contains(&high) && self.src[self.pos..].starts_with("\\u") {
            let pair_start = self.pos;
            self.pos += 2;
            let low = self.parse_hex_digits(4)?;
            if (0xDC00..0xE000).contains(&low) {
                return Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00));
            }
            return Err(self.error_at(pair_start, "invalid surrogate pair"));
        }
        Ok(high)
    }

    fn parse_hex_digits(&mut self, count: usize) -> Result<u32, LiteralError> {
        let src = self.src;
        let digits = src
            .get(self.pos..self.pos + count)
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| self.error("invalid hex escape"))?;
        let value = u32::from_str_radix(digits, 16).map_err(|_| self.error("invalid hex escape"))?;
        self.pos += count;
        Ok(value)
    }

    fn code_point(&self, offset: usize, code: u32) -> Result<char, LiteralError> {
        char::from_u32(code).ok_or_else(|| self.error_at(offset, format!("invalid code point U+{:X}", code)))
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let negative = if self.eat('-') {
            true
        } else {
            self.eat('+');
            false
        };

        let src = self.src;
        let rest = &src[self.pos..];
        if rest.starts_with("0x") || rest.starts_with("0X") {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit() || c == '_') {
                self.bump();
            }
            let digits: String = self.src[digits_start..self.pos].chars().filter(|c| *c != '_').collect();
            return u64::from_str_radix(&digits, 16)
                .ok()
                .and_then(|magnitude| integer_value(negative, magnitude))
                .ok_or_else(|| {
                    self.error_at(start, format!("invalid hex number '{}'", &self.src[start..self.pos]))
                });
        }

        let body_start = self.pos;
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let accepted = c.is_ascii_digit()
                || matches!(c, '.' | '_' | 'e' | 'E')
                || (matches!(c, '+' | '-') && matches!(prev, 'e' | 'E'));
            if !accepted {
                break;
            }
            prev = c;
            self.bump();
        }

        let text: String = self.src[body_start..self.pos].chars().filter(|c| *c != '_').collect();
        if text.is_empty() {
            return Err(self.error_at(start, "expected number"));
        }

        if text.bytes().all(|b| b.is_ascii_digit()) {
            if let Some(value) = text.parse::<u64>().ok().and_then(|m| integer_value(negative, m)) {
                return Ok(value);
            }
        }

        let float: f64 = text
            .parse()
            .map_err(|_| self.error_at(start, format!("invalid number '{}'", &self.src[start..self.pos])))?;
        let float = if negative { -float } else { float };
        Number::from_f64(float)
            .map(Value::Number)
            .ok_or_else(|| self.error_at(start, "number is not finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(src: &str) -> Value {
        parse_object_literal(src).unwrap().0
    }

    #[test]
    fn parses_registry_style_literal() {
        let src = r#"{
  name: "Ethereum Mainnet",
  chain: 'ETH',
  // comment between fields
  chainId: 1,
  networkId: 0x1,
  rpc: [
    "https://eth.llamarpc.com",
    { url: "https://rpc.ankr.com/eth", tracking: "none", isOpenSource: true, },
  ],
  /* block comment */
  nativeCurrency: { name: "Ether", symbol: "ETH", decimals: 18 },
  "infoURL": "https://ethereum.org",
  explorers: undefined,
}"#;
        assert_eq!(
            parse(src),
            json!({
                "name": "Ethereum Mainnet",
                "chain": "ETH",
                "chainId": 1,
                "networkId": 1,
                "rpc": [
                    "https://eth.llamarpc.com",
                    { "url": "https://rpc.ankr.com/eth", "tracking": "none", "isOpenSource": true }
                ],
                "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
                "infoURL": "https://ethereum.org"
            })
        );
    }

    #[test]
    fn reports_consumed_length() {
        let src = "{ a: 1 };\nexport default data;";
        let (_, end) = parse_object_literal(src).unwrap();
        assert_eq!(&src[end..], ";\nexport default data;");
    }

    #[test]
    fn decodes_string_escapes() {
        let value = parse(r#"{ s: 'it\'s \"q\" \\ \x41B\u{1F600}😀\n' }"#);
        assert_eq!(value["s"], json!("it's \"q\" \\ AB\u{1F600}\u{1F600}\n"));
    }

    #[test]
    fn numbers() {
        let value = parse("{ a: -5, b: 1.5, c: 1e3, d: 18446744073709551615, e: 1_000 }");
        assert_eq!(value["a"], json!(-5));
        assert_eq!(value["b"], json!(1.5));
        assert_eq!(value["c"], json!(1000.0));
        assert_eq!(value["d"], json!(u64::MAX));
        assert_eq!(value["e"], json!(1000));
    }

    #[test]
    fn undefined_in_array_becomes_null() {
        assert_eq!(parse("{ a: [1, undefined] }")["a"], json!([1, null]));
    }

    #[test]
    fn rejects_expressions() {
        let err = parse_object_literal("{ a: process.env.X }").unwrap_err();
        assert!(err.message.contains("unsupported expression 'process'"));
        assert_eq!(err.offset, 5);

        let err = parse_object_literal("{ a: `x${y}` }").unwrap_err();
        assert!(err.message.contains("interpolation"));

        assert!(parse_object_literal("{ [k]: 1 }").is_err());
        assert!(parse_object_literal("{ a: 1 b: 2 }").is_err());
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(parse_object_literal("{ a: [1, 2").is_err());
        assert!(parse_object_literal("{ a: 'open").is_err());
        assert!(parse_object_literal("{ /* never closed").is_err());
        assert!(parse_object_literal("[1]").is_err());
    }

    #[test]
    fn rejects_runaway_nesting() {
        let src = format!("{{ a: {}1{} }}", "[".repeat(200), "]".repeat(200));
        let err = parse_object_literal(&src).unwrap_err();
        assert!(err.message.contains("nested too deeply"));
    }
}
