//! Element values for the pointer-based demos
//!
//! Linked lists, stacks and queues accept arbitrary user tokens, not only
//! integers. A [`Token`] keeps integers as integers (so `"07"` and `"7"`
//! compare equal) and everything else as trimmed text.
//!
//! # Token Types
//!
//! - [`Token::Int`]: 64-bit signed integer
//! - [`Token::Text`]: any other non-empty token

use serde::Serialize;
use std::fmt;

/// A value stored in a list, stack or queue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Token {
    Int(i64),
    Text(String),
}

impl Token {
    /// Parse a raw token, preferring the integer reading
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => Token::Int(n),
            Err(_) => Token::Text(raw.to_string()),
        }
    }

    /// Get the integer value, returns None for text tokens
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Token::Int(n) => Some(*n),
            Token::Text(_) => None,
        }
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Int(n)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Token::parse(raw)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{}", n),
            Token::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_tokens_normalize() {
        assert_eq!(Token::parse(" 07 "), Token::Int(7));
        assert_eq!(Token::parse("-3"), Token::Int(-3));
    }

    #[test]
    fn test_text_tokens_are_trimmed() {
        assert_eq!(Token::parse("  apple "), Token::Text("apple".to_string()));
        assert_eq!(Token::parse("apple").as_int(), None);
    }

    #[test]
    fn test_serializes_untagged() {
        let json = serde_json::to_string(&vec![Token::Int(1), Token::from("x")]).unwrap();
        assert_eq!(json, r#"[1,"x"]"#);
    }
}
