//! Parsing of user-supplied values
//!
//! All lists are comma-separated; blank entries are skipped, so `"1, 2,,3"`
//! and `"1,2,3"` read the same. Anything unparseable is reported as
//! [`VizError::MalformedInput`] before a runner starts.
//!
//! # Formats
//!
//! - integers: `5, 3, -4`
//! - tokens: `apple, 7, pear` (integers stay integers, see [`Token`])
//! - edges: `u-v` with weight 1, or `u-v:w` with an explicit weight

use crate::errors::VizError;
use crate::frame::Token;
use crate::structures::Edge;

fn entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

pub fn parse_int(raw: &str) -> Result<i64, VizError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| VizError::malformed(raw, "expected an integer"))
}

/// Comma-separated integers
pub fn parse_ints(raw: &str) -> Result<Vec<i64>, VizError> {
    entries(raw).map(parse_int).collect()
}

/// Comma-separated tokens; any non-blank text is a valid token
pub fn parse_tokens(raw: &str) -> Vec<Token> {
    entries(raw).map(Token::parse).collect()
}

/// One edge: `u-v` or `u-v:w`. Node ids may be negative (`-1--2`).
pub fn parse_edge(raw: &str) -> Result<Edge, VizError> {
    let raw = raw.trim();
    let (pair, weight) = match raw.split_once(':') {
        Some((pair, weight)) => {
            let weight = weight
                .trim()
                .parse::<u64>()
                .map_err(|_| VizError::malformed(raw, "edge weight must be a non-negative integer"))?;
            (pair.trim(), weight)
        }
        None => (raw, 1),
    };

    let split = pair
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(i, _)| i)
        .ok_or_else(|| VizError::malformed(raw, "expected an edge like u-v or u-v:w"))?;
    let (from, to) = (&pair[..split], &pair[split + 1..]);
    let node = |s: &str| {
        s.trim()
            .parse::<i64>()
            .map_err(|_| VizError::malformed(raw, "edge endpoints must be integers"))
    };
    Ok(Edge::new(node(from)?, node(to)?, weight))
}

/// Comma-separated edges
pub fn parse_edges(raw: &str) -> Result<Vec<Edge>, VizError> {
    entries(raw).map(parse_edge).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ints_skip_blank_entries() {
        assert_eq!(parse_ints(" 5, 3,,-4 ").unwrap(), vec![5, 3, -4]);
        assert!(parse_ints("").unwrap().is_empty());
    }

    #[test]
    fn test_bad_integer_is_malformed() {
        let err = parse_ints("1, two, 3").unwrap_err();
        assert!(matches!(err, VizError::MalformedInput { ref input, .. } if input == "two"));
    }

    #[test]
    fn test_tokens_keep_text() {
        assert_eq!(
            parse_tokens("apple, 7"),
            vec![Token::Text("apple".to_string()), Token::Int(7)]
        );
    }

    #[test]
    fn test_edges_with_and_without_weight() {
        assert_eq!(
            parse_edges("0-1, 1-2:7").unwrap(),
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 7)]
        );
        assert_eq!(parse_edge("-1--2:3").unwrap(), Edge::new(-1, -2, 3));
    }

    #[test]
    fn test_malformed_edges() {
        assert!(parse_edge("12").is_err());
        assert!(parse_edge("1-2:-3").is_err());
        assert!(parse_edge("a-b").is_err());
    }
}
