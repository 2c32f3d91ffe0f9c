//! Diagonal highlight requests.
//!
//! Diagonal `j` is the set of cells `(n, r)` with `r = n - j`; `j = 0` is the
//! right edge (the constant `c`), `j = 1` the next one inwards, and so on.

pub mod color;

use std::collections::BTreeMap;

use crate::error::{TompkinsError, TompkinsResult};

pub use color::parse_color;

/// Which diagonals to ring, and how.
///
/// `single` is drawn in the neutral default style; every entry of `multi`
/// gets its own color. Both may be set at once and are drawn independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightSpec {
    pub single: Option<i64>,
    pub multi: BTreeMap<i64, String>,
}

impl HighlightSpec {
    pub fn new(single: Option<i64>, multi: BTreeMap<i64, String>) -> Self {
        Self { single, multi }
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_none() && self.multi.is_empty()
    }
}

/// True when cell `(n, r)` lies on diagonal `j`. Negative `j` never matches.
pub fn on_diagonal(n: usize, r: usize, j: i64) -> bool {
    if j < 0 {
        return false;
    }
    let j = j as u64;
    let n = n as u64;
    n >= j && r as u64 == n - j
}

/// Parse one `diagonal:color` entry, e.g. `2:#00ff00`.
///
/// Only the first `:` separates, so hex colors and other values containing
/// colons pass through untouched.
pub fn parse_highlight_entry(entry: &str) -> TompkinsResult<(i64, String)> {
    let (jstr, color) = entry
        .split_once(':')
        .ok_or_else(|| TompkinsError::malformed(format!("missing ':' in '{}'", entry)))?;
    let j = jstr.trim().parse::<i64>().map_err(|_| {
        TompkinsError::malformed(format!("diagonal index '{}' is not an integer", jstr))
    })?;
    let color = color.trim();
    if color.is_empty() {
        return Err(TompkinsError::malformed(format!(
            "empty color for diagonal {}",
            j
        )));
    }
    Ok((j, color.to_string()))
}

/// Parse a comma-separated `diagonal:color` list.
///
/// Entries that don't parse are skipped, never fatal. A repeated index keeps
/// the last color given for it.
pub fn parse_highlight_multi(arg: &str) -> BTreeMap<i64, String> {
    let mut result = BTreeMap::new();
    if arg.is_empty() {
        return result;
    }
    for part in arg.split(',') {
        match parse_highlight_entry(part) {
            Ok((j, color)) => {
                result.insert(j, color);
            }
            Err(e) => log::warn!("skipping highlight entry: {}", e.message),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_on_diagonal_right_edge() {
        assert!(on_diagonal(0, 0, 0));
        assert!(on_diagonal(5, 5, 0));
        assert!(!on_diagonal(5, 4, 0));
    }

    #[test]
    fn test_on_diagonal_inner() {
        assert!(on_diagonal(1, 0, 1));
        assert!(on_diagonal(4, 3, 1));
        assert!(!on_diagonal(0, 0, 1));
        assert!(!on_diagonal(3, 0, 2));
        assert!(on_diagonal(3, 0, 3));
    }

    #[test]
    fn test_negative_diagonal_never_matches() {
        for n in 0..6 {
            for r in 0..=n {
                assert!(!on_diagonal(n, r, -1));
            }
        }
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_highlight_entry("0:red").unwrap(), (0, "red".to_string()));
        assert_eq!(
            parse_highlight_entry("2:#00ff00").unwrap(),
            (2, "#00ff00".to_string())
        );
        assert_eq!(parse_highlight_entry(" 3 : blue ").unwrap(), (3, "blue".to_string()));
    }

    #[test]
    fn test_parse_entry_malformed() {
        for bad in ["bad", "x:red", "1.5:red", "4:", ""] {
            let err = parse_highlight_entry(bad).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedHighlightEntry, "{}", bad);
        }
    }

    #[test]
    fn test_parse_multi_skips_malformed() {
        let parsed = parse_highlight_multi("0:red,bad,2:blue");
        let expected: BTreeMap<i64, String> =
            [(0, "red".to_string()), (2, "blue".to_string())].into_iter().collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_multi_last_wins() {
        let parsed = parse_highlight_multi("1:red,1:green");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[&1], "green");
    }

    #[test]
    fn test_parse_multi_empty() {
        assert!(parse_highlight_multi("").is_empty());
        assert!(parse_highlight_multi(",,").is_empty());
    }

    #[test]
    fn test_spec_is_empty() {
        assert!(HighlightSpec::default().is_empty());
        assert!(!HighlightSpec::new(Some(0), BTreeMap::new()).is_empty());
    }
}
