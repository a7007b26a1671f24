//! Text matchers for literal and keyword assertions

use std::fmt;

/// How a literal's text or a keyword's name is compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
        }
    }

    /// Panics with `context` and both sides when `actual` does not match
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{context}: Expected text {self}, found '{actual}'"
        );
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "equal to '{expected}'"),
            TextMatch::StartsWith(prefix) => write!(f, "starting with '{prefix}'"),
            TextMatch::Contains(needle) => write!(f, "containing '{needle}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact("a b".into()).matches("a b"));
        assert!(!TextMatch::Exact("a".into()).matches("a b"));
        assert!(TextMatch::StartsWith("main".into()).matches("main host"));
        assert!(TextMatch::Contains("in h".into()).matches("main host"));
        assert!(TextMatch::Contains(String::new()).matches(""));
    }

    #[test]
    #[should_panic(expected = "root[1]: Expected text starting with 'x', found 'abc'")]
    fn test_assert_message() {
        TextMatch::StartsWith("x".into()).assert("abc", "root[1]");
    }
}
