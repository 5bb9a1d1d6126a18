//! Keyword patterns used to tag nodes with a semantic role.
//!
//! A keyword is a case-insensitive regular expression tested against a
//! node's display name. Patterns are compiled once, up front, so an invalid
//! pattern fails before any document is fetched.

use regex::{Regex, RegexBuilder};

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone)]
struct Keyword {
    source: String,
    pattern: Regex,
}

/// Ordered set of compiled keyword patterns.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    pub fn new<I, S>(sources: I) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = sources
            .into_iter()
            .map(|source| {
                let source = source.as_ref();
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map(|pattern| Keyword {
                        source: source.to_string(),
                        pattern,
                    })
                    .map_err(|e| ClientError::InvalidKeyword {
                        pattern: source.to_string(),
                        source: e,
                    })
            })
            .collect::<ClientResult<Vec<_>>>()?;
        Ok(Self { keywords })
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Keyword sources in declaration order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.source.as_str())
    }

    /// True when at least one keyword matches `name`.
    pub fn matches_any(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| k.pattern.is_match(name))
    }

    /// The last declared keyword matching `name`.
    ///
    /// Later declarations win over earlier ones when several match.
    pub fn last_match(&self, name: &str) -> Option<&str> {
        self.keywords
            .iter()
            .rev()
            .find(|k| k.pattern.is_match(name))
            .map(|k| k.source.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let set = KeywordSet::new(["textButton"]).unwrap();
        assert!(set.matches_any("TEXTBUTTON_primary"));
        assert!(set.matches_any("my-textbutton"));
        assert!(!set.matches_any("iconButton"));
    }

    #[test]
    fn test_last_declared_keyword_wins() {
        let set = KeywordSet::new(["button", "textButton"]).unwrap();
        assert_eq!(set.last_match("textButton_primary"), Some("textButton"));

        let reversed = KeywordSet::new(["textButton", "button"]).unwrap();
        assert_eq!(reversed.last_match("textButton_primary"), Some("button"));
    }

    #[test]
    fn test_no_match() {
        let set = KeywordSet::new(["textButton"]).unwrap();
        assert_eq!(set.last_match("card"), None);
    }

    #[test]
    fn test_regex_semantics() {
        let set = KeywordSet::new(["^text(Button|Link)$"]).unwrap();
        assert!(set.matches_any("textlink"));
        assert!(!set.matches_any("textButton_primary"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = KeywordSet::new(["text(Button"]).unwrap_err();
        match err {
            ClientError::InvalidKeyword { pattern, .. } => assert_eq!(pattern, "text(Button"),
            other => panic!("Expected InvalidKeyword, got {other:?}"),
        }
    }

    #[test]
    fn test_sources_keep_order() {
        let set = KeywordSet::new(["a", "b", "c"]).unwrap();
        assert_eq!(set.sources().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }
}
