//! Compiled pattern lists with position tracking.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// A match with its byte range in the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// The matched text
    pub text: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Index of the pattern that produced the match
    pub pattern_index: usize,
}

/// An ordered list of compiled patterns.
///
/// Order matters for [`PatternSet::first_capture`], which implements
/// "first pattern that matches wins" fallbacks. Positional queries look at
/// every pattern and return the earliest match in the text.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile case-insensitive regex patterns.
    pub fn compile(sources: &[String]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|source| {
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| Error::InvalidPattern {
                        pattern: source.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    /// Earliest match at or after byte offset `from`.
    ///
    /// Ties on the start offset go to the longer match.
    pub fn find_first(&self, text: &str, from: usize) -> Option<PatternMatch> {
        self.find_all(text, from)
            .into_iter()
            .min_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)))
    }

    /// Latest match at or after byte offset `from`.
    pub fn find_last(&self, text: &str, from: usize) -> Option<PatternMatch> {
        self.find_all(text, from)
            .into_iter()
            .max_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)))
    }

    /// All non-overlapping matches of every pattern at or after `from`,
    /// sorted by position, longest first at equal starts.
    ///
    /// Searching starts at `from` but anchors and word boundaries still see
    /// the text before it.
    pub fn find_all(&self, text: &str, from: usize) -> Vec<PatternMatch> {
        if from > text.len() || !text.is_char_boundary(from) {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for (pattern_index, re) in self.patterns.iter().enumerate() {
            let mut pos = from;
            while pos <= text.len() {
                let Some(m) = re.find_at(text, pos) else {
                    break;
                };
                matches.push(PatternMatch {
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                    pattern_index,
                });
                pos = if m.end() > m.start() {
                    m.end()
                } else {
                    // empty match, step over one character
                    text[m.end()..]
                        .chars()
                        .next()
                        .map_or(text.len() + 1, |c| m.end() + c.len_utf8())
                };
            }
        }

        matches.sort_by_key(|m| (m.start, std::cmp::Reverse(m.end)));
        matches
    }

    /// Capture group 1 of the first pattern (in list order) that matches,
    /// trimmed. Empty captures count as no match.
    pub fn first_capture(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            re.captures_iter(text).find_map(|caps| {
                let value = caps.get(1)?.as_str().trim();
                (!value.is_empty()).then(|| value.to_string())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> PatternSet {
        let sources: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        PatternSet::compile(&sources).unwrap()
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let s = set(&["hello"]);
        assert!(s.is_match("HeLLo world"));
    }

    #[test]
    fn test_sources_are_regexes() {
        let s = set(&[r"t\.?c\.?t\.?\s+no"]);
        assert!(s.is_match("T.C.T. No. 1234"));
        assert!(s.is_match("tct   NO 1234"));
        assert!(!s.is_match("tct-no"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternSet::compile(&["(unclosed".to_string()]).unwrap_err();
        match err {
            Error::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_find_first_across_patterns() {
        let s = set(&["beta", "alpha"]);
        let m = s.find_first("alpha beta alpha", 0).unwrap();
        assert_eq!((m.start, m.end, m.pattern_index), (0, 5, 1));
    }

    #[test]
    fn test_find_first_prefers_longer_on_tie() {
        let s = set(&[r"beginning\s+at\s+a", r"beginning\s+at\s+a\s+point"]);
        let m = s.find_first("Beginning at a point", 0).unwrap();
        assert_eq!(m.text, "Beginning at a point");
    }

    #[test]
    fn test_find_from_offset() {
        let s = set(&["x"]);
        let text = "x..x..x";
        assert_eq!(s.find_first(text, 1).unwrap().start, 3);
        assert_eq!(s.find_last(text, 1).unwrap().start, 6);
        assert!(s.find_first(text, 7).is_none());
        assert!(s.find_first(text, 100).is_none());
    }

    #[test]
    fn test_first_capture_respects_order() {
        let s = set(&[r"owner:\s*(\w+)", r"favor of (\w+)"]);
        assert_eq!(
            s.first_capture("in favor of JUAN. Owner: MARIA"),
            Some("MARIA".to_string())
        );
        assert_eq!(s.first_capture("in favor of JUAN"), Some("JUAN".to_string()));
        assert_eq!(s.first_capture("nothing here"), None);
    }

    #[test]
    fn test_line_anchor_sees_preceding_text() {
        let s = set(&[r"(?m)^owner"]);
        let text = "co-owner\nOWNER: X";
        let m = s.find_first(text, 3).unwrap();
        assert_eq!(m.start, 9);
    }

    #[test]
    fn test_empty_set() {
        let s = PatternSet::default();
        assert!(s.is_empty());
        assert!(!s.is_match("anything"));
        assert!(s.find_first("anything", 0).is_none());
    }
}
