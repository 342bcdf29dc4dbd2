//! Start/end anchor resolution.

use crate::config::{EndAnchorPolicy, ParserConfig};
use crate::error::{Error, Result};
use crate::search::PatternSet;
use serde::{Deserialize, Serialize};

/// What terminated a located span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanEnd {
    /// A closing phrase, included in the span
    ClosingPhrase,
    /// A stop marker, excluded from the span
    StopMarker,
    /// Nothing matched, the span runs to the end of the document
    EndOfDocument,
}

/// Byte range of the technical description in the cleaned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start of the start phrase
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
    /// How the end was found
    pub terminated_by: SpanEnd,
}

impl Span {
    /// Borrow the span from the text it was located in.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Locates the technical description between its anchors.
#[derive(Debug, Clone)]
pub struct AnchorSegmenter {
    start_phrases: PatternSet,
    closing_phrases: PatternSet,
    stop_markers: PatternSet,
    policy: EndAnchorPolicy,
}

impl AnchorSegmenter {
    /// Compile the anchor phrase lists.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            start_phrases: PatternSet::compile(&config.start_phrases)?,
            closing_phrases: PatternSet::compile(&config.closing_phrases)?,
            stop_markers: PatternSet::compile(&config.stop_markers)?,
            policy: config.end_anchor_policy,
        })
    }

    /// Find the description span.
    ///
    /// The span starts at the earliest start phrase. It ends after a closing
    /// phrase (first or last, per policy), or before the first stop marker
    /// when no closing phrase follows, or at the end of the text.
    pub fn locate(&self, text: &str) -> Result<Span> {
        let start = self
            .start_phrases
            .find_first(text, 0)
            .ok_or(Error::NoAnchorFound)?;

        let closing = match self.policy {
            EndAnchorPolicy::First => self.closing_phrases.find_first(text, start.end),
            EndAnchorPolicy::Last => self.closing_phrases.find_last(text, start.end),
        };

        let span = if let Some(closing) = closing {
            Span {
                start: start.start,
                end: closing.end,
                terminated_by: SpanEnd::ClosingPhrase,
            }
        } else if let Some(stop) = self.stop_markers.find_first(text, start.end) {
            Span {
                start: start.start,
                end: stop.start,
                terminated_by: SpanEnd::StopMarker,
            }
        } else {
            Span {
                start: start.start,
                end: text.len(),
                terminated_by: SpanEnd::EndOfDocument,
            }
        };

        log::debug!(
            "anchor {:?} at {}, span {}..{} ends by {:?}",
            start.text,
            start.start,
            span.start,
            span.end,
            span.terminated_by
        );
        Ok(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter(policy: EndAnchorPolicy) -> AnchorSegmenter {
        AnchorSegmenter::new(&ParserConfig::default().with_end_anchor_policy(policy)).unwrap()
    }

    #[test]
    fn test_span_includes_closing_phrase() {
        let text = "TCT No. T-1\nBeginning at a point from X; thence N 1 2 E 3 m to point of beginning. Containing";
        let span = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        let s = span.slice(text);
        assert!(s.starts_with("Beginning at a point"));
        assert!(s.ends_with("3 m to point of beginning"));
        assert_eq!(span.terminated_by, SpanEnd::ClosingPhrase);
    }

    #[test]
    fn test_abbreviated_anchors() {
        let text = "beg. at a pt. from BLLM 1; thence N 1 2 E 3 m to pt. of beg. done";
        let span = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        assert_eq!(span.slice(text), "beg. at a pt. from BLLM 1; thence N 1 2 E 3 m to pt. of beg.");
    }

    #[test]
    fn test_earliest_start_phrase_wins() {
        let text = "Commencing at a point A; later Beginning at a point B";
        let span = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        assert_eq!(span.start, 0);
    }

    #[test]
    fn test_first_and_last_policies() {
        let text = "Beginning at a point from A; thence N 1 2 E 3 m to point of beginning. \
                    Lot 2: thence S 1 2 W 3 m to the point of beginning. trailer";
        let first = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        assert!(first.slice(text).ends_with("N 1 2 E 3 m to point of beginning"));

        let last = segmenter(EndAnchorPolicy::Last).locate(text).unwrap();
        assert!(last.slice(text).ends_with("S 1 2 W 3 m to the point of beginning"));
        assert!(last.end > first.end);
    }

    #[test]
    fn test_stop_marker_excluded() {
        let text = "Beginning at a point from A; thence N 1 2 E 3 m\nMEMORANDUM OF ENCUMBRANCES\nEntry 1";
        let span = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        assert_eq!(span.terminated_by, SpanEnd::StopMarker);
        assert_eq!(span.slice(text), "Beginning at a point from A; thence N 1 2 E 3 m\n");
    }

    #[test]
    fn test_runs_to_end_of_document() {
        let text = "Beginning at a point from A; thence N 1 2 E 3 m";
        let span = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        assert_eq!(span.terminated_by, SpanEnd::EndOfDocument);
        assert_eq!(span.len(), text.len());
    }

    #[test]
    fn test_closing_before_start_is_ignored() {
        let text = "to point of beginning\nBeginning at a point from A; thence N 1 2 E 3 m";
        let span = segmenter(EndAnchorPolicy::First).locate(text).unwrap();
        assert_eq!(span.terminated_by, SpanEnd::EndOfDocument);
    }

    #[test]
    fn test_no_anchor() {
        let err = segmenter(EndAnchorPolicy::First)
            .locate("Lot 5, Block 2, thence N 1 2 E 3 m")
            .unwrap_err();
        assert!(matches!(err, Error::NoAnchorFound));
    }
}
