//! Configuration for technical-description parsing.
//!
//! Every phrase list here is data: regex fragments that are compiled
//! case-insensitively by [`TitleParser::new`](crate::parser::TitleParser::new).
//! New registry formats are handled by extending these lists, either in code
//! through the `with_*` builders or by loading a JSON document.
//!
//! # Example
//!
//! ```
//! use metes_oxide::config::{EndAnchorPolicy, ParseMode, ParserConfig};
//!
//! let config = ParserConfig::default()
//!     .with_start_phrase(r"starting\s+at\s+a\s+point")
//!     .with_end_anchor_policy(EndAnchorPolicy::Last)
//!     .with_mode(ParseMode::Lenient);
//! assert!(config.start_phrases.iter().any(|p| p.starts_with("starting")));
//! ```

use crate::bearing::SecondsPolicy;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which closing phrase ends the technical description when several follow
/// the start anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndAnchorPolicy {
    /// First closing phrase after the start anchor
    #[default]
    First,
    /// Last closing phrase after the start anchor (multi-parcel documents)
    Last,
}

/// How corner fragments with a bearing but no distance are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Fail the whole parse with `DistanceNotFound`
    #[default]
    Strict,
    /// Drop the fragment and keep going
    Lenient,
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Opening phrases of the technical description
    pub start_phrases: Vec<String>,

    /// Phrases closing the boundary ("to point of beginning")
    pub closing_phrases: Vec<String>,

    /// Section headings that end the description when no closing phrase
    /// is found, and truncate it when they appear mid-span
    pub stop_markers: Vec<String>,

    /// Whole-line page header/footer patterns
    pub header_footer_patterns: Vec<String>,

    /// Inline page continuation notes, removed wherever they appear
    pub continuation_patterns: Vec<String>,

    /// Title-number patterns, tried in order; capture group 1 is the value
    pub title_number_patterns: Vec<String>,

    /// Owner-name patterns, tried in order; capture group 1 is the value
    pub owner_patterns: Vec<String>,

    /// Stated-area patterns, tried in order; capture group 1 is the number
    pub area_patterns: Vec<String>,

    /// Longest all-caps line (in words) treated as a section heading
    pub max_heading_words: usize,

    /// End-anchor resolution when several closing phrases follow the start
    pub end_anchor_policy: EndAnchorPolicy,

    /// Strict or lenient treatment of malformed corner fragments
    pub mode: ParseMode,

    /// Whether arc-seconds contribute to computed azimuths
    pub seconds_policy: SecondsPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ParserConfig {
    /// Create new configuration with the built-in phrase lists.
    pub fn new() -> Self {
        Self {
            start_phrases: strings(&[
                r"beginning\s+at\s+a\s+point",
                r"beg\.?\s+at\s+a\s+point",
                r"commencing\s+at\s+a\s+point",
                r"beginning\s+at\s+a",
                r"beg\.?\s+at\s+a",
                r"commencing\s+at\s+a",
            ]),
            closing_phrases: strings(&[
                r"to\s+(?:the\s+)?(?:point|pt\.?)\s+of\s+(?:beginning|beg\.?)",
                r"to\s+the\s+place\s+of\s+beginning",
                r"to\s+(?:the\s+)?p\.?\s*o\.?\s*b\b\.?",
            ]),
            stop_markers: strings(&[
                r"(?m)^\s*memorandum\s+of\s+encumbrances",
                r"(?m)^\s*encumbrances\b",
                r"(?m)^\s*annotations?\b",
                r"(?m)^\s*technical\s+description\b",
                r"(?m)^\s*owner\b",
            ]),
            header_footer_patterns: strings(&[
                r"^page\s+\d+(?:\s+of\s+\d+)?$",
                r"^-\s*\d+\s*-$",
                r"^[\[\(]?\d{1,3}[\]\)]?$",
                r"^republic\s+of\s+the\s+philippines$",
                r"^land\s+registration\s+authority$",
                r"^registry\s+of\s+deeds(?:\s+for\s+.*)?$",
                r"^department\s+of\s+(?:justice|environment\s+and\s+natural\s+resources)$",
                r"^this\s+is\s+a\s+computer[\s-]generated.*$",
            ]),
            continuation_patterns: strings(&[
                r"\(?\s*continued\s+(?:on|from)\s+(?:the\s+)?(?:next|previous|following)\s+page\s*\)?",
                r"\(?\s*continued\s+(?:on|from)\s+(?:page|p\.)\s*\d+\s*\)?",
                r"\(?\s*cont(?:'d|inued)\.?\s+(?:on\s+)?(?:next\s+page|page\s+\d+)\s*\)?",
            ]),
            title_number_patterns: strings(&[
                r"(?:transfer|original)\s+certificate\s+of\s+title\s+no\.?\s*[:#]?\s*([A-Z]{0,3}-?\d[\w\-]*)",
                r"\b(?:TCT|OCT)\s*(?:no\.?|#|-)\s*:?\s*([A-Z]{0,3}-?\d[\w\-]*)",
                r"certificate\s+of\s+title\s+no\.?\s*[:#]?\s*([A-Z]{0,3}-?\d[\w\-]*)",
                r"\btitle\s+no\.?\s*[:#]?\s*([A-Z]{0,3}-?\d[\w\-]*)",
            ]),
            owner_patterns: strings(&[
                r"(?m)\bowner\s*:\s*([^\r\n]+?)\s*$",
                r"registered\s+owners?\s*:?\s*([^,;\r\n]+)",
                r"in\s+the\s+name\s+of\s+([^,;\r\n]+)",
                r"in\s+favou?r\s+of\s+([^,;\r\n]+)",
            ]),
            area_patterns: strings(&[
                r"containing\s+an\s+area\s+of\s+(?:[A-Z\s\-]+\()?\s*(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\)?\s*(?:square\s+meters?|sq\.?\s*m(?:eters?|\.)?)",
            ]),
            max_heading_words: 6,
            end_anchor_policy: EndAnchorPolicy::First,
            mode: ParseMode::Strict,
            seconds_policy: SecondsPolicy::Fold,
        }
    }

    /// Built-in phrase lists, failing on any corner whose bearing has no
    /// distance.
    pub fn strict() -> Self {
        Self::new().with_mode(ParseMode::Strict)
    }

    /// Built-in phrase lists, dropping malformed corners with a warning.
    pub fn lenient() -> Self {
        Self::new().with_mode(ParseMode::Lenient)
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Add a start phrase.
    pub fn with_start_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.start_phrases.push(phrase.into());
        self
    }

    /// Add a closing phrase.
    pub fn with_closing_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.closing_phrases.push(phrase.into());
        self
    }

    /// Add a stop marker.
    pub fn with_stop_marker(mut self, marker: impl Into<String>) -> Self {
        self.stop_markers.push(marker.into());
        self
    }

    /// Add a whole-line header/footer pattern.
    pub fn with_header_footer_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.header_footer_patterns.push(pattern.into());
        self
    }

    /// Set the end-anchor policy.
    pub fn with_end_anchor_policy(mut self, policy: EndAnchorPolicy) -> Self {
        self.end_anchor_policy = policy;
        self
    }

    /// Set strict or lenient corner handling.
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set how seconds enter computed azimuths.
    pub fn with_seconds_policy(mut self, policy: SecondsPolicy) -> Self {
        self.seconds_policy = policy;
        self
    }

    /// Set the heading word limit used by the line filter.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }
}
