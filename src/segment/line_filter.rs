//! Removal of non-boundary lines inside a located span.
//!
//! OCR output interleaves section headings ("LOT 1234", "PLAN PSD-07-0001")
//! with the description. Short all-caps lines without any survey vocabulary
//! are dropped. A stop marker inside the span cuts it off there.

use crate::config::ParserConfig;
use crate::error::Result;
use crate::search::PatternSet;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    /// Survey vocabulary that marks a line as part of the description
    static ref RE_DOMAIN_TOKEN: Regex = RegexBuilder::new(concat!(
        r"\b(?:thence|from|point|pt|corner|cor|meters?|mts?|deg(?:rees?)?|mins?|minutes?|secs?|seconds?)\b",
        r"|\bm\.",
        r#"|[°º˚'′’"″”]"#,
        r"|\b[NSEW]\b",
        r"|\b[NS]\.?\s*\d",
        r"|\d\s*m\b",
    ))
    .case_insensitive(true)
    .build()
    .unwrap();

    /// Previous line ends mid-sentence
    static ref RE_OPEN_ENDING: Regex = RegexBuilder::new(r"(?:\bfrom|,|\bof|\bto)\s*$")
        .case_insensitive(true)
        .build()
        .unwrap();
}

/// Drops headings and truncates at stop markers.
#[derive(Debug, Clone)]
pub struct LineFilter {
    stop_markers: PatternSet,
    max_heading_words: usize,
}

impl LineFilter {
    /// Build from configuration.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            stop_markers: PatternSet::compile(&config.stop_markers)?,
            max_heading_words: config.max_heading_words,
        })
    }

    /// Filter a span.
    ///
    /// The first line carries the start anchor and is always kept. A line
    /// that continues an open sentence ("... from" / trailing comma) is kept
    /// too, so a tie-point name on its own line survives.
    pub fn filter(&self, span: &str) -> String {
        let mut kept: Vec<&str> = Vec::new();
        let mut dropped = 0usize;

        for (i, line) in span.lines().enumerate() {
            if i > 0 && self.stop_markers.is_match(line) {
                log::debug!("line filter: stop marker {:?}, truncating", line.trim());
                break;
            }

            let continues = kept.last().is_some_and(|prev| RE_OPEN_ENDING.is_match(prev));
            if i > 0 && !continues && self.is_heading(line) {
                log::debug!("line filter: dropping heading {:?}", line.trim());
                dropped += 1;
                continue;
            }
            kept.push(line);
        }

        if dropped > 0 {
            log::debug!("line filter: {} heading lines dropped", dropped);
        }
        kept.join("\n")
    }

    /// Whether a line is a short all-caps heading with no survey vocabulary.
    pub fn is_heading(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.split_whitespace().count() > self.max_heading_words {
            return false;
        }

        if !trimmed.chars().any(char::is_alphabetic) || trimmed.chars().any(char::is_lowercase) {
            return false;
        }

        !RE_DOMAIN_TOKEN.is_match(trimmed)
    }
}
