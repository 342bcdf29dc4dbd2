//! Page-noise removal for multi-page OCR text.
//!
//! Scanned titles repeat registry boilerplate and page numbers on every page
//! and add "(continued on page N)" notes at page breaks. All of it can land in
//! the middle of a boundary description. The filter works line by line:
//!
//! 1. strip continuation notes wherever they occur in a line;
//! 2. drop lines that are entirely a header or footer;
//! 3. rejoin words hyphenated across the (now removed) page break;
//! 4. collapse runs of blank lines.

use super::hyphenation::HyphenationHandler;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::search::PatternSet;

/// Removes page headers, footers and continuation notes, and rejoins
/// hyphen-split words.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    header_footer: PatternSet,
    continuation: PatternSet,
    hyphenation: HyphenationHandler,
}

impl NoiseFilter {
    /// Compile the filter from configuration.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            header_footer: PatternSet::compile(&config.header_footer_patterns)?,
            continuation: PatternSet::compile(&config.continuation_patterns)?,
            hyphenation: HyphenationHandler::new(),
        })
    }

    /// Clean a raw document.
    pub fn clean(&self, raw: &str) -> String {
        let mut dropped = 0usize;
        let mut lines: Vec<String> = Vec::new();

        for original in raw.lines() {
            let line = self.strip_continuations(original);
            let trimmed = line.trim();
            if trimmed.is_empty() && !original.trim().is_empty() {
                // the whole line was a continuation note
                dropped += 1;
                continue;
            }
            if !trimmed.is_empty() && self.is_header_footer(trimmed) {
                dropped += 1;
                continue;
            }
            lines.push(line.trim_end().to_string());
        }

        let joined = self.hyphenation.process_lines(&lines);
        log::debug!(
            "noise filter: {} input lines, {} noise lines dropped, {} lines out",
            raw.lines().count(),
            dropped,
            joined.len()
        );

        collapse_blank_lines(&joined)
    }

    /// Whether a trimmed line is entirely page furniture.
    pub fn is_header_footer(&self, trimmed: &str) -> bool {
        self.header_footer.is_match(trimmed)
    }

    fn strip_continuations(&self, line: &str) -> String {
        let matches = self.continuation.find_all(line, 0);
        if matches.is_empty() {
            return line.to_string();
        }

        let mut out = String::with_capacity(line.len());
        let mut pos = 0;
        for m in matches {
            // overlapping matches from different patterns
            if m.start < pos {
                continue;
            }
            out.push_str(&line[pos..m.start]);
            pos = m.end;
        }
        out.push_str(&line[pos..]);

        // a removed note in mid-line can leave double spaces
        let mut squeezed = String::with_capacity(out.len());
        let mut last_space = false;
        for c in out.chars() {
            if c == ' ' {
                if !last_space {
                    squeezed.push(c);
                }
                last_space = true;
            } else {
                squeezed.push(c);
                last_space = false;
            }
        }
        squeezed
    }
}

/// Allow at most one blank line in a row and trim the document edges.
fn collapse_blank_lines(lines: &[String]) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    let mut previous_blank = true;

    for line in lines {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        out.push(if blank { "" } else { line.as_str() });
        previous_blank = blank;
    }

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
