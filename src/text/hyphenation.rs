//! Hyphenation-aware line joining for OCR output.
//!
//! Scanned titles break words at line ends and, worse, at page ends, where a
//! header block sits between the two halves. Once headers are gone, this
//! module rejoins the halves:
//!
//! - "Beg-" (line 1) + "inning at a point" (line 2) → "Beginning at a point"
//! - "N 45-" (line 1) + "30 E" (line 2) → "N 45-30 E"
//!
//! A hyphen after a letter is word hyphenation and is removed. A hyphen
//! between two numbers is a bearing separator ("45-30") and is kept. The
//! joining is lossy: a genuine hyphenated word that happens to end a line is
//! merged too.

/// Hyphenation handler for reconstructing split words.
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenationHandler;

impl HyphenationHandler {
    /// Create a new hyphenation handler.
    pub fn new() -> Self {
        Self
    }

    /// Check if a line ends with a continuation hyphen.
    ///
    /// A continuation hyphen is a soft hyphen (U+00AD) or hard hyphen
    /// (U+002D) directly after a letter or digit. "- " list bullets and a
    /// lone hyphen are not continuations.
    pub fn is_continuation_hyphen(text: &str) -> bool {
        Self::split_hyphen(text.trim_end()).is_some()
    }

    /// Split a trimmed line into (text before hyphen, hyphen char).
    fn split_hyphen(trimmed: &str) -> Option<(&str, char)> {
        let hyphen = trimmed.chars().last()?;
        if hyphen != '-' && hyphen != '\u{00AD}' {
            return None;
        }
        let before = &trimmed[..trimmed.len() - hyphen.len_utf8()];
        before
            .chars()
            .last()
            .filter(|c| c.is_alphanumeric())
            .map(|_| (before, hyphen))
    }

    /// Process a single line pair to potentially join a split word.
    ///
    /// Returns the processed current line and whether the next line was
    /// consumed by the join.
    pub fn process_line_pair(&self, current_line: &str, next_line: &str) -> (String, bool) {
        let trimmed_current = current_line.trim_end();

        let Some((before_hyphen, hyphen)) = Self::split_hyphen(trimmed_current) else {
            return (current_line.to_string(), false);
        };

        let trimmed_next = next_line.trim_start();
        let next_word = trimmed_next.split_whitespace().next().unwrap_or("");
        if next_word.is_empty() {
            return (current_line.to_string(), false);
        }

        let numeric_run = before_hyphen
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit())
            && next_word.chars().next().is_some_and(|c| c.is_ascii_digit());

        let mut result = String::with_capacity(trimmed_current.len() + trimmed_next.len());
        result.push_str(before_hyphen);
        if numeric_run && hyphen == '-' {
            result.push('-');
        }
        result.push_str(trimmed_next);

        (result, true)
    }

    /// Join hyphen-split words across a list of lines.
    ///
    /// Blank lines between the two halves are skipped, so a split that
    /// straddled a removed page header still rejoins.
    pub fn process_lines(&self, lines: &[String]) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let mut current = lines[i].clone();
            i += 1;

            loop {
                let Some(next_idx) = (i..lines.len()).find(|&j| !lines[j].trim().is_empty())
                else {
                    break;
                };
                let (processed, consumed) = self.process_line_pair(&current, &lines[next_idx]);
                if !consumed {
                    break;
                }
                // joined text may itself end in a hyphen
                current = processed;
                i = next_idx + 1;
            }

            result.push(current);
        }

        result
    }
}
