//! Tie-point and corner splitting.
//!
//! A filtered description reads
//!
//! ```text
//! Beginning at a point marked "1", being N 45 30 E 120.50 m from BLLM No. 1;
//! thence S 12 05 W 42.00 m to point 2; thence ... to point of beginning.
//! ```
//!
//! It is cut on `;` and `thence`. The first part names the tie point (after
//! "from") and may carry the tie line (before it). Every later part is one
//! corner call.

use crate::bearing::{tokenize, BoundaryCall};
use crate::config::ParseMode;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    static ref RE_CALL_SEPARATOR: Regex = RegexBuilder::new(r";|\bthence\b")
        .case_insensitive(true)
        .build()
        .unwrap();
    static ref RE_FROM: Regex = RegexBuilder::new(r"\s+from\s+")
        .case_insensitive(true)
        .build()
        .unwrap();
}

/// The tie point and ordered calls of one description.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDescription {
    /// Tie-point name, verbatim
    pub tie_point_name: String,
    /// Tie line (when stated) followed by the corner calls
    pub calls: Vec<BoundaryCall>,
}

/// Splits a filtered span into the tie point and boundary calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter {
    mode: ParseMode,
}

impl Splitter {
    /// Create a splitter.
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Split a span.
    pub fn split(&self, span: &str) -> Result<SplitDescription> {
        let mut parts = RE_CALL_SEPARATOR
            .split(span)
            .map(str::trim)
            .filter(|part| !part.is_empty());

        let first = parts.next().ok_or_else(|| Error::MissingTiePoint {
            fragment: span.trim().to_string(),
        })?;

        let pieces: Vec<&str> = RE_FROM.split(first).collect();
        let [tie_line, tie_name] = pieces.as_slice() else {
            return Err(Error::MissingTiePoint {
                fragment: first.to_string(),
            });
        };
        let tie_point_name = tie_name
            .trim()
            .trim_end_matches([';', ',', '.', ':'])
            .trim_end()
            .to_string();

        let mut calls = Vec::new();

        // The tie line always propagates a missing distance
        if let Some(token) = tokenize(tie_line)? {
            log::debug!("tie line {} {} m", token.bearing, token.distance_m);
            calls.push(BoundaryCall::new(token.bearing, token.distance_m, tie_line.trim()));
        }

        let mut fragments = 1usize;
        for part in parts {
            fragments += 1;
            match tokenize(part) {
                Ok(Some(token)) => {
                    calls.push(BoundaryCall::new(token.bearing, token.distance_m, part));
                },
                Ok(None) => {
                    log::debug!("no bearing, skipping fragment {:?}", part);
                },
                Err(e @ Error::DistanceNotFound { .. }) if self.mode == ParseMode::Lenient => {
                    log::warn!("dropping fragment: {}", e);
                },
                Err(e) => return Err(e),
            }
        }

        log::debug!(
            "split {} fragments into tie point {:?} and {} calls",
            fragments,
            tie_point_name,
            calls.len()
        );

        Ok(SplitDescription {
            tie_point_name,
            calls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing::{Bearing, EastWest, NorthSouth};

    fn strict() -> Splitter {
        Splitter::new(ParseMode::Strict)
    }

    #[test]
    fn test_tie_point_and_corners() {
        let span = "BEGINNING AT A POINT marked X from TP-1; thence N45-30E 100.00m; thence S45-30W 100.00m to point of beginning";
        let split = strict().split(span).unwrap();
        assert_eq!(split.tie_point_name, "TP-1");
        assert_eq!(split.calls.len(), 2);
        assert_eq!(
            split.calls[0].bearing,
            Bearing::new(NorthSouth::North, 45, 30, EastWest::East)
        );
        assert_eq!(split.calls[1].raw_text, "S45-30W 100.00m to point of beginning");
    }

    #[test]
    fn test_tie_line_becomes_first_call() {
        let span = "Beginning at a point N 45 30 E 120.50 m from BLLM No. 1, Cad-123.; thence S 1 0 W 10 m";
        let split = strict().split(span).unwrap();
        assert_eq!(split.tie_point_name, "BLLM No. 1, Cad-123");
        assert_eq!(split.calls.len(), 2);
        assert_eq!(split.calls[0].distance_m, 120.50);
        assert_eq!(split.calls[0].raw_text, "Beginning at a point N 45 30 E 120.50 m");
    }

    #[test]
    fn test_separator_is_case_insensitive() {
        let split = strict()
            .split("Beginning at a point from A THENCE N 1 2 E 3 m Thence S 1 2 W 3 m")
            .unwrap();
        assert_eq!(split.tie_point_name, "A");
        assert_eq!(split.calls.len(), 2);
    }

    #[test]
    fn test_thence_inside_word_does_not_split() {
        let split = strict()
            .split("Beginning at a point from Athenceville; thence N 1 2 E 3 m")
            .unwrap();
        assert_eq!(split.tie_point_name, "Athenceville");
    }

    #[test]
    fn test_missing_from() {
        let err = strict().split("Beginning at a point; thence N 1 2 E 3 m").unwrap_err();
        assert!(matches!(err, Error::MissingTiePoint { .. }));
    }

    #[test]
    fn test_two_from_is_ambiguous() {
        let err = strict()
            .split("Beginning at a point from A from B; thence N 1 2 E 3 m")
            .unwrap_err();
        match err {
            Error::MissingTiePoint { fragment } => {
                assert_eq!(fragment, "Beginning at a point from A from B")
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fragment_without_bearing_is_skipped() {
        let split = strict()
            .split("Beginning at a point from A; thence along the creek; thence N 1 2 E 3 m")
            .unwrap();
        assert_eq!(split.calls.len(), 1);
    }

    #[test]
    fn test_distance_missing_strict_and_lenient() {
        let span = "Beginning at a point from A; thence N 1 2 E along the road; thence S 1 2 W 3 m";
        assert!(matches!(
            strict().split(span),
            Err(Error::DistanceNotFound { .. })
        ));

        let split = Splitter::new(ParseMode::Lenient).split(span).unwrap();
        assert_eq!(split.calls.len(), 1);
        assert_eq!(split.calls[0].bearing.north_south, NorthSouth::South);
    }

    #[test]
    fn test_tie_line_without_distance_fails_in_both_modes() {
        let span = "Beginning at a point N 1 2 E from A; thence S 1 2 W 3 m";
        assert!(matches!(
            Splitter::new(ParseMode::Lenient).split(span),
            Err(Error::DistanceNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_span() {
        assert!(matches!(
            strict().split("  ;  "),
            Err(Error::MissingTiePoint { .. })
        ));
    }
}
