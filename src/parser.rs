//! Land-title parser.
//!
//! [`TitleParser`] runs the full pipeline over a raw OCR document:
//!
//! 1. [`NoiseFilter`]: drop page headers/footers and continuation notes,
//!    rejoin hyphenated words
//! 2. [`AnchorSegmenter`]: find the technical description span
//! 3. [`LineFilter`]: remove headings inside the span
//! 4. [`Splitter`]: tie point and boundary calls
//! 5. [`MetadataExtractor`]: title number, owner, stated area (raw text)
//!
//! The parser compiles its configuration once and is immutable afterwards,
//! so a single instance can be shared across threads.
//!
//! # Example
//!
//! ```
//! use metes_oxide::{ParserConfig, TitleParser};
//!
//! let parser = TitleParser::new(ParserConfig::default()).unwrap();
//! let title = parser
//!     .parse(
//!         "BEGINNING AT A POINT marked X from TP-1; thence N45-30E 100.00m; \
//!          thence S45-30W 100.00m to point of beginning.",
//!     )
//!     .unwrap();
//! assert_eq!(title.tie_point_name, "TP-1");
//! assert_eq!(title.boundary_calls.len(), 2);
//! ```

use crate::bearing::BoundaryCall;
use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::geodesy::{KarneySolver, Traversal, Vertex};
use crate::metadata::MetadataExtractor;
use crate::segment::{AnchorSegmenter, LineFilter, Splitter};
use crate::text::NoiseFilter;
use serde::{Deserialize, Serialize};

/// Structured record of a land title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTitle {
    /// Certificate of title number, when found
    pub title_number: Option<String>,
    /// Registered owner, when found
    pub owner: Option<String>,
    /// Area stated in the title, square meters
    pub stated_area_m2: Option<f64>,
    /// The isolated technical description
    pub technical_description: String,
    /// Tie point the traversal starts from, verbatim
    pub tie_point_name: String,
    /// Tie line (when stated) and corner calls, in order
    pub boundary_calls: Vec<BoundaryCall>,
}

/// Parses technical descriptions out of raw title text.
#[derive(Debug, Clone)]
pub struct TitleParser {
    config: ParserConfig,
    noise: NoiseFilter,
    segmenter: AnchorSegmenter,
    line_filter: LineFilter,
    splitter: Splitter,
    metadata: MetadataExtractor,
}

impl TitleParser {
    /// Compile a parser from configuration.
    ///
    /// Fails with `InvalidPattern` if any configured phrase is not a valid
    /// regular expression.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            noise: NoiseFilter::new(&config)?,
            segmenter: AnchorSegmenter::new(&config)?,
            line_filter: LineFilter::new(&config)?,
            splitter: Splitter::new(config.mode),
            metadata: MetadataExtractor::new(&config)?,
            config,
        })
    }

    /// The configuration this parser was built from.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a raw document.
    pub fn parse(&self, raw: &str) -> Result<ParsedTitle> {
        if raw.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let cleaned = self.noise.clean(raw);
        let span = self.segmenter.locate(&cleaned)?;
        let technical_description = self
            .line_filter
            .filter(span.slice(&cleaned))
            .trim()
            .to_string();

        let split = self.splitter.split(&technical_description)?;
        if split.calls.is_empty() {
            return Err(Error::NoBoundaryCalls);
        }

        let meta = self.metadata.extract(raw);
        log::debug!(
            "parsed title {:?}: tie point {:?}, {} boundary calls",
            meta.title_number,
            split.tie_point_name,
            split.calls.len()
        );

        Ok(ParsedTitle {
            title_number: meta.title_number,
            owner: meta.owner,
            stated_area_m2: meta.stated_area_m2,
            technical_description,
            tie_point_name: split.tie_point_name,
            boundary_calls: split.calls,
        })
    }

    /// Traverse a parsed title from the tie point's coordinate, with the
    /// configured seconds policy on WGS84.
    pub fn traverse(&self, title: &ParsedTitle, tie_point: Vertex) -> Result<Vec<Vertex>> {
        Traversal::new(KarneySolver).run_calls(
            tie_point,
            &title.boundary_calls,
            self.config.seconds_policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing::SecondsPolicy;
    use crate::config::ParseMode;

    fn parser() -> TitleParser {
        TitleParser::new(ParserConfig::default()).unwrap()
    }

    const SAMPLE: &str = "BEGINNING AT A POINT marked X from TP-1; thence N45-30E 100.00m; \
                          thence S45-30W 100.00m to point of beginning.";

    #[test]
    fn test_parse_sample() {
        let title = parser().parse(SAMPLE).unwrap();
        assert_eq!(title.tie_point_name, "TP-1");
        assert_eq!(title.boundary_calls.len(), 2);
        assert_eq!(title.title_number, None);
        assert_eq!(title.owner, None);
        assert!(title.technical_description.ends_with("to point of beginning"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parser().parse("  \n "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_no_anchor() {
        let err = parser().parse("thence N 1 2 E 3 m").unwrap_err();
        assert!(matches!(err, Error::NoAnchorFound));
    }

    #[test]
    fn test_no_boundary_calls() {
        let err = parser()
            .parse("Beginning at a point from BLLM 1; thence along the river to point of beginning")
            .unwrap_err();
        assert!(matches!(err, Error::NoBoundaryCalls));
    }

    #[test]
    fn test_invalid_configured_pattern() {
        let config = ParserConfig::default().with_start_phrase("(unclosed");
        assert!(matches!(TitleParser::new(config), Err(Error::InvalidPattern { .. })));
    }

    #[test]
    fn test_lenient_mode_from_config() {
        let raw = "Beginning at a point from A; thence N 1 2 E along the road; thence S 1 2 W 3 m";
        assert!(parser().parse(raw).is_err());

        let parser = TitleParser::new(ParserConfig::default().with_mode(ParseMode::Lenient)).unwrap();
        assert_eq!(parser.parse(raw).unwrap().boundary_calls.len(), 1);
    }

    #[test]
    fn test_traverse_uses_seconds_policy() {
        let raw = "Beginning at a point from A; thence N 0 0 30\" E 1000 m";
        let fold = parser();
        let discard =
            TitleParser::new(ParserConfig::default().with_seconds_policy(SecondsPolicy::Discard))
                .unwrap();

        let title = fold.parse(raw).unwrap();
        let start = Vertex::new(121.0, 14.0);
        let a = fold.traverse(&title, start).unwrap();
        let b = discard.traverse(&title, start).unwrap();
        assert!((b[0].lon - 121.0).abs() < 1e-12);
        assert!(a[0].lon > 121.0 + 1e-7);
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TitleParser>();
        assert_send_sync::<ParsedTitle>();
    }
}
