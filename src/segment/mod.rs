//! Locating and splitting the technical description.
//!
//! Three stages run over the cleaned document:
//!
//! 1. [`AnchorSegmenter`] finds the span between "Beginning at a point" and
//!    "to point of beginning";
//! 2. [`LineFilter`] removes headings that OCR dropped into the span;
//! 3. [`Splitter`] cuts the span into the tie point and boundary calls.

pub mod anchor;
pub mod line_filter;
pub mod splitter;

pub use anchor::{AnchorSegmenter, Span, SpanEnd};
pub use line_filter::LineFilter;
pub use splitter::{SplitDescription, Splitter};
