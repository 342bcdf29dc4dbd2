// Ellipsoid and datum constants carry their published precision
#![allow(clippy::excessive_precision)]

//! # Metes Oxide
//!
//! Land-title technical descriptions in Rust: from noisy OCR text to survey-grade
//! WGS84 boundary vertices.
//!
//! ## Core Features
//!
//! ### Parsing
//! - **Noise Removal**: page headers/footers, continuation notes, words hyphenated across pages
//! - **Anchoring**: "Beginning at a point ..." to "... to point of beginning", with stop markers
//! - **Tokenizing**: OCR-tolerant quadrant bearings (`N. 45 deg. 30' E.`, `S45-30W`, `N 45°30'15" E`)
//! - **Metadata**: title number, registered owner, stated area
//!
//! ### Geodesy
//! - **Traversal**: chained geodesic direct solutions (Karney on WGS84, or Vincenty on any ellipsoid)
//! - **Closure**: misclosure, perimeter, area and relative precision
//! - **Grid**: PRS92 zones I–V to and from WGS84
//!
//! ## Quick Start
//!
//! ```
//! use metes_oxide::{ClosureReport, ParserConfig, TitleParser, Vertex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = TitleParser::new(ParserConfig::default())?;
//! let title = parser.parse(
//!     "Beginning at a point from BLLM No. 1; \
//!      thence N 90 00 E 100.00 m; thence S 00 00 E 100.00 m; \
//!      thence S 90 00 W 100.00 m; thence N 00 00 E 100.00 m \
//!      to point of beginning.",
//! )?;
//! assert_eq!(title.tie_point_name, "BLLM No. 1");
//!
//! let start = Vertex::new(121.05, 14.60);
//! let vertices = parser.traverse(&title, start)?;
//! let closure = ClosureReport::compute(start, &vertices);
//! assert!(closure.is_closed(0.05));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Stage boundaries log at `debug`, dropped fragments at `debug`/`warn`.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Text cleanup and search
pub mod search;
pub mod text;

// Bearings and the technical description
pub mod bearing;
pub mod metadata;
pub mod parser;
pub mod segment;

// Geodesy
pub mod geodesy;
pub mod grid;

// Re-exports
pub use bearing::{Bearing, BoundaryCall, EastWest, NorthSouth, SecondsPolicy};
pub use config::{EndAnchorPolicy, ParseMode, ParserConfig};
pub use error::{Error, Result};
pub use geodesy::{ClosureReport, Ellipsoid, KarneySolver, Leg, Traversal, Vertex, VincentySolver};
pub use grid::{GridCoordinate, Prs92Zone};
pub use metadata::TitleMetadata;
pub use parser::{ParsedTitle, TitleParser};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
