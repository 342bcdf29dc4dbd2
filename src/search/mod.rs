//! Pattern search over document text.
//!
//! Configured phrase lists (anchors, stop markers, header/footer lines,
//! metadata labels) are compiled once into [`PatternSet`]s and queried by the
//! pipeline stages. Matches carry byte offsets into the searched text so the
//! segmenter can slice spans without copying.
//!
//! ## Example
//!
//! ```
//! use metes_oxide::search::PatternSet;
//!
//! let set = PatternSet::compile(&[r"to\s+point\s+of\s+beginning".to_string()]).unwrap();
//! let hit = set.find_first("... 12.00 m. TO POINT OF BEGINNING.", 0).unwrap();
//! assert_eq!(hit.text, "TO POINT OF BEGINNING");
//! ```

mod pattern_set;

pub use pattern_set::{PatternMatch, PatternSet};
