//! Title metadata: certificate number, registered owner, stated area.
//!
//! Each field is read with an ordered list of fallback patterns; the first
//! pattern that matches wins. A field nobody matched stays `None`.

use crate::config::ParserConfig;
use crate::error::Result;
use crate::search::PatternSet;
use serde::{Deserialize, Serialize};

/// Metadata fields found in a title document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleMetadata {
    /// Certificate of title number
    pub title_number: Option<String>,
    /// Registered owner
    pub owner: Option<String>,
    /// Area stated in the title, square meters
    pub stated_area_m2: Option<f64>,
}

/// Extracts [`TitleMetadata`] with configurable fallback patterns.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    title_number: PatternSet,
    owner: PatternSet,
    area: PatternSet,
}

impl MetadataExtractor {
    /// Compile the metadata patterns.
    pub fn new(config: &ParserConfig) -> Result<Self> {
        Ok(Self {
            title_number: PatternSet::compile(&config.title_number_patterns)?,
            owner: PatternSet::compile(&config.owner_patterns)?,
            area: PatternSet::compile(&config.area_patterns)?,
        })
    }

    /// Scan a document.
    pub fn extract(&self, raw: &str) -> TitleMetadata {
        let title_number = self
            .title_number
            .first_capture(raw)
            .map(|v| v.trim_end_matches(['.', ',', ';', ':']).to_string());

        let owner = self.owner.first_capture(raw).map(|v| {
            v.trim_end_matches(['.', ',', ';', ':'])
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        });

        let stated_area_m2 = self
            .area
            .first_capture(raw)
            .and_then(|v| v.replace(',', "").parse::<f64>().ok());

        log::debug!(
            "metadata: title={:?} owner={:?} area={:?}",
            title_number,
            owner,
            stated_area_m2
        );

        TitleMetadata {
            title_number,
            owner,
            stated_area_m2,
        }
    }
}
