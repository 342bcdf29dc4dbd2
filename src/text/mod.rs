//! Text cleanup for OCR output.
//!
//! - [`NoiseFilter`]: removes page furniture and continuation notes
//! - [`HyphenationHandler`]: rejoins words split across lines and pages

pub mod hyphenation;
pub mod noise;

pub use hyphenation::HyphenationHandler;
pub use noise::NoiseFilter;
