//! Bearing-and-distance extraction from a single text fragment.
//!
//! The grammar tolerates the spellings found in scanned titles:
//!
//! - `N`/`S`, optionally followed by a period;
//! - 1–3 digit degrees, then `°`, `deg.`, `degrees`, a bare hyphen, or just
//!   whitespace;
//! - 1–2 digit minutes with an optional `'`/`′`/`min`;
//! - optional seconds, with a `"`/`″`/`sec` marker or bare when the E/W
//!   letter follows directly;
//! - optional `E`/`W`, optionally followed by a period.
//!
//! The distance is the first positive `<number> m` token after the bearing,
//! where the unit is a whole word: `m`, `mt`, `mts`, `meter` or `meters`.

use super::{Bearing, EastWest, NorthSouth};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex, RegexBuilder};
use std::ops::Range;

lazy_static! {
    /// Quadrant bearing
    static ref RE_BEARING: Regex = RegexBuilder::new(concat!(
        r"\b(?P<ns>[NS])\.?\s*",
        r"(?P<deg>\d{1,3})(?:\s*(?:°|º|˚|deg(?:ree)?s?\.?|-)\s*|\s+)",
        r"(?P<min>\d{1,2})\s*(?:'|′|’|min(?:ute)?s?\.?)?\s*",
        r"(?:",
        r#"(?P<sec>\d{1,2}(?:\.\d+)?)\s*(?:''|"|″|”|sec(?:ond)?s?\.?)\s*(?P<ew>[EW])?"#,
        r"|(?P<sec_bare>\d{1,2}(?:\.\d+)?)\s*(?P<ew_bare>[EW])",
        r"|(?P<ew_only>[EW])",
        r")?\.?",
    ))
    .case_insensitive(true)
    .build()
    .unwrap();

    /// Distance with a meter unit ("120.50m", "1,234.5 m.", "42 meters", "8 mts")
    static ref RE_DISTANCE: Regex = RegexBuilder::new(
        r"(?P<dist>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*m(?:eters?|ts?)?\b\.?"
    )
    .case_insensitive(true)
    .build()
    .unwrap();
}

/// A bearing and its distance, read from one fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// Quadrant bearing
    pub bearing: Bearing,
    /// Distance in meters
    pub distance_m: f64,
}

/// Extract one bearing and one distance from a fragment.
///
/// Returns `Ok(None)` when the fragment has no bearing at all (not a boundary
/// segment), and `Err(DistanceNotFound)` when a bearing is present but no
/// distance follows it.
///
/// # Examples
///
/// ```
/// use metes_oxide::bearing::{tokenize, EastWest, NorthSouth};
///
/// let token = tokenize("N 45 30 E 120.50m").unwrap().unwrap();
/// assert_eq!(token.bearing.north_south, NorthSouth::North);
/// assert_eq!((token.bearing.degrees, token.bearing.minutes), (45, 30));
/// assert_eq!(token.bearing.seconds, None);
/// assert_eq!(token.bearing.east_west, Some(EastWest::East));
/// assert_eq!(token.distance_m, 120.50);
///
/// assert!(tokenize("along the national road").unwrap().is_none());
/// ```
pub fn tokenize(fragment: &str) -> Result<Option<Token>> {
    let clean = fragment.trim().trim_end_matches([',', ':', ';', '.']);

    let Some((bearing, range)) = match_bearing(clean) else {
        return Ok(None);
    };

    let rest = &clean[range.end..];
    let distance_m = RE_DISTANCE
        .captures_iter(rest)
        .filter_map(|caps| parse_number(&caps["dist"]))
        .find(|d| *d > 0.0)
        .ok_or_else(|| Error::DistanceNotFound {
            fragment: clean.to_string(),
        })?;

    log::trace!("tokenized {:?} -> {} {} m", clean, bearing, distance_m);
    Ok(Some(Token {
        bearing,
        distance_m,
    }))
}

/// Find the first bearing in `text`, with its byte range.
pub(crate) fn match_bearing(text: &str) -> Option<(Bearing, Range<usize>)> {
    let caps = RE_BEARING.captures(text)?;
    let whole = caps.get(0)?;
    let bearing = bearing_from_captures(&caps)?;
    Some((bearing, whole.range()))
}

fn bearing_from_captures(caps: &Captures<'_>) -> Option<Bearing> {
    let letter = |name: &str| caps.name(name).and_then(|m| m.as_str().chars().next());

    let north_south = NorthSouth::from_letter(letter("ns")?)?;
    let degrees = caps["deg"].parse().ok()?;
    let minutes = caps["min"].parse().ok()?;
    let seconds = caps
        .name("sec")
        .or_else(|| caps.name("sec_bare"))
        .and_then(|m| m.as_str().parse().ok());
    let east_west = letter("ew")
        .or_else(|| letter("ew_bare"))
        .or_else(|| letter("ew_only"))
        .and_then(EastWest::from_letter);

    Some(Bearing {
        north_south,
        degrees,
        minutes,
        seconds,
        east_west,
    })
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}
