//! Latitude/longitude text grammar
//!
//! Reads the human forms people type into a search box:
//! `52.52, 13.405`, `52.52°N 13.405°E`, `N 52°31.2' E 13°24.3'`,
//! `52°31'12.5"N 13°24'18"E`, `52 31 12.5N 13 24 18E`, `52:31:12 13:24:18`.
//! Latitude comes first unless hemisphere letters say otherwise.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // One angle: optional hemisphere prefix, degrees, optional minutes and
    // seconds separated by symbols, colons or blanks, optional hemisphere suffix.
    static ref ANGLE_PATTERN: Regex = Regex::new(concat!(
        r#"(?i)^(?P<pre>[NSEW])?\s*"#,
        r#"(?P<deg>[+-]?\d+(?:\.\d+)?)"#,
        r#"(?:"#,
            r#"(?:\s*[°º:]\s*|\s+)(?P<min>\d+(?:\.\d+)?)"#,
            r#"(?:"#,
                r#"(?:\s*['′:]\s*|\s+)(?P<sec>\d+(?:\.\d+)?)(?:\s*(?:''|′′|"|″))?"#,
            r#"|"#,
                r#"(?:\s*['′])?"#,
            r#")"#,
        r#"|"#,
            r#"(?:\s*[°º])?"#,
        r#")"#,
        r#"\s*(?P<post>[NSEW])?$"#,
    )).expect("angle pattern is valid");
}

/// A grammar that reads latitude/longitude text
///
/// The dispatcher tries its grammar before UTM and MGRS; any implementation
/// must fail rather than guess when the text is not a lat/lon pair.
pub trait CoordinateGrammar {
    /// Read a coordinate pair, returning `(longitude, latitude)` in degrees
    fn parse(&self, text: &str) -> GeoResult<(f64, f64)>;
}

/// Built-in grammar for DD, DDM and DMS pairs
#[derive(Debug, Default, Clone, Copy)]
pub struct LatLonGrammar;

impl LatLonGrammar {
    pub fn new() -> Self {
        LatLonGrammar
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Latitude,
    Longitude,
}

#[derive(Debug, Clone, Copy)]
struct Angle {
    degrees: f64,
    axis: Option<Axis>,
}

impl CoordinateGrammar for LatLonGrammar {
    fn parse(&self, text: &str) -> GeoResult<(f64, f64)> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GeoError::parse(text, "empty coordinate text"));
        }

        let mut last_error = None;
        for (first, second) in split_candidates(trimmed) {
            match parse_pair(first, second) {
                Ok(pair) => {
                    debug!("Parsed lat/lon '{}' as lon={} lat={}", text, pair.0, pair.1);
                    return Ok(pair);
                }
                Err(reason) => last_error = Some(reason),
            }
        }

        Err(GeoError::parse(
            text,
            last_error.unwrap_or_else(|| "expected a latitude and a longitude".to_string()),
        ))
    }
}

/// Ways to cut the text into a latitude part and a longitude part, most likely first
fn split_candidates(text: &str) -> Vec<(&str, &str)> {
    if let Some(pos) = text.find(|c| c == ',' || c == ';') {
        return vec![(&text[..pos], &text[pos + 1..])];
    }

    let mut after_letters = Vec::new();
    let mut at_blanks = Vec::new();

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
        if matches!(c.to_ascii_uppercase(), 'N' | 'S' | 'E' | 'W') && i > 0 && next < text.len() {
            after_letters.push(next);
        }
        if c.is_whitespace() && i > 0 && !text[..i].ends_with(char::is_whitespace) {
            at_blanks.push(i);
        }
    }

    // A blank-separated pair like "50 30 10 15" is most likely split in half
    let token_count = at_blanks.len() + 1;
    let mut blank_order: Vec<(usize, usize)> = at_blanks.iter().copied().enumerate().collect();
    blank_order.sort_by_key(|&(k, _)| ((2 * (k + 1)) as i64 - token_count as i64).abs());

    let mut splits: Vec<usize> = after_letters;
    for (_, pos) in blank_order {
        if !splits.contains(&pos) {
            splits.push(pos);
        }
    }

    splits.into_iter().map(|pos| (&text[..pos], &text[pos..])).collect()
}

fn parse_pair(first: &str, second: &str) -> Result<(f64, f64), String> {
    let a = parse_angle(first.trim())?;
    let b = parse_angle(second.trim())?;

    let (lat, lon) = match (a.axis, b.axis) {
        (Some(Axis::Latitude), Some(Axis::Latitude)) => return Err("two latitudes given".to_string()),
        (Some(Axis::Longitude), Some(Axis::Longitude)) => return Err("two longitudes given".to_string()),
        (Some(Axis::Longitude), _) | (_, Some(Axis::Latitude)) => (b.degrees, a.degrees),
        _ => (a.degrees, b.degrees),
    };

    if lat.abs() > 90.0 {
        return Err(format!("latitude {} outside -90..90", lat));
    }
    if lon.abs() > 180.0 {
        return Err(format!("longitude {} outside -180..180", lon));
    }

    Ok((lon, lat))
}

fn parse_angle(text: &str) -> Result<Angle, String> {
    let caps = ANGLE_PATTERN
        .captures(text)
        .ok_or_else(|| format!("'{}' is not an angle", text))?;

    let letter = match (caps.name("pre"), caps.name("post")) {
        (Some(_), Some(_)) => return Err(format!("'{}' has two hemisphere letters", text)),
        (Some(m), None) | (None, Some(m)) => m.as_str().chars().next().map(|c| c.to_ascii_uppercase()),
        (None, None) => None,
    };

    let degrees_text = &caps["deg"];
    let negative = degrees_text.starts_with('-');
    if letter.is_some() && (negative || degrees_text.starts_with('+')) {
        return Err(format!("'{}' mixes a sign with a hemisphere letter", text));
    }

    let degrees: f64 = degrees_text.parse().map_err(|_| format!("invalid degrees '{}'", degrees_text))?;
    let mut magnitude = degrees.abs();

    if let Some(min) = caps.name("min") {
        if degrees.fract() != 0.0 {
            return Err(format!("'{}' has fractional degrees and minutes", text));
        }
        let minutes: f64 = min.as_str().parse().map_err(|_| format!("invalid minutes '{}'", min.as_str()))?;

        let seconds = match caps.name("sec") {
            Some(sec) => {
                if minutes.fract() != 0.0 {
                    return Err(format!("'{}' has fractional minutes and seconds", text));
                }
                sec.as_str().parse::<f64>().map_err(|_| format!("invalid seconds '{}'", sec.as_str()))?
            }
            None => 0.0,
        };

        if minutes >= 60.0 || seconds >= 60.0 {
            return Err(format!("'{}' has minutes or seconds of 60 or more", text));
        }
        magnitude += minutes / 60.0 + seconds / 3600.0;
    }

    let (axis, sign) = match letter {
        Some('N') => (Some(Axis::Latitude), 1.0),
        Some('S') => (Some(Axis::Latitude), -1.0),
        Some('E') => (Some(Axis::Longitude), 1.0),
        Some('W') => (Some(Axis::Longitude), -1.0),
        _ => (None, if negative { -1.0 } else { 1.0 }),
    };

    Ok(Angle { degrees: sign * magnitude, axis })
}
