//! Hand-written scanner for WKT `POLYGON` and `POINT` text
//!
//! Grammar (keywords case-insensitive, whitespace allowed between tokens):
//!
//! ```text
//! polygon := "POLYGON" [dim] ( "EMPTY" | "(" ring ("," ring)* ")" )
//! ring    := "(" coord ("," coord)* ")"
//! coord   := number blank+ number (blank+ number){0,extra}
//! dim     := "Z" | "M" | "ZM"
//! ```
//!
//! `Z` and `M` allow one extra ordinate per coordinate, `ZM` two; they
//! are read and dropped. Tagged geometry with plain 2D coordinates is accepted.

use log::debug;

use crate::coordinate::GeoPoint;
use crate::errors::{GeoError, GeoResult};
use super::Ring;

/// Cursor over WKT input
pub struct WktParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> WktParser<'a> {
    pub fn new(input: &'a str) -> Self {
        WktParser { input, position: 0 }
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parse a whole `POLYGON` text into rings of `[lon, lat]`
    pub fn parse_polygon(&mut self) -> GeoResult<Vec<Ring>> {
        self.skip_whitespace();
        self.expect_keyword("POLYGON")?;
        let extra = self.dimension_ordinates();

        self.skip_whitespace();
        if self.match_keyword("EMPTY") {
            self.expect_end()?;
            return Ok(Vec::new());
        }

        self.expect_char('(')?;
        let mut rings = Vec::new();
        loop {
            self.skip_whitespace();
            rings.push(self.parse_ring(extra)?);

            self.skip_whitespace();
            if self.match_char(',') {
                continue;
            }
            if self.match_char(')') {
                break;
            }
            return Err(self.error("expected ',' or ')' after ring"));
        }

        self.expect_end()?;
        debug!("Parsed WKT polygon with {} ring(s)", rings.len());
        Ok(rings)
    }

    /// Parse a whole `POINT` text
    pub fn parse_point(&mut self) -> GeoResult<GeoPoint> {
        self.skip_whitespace();
        self.expect_keyword("POINT")?;
        let extra = self.dimension_ordinates();

        self.skip_whitespace();
        if self.match_keyword("EMPTY") {
            return Err(self.error("POINT EMPTY has no coordinates"));
        }

        self.expect_char('(')?;
        self.skip_whitespace();
        let [lon, lat] = self.parse_coord(extra)?;
        self.skip_whitespace();
        self.expect_char(')')?;
        self.expect_end()?;

        GeoPoint::new(lon, lat)
    }

    fn parse_ring(&mut self, extra: usize) -> GeoResult<Ring> {
        self.expect_char('(')?;

        let mut ring = Vec::new();
        loop {
            self.skip_whitespace();
            ring.push(self.parse_coord(extra)?);

            self.skip_whitespace();
            if !self.match_char(',') {
                break;
            }
        }

        self.expect_char(')')?;
        Ok(ring)
    }

    fn parse_coord(&mut self, extra: usize) -> GeoResult<[f64; 2]> {
        let lon = self.parse_number()?;
        self.expect_blank()?;
        let lat = self.parse_number()?;

        for _ in 0..extra {
            if !self.starts_ordinate() {
                break;
            }
            self.parse_number()?;
        }

        Ok([lon, lat])
    }

    /// Skip whitespace when another ordinate follows it, otherwise leave the cursor alone
    fn starts_ordinate(&mut self) -> bool {
        let saved = self.position;
        self.skip_whitespace();
        let follows = self.position > saved
            && self
                .rest()
                .starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+' || c == '.');
        if !follows {
            self.position = saved;
        }
        follows
    }

    fn parse_number(&mut self) -> GeoResult<f64> {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut end = start;

        if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digit_count = end - digits_start;
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            let fraction_start = end;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            digit_count += end - fraction_start;
        }
        if digit_count == 0 {
            return Err(self.error("expected a number"));
        }
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && (bytes[exp_end] == b'-' || bytes[exp_end] == b'+') {
                exp_end += 1;
            }
            let exp_digits = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits {
                end = exp_end;
            }
        }

        let text = &self.input[start..end];
        let value = text
            .parse::<f64>()
            .map_err(|_| GeoError::parse_at(self.input, start, format!("invalid number '{}'", text)))?;
        self.position = end;
        Ok(value)
    }

    /// Number of extra ordinates announced by a `Z`, `M` or `ZM` tag
    fn dimension_ordinates(&mut self) -> usize {
        let saved = self.position;
        self.skip_whitespace();
        if self.position == saved {
            return 0;
        }

        for (tag, extra) in [("ZM", 2), ("Z", 1), ("M", 1)] {
            if self.match_keyword(tag) {
                return extra;
            }
        }

        self.position = saved;
        0
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn expect_blank(&mut self) -> GeoResult<()> {
        let before = self.position;
        self.skip_whitespace();
        if self.position == before {
            return Err(self.error("expected whitespace between ordinates"));
        }
        Ok(())
    }

    /// Consume `keyword` case-insensitively when it is not followed by another letter
    fn match_keyword(&mut self, keyword: &str) -> bool {
        let rest = self.rest();
        let matches = rest.len() >= keyword.len()
            && rest.is_char_boundary(keyword.len())
            && rest[..keyword.len()].eq_ignore_ascii_case(keyword)
            && !rest[keyword.len()..].starts_with(|c: char| c.is_ascii_alphabetic());

        if matches {
            self.position += keyword.len();
        }
        matches
    }

    fn expect_keyword(&mut self, keyword: &str) -> GeoResult<()> {
        if self.match_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(&format!("expected {}", keyword)))
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, expected: char) -> GeoResult<()> {
        if self.match_char(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", expected)))
        }
    }

    fn expect_end(&mut self) -> GeoResult<()> {
        self.skip_whitespace();
        if self.position < self.input.len() {
            return Err(self.error("unexpected text after geometry"));
        }
        Ok(())
    }

    fn error(&self, message: &str) -> GeoError {
        let found = match self.rest().chars().next() {
            Some(c) => format!("found '{}'", c),
            None => "found end of input".to_string(),
        };
        GeoError::parse_at(self.input, self.position, format!("{}, {}", message, found))
    }
}

/// Parse `POLYGON` text into rings of `[lon, lat]`; `POLYGON EMPTY` gives no rings
pub fn parse_wkt_polygon(text: &str) -> GeoResult<Vec<Ring>> {
    WktParser::new(text).parse_polygon()
}

/// Parse `POINT(<lon> <lat>)` text
pub fn parse_wkt_point(text: &str) -> GeoResult<GeoPoint> {
    WktParser::new(text).parse_point()
}

/// Normalized points of a ring
pub fn ring_to_points(ring: &Ring) -> GeoResult<Vec<GeoPoint>> {
    ring.iter().map(|[lon, lat]| GeoPoint::new(*lon, *lat)).collect()
}
