use phf::phf_map;

use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};

static KEYWORDS: phf::Map<&'static str, GeometryKind> = phf_map! {
    "POINT" => GeometryKind::Point,
    "LINESTRING" => GeometryKind::LineString,
    "POLYGON" => GeometryKind::Polygon,
    "MULTIPOINT" => GeometryKind::MultiPoint,
    "MULTILINESTRING" => GeometryKind::MultiLineString,
    "MULTIPOLYGON" => GeometryKind::MultiPolygon,
};

/// Everything before the geometry body, plus the extent of the body itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WktHeader {
    pub(super) srid: Option<i32>,
    pub(super) geometry_type: GeometryType,
    pub(super) is_empty: bool,
    /// Byte offset of the body, either `EMPTY` or the opening parenthesis.
    pub(super) body_offset: usize,
    /// Byte offset just past the body.
    pub(super) body_end: usize,
}

impl WktHeader {
    /// The parenthesised body.
    pub(super) fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_offset..self.body_end]
    }
}

fn malformed(message: String) -> GeoWireError {
    GeoWireError::Malformed(message)
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    text[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |offset| pos + offset)
}

/// The run of ASCII letters at the start of `text`.
fn leading_word(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    &text[..end]
}

fn parse_dimension_suffix(word: &str) -> Option<Dimension> {
    if word.eq_ignore_ascii_case("Z") {
        Some(Dimension::XYZ)
    } else if word.eq_ignore_ascii_case("M") {
        Some(Dimension::XYM)
    } else if word.eq_ignore_ascii_case("ZM") {
        Some(Dimension::XYZM)
    } else {
        None
    }
}

/// Resolve a type keyword, which may carry a fused dimension suffix such as `POINTZM`.
fn parse_keyword(word: &str) -> Result<(GeometryKind, Option<Dimension>)> {
    let upper = word.to_ascii_uppercase();
    if let Some(kind) = KEYWORDS.get(upper.as_str()) {
        return Ok((*kind, None));
    }
    for (suffix, dimension) in [
        ("ZM", Dimension::XYZM),
        ("Z", Dimension::XYZ),
        ("M", Dimension::XYM),
    ] {
        if let Some(kind) = upper.strip_suffix(suffix).and_then(|base| KEYWORDS.get(base)) {
            return Ok((*kind, Some(dimension)));
        }
    }
    Err(malformed(format!("unknown WKT geometry keyword {word:?}")))
}

/// Parse an optional `SRID=<n>;` prefix, returning the SRID and the offset after it.
fn read_srid(text: &str) -> Result<(Option<i32>, usize)> {
    let start = skip_whitespace(text, 0);
    let word = leading_word(&text[start..]);
    if !word.eq_ignore_ascii_case("SRID") {
        return Ok((None, start));
    }
    let value = text[start + word.len()..]
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| malformed("expected '=' after SRID".to_string()))?;
    let end = value
        .find(';')
        .ok_or_else(|| malformed("expected ';' after the SRID".to_string()))?;
    let srid = value[..end]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("invalid SRID {:?}", &value[..end])))?;
    Ok((Some(srid), text.len() - value.len() + end + 1))
}

/// Byte offset just past the parenthesis closing the one at `start`.
fn find_body_end(text: &str, start: usize) -> Result<usize> {
    let mut depth = 0_usize;
    for (i, c) in text[start..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(start + i + 1);
                }
            }
            _ => {}
        }
    }
    Err(malformed(format!(
        "unterminated WKT body starting at offset {start}"
    )))
}

/// Count the ordinates of the first coordinate tuple.
fn infer_dimension(body: &str) -> Result<Dimension> {
    let first_tuple = body
        .split(|c: char| matches!(c, '(' | ',' | ')'))
        .map(str::trim)
        .find(|tuple| !tuple.is_empty() && !tuple.eq_ignore_ascii_case("EMPTY"));
    let Some(tuple) = first_tuple else {
        // Only EMPTY elements
        return Ok(Dimension::XY);
    };
    let mut count = 0;
    for token in tuple.split_whitespace() {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => count += 1,
            _ => return Err(malformed(format!("invalid WKT ordinate {token:?}"))),
        }
    }
    match count {
        2 => Ok(Dimension::XY),
        3 => Ok(Dimension::XYZ),
        4 => Ok(Dimension::XYZM),
        n => Err(malformed(format!("coordinate with {n} ordinates"))),
    }
}

pub(super) fn read_header(text: &str) -> Result<WktHeader> {
    let (srid, mut pos) = read_srid(text)?;

    let word = leading_word(&text[pos..]);
    if word.is_empty() {
        return Err(malformed(format!(
            "expected a geometry keyword at offset {pos}"
        )));
    }
    let (kind, mut dimension) = parse_keyword(word)?;
    pos += word.len();
    if dimension.is_none() {
        let next = skip_whitespace(text, pos);
        let word = leading_word(&text[next..]);
        if let Some(suffix) = parse_dimension_suffix(word) {
            dimension = Some(suffix);
            pos = next + word.len();
        }
    }

    let body_offset = skip_whitespace(text, pos);
    let rest = &text[body_offset..];
    let word = leading_word(rest);
    let is_empty = word.eq_ignore_ascii_case("EMPTY");
    let body_end = if is_empty {
        body_offset + word.len()
    } else if rest.starts_with('(') {
        find_body_end(text, body_offset)?
    } else {
        return Err(malformed(format!(
            "expected '(' or EMPTY at offset {body_offset}"
        )));
    };
    if !text[body_end..].trim().is_empty() {
        return Err(malformed(format!(
            "unexpected content after the geometry at offset {body_end}"
        )));
    }

    let dimension = match dimension {
        Some(dimension) => dimension,
        None if is_empty => Dimension::XY,
        None => infer_dimension(&text[body_offset..body_end])?,
    };

    Ok(WktHeader {
        srid,
        geometry_type: GeometryType::new(kind, dimension),
        is_empty,
        body_offset,
        body_end,
    })
}
