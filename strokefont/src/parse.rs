// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding of the line-oriented stroke font source format.
//!
//! Each glyph is a fixed-width record: a header line carrying a 5-character
//! glyph number field, a 3-character pair-count field and a bounds pair,
//! followed by coordinate pairs encoded as printable characters offset from
//! the origin character `'R'`. Records may wrap; any line that does not
//! itself parse as a header continues the open record.

use std::io::BufRead;

use smallvec::SmallVec;

use crate::error::ParseError;
use crate::font::{Glyph, GlyphBounds, Point, Stroke};

/// Origin character of the coordinate-as-character encoding.
const ORIGIN: u8 = b'R';

/// Reserved two-character sequence marking a pen lift between strokes.
const PEN_UP: &str = " R";

/// Character assigned to the first record; assignment is positional from
/// here in record order.
const FIRST_CHAR: u32 = ' ' as u32;

/// A glyph record whose lines have been gathered but not yet decoded.
struct RawRecord {
    line: usize,
    number: u32,
    pair_count: usize,
    bounds: (u8, u8),
    instructions: String,
}

pub(crate) fn parse_font(reader: impl BufRead) -> Result<Vec<Glyph>, ParseError> {
    let mut glyphs = Vec::new();
    let mut open: Option<RawRecord> = None;
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| ParseError::Io {
            line: line_no,
            source,
        })?;
        if let Some(record) = parse_header(&line, line_no) {
            if let Some(done) = open.replace(record) {
                glyphs.push(decode_record(done, glyphs.len())?);
            }
        } else if let Some(record) = open.as_mut() {
            record.instructions.push_str(&line);
        } else if !line.trim().is_empty() {
            return Err(ParseError::StrayContent { line: line_no });
        }
    }
    // A record left open by the end of the stream is still a whole glyph.
    if let Some(done) = open {
        glyphs.push(decode_record(done, glyphs.len())?);
    }
    Ok(glyphs)
}

/// Attempts to read a line as a record header.
///
/// A line is a header iff it is ASCII, at least 10 characters long, and its
/// first two fixed-width fields decode as unsigned integers. Anything else
/// is continuation data for the open record.
fn parse_header(line: &str, line_no: usize) -> Option<RawRecord> {
    let bytes = line.as_bytes();
    if bytes.len() < 10 || !line.is_ascii() {
        return None;
    }
    let number = parse_field(&line[0..5])?;
    let pair_count = parse_field(&line[5..8])? as usize;
    Some(RawRecord {
        line: line_no,
        number,
        pair_count,
        bounds: (bytes[8], bytes[9]),
        instructions: line[10..].to_string(),
    })
}

/// Decodes a right-aligned, space-padded decimal field.
fn parse_field(field: &str) -> Option<u32> {
    let digits = field.trim_start_matches(' ');
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn decode_record(record: RawRecord, index: usize) -> Result<Glyph, ParseError> {
    let RawRecord {
        line,
        number,
        pair_count,
        bounds,
        instructions,
    } = record;
    // The declared pair count includes the bounds pair.
    if pair_count == 0 {
        return Err(ParseError::MalformedHeader { line });
    }
    if !instructions.is_ascii() || instructions.len() % 2 != 0 {
        return Err(ParseError::TruncatedRecord {
            line,
            len: instructions.len(),
        });
    }
    if instructions.len() != (pair_count - 1) * 2 {
        return Err(ParseError::PairCountMismatch {
            line,
            declared: pair_count,
            found: instructions.len() / 2 + 1,
        });
    }
    let ch = char::from_u32(FIRST_CHAR + index as u32)
        .ok_or(ParseError::TooManyGlyphs { count: index })?;
    // The bounds pair goes through the same decoder as coordinates, so the
    // right extent lands in the sign-inverted y component.
    let decoded = decode_pair(bounds.0, bounds.1);
    let bounds = GlyphBounds {
        left: decoded.x,
        right: -decoded.y,
    };
    let strokes = split_strokes(&instructions, line)?;
    Ok(Glyph::new(ch, number, bounds, strokes))
}

/// Decodes one character pair into a point, inverting the y sign.
fn decode_pair(a: u8, b: u8) -> Point {
    Point::new(a as i32 - ORIGIN as i32, ORIGIN as i32 - b as i32)
}

/// Splits an instruction stream into strokes at pen-up markers.
fn split_strokes(instructions: &str, line: usize) -> Result<SmallVec<[Stroke; 4]>, ParseError> {
    let mut strokes = SmallVec::new();
    for segment in instructions.split(PEN_UP) {
        if segment.contains(PEN_UP) {
            return Err(ParseError::UnsplitPenUp { line });
        }
        if segment.is_empty() {
            continue;
        }
        // A pen-up marker straddling two pairs leaves odd-length segments.
        if segment.len() % 2 != 0 {
            return Err(ParseError::TruncatedRecord {
                line,
                len: segment.len(),
            });
        }
        let points = segment
            .as_bytes()
            .chunks_exact(2)
            .map(|pair| decode_pair(pair[0], pair[1]))
            .collect();
        strokes.push(Stroke::new(points));
    }
    Ok(strokes)
}
