// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model for stroke fonts and their glyphs.

use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::error::ParseError;
use crate::parse;

/// A point in glyph-local coordinates.
///
/// The coordinate space is a small integer grid centered on the glyph
/// origin, with positive y pointing up. Glyph geometry spans
/// `-16..=16` vertically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, within the glyph's [`GlyphBounds`].
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One continuous pen-down polyline within a glyph.
///
/// Points are ordered; consecutive points are connected by line segments.
/// There is no implicit closing segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The points of this polyline, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Horizontal extents of a glyph in its local coordinate space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphBounds {
    /// Left extent, typically negative.
    pub left: i32,
    /// Right extent, typically positive.
    pub right: i32,
}

impl GlyphBounds {
    /// The horizontal advance of a glyph with these bounds.
    pub fn advance(self) -> i32 {
        self.left.abs() + self.right.abs()
    }
}

/// The stroke geometry and metrics for one renderable character.
///
/// Immutable once parsed; owned by a [`Font`] and referenced by consumers.
#[derive(Clone, Debug)]
pub struct Glyph {
    ch: char,
    number: u32,
    bounds: GlyphBounds,
    strokes: SmallVec<[Stroke; 4]>,
}

impl Glyph {
    pub(crate) fn new(
        ch: char,
        number: u32,
        bounds: GlyphBounds,
        strokes: SmallVec<[Stroke; 4]>,
    ) -> Self {
        Self {
            ch,
            number,
            bounds,
            strokes,
        }
    }

    /// The character this glyph renders.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// The glyph number embedded in the font source record.
    ///
    /// This references the source font's master numbering and is retained as
    /// metadata only; character assignment is positional (see
    /// [`Font::parse`]).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The horizontal extents of the glyph.
    pub fn bounds(&self) -> GlyphBounds {
        self.bounds
    }

    /// The horizontal advance, in glyph-local units.
    pub fn advance(&self) -> i32 {
        self.bounds.advance()
    }

    /// The pen-down polylines making up the glyph, in drawing order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

/// An immutable collection of glyphs keyed by character.
///
/// Built once by parsing a font source; read-only thereafter. Lookup is
/// constant time. When a font source maps two records to the same character,
/// the first record wins.
#[derive(Clone, Debug, Default)]
pub struct Font {
    glyphs: Vec<Glyph>,
    index: HashMap<char, usize>,
}

impl Font {
    pub(crate) fn from_glyphs(glyphs: Vec<Glyph>) -> Self {
        let mut index = HashMap::with_capacity(glyphs.len());
        for (i, glyph) in glyphs.iter().enumerate() {
            // First match wins for duplicate characters.
            index.entry(glyph.ch()).or_insert(i);
        }
        Self { glyphs, index }
    }

    /// Parses a font from a line-oriented source stream.
    ///
    /// The reader is consumed and released on all exit paths, including
    /// parse failures. Characters are assigned to records positionally,
    /// starting from `' '` (U+0020) in record order; the glyph number
    /// embedded in each record is retained as [`Glyph::number`] but does not
    /// participate in lookup.
    ///
    /// An empty stream yields an empty font.
    pub fn parse(reader: impl BufRead) -> Result<Self, ParseError> {
        parse::parse_font(reader).map(Self::from_glyphs)
    }

    /// Parses a font from an in-memory string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &str) -> Result<Self, ParseError> {
        Self::parse(source.as_bytes())
    }

    /// Parses a font from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let file = std::fs::File::open(path).map_err(|source| ParseError::Io { line: 0, source })?;
        Self::parse(BufReader::new(file))
    }

    /// Returns the glyph for the given character, if the font defines one.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.index.get(&ch).map(|&i| &self.glyphs[i])
    }

    /// Returns the glyph used to advance past a space.
    pub fn space(&self) -> Option<&Glyph> {
        self.glyph(' ')
    }

    /// All glyphs, in record order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The number of glyphs in the font.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the font contains no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
