// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline elements: the atomic units of line layout.

use strokefont::Font;

use crate::geometry::{Point, Rect};

/// Vertical extent of glyph-local space. Glyph geometry spans
/// `GLYPH_Y_MIN..=GLYPH_Y_MAX`.
const GLYPH_Y_MIN: f32 = -16.0;
const GLYPH_Y_MAX: f32 = 16.0;

/// Height of an unspaced line in glyph-local units: the full glyph span.
pub(crate) const BASE_HEIGHT: f32 = GLYPH_Y_MAX - GLYPH_Y_MIN;

/// The smallest positionable unit in a line: a character or a space.
///
/// Elements are measured when built; layout only reads the cached advance
/// and height.
#[derive(Clone, Debug)]
pub(crate) enum InlineElement {
    Character(CharacterElement),
    Space(SpaceElement),
}

impl InlineElement {
    /// The width this element occupies on a line.
    pub(crate) fn advance(&self) -> f32 {
        match self {
            Self::Character(c) => c.advance,
            Self::Space(s) => s.advance,
        }
    }

    /// The height of the line box this element requests.
    pub(crate) fn height(&self) -> f32 {
        match self {
            Self::Character(c) => c.height,
            Self::Space(s) => s.height,
        }
    }

    pub(crate) fn is_space(&self) -> bool {
        matches!(self, Self::Space(_))
    }
}

/// A single positioned character.
#[derive(Clone, Debug)]
pub(crate) struct CharacterElement {
    ch: char,
    advance: f32,
    /// Height of the glyph box alone, before line spacing.
    glyph_height: f32,
    height: f32,
}

impl CharacterElement {
    /// Measures a character against the font.
    ///
    /// A character the font does not define measures as zero-width and
    /// renders nothing; this is deliberate degraded output, not an error.
    pub(crate) fn new(ch: char, font: &Font, scaled_size: f32, line_spacing: f32) -> Self {
        debug_assert!(
            !ch.is_whitespace(),
            "whitespace must become a space element"
        );
        let advance = font
            .glyph(ch)
            .map_or(0.0, |glyph| glyph.advance() as f32 * scaled_size);
        let glyph_height = BASE_HEIGHT * scaled_size;
        Self {
            ch,
            advance,
            glyph_height,
            height: glyph_height * line_spacing,
        }
    }

    /// Maps the glyph's strokes into `rect` and emits each as one polyline.
    ///
    /// The glyph box hangs from the top of `rect`; any extra line spacing
    /// lies below it. Unknown and degenerate glyphs emit nothing.
    pub(crate) fn render(
        &self,
        font: &Font,
        rect: Rect,
        scratch: &mut Vec<Point>,
        callback: &mut dyn FnMut(&[Point]),
    ) {
        let Some(glyph) = font.glyph(self.ch) else {
            return;
        };
        let bounds = glyph.bounds();
        let span = (bounds.right - bounds.left) as f32;
        if span == 0.0 {
            return;
        }
        let box_bottom = rect.y_max - self.glyph_height;
        for stroke in glyph.strokes() {
            scratch.clear();
            scratch.extend(stroke.points().iter().map(|p| {
                let tx = (p.x - bounds.left) as f32 / span;
                let ty = (p.y as f32 - GLYPH_Y_MIN) / BASE_HEIGHT;
                Point::new(
                    rect.x_min + tx * rect.width(),
                    box_bottom + ty * self.glyph_height,
                )
            }));
            callback(scratch);
        }
    }
}

/// The breakable gap between words. Has extent but no geometry.
#[derive(Clone, Debug)]
pub(crate) struct SpaceElement {
    advance: f32,
    height: f32,
}

impl SpaceElement {
    /// Measures a space from the font's space glyph.
    pub(crate) fn new(space_advance: i32, scaled_size: f32, line_spacing: f32) -> Self {
        Self {
            advance: space_advance as f32 * scaled_size,
            height: BASE_HEIGHT * scaled_size * line_spacing,
        }
    }
}
