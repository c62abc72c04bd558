// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test font and stroke collection helpers.

use std::sync::Arc;

use strokefont::Font;
use typeline::{Point, Rect, Typesetter};

/// A uniform test font covering `' '..='Z'`.
///
/// Every glyph is 10 units wide (bounds `M..W`); every printable glyph is a
/// single horizontal bar across its full extent, so each character
/// contributes exactly one stroke of two points and all advances are exact
/// multiples of 10. Line height is 32 at font size 1, and the bar of a
/// character on a line with top `y` renders at `y - 16`.
pub fn test_font() -> Arc<Font> {
    let mut source = String::from("12345  1MW\n");
    for _ in '!'..='Z' {
        source.push_str("  500  3MWMRWR\n");
    }
    Arc::new(Font::from_str(&source).expect("test font must parse"))
}

/// A typesetter over the shared test font with default settings.
pub fn typesetter() -> Typesetter {
    let mut typesetter = Typesetter::new();
    typesetter.set_font(test_font());
    typesetter
}

/// Renders `text` into `rect` and returns every emitted stroke.
pub fn collect_strokes(typesetter: &mut Typesetter, text: &str, rect: Rect) -> Vec<Vec<Point>> {
    let mut strokes = Vec::new();
    typesetter
        .render_text(text, rect, &mut |stroke| strokes.push(stroke.to_vec()))
        .expect("render must succeed");
    strokes
}

/// The midpoint y of each stroke's first point, useful for identifying
/// which line a character landed on.
pub fn stroke_ys(strokes: &[Vec<Point>]) -> Vec<f32> {
    strokes.iter().map(|stroke| stroke[0].y).collect()
}

/// The starting x of each stroke.
pub fn stroke_xs(strokes: &[Vec<Point>]) -> Vec<f32> {
    strokes.iter().map(|stroke| stroke[0].x).collect()
}
