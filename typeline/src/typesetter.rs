// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The typesetter façade: settings, the layout cache, and the render driver.

use std::sync::Arc;

use strokefont::Font;

use crate::cache::LayoutCache;
use crate::element::InlineElement;
use crate::error::Error;
use crate::geometry::{LAYOUT_EPSILON, Point, Rect};
use crate::layout::{
    Anchor, BlockLayout, HorizontalAlign, LayoutOptions, LineData, ParagraphLayout, VerticalAlign,
    VerticalWrap, layout_block, measure_block,
};

/// Lays out text in a stroke font and drives a caller-provided renderer.
///
/// A typesetter owns its font and settings. Layout results are cached; any
/// settings change bumps an internal generation, orphaning every cached
/// entry at once. Instances are single-threaded: there is no internal
/// locking, and callers sharing one across threads must serialize access.
///
/// Strokes are delivered to the draw callback as point arrays in
/// destination coordinates, one call per stroke, in layout order.
#[derive(Debug)]
pub struct Typesetter {
    font: Option<Arc<Font>>,
    font_size: f32,
    tracking: f32,
    line_spacing: f32,
    anchor: Anchor,
    vertical_wrap: VerticalWrap,
    pixels_per_unit: f32,
    generation: u64,
    cache: LayoutCache,
}

impl Default for Typesetter {
    fn default() -> Self {
        Self::new()
    }
}

impl Typesetter {
    /// Creates a typesetter with no font, unit font size and spacing, and
    /// an upper-left anchor.
    pub fn new() -> Self {
        Self {
            font: None,
            font_size: 1.0,
            tracking: 0.0,
            line_spacing: 1.0,
            anchor: Anchor::default(),
            vertical_wrap: VerticalWrap::default(),
            pixels_per_unit: 1.0,
            generation: 0,
            cache: LayoutCache::new(),
        }
    }

    fn touch(&mut self) {
        self.generation += 1;
    }

    /// The font used for layout, if one has been set.
    pub fn font(&self) -> Option<&Arc<Font>> {
        self.font.as_ref()
    }

    /// Sets the font used for layout.
    pub fn set_font(&mut self, font: Arc<Font>) {
        if self.font.as_ref().is_some_and(|f| Arc::ptr_eq(f, &font)) {
            return;
        }
        self.font = Some(font);
        self.touch();
    }

    /// The font size: layout units per glyph unit, before pixels-per-unit.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Sets the font size. Must be positive by the next layout call.
    pub fn set_font_size(&mut self, size: f32) {
        if self.font_size != size {
            self.font_size = size;
            self.touch();
        }
    }

    /// Additional inter-character spacing.
    ///
    /// Retained as a setting only; the layout pass does not currently
    /// apply it.
    pub fn tracking(&self) -> f32 {
        self.tracking
    }

    /// Sets the tracking value.
    pub fn set_tracking(&mut self, tracking: f32) {
        if self.tracking != tracking {
            self.tracking = tracking;
            self.touch();
        }
    }

    /// The multiplier on the base line height.
    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Sets the line spacing multiplier.
    pub fn set_line_spacing(&mut self, spacing: f32) {
        if self.line_spacing != spacing {
            self.line_spacing = spacing;
            self.touch();
        }
    }

    /// The 9-way anchor controlling line and block alignment.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Sets the anchor.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        if self.anchor != anchor {
            self.anchor = anchor;
            self.touch();
        }
    }

    /// What happens to lines that overflow the rectangle vertically.
    pub fn vertical_wrap(&self) -> VerticalWrap {
        self.vertical_wrap
    }

    /// Sets the vertical wrap mode.
    pub fn set_vertical_wrap(&mut self, wrap: VerticalWrap) {
        if self.vertical_wrap != wrap {
            self.vertical_wrap = wrap;
            self.touch();
        }
    }

    /// The scale from font size into layout units.
    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Sets the pixels-per-unit scale. Must be positive by the next layout
    /// call.
    pub fn set_pixels_per_unit(&mut self, scale: f32) {
        if self.pixels_per_unit != scale {
            self.pixels_per_unit = scale;
            self.touch();
        }
    }

    /// Drops all cached layout state.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn resolve(&self) -> Result<LayoutOptions, Error> {
        if !(self.font_size > 0.0) {
            return Err(Error::InvalidOption {
                name: "font_size",
                value: self.font_size,
            });
        }
        if !(self.pixels_per_unit > 0.0) {
            return Err(Error::InvalidOption {
                name: "pixels_per_unit",
                value: self.pixels_per_unit,
            });
        }
        Ok(LayoutOptions {
            scaled_size: self.font_size / self.pixels_per_unit,
            line_spacing: self.line_spacing,
            anchor: self.anchor,
        })
    }

    /// Computes the rectangle the text would occupy unconstrained, anchored
    /// around `anchor_pos` per the typesetter's anchor.
    ///
    /// Fails with [`Error::NoFont`] when no font is set. Empty text yields
    /// a zero-size rectangle at `anchor_pos`.
    pub fn preferred_rect(&self, text: &str, anchor_pos: Point) -> Result<Rect, Error> {
        let font = self.font.as_deref().ok_or(Error::NoFont)?;
        if text.is_empty() {
            return Ok(Rect::at(anchor_pos));
        }
        let options = self.resolve()?;
        let (width, height) = measure_block(text, font, &options)?;
        let x_min = match self.anchor.horizontal() {
            HorizontalAlign::Left => anchor_pos.x,
            HorizontalAlign::Center => anchor_pos.x - width * 0.5,
            HorizontalAlign::Right => anchor_pos.x - width,
        };
        let y_max = match self.anchor.vertical() {
            VerticalAlign::Top => anchor_pos.y,
            VerticalAlign::Middle => anchor_pos.y + height * 0.5,
            VerticalAlign::Bottom => anchor_pos.y + height,
        };
        Ok(Rect::new(x_min, y_max - height, x_min + width, y_max))
    }

    /// Lays `text` out within `rect` and emits every positioned glyph
    /// stroke to `callback`.
    ///
    /// Fails with [`Error::NoFont`] when no font is set. Empty text and
    /// zero-size rectangles are no-ops. A rectangle with negative extents
    /// is normalized first. The computed layout is reused from the cache
    /// when neither text, rectangle nor settings changed since it was
    /// built.
    pub fn render_text(
        &mut self,
        text: &str,
        rect: Rect,
        callback: &mut dyn FnMut(&[Point]),
    ) -> Result<(), Error> {
        let font = self.font.clone().ok_or(Error::NoFont)?;
        if text.is_empty() {
            return Ok(());
        }
        let rect = rect.normalized();
        if rect.is_empty() {
            return Ok(());
        }
        let options = self.resolve()?;
        let wrap = self.vertical_wrap;
        let layout = self.cache.get_or_insert(text, rect, self.generation, || {
            layout_block(text, &font, rect, &options)
        })?;
        emit_block(layout, &font, rect, wrap, callback);
        Ok(())
    }
}

/// Walks a laid-out block and emits each character's strokes, transformed
/// into destination coordinates, one callback invocation per stroke.
fn emit_block(
    block: &BlockLayout,
    font: &Font,
    bounds: Rect,
    wrap: VerticalWrap,
    callback: &mut dyn FnMut(&[Point]),
) {
    let mut scratch = Vec::new();
    for paragraph in &block.paragraphs {
        for line in &paragraph.lines {
            if wrap == VerticalWrap::Truncate && extends_past_bottom(paragraph, line, bounds) {
                continue;
            }
            let elements = &paragraph.elements[line.range.clone()];
            let rects = &paragraph.rects[line.range.clone()];
            for (element, rect) in elements.iter().zip(rects) {
                if let InlineElement::Character(character) = element {
                    character.render(font, *rect, &mut scratch, callback);
                }
            }
        }
    }
}

fn extends_past_bottom(paragraph: &ParagraphLayout, line: &LineData, bounds: Rect) -> bool {
    let Some(first) = paragraph.rects.get(line.range.start) else {
        return false;
    };
    first.y_min < bounds.y_min - LAYOUT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_FONT: &str = "12345  1MW\n  501  2MWRR\n  502  2MWRR";

    fn typesetter() -> Typesetter {
        let mut typesetter = Typesetter::new();
        typesetter.set_font(Arc::new(Font::from_str(TEST_FONT).unwrap()));
        typesetter
    }

    fn count_strokes(typesetter: &mut Typesetter, text: &str, rect: Rect) -> usize {
        let mut strokes = 0;
        typesetter
            .render_text(text, rect, &mut |_| strokes += 1)
            .unwrap();
        strokes
    }

    #[test]
    fn operations_require_a_font() {
        let mut bare = Typesetter::new();
        assert_eq!(
            bare.preferred_rect("hi", Point::new(0.0, 0.0)),
            Err(Error::NoFont)
        );
        let result = bare.render_text("hi", Rect::new(0.0, 0.0, 10.0, 10.0), &mut |_| {});
        assert_eq!(result, Err(Error::NoFont));
    }

    #[test]
    fn empty_text_measures_zero_at_the_anchor_point() {
        let typesetter = typesetter();
        let rect = typesetter
            .preferred_rect("", Point::new(3.0, 7.0))
            .unwrap();
        assert_eq!(rect, Rect::at(Point::new(3.0, 7.0)));
    }

    #[test]
    fn empty_text_and_empty_rect_render_nothing() {
        let mut typesetter = typesetter();
        assert_eq!(
            count_strokes(&mut typesetter, "", Rect::new(0.0, 0.0, 100.0, 100.0)),
            0
        );
        assert_eq!(count_strokes(&mut typesetter, "!", Rect::ZERO), 0);
        // Neither no-op touched the cache.
        assert_eq!(typesetter.cache.len(), 0);
    }

    #[test]
    fn negative_extents_are_normalized() {
        let mut typesetter = typesetter();
        let forward = count_strokes(&mut typesetter, "!", Rect::new(0.0, 0.0, 100.0, 100.0));
        let flipped = count_strokes(&mut typesetter, "!", Rect::new(100.0, 100.0, 0.0, 0.0));
        assert_eq!(forward, 1);
        assert_eq!(flipped, 1);
    }

    #[test]
    fn invalid_metrics_are_configuration_errors() {
        let mut typesetter = typesetter();
        typesetter.set_font_size(0.0);
        let result = typesetter.render_text("!", Rect::new(0.0, 0.0, 10.0, 10.0), &mut |_| {});
        assert_eq!(
            result,
            Err(Error::InvalidOption {
                name: "font_size",
                value: 0.0,
            })
        );

        let mut typesetter = self::typesetter();
        typesetter.set_pixels_per_unit(-2.0);
        assert!(typesetter.preferred_rect("!", Point::default()).is_err());
    }

    #[test]
    fn preferred_rect_anchors_around_the_point() {
        // One 10-wide, 32-tall character at various anchors.
        let mut typesetter = typesetter();
        let pos = Point::new(100.0, 50.0);

        let upper_left = typesetter.preferred_rect("!", pos).unwrap();
        assert_eq!(upper_left, Rect::new(100.0, 18.0, 110.0, 50.0));

        typesetter.set_anchor(Anchor::MiddleCenter);
        let centered = typesetter.preferred_rect("!", pos).unwrap();
        assert_eq!(centered, Rect::new(95.0, 34.0, 105.0, 66.0));

        typesetter.set_anchor(Anchor::LowerRight);
        let lower_right = typesetter.preferred_rect("!", pos).unwrap();
        assert_eq!(lower_right, Rect::new(90.0, 50.0, 100.0, 82.0));
    }

    #[test]
    fn truncate_skips_lines_past_the_bottom() {
        let mut typesetter = typesetter();
        // Three lines of 32 units each in a 40-unit-tall rect: only the
        // first line fits entirely.
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(count_strokes(&mut typesetter, "!\n!\n!", rect), 1);

        typesetter.set_vertical_wrap(VerticalWrap::Overflow);
        assert_eq!(count_strokes(&mut typesetter, "!\n!\n!", rect), 3);
    }

    #[test]
    fn settings_changes_invalidate_cached_layouts() {
        let mut typesetter = typesetter();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let before = typesetter.generation;
        typesetter.set_font_size(2.0);
        assert_ne!(typesetter.generation, before, "setter must touch");
        // Setting the same value again leaves the generation alone.
        let after = typesetter.generation;
        typesetter.set_font_size(2.0);
        assert_eq!(typesetter.generation, after);

        // Layout still works against the new settings.
        assert_eq!(count_strokes(&mut typesetter, "!", rect), 1);
    }
}
