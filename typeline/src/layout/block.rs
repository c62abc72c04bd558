// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text into paragraphs and stacking their layouts into a block.

use strokefont::Font;

use super::{Anchor, BlockLayout, Cursor, ParagraphLayout, alignment, greedy};
use crate::element::{CharacterElement, InlineElement, SpaceElement};
use crate::error::Error;
use crate::geometry::Rect;

/// Settings a single layout pass runs under, resolved by the typesetter.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LayoutOptions {
    /// Font size divided by pixels-per-unit: layout units per glyph unit.
    pub(crate) scaled_size: f32,
    /// Multiplier on the base line height.
    pub(crate) line_spacing: f32,
    /// Placement of lines and of the whole block.
    pub(crate) anchor: Anchor,
}

/// Lays `text` out within `rect`: one paragraph per input line, wrapped,
/// stacked top-down, and aligned per the anchor.
pub(crate) fn layout_block(
    text: &str,
    font: &Font,
    rect: Rect,
    options: &LayoutOptions,
) -> Result<BlockLayout, Error> {
    let (mut paragraphs, width, height) = stack_paragraphs(text, font, rect, options)?;
    for paragraph in &mut paragraphs {
        alignment::align_horizontal(paragraph, rect, options.anchor.horizontal());
    }
    alignment::align_vertical(&mut paragraphs, rect, height, options.anchor.vertical());
    Ok(BlockLayout {
        paragraphs,
        width,
        height,
    })
}

/// Measures the unconstrained size of `text`: the widest paragraph line and
/// the stacked height with no wrapping.
pub(crate) fn measure_block(
    text: &str,
    font: &Font,
    options: &LayoutOptions,
) -> Result<(f32, f32), Error> {
    // Wide enough that nothing ever wraps; alignment is irrelevant to size.
    let unbounded = Rect::new(0.0, f32::MIN, f32::MAX, 0.0);
    let (_, width, height) = stack_paragraphs(text, font, unbounded, options)?;
    Ok((width, height))
}

fn stack_paragraphs(
    text: &str,
    font: &Font,
    rect: Rect,
    options: &LayoutOptions,
) -> Result<(Vec<ParagraphLayout>, f32, f32), Error> {
    let mut cursor = Cursor {
        x: rect.x_min,
        y: rect.y_max,
    };
    let mut paragraphs = Vec::new();
    let mut width = 0.0_f32;
    for segment in split_paragraphs(text) {
        // An empty paragraph still occupies a blank line.
        let segment = if segment.is_empty() { " " } else { segment };
        let elements = build_elements(segment, font, options.scaled_size, options.line_spacing)?;
        let paragraph = greedy::break_paragraph(elements, rect, &mut cursor);
        for line in &paragraph.lines {
            width = width.max(line.width);
        }
        paragraphs.push(paragraph);
    }
    Ok((paragraphs, width, rect.y_max - cursor.y))
}

/// Splits text into paragraphs at line terminators.
///
/// `"\r\n"` counts as a single terminator; lone `'\n'` and `'\r'` also
/// terminate. A trailing terminator yields a final empty paragraph, which
/// renders as a blank line.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                segments.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                segments.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    segments.push(&text[start..]);
    segments
}

/// Builds the inline elements for one paragraph of text.
///
/// Whitespace becomes a space element sized from the font's space glyph;
/// everything else becomes a character element. A font without a space
/// glyph cannot lay out whitespace: spacing consistency depends on it, so
/// that is an error rather than a guess.
pub(crate) fn build_elements(
    text: &str,
    font: &Font,
    scaled_size: f32,
    line_spacing: f32,
) -> Result<Vec<InlineElement>, Error> {
    let mut space_advance: Option<i32> = None;
    let mut elements = Vec::with_capacity(text.chars().count());
    for ch in text.chars() {
        let element = if ch.is_whitespace() {
            let advance = match space_advance {
                Some(advance) => advance,
                None => {
                    let advance = font.space().ok_or(Error::NoSpaceGlyph)?.advance();
                    space_advance = Some(advance);
                    advance
                }
            };
            InlineElement::Space(SpaceElement::new(advance, scaled_size, line_spacing))
        } else {
            InlineElement::Character(CharacterElement::new(ch, font, scaled_size, line_spacing))
        };
        elements.push(element);
    }
    Ok(elements)
}
