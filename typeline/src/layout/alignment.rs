// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and block alignment.

use super::{HorizontalAlign, ParagraphLayout, VerticalAlign};
use crate::geometry::Rect;

/// Aligns each of a paragraph's lines horizontally within `rect`.
///
/// Left alignment leaves the layout pass's positions untouched. Right and
/// center alignment shift every rect on a line by the line's free space or
/// half of it; trailing spaces hang and contribute no width.
pub(crate) fn align_horizontal(
    paragraph: &mut ParagraphLayout,
    rect: Rect,
    align: HorizontalAlign,
) {
    for line in &paragraph.lines {
        let free = rect.width() - line.width;
        let dx = match align {
            HorizontalAlign::Left => continue,
            HorizontalAlign::Center => free * 0.5,
            HorizontalAlign::Right => free,
        };
        for elem_rect in &mut paragraph.rects[line.range.clone()] {
            *elem_rect = elem_rect.translate(dx, 0.0);
        }
    }
}

/// Aligns a whole block of stacked paragraphs vertically within `rect`.
///
/// Paragraphs are laid out hanging from the top edge, so top alignment is a
/// no-op; bottom alignment shifts the block down by the free space and
/// middle alignment by half of it.
pub(crate) fn align_vertical(
    paragraphs: &mut [ParagraphLayout],
    rect: Rect,
    block_height: f32,
    align: VerticalAlign,
) {
    let free = rect.height() - block_height;
    let dy = match align {
        VerticalAlign::Top => return,
        VerticalAlign::Middle => -free * 0.5,
        VerticalAlign::Bottom => -free,
    };
    for paragraph in paragraphs {
        for elem_rect in &mut paragraph.rects {
            *elem_rect = elem_rect.translate(0.0, dy);
        }
    }
}
