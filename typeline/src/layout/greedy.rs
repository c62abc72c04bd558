// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use core::ops::Range;

use super::{Cursor, LineData, ParagraphLayout};
use crate::element::InlineElement;
use crate::geometry::{LAYOUT_EPSILON, Rect};

/// Packs `elements` into lines no wider than `rect`, advancing `cursor`
/// past the paragraph.
///
/// Elements fill the current line left to right. When a character would
/// cross the right edge, the line breaks just after the last space on it;
/// with no space to return to, the line breaks at the overflowing element.
/// Everything retracted by the break is laid out again on the next line. A
/// space crossing the right edge never breaks: it commits where it stands
/// and hangs into the margin.
///
/// The cursor's x resets to the left edge; its y carries the stacked line
/// heights so paragraphs of a block flow top-down through one cursor.
pub(crate) fn break_paragraph(
    elements: Vec<InlineElement>,
    rect: Rect,
    cursor: &mut Cursor,
) -> ParagraphLayout {
    let mut rects = Vec::with_capacity(elements.len());
    let mut lines = Vec::new();
    if elements.is_empty() {
        return ParagraphLayout {
            elements,
            rects,
            lines,
        };
    }
    cursor.x = rect.x_min;
    let mut line_start = 0_usize;
    let mut last_space: Option<usize> = None;
    let mut i = 0;
    while i < elements.len() {
        let element = &elements[i];
        let advance = element.advance();
        let overflows = cursor.x + advance - rect.x_max > LAYOUT_EPSILON;
        // A lone element on its line commits even when it overflows, and an
        // overflowing space hangs rather than wraps.
        if overflows && i > line_start && !element.is_space() {
            let break_at = last_space.map_or(i, |space| space + 1);
            debug_assert!(
                break_at > line_start && break_at <= i,
                "a break must shorten the line"
            );
            rects.truncate(break_at);
            let line = make_line(&elements, line_start..break_at, &rects, rect.x_min);
            cursor.x = rect.x_min;
            cursor.y -= line.height;
            lines.push(line);
            line_start = break_at;
            last_space = None;
            // Retracted elements are processed again on the new line.
            i = break_at;
            continue;
        }
        rects.push(Rect::new(
            cursor.x,
            cursor.y - element.height(),
            cursor.x + advance,
            cursor.y,
        ));
        cursor.x += advance;
        if element.is_space() {
            last_space = Some(i);
        }
        i += 1;
    }
    // The end of a paragraph is always a break.
    let line = make_line(&elements, line_start..elements.len(), &rects, rect.x_min);
    cursor.x = rect.x_min;
    cursor.y -= line.height;
    lines.push(line);
    debug_assert_eq!(
        rects.len(),
        elements.len(),
        "line breaking must commit one rect per element"
    );
    ParagraphLayout {
        elements,
        rects,
        lines,
    }
}

fn make_line(
    elements: &[InlineElement],
    range: Range<usize>,
    rects: &[Rect],
    origin_x: f32,
) -> LineData {
    let mut height = 0.0_f32;
    for element in &elements[range.clone()] {
        height = height.max(element.height());
    }
    let mut trailing = 0.0_f32;
    for element in elements[range.clone()].iter().rev() {
        if element.is_space() {
            trailing += element.advance();
        } else {
            break;
        }
    }
    let advance = if range.is_empty() {
        0.0
    } else {
        rects[range.end - 1].x_max - origin_x
    };
    LineData {
        width: advance - trailing,
        trailing,
        height,
        range,
    }
}
