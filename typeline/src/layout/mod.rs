// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout types and the paragraph/block layout passes.

mod alignment;
mod block;
mod greedy;

use core::ops::Range;

use crate::element::InlineElement;
use crate::geometry::Rect;

pub(crate) use block::{LayoutOptions, layout_block, measure_block};

/// 9-way placement of text within its layout rectangle.
///
/// The horizontal component aligns each line; the vertical component aligns
/// the whole block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Lines at the left edge, block at the top.
    #[default]
    UpperLeft,
    /// Lines centered, block at the top.
    UpperCenter,
    /// Lines at the right edge, block at the top.
    UpperRight,
    /// Lines at the left edge, block vertically centered.
    MiddleLeft,
    /// Lines centered, block vertically centered.
    MiddleCenter,
    /// Lines at the right edge, block vertically centered.
    MiddleRight,
    /// Lines at the left edge, block at the bottom.
    LowerLeft,
    /// Lines centered, block at the bottom.
    LowerCenter,
    /// Lines at the right edge, block at the bottom.
    LowerRight,
}

impl Anchor {
    /// The per-line horizontal component of this anchor.
    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::UpperLeft | Self::MiddleLeft | Self::LowerLeft => HorizontalAlign::Left,
            Self::UpperCenter | Self::MiddleCenter | Self::LowerCenter => HorizontalAlign::Center,
            Self::UpperRight | Self::MiddleRight | Self::LowerRight => HorizontalAlign::Right,
        }
    }

    /// The whole-block vertical component of this anchor.
    pub fn vertical(self) -> VerticalAlign {
        match self {
            Self::UpperLeft | Self::UpperCenter | Self::UpperRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::LowerLeft | Self::LowerCenter | Self::LowerRight => VerticalAlign::Bottom,
        }
    }
}

/// Horizontal alignment of a line within the layout rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Leave lines at the left edge.
    #[default]
    Left,
    /// Center each line.
    Center,
    /// Shift each line to the right edge.
    Right,
}

/// Vertical alignment of the whole block within the layout rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    /// Leave the block at the top edge.
    #[default]
    Top,
    /// Center the block vertically.
    Middle,
    /// Shift the block to the bottom edge.
    Bottom,
}

/// What to do with lines that fall outside the layout rectangle vertically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VerticalWrap {
    /// Skip lines extending past the bottom edge.
    #[default]
    Truncate,
    /// Render every line, even outside the rectangle.
    Overflow,
}

/// The pen position during layout, shared across a block's paragraphs.
///
/// `y` is the top of the current line; lines grow downward.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Cursor {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

/// One completed line within a paragraph.
#[derive(Clone, Debug)]
pub(crate) struct LineData {
    /// The elements on this line, as a range of paragraph element indices.
    pub(crate) range: Range<usize>,
    /// Visible width: the line's advance excluding trailing spaces.
    ///
    /// A space that ends a line hangs into the margin and does not take
    /// part in alignment.
    pub(crate) width: f32,
    /// Total advance of the trailing spaces excluded from `width`.
    pub(crate) trailing: f32,
    /// The tallest element height on the line.
    pub(crate) height: f32,
}

/// An immutable laid-out paragraph: elements, one rectangle per element
/// (same order), and the line structure over them.
#[derive(Clone, Debug)]
pub(crate) struct ParagraphLayout {
    pub(crate) elements: Vec<InlineElement>,
    pub(crate) rects: Vec<Rect>,
    pub(crate) lines: Vec<LineData>,
}

/// An immutable laid-out block: one paragraph per input line of text,
/// stacked top-down.
#[derive(Clone, Debug)]
pub(crate) struct BlockLayout {
    pub(crate) paragraphs: Vec<ParagraphLayout>,
    /// Widest visible line width in the block.
    pub(crate) width: f32,
    /// Total stacked height of all lines.
    pub(crate) height: f32,
}
