// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constrained text layout over stroke fonts.
//!
//! Typeline packs the glyphs of a [`strokefont::Font`] into a target
//! rectangle: it splits input text into paragraphs, breaks each paragraph
//! into lines with a greedy word-wrapping pass, aligns lines and the whole
//! block per a 9-way [`Anchor`], and hands every positioned glyph stroke to
//! a caller-provided draw callback as an array of points in destination
//! coordinates. Nothing is rasterized here; the renderer behind the
//! callback is an external collaborator.
//!
//! The entry point is [`Typesetter`], which owns the font, the layout
//! settings, and a small cache of computed layouts.
//!
//! ## Example
//!
//! ```
//! use strokefont::Font;
//! use typeline::{Point, Rect, Typesetter};
//!
//! let font = Font::from_str("12345  1JZ\n  501  9MWRMNV RRMVV RPSTS").unwrap();
//! let mut typesetter = Typesetter::new();
//! typesetter.set_font(font.into());
//!
//! let mut strokes: Vec<Vec<Point>> = Vec::new();
//! typesetter
//!     .render_text("!", Rect::new(0.0, 0.0, 100.0, 100.0), &mut |stroke| {
//!         strokes.push(stroke.to_vec());
//!     })
//!     .unwrap();
//! assert_eq!(strokes.len(), 3);
//! ```

mod cache;
mod element;
mod error;
mod geometry;
mod layout;
mod typesetter;

pub use strokefont;

pub use error::Error;
pub use geometry::{Point, Rect};
pub use layout::{Anchor, HorizontalAlign, VerticalAlign, VerticalWrap};
pub use typesetter::Typesetter;
