// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-font parsing and glyph lookup.
//!
//! A stroke font describes each glyph as a set of pen-down polylines in a
//! fixed local coordinate space, rather than as filled outlines. This crate
//! parses the line-oriented single-stroke font format (the `.jhf`
//! convention) into an immutable [`Font`] that maps characters to their
//! [`Glyph`] stroke data.
//!
//! No layout or rendering happens here; consumers walk the glyph strokes and
//! transform the points themselves.
//!
//! ## Example
//!
//! ```
//! use strokefont::Font;
//!
//! // A one-glyph font: the record maps to ' ' and carries no strokes.
//! let font = Font::from_str("12345  1JZ").unwrap();
//! let space = font.glyph(' ').unwrap();
//! assert_eq!(space.advance(), 16);
//! assert!(space.strokes().is_empty());
//! ```

mod error;
mod font;
mod parse;

pub use error::ParseError;
pub use font::{Font, Glyph, GlyphBounds, Point, Stroke};
