// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the typesetter.

use core::fmt;

/// An error preventing layout or rendering from proceeding.
///
/// These are configuration errors: layout is meaningless without a usable
/// font and positive metrics, so they are surfaced rather than degraded
/// around. Unknown characters, by contrast, are not errors; they lay out
/// zero-width and render nothing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// No font has been set on the typesetter.
    NoFont,
    /// The font defines no glyph for `' '`, so whitespace cannot be sized.
    NoSpaceGlyph,
    /// A typesetter option holds a value layout cannot proceed with.
    InvalidOption {
        /// The option's name.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFont => write!(f, "no font set"),
            Self::NoSpaceGlyph => write!(f, "font defines no space glyph"),
            Self::InvalidOption { name, value } => {
                write!(f, "option {name} cannot be {value}")
            }
        }
    }
}

impl core::error::Error for Error {}
