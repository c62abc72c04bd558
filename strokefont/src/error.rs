// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while parsing font sources.

use core::fmt;

/// An error produced while parsing a stroke font source.
///
/// Except for [`ParseError::Io`], every variant carries the 1-based source
/// line number of the glyph record that failed to decode.
#[derive(Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// Reading from the underlying stream failed.
    Io {
        /// The line being read when the failure occurred, or 0 if the
        /// stream could not be opened at all.
        line: usize,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A header line was detected but its fields could not be decoded.
    MalformedHeader {
        /// The offending source line.
        line: usize,
    },
    /// Content appeared before the first glyph header.
    StrayContent {
        /// The offending source line.
        line: usize,
    },
    /// A record's instruction data did not form whole coordinate pairs.
    TruncatedRecord {
        /// The source line the record started on.
        line: usize,
        /// The odd character count observed.
        len: usize,
    },
    /// A record's declared pair count disagreed with its instruction data.
    PairCountMismatch {
        /// The source line the record started on.
        line: usize,
        /// The pair count declared in the header, including the bounds pair.
        declared: usize,
        /// The pair count actually present, including the bounds pair.
        found: usize,
    },
    /// A stroke segment still contained the pen-up sequence after splitting.
    UnsplitPenUp {
        /// The source line the record started on.
        line: usize,
    },
    /// The source defines more glyphs than there are assignable characters.
    TooManyGlyphs {
        /// The record index that could not be assigned a character.
        count: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { line: 0, source } => write!(f, "failed to read font source: {source}"),
            Self::Io { line, source } => {
                write!(f, "failed to read font source at line {line}: {source}")
            }
            Self::MalformedHeader { line } => {
                write!(f, "line {line}: malformed glyph header")
            }
            Self::StrayContent { line } => {
                write!(f, "line {line}: content before the first glyph header")
            }
            Self::TruncatedRecord { line, len } => {
                write!(
                    f,
                    "record at line {line}: {len} instruction characters do not form whole pairs"
                )
            }
            Self::PairCountMismatch {
                line,
                declared,
                found,
            } => {
                write!(
                    f,
                    "record at line {line}: header declares {declared} pairs but {found} are present"
                )
            }
            Self::UnsplitPenUp { line } => {
                write!(
                    f,
                    "record at line {line}: pen-up sequence remains after stroke splitting"
                )
            }
            Self::TooManyGlyphs { count } => {
                write!(f, "no character assignable to glyph record {count}")
            }
        }
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
