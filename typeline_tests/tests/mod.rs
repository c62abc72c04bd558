// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `typeline`.
//!
//! - The `util` module holds the shared test font and stroke-collecting
//!   helpers needed by different test modules.
//! - We do not use the default Rust test harness; this `mod.rs` file is the
//!   entry point for all other tests, which makes it easy to share utility
//!   functions between them.
//! - Tests exercising end-to-end rendering go into `basic.rs`; tests about
//!   line wrapping and alignment go into `wrap.rs`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod basic;
mod util;
