// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end rendering through the public API.

use typeline::{Anchor, Point, Rect};

use crate::util::{collect_strokes, stroke_xs, stroke_ys, typesetter};

const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

#[test]
fn render_emits_one_stroke_per_character() {
    let mut typesetter = typesetter();
    let strokes = collect_strokes(&mut typesetter, "AB", RECT);
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0], [Point::new(0.0, 84.0), Point::new(10.0, 84.0)]);
    assert_eq!(strokes[1], [Point::new(10.0, 84.0), Point::new(20.0, 84.0)]);
}

#[test]
fn render_space_advances_without_strokes() {
    let mut typesetter = typesetter();
    let strokes = collect_strokes(&mut typesetter, "A B", RECT);
    assert_eq!(strokes.len(), 2);
    assert_eq!(stroke_xs(&strokes), [0.0, 20.0]);
}

#[test]
fn render_unknown_character_emits_nothing() {
    // '~' is outside the test font's ' '..='Z' coverage.
    let mut typesetter = typesetter();
    assert!(collect_strokes(&mut typesetter, "~", RECT).is_empty());

    // It takes no horizontal space either.
    let strokes = collect_strokes(&mut typesetter, "~A", RECT);
    assert_eq!(stroke_xs(&strokes), [0.0]);
}

#[test]
fn render_empty_text_is_a_no_op() {
    let mut typesetter = typesetter();
    assert!(collect_strokes(&mut typesetter, "", RECT).is_empty());
}

#[test]
fn render_paragraphs_stack_downward() {
    let mut typesetter = typesetter();
    let strokes = collect_strokes(&mut typesetter, "A\nB", RECT);
    assert_eq!(stroke_ys(&strokes), [84.0, 52.0]);
    // A blank paragraph still occupies a line.
    let strokes = collect_strokes(&mut typesetter, "A\n\nB", RECT);
    assert_eq!(stroke_ys(&strokes), [84.0, 20.0]);
}

#[test]
fn render_is_stable_across_cache_hits_and_clears() {
    let mut typesetter = typesetter();
    let first = collect_strokes(&mut typesetter, "AB C", RECT);
    let cached = collect_strokes(&mut typesetter, "AB C", RECT);
    assert_eq!(first, cached);
    typesetter.clear_cache();
    let rebuilt = collect_strokes(&mut typesetter, "AB C", RECT);
    assert_eq!(first, rebuilt);
}

#[test]
fn font_size_scales_the_output() {
    let mut typesetter = typesetter();
    typesetter.set_font_size(2.0);
    let strokes = collect_strokes(&mut typesetter, "AB", RECT);
    assert_eq!(strokes[1], [Point::new(20.0, 68.0), Point::new(40.0, 68.0)]);
}

#[test]
fn pixels_per_unit_divides_the_font_size() {
    let mut scaled_ts = typesetter();
    scaled_ts.set_font_size(2.0);
    scaled_ts.set_pixels_per_unit(2.0);
    let scaled = collect_strokes(&mut scaled_ts, "AB", RECT);

    let mut reference = typesetter();
    let unit = collect_strokes(&mut reference, "AB", RECT);
    assert_eq!(scaled, unit);
}

#[test]
fn preferred_rect_contains_the_rendered_text() {
    let mut typesetter = typesetter();
    typesetter.set_anchor(Anchor::MiddleCenter);
    let rect = typesetter
        .preferred_rect("AB CD", Point::new(50.0, 50.0))
        .unwrap();
    assert_eq!(rect.width(), 50.0);
    assert_eq!(rect.height(), 32.0);

    let strokes = collect_strokes(&mut typesetter, "AB CD", rect);
    assert_eq!(strokes.len(), 4);
    for point in strokes.iter().flatten() {
        assert!(point.x >= rect.x_min - 0.025 && point.x <= rect.x_max + 0.025);
        assert!(point.y >= rect.y_min - 0.025 && point.y <= rect.y_max + 0.025);
    }
}

#[test]
fn preferred_rect_matches_anchor_position() {
    let typesetter = typesetter();
    // "AB" is 20 wide and 32 tall; upper-left anchors hang down-right.
    let rect = typesetter
        .preferred_rect("AB", Point::new(10.0, 90.0))
        .unwrap();
    assert_eq!(rect, Rect::new(10.0, 58.0, 30.0, 90.0));
}
