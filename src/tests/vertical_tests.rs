// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! Layout behavior of [`VerticalFlow`].

use float_cmp::assert_approx_eq;
use test_log::test;

use super::{boxes, rect, TestBox};
use crate::kurbo::Size;
use crate::vertical::Column;
use crate::VerticalFlow;

#[test]
fn single_column_positions() {
    let mut group = VerticalFlow::new().space(10.0);
    group.set_size(Size::new(20.0, 170.0));
    let mut children = boxes(&[(20.0, 50.0), (20.0, 50.0), (20.0, 50.0)]);

    assert_approx_eq!(f64, group.pref_height(&children), 170.0);
    assert_approx_eq!(f64, group.pref_width(&children), 20.0);

    group.layout(&mut children);
    // children descend from the top
    assert_eq!(children[0].bounds(), rect(0.0, 120.0, 20.0, 50.0));
    assert_eq!(children[1].bounds(), rect(0.0, 60.0, 20.0, 50.0));
    assert_eq!(children[2].bounds(), rect(0.0, 0.0, 20.0, 50.0));
}

#[test]
fn no_children() {
    let mut group = VerticalFlow::new().space(10.0).padding((1.0, 2.0, 3.0, 4.0));
    group.set_size(Size::new(100.0, 100.0));
    let mut children: Vec<TestBox> = Vec::new();

    assert_eq!(group.pref_width(&children), 4.0);
    assert_eq!(group.pref_height(&children), 6.0);
    group.layout(&mut children);
}

#[test]
fn wrap_to_columns() {
    let mut group = VerticalFlow::new().space(10.0).wrap_space(5.0).wrap(true);
    group.set_size(Size::new(45.0, 120.0));
    let mut children = boxes(&[(20.0, 50.0), (20.0, 50.0), (20.0, 50.0)]);

    // a wrapping group reports no height preference of its own
    assert_eq!(group.pref_height(&children), 0.0);
    // two columns of 20, plus the wrap space
    assert_approx_eq!(f64, group.pref_width(&children), 45.0);

    // the first wrapped pass always reports a width change to the parent
    assert!(group.layout(&mut children));
    assert_eq!(
        group.column_metrics(),
        &[
            Column {
                width: 20.0,
                height: 110.0
            },
            Column {
                width: 20.0,
                height: 50.0
            }
        ][..]
    );

    // children 1 and 2 fill the first column, child 3 wraps to a second
    // column on the right; the shorter column is centered vertically within
    // the tallest column by default
    assert_eq!(children[0].bounds(), rect(0.0, 70.0, 20.0, 50.0));
    assert_eq!(children[1].bounds(), rect(0.0, 10.0, 20.0, 50.0));
    assert_eq!(children[2].bounds(), rect(25.0, 40.0, 20.0, 50.0));

    assert!(!group.layout(&mut children));
}

#[test]
fn column_alignment_in_wrap() {
    let mut group = VerticalFlow::new()
        .space(10.0)
        .wrap_space(5.0)
        .wrap(true)
        .column_top();
    group.set_size(Size::new(45.0, 120.0));
    let mut children = boxes(&[(20.0, 50.0), (20.0, 50.0), (20.0, 50.0)]);
    group.layout(&mut children);
    // the short column hangs from the top instead of centering
    assert_eq!(children[2].bounds(), rect(25.0, 70.0, 20.0, 50.0));
}

#[test]
fn reverse_mirrors_column_assignment() {
    let sizes = [(20.0, 50.0), (20.0, 50.0), (20.0, 50.0)];

    let mut forward = VerticalFlow::new().space(10.0).wrap_space(5.0).wrap(true);
    forward.set_size(Size::new(45.0, 120.0));
    let mut fwd_children = boxes(&sizes);
    forward.layout(&mut fwd_children);

    let mut reversed = VerticalFlow::new()
        .space(10.0)
        .wrap_space(5.0)
        .wrap(true)
        .reverse(true);
    reversed.set_size(Size::new(45.0, 120.0));
    let mut rev_children = boxes(&sizes);
    reversed.layout(&mut rev_children);

    assert_eq!(forward.column_metrics(), reversed.column_metrics());
    // reversed: children 3,2 share the first column, child 1 wraps
    assert_eq!(rev_children[2].bounds(), rect(0.0, 70.0, 20.0, 50.0));
    assert_eq!(rev_children[1].bounds(), rect(0.0, 10.0, 20.0, 50.0));
    assert_eq!(rev_children[0].bounds(), rect(25.0, 40.0, 20.0, 50.0));
}

#[test]
fn fill_clamps_to_min_width() {
    let mut group = VerticalFlow::new().fill(1.0);
    group.set_size(Size::new(20.0, 50.0));
    let mut children = vec![TestBox::new(20.0, 50.0).min_width(30.0)];

    group.layout(&mut children);
    assert_eq!(children[0].bounds(), rect(-5.0, 0.0, 30.0, 50.0));
}

#[test]
fn fill_clamps_to_max_width() {
    let mut group = VerticalFlow::new().fill(1.0);
    group.set_size(Size::new(20.0, 50.0));
    let mut children = vec![TestBox::new(20.0, 50.0).max_width(10.0)];

    group.layout(&mut children);
    assert_eq!(children[0].bounds(), rect(5.0, 0.0, 10.0, 50.0));
}

#[test]
fn grow_fills_container_width() {
    let mut group = VerticalFlow::new().space(10.0).grow();
    group.set_size(Size::new(100.0, 120.0));
    let mut children = boxes(&[(20.0, 50.0), (20.0, 50.0)]);

    group.layout(&mut children);
    assert_eq!(children[0].bounds(), rect(0.0, 70.0, 100.0, 50.0));
    assert_eq!(children[1].bounds(), rect(0.0, 10.0, 100.0, 50.0));
}

#[test]
fn bottom_alignment() {
    let mut group = VerticalFlow::new().space(10.0).bottom();
    group.set_size(Size::new(20.0, 200.0));
    let mut children = boxes(&[(20.0, 50.0), (20.0, 50.0)]);

    group.layout(&mut children);
    assert_eq!(children[0].bounds(), rect(0.0, 60.0, 20.0, 50.0));
    assert_eq!(children[1].bounds(), rect(0.0, 0.0, 20.0, 50.0));
}

#[test]
fn layout_is_idempotent() {
    let mut group = VerticalFlow::new().space(10.0).wrap_space(5.0).wrap(true);
    group.set_size(Size::new(45.0, 120.0));
    let mut children = boxes(&[(20.0, 50.0), (15.0, 30.0), (20.0, 50.0)]);

    group.layout(&mut children);
    let first: Vec<_> = children.iter().map(|c| c.bounds()).collect();
    group.layout(&mut children);
    let second: Vec<_> = children.iter().map(|c| c.bounds()).collect();
    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "non-negative")]
fn negative_container_size() {
    VerticalFlow::new().set_size(Size::new(10.0, -1.0));
}
