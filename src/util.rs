// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! Small shared helpers.

use crate::kurbo::{Point, Rect, Size};
use crate::FlowElement;

/// Read a child's preferred size, failing fast on values the geometry
/// cannot degrade gracefully from.
pub(crate) fn child_pref<E: FlowElement + ?Sized>(child: &E) -> (f64, f64) {
    let (width, height) = (child.preferred_width(), child.preferred_height());
    assert!(
        width.is_finite() && height.is_finite(),
        "child preferred size must be finite, got {}x{}",
        width,
        height
    );
    (width, height)
}

/// Build a bounds rectangle, rounding each component to the nearest integer
/// (ties away from zero) when `round` is set.
pub(crate) fn bounds(round: bool, x: f64, y: f64, width: f64, height: f64) -> Rect {
    let (x, y, width, height) = if round {
        (x.round(), y.round(), width.round(), height.round())
    } else {
        (x, y, width, height)
    };
    Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
}

/// An iterator that walks its inner iterator forwards or backwards,
/// selected at runtime.
///
/// Flow groups traverse their children in reverse when the `reverse` flag is
/// set; this lets the size and layout loops be written once.
pub(crate) enum Directed<I> {
    Forward(I),
    Reverse(std::iter::Rev<I>),
}

pub(crate) fn directed<I: DoubleEndedIterator>(iter: I, reverse: bool) -> Directed<I> {
    if reverse {
        Directed::Reverse(iter.rev())
    } else {
        Directed::Forward(iter)
    }
}

impl<I: DoubleEndedIterator> Iterator for Directed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self {
            Directed::Forward(iter) => iter.next(),
            Directed::Reverse(iter) => iter.next(),
        }
    }
}
