// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! The capability trait the layout engine requires of its children.

use crate::kurbo::{Rect, Size};

/// A layoutable child of a flow group.
///
/// The engine only ever reads size hints and writes bounds; children are
/// created, owned and destroyed by the host. Elements that have no layout
/// machinery of their own can implement just [`size`] and [`set_bounds`]:
/// the preferred-size methods fall back to the current size, mirroring how
/// the host scene graph treats widgets without a layout capability.
///
/// A `max_width`/`max_height` of `0.0` means unbounded.
///
/// [`size`]: FlowElement::size
/// [`set_bounds`]: FlowElement::set_bounds
pub trait FlowElement {
    /// The element's current size, used as the preferred-size fallback.
    fn size(&self) -> Size;

    /// Replace the element's bounds with the engine's assignment.
    fn set_bounds(&mut self, bounds: Rect);

    fn preferred_width(&self) -> f64 {
        self.size().width
    }

    fn preferred_height(&self) -> f64 {
        self.size().height
    }

    fn min_width(&self) -> f64 {
        0.0
    }

    fn min_height(&self) -> f64 {
        0.0
    }

    fn max_width(&self) -> f64 {
        0.0
    }

    fn max_height(&self) -> f64 {
        0.0
    }

    /// Called once per layout pass, after the element's bounds are written,
    /// so the element can run its own sub-layout. This is a notification
    /// hook; it takes no part in the geometry itself.
    fn validate(&mut self) {}
}

impl<T: FlowElement + ?Sized> FlowElement for Box<T> {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds)
    }

    fn preferred_width(&self) -> f64 {
        (**self).preferred_width()
    }

    fn preferred_height(&self) -> f64 {
        (**self).preferred_height()
    }

    fn min_width(&self) -> f64 {
        (**self).min_width()
    }

    fn min_height(&self) -> f64 {
        (**self).min_height()
    }

    fn max_width(&self) -> f64 {
        (**self).max_width()
    }

    fn max_height(&self) -> f64 {
        (**self).max_height()
    }

    fn validate(&mut self) {
        (**self).validate()
    }
}

impl<T: FlowElement + ?Sized> FlowElement for &mut T {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds)
    }

    fn preferred_width(&self) -> f64 {
        (**self).preferred_width()
    }

    fn preferred_height(&self) -> f64 {
        (**self).preferred_height()
    }

    fn min_width(&self) -> f64 {
        (**self).min_width()
    }

    fn min_height(&self) -> f64 {
        (**self).min_height()
    }

    fn max_width(&self) -> f64 {
        (**self).max_width()
    }

    fn max_height(&self) -> f64 {
        (**self).max_height()
    }

    fn validate(&mut self) {
        (**self).validate()
    }
}

/// A fixed-size element with no behavior, for putting gaps in a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    size: Size,
    bounds: Rect,
}

impl Spacer {
    /// Create a spacer with the given preferred size.
    pub fn new(size: Size) -> Spacer {
        Spacer {
            size,
            bounds: Rect::ZERO,
        }
    }

    /// The bounds most recently assigned by a layout pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl FlowElement for Spacer {
    fn size(&self) -> Size {
        self.bounds.size()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn preferred_width(&self) -> f64 {
        self.size.width
    }

    fn preferred_height(&self) -> f64 {
        self.size.height
    }
}
