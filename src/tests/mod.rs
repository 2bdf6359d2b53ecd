// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! Layout tests that cross module boundaries, plus shared test elements.

mod vertical_tests;

use crate::kurbo::{Point, Rect, Size};
use crate::FlowElement;

/// A test element with explicit size hints that records the bounds and
/// validate calls it receives.
pub(crate) struct TestBox {
    pref: Size,
    min: Size,
    max: Size,
    bounds: Rect,
    validated: usize,
}

impl TestBox {
    pub(crate) fn new(width: f64, height: f64) -> TestBox {
        TestBox {
            pref: Size::new(width, height),
            min: Size::ZERO,
            max: Size::ZERO,
            bounds: Rect::ZERO,
            validated: 0,
        }
    }

    pub(crate) fn min_width(mut self, min_width: f64) -> Self {
        self.min.width = min_width;
        self
    }

    pub(crate) fn min_height(mut self, min_height: f64) -> Self {
        self.min.height = min_height;
        self
    }

    pub(crate) fn max_width(mut self, max_width: f64) -> Self {
        self.max.width = max_width;
        self
    }

    pub(crate) fn max_height(mut self, max_height: f64) -> Self {
        self.max.height = max_height;
        self
    }

    pub(crate) fn bounds(&self) -> Rect {
        self.bounds
    }

    pub(crate) fn validated(&self) -> usize {
        self.validated
    }
}

impl FlowElement for TestBox {
    fn size(&self) -> Size {
        self.bounds.size()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn preferred_width(&self) -> f64 {
        self.pref.width
    }

    fn preferred_height(&self) -> f64 {
        self.pref.height
    }

    fn min_width(&self) -> f64 {
        self.min.width
    }

    fn min_height(&self) -> f64 {
        self.min.height
    }

    fn max_width(&self) -> f64 {
        self.max.width
    }

    fn max_height(&self) -> f64 {
        self.max.height
    }

    fn validate(&mut self) {
        self.validated += 1;
    }
}

/// An element with no layout capability: it implements only the required
/// methods, so its preferred size falls back to its current size.
pub(crate) struct Plain {
    bounds: Rect,
}

impl Plain {
    pub(crate) fn new(width: f64, height: f64) -> Plain {
        Plain {
            bounds: Size::new(width, height).to_rect(),
        }
    }

    pub(crate) fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl FlowElement for Plain {
    fn size(&self) -> Size {
        self.bounds.size()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

pub(crate) fn boxes(sizes: &[(f64, f64)]) -> Vec<TestBox> {
    sizes.iter().map(|&(w, h)| TestBox::new(w, h)).collect()
}

pub(crate) fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin_size(Point::new(x, y), Size::new(width, height))
}
