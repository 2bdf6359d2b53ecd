// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! A wrapping flow-layout engine for scene-graph UI containers.
//!
//! The host scene graph owns the children; this crate only reads their size
//! hints (preferred, minimum, maximum) and writes their bounds. A
//! [`HorizontalFlow`] arranges children side by side, optionally wrapping
//! them into rows when they exceed the container width; [`VerticalFlow`] is
//! its transpose, stacking children top to bottom and wrapping into columns.
//! This can be easier than a constraint table when elements need to be
//! inserted into or removed from the middle of the group.
//!
//! Geometry is expressed in a y-up coordinate space with the origin at the
//! container's bottom-left, matching the scene graphs these groups are built
//! for. Preferred sizes and row metrics are cached and recomputed lazily;
//! the host signals child-set changes with `invalidate()`.
//!
//! # Example
//!
//! ```
//! use rowflow::{HorizontalFlow, Size, Spacer};
//!
//! let mut group = HorizontalFlow::new().space(10.0);
//! group.set_size(Size::new(300.0, 40.0));
//!
//! let mut children = vec![
//!     Spacer::new(Size::new(50.0, 20.0)),
//!     Spacer::new(Size::new(50.0, 20.0)),
//! ];
//! assert_eq!(group.pref_width(&children), 110.0);
//!
//! group.layout(&mut children);
//! assert_eq!(children[1].bounds().origin().x, 60.0);
//! ```

#![deny(unsafe_code)]

pub use kurbo;

mod align;
mod element;
mod horizontal;
mod util;
mod vertical;

pub use align::Align;
pub use element::{FlowElement, Spacer};
pub use horizontal::HorizontalFlow;
pub use vertical::VerticalFlow;

// Types from kurbo that are required by the public API.
pub use kurbo::{Insets, Point, Rect, Size};

#[cfg(test)]
mod tests;
