// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! A group that lays out its children side by side, with optional wrapping.

use tracing::{trace, warn};

use crate::kurbo::{Insets, Size};
use crate::util::{bounds, child_pref, directed};
use crate::{Align, FlowElement};

/// The metrics of one wrapped row, in child-traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Row {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// A flow-layout group that arranges its children side by side horizontally,
/// optionally wrapping them into rows.
///
/// The preferred width is the sum of the children's preferred widths plus
/// spacing and padding; the preferred height is the largest preferred height
/// of any child plus padding. Both are different when [`wrap`] is enabled.
///
/// The group never owns its children. The host passes the ordered child
/// slice to [`pref_width`], [`pref_height`] and [`layout`], tells the group
/// its current size with [`set_size`], and signals child-set changes with
/// [`invalidate`]. Geometry is expressed in the scene graph's y-up
/// coordinate space, origin at the container's bottom-left.
///
/// Children are sized from their [preferred width], so an element reporting a
/// preferred width of zero is given a width of zero.
///
/// [`wrap`]: HorizontalFlow::wrap
/// [`pref_width`]: HorizontalFlow::pref_width
/// [`pref_height`]: HorizontalFlow::pref_height
/// [`layout`]: HorizontalFlow::layout
/// [`set_size`]: HorizontalFlow::set_size
/// [`invalidate`]: HorizontalFlow::invalidate
/// [preferred width]: FlowElement::preferred_width
pub struct HorizontalFlow {
    size: Size,
    pref_width: f64,
    pref_height: f64,
    last_pref_height: f64,
    size_invalid: bool,
    rows: Vec<Row>,

    align: Align,
    row_align: Align,
    reverse: bool,
    round: bool,
    wrap: bool,
    expand: bool,
    space: f64,
    wrap_space: f64,
    fill: f64,
    pad_top: f64,
    pad_left: f64,
    pad_bottom: f64,
    pad_right: f64,
}

impl HorizontalFlow {
    /// Create a group with the default configuration: children left-aligned,
    /// rows centered, no spacing or padding, geometry rounded to integers.
    pub fn new() -> HorizontalFlow {
        HorizontalFlow {
            size: Size::ZERO,
            pref_width: 0.0,
            pref_height: 0.0,
            last_pref_height: 0.0,
            size_invalid: true,
            rows: Vec::new(),
            align: Align::LEFT,
            row_align: Align::empty(),
            reverse: false,
            round: true,
            wrap: false,
            expand: false,
            space: 0.0,
            wrap_space: 0.0,
            fill: 0.0,
            pad_top: 0.0,
            pad_left: 0.0,
            pad_bottom: 0.0,
            pad_right: 0.0,
        }
    }

    /// Set the container's current size, as assigned by the host.
    ///
    /// Marks the cached size invalid when the size actually changes.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative or not finite.
    pub fn set_size(&mut self, size: Size) {
        assert!(
            size.width.is_finite() && size.height.is_finite(),
            "container size must be finite, got {:?}",
            size
        );
        assert!(
            size.width >= 0.0 && size.height >= 0.0,
            "container size must be non-negative, got {:?}",
            size
        );
        if size != self.size {
            self.size = size;
            self.invalidate();
        }
    }

    /// The container size most recently passed to [`set_size`].
    ///
    /// [`set_size`]: HorizontalFlow::set_size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Mark the cached preferred size and row metrics stale.
    ///
    /// The host must call this whenever children are added, removed or
    /// reordered, or when a child's size hints change. Configuration setters
    /// that affect sizing call it automatically; the next query or layout
    /// recomputes lazily.
    pub fn invalidate(&mut self) {
        self.size_invalid = true;
    }

    /// The group's preferred width.
    ///
    /// Always 0 when wrapping is enabled: a wrapping group expects something
    /// external to decide its width, and reports no preference of its own.
    pub fn pref_width<E: FlowElement>(&mut self, children: &[E]) -> f64 {
        if self.wrap {
            return 0.0;
        }
        if self.size_invalid {
            self.compute_size(children);
        }
        self.pref_width
    }

    /// The group's preferred height.
    ///
    /// When wrapping is enabled this depends on the container width, so the
    /// host should call [`set_size`] first. A parent may need to lay out
    /// twice: once to fix the group's width and a second time to react to
    /// the resulting height; see [`layout`].
    ///
    /// [`set_size`]: HorizontalFlow::set_size
    /// [`layout`]: HorizontalFlow::layout
    pub fn pref_height<E: FlowElement>(&mut self, children: &[E]) -> f64 {
        if self.size_invalid {
            self.compute_size(children);
        }
        self.pref_height
    }

    /// Assign bounds to every child, recomputing the cached size first if it
    /// is stale. Each child receives [`FlowElement::validate`] after its
    /// bounds are written.
    ///
    /// Returns `true` when the wrapped preferred height changed since the
    /// previous pass, in which case the host must lay out this group's
    /// parent again (the width chosen by the parent produced a new height).
    /// Always `false` when wrapping is disabled.
    pub fn layout<E: FlowElement>(&mut self, children: &mut [E]) -> bool {
        if self.size_invalid {
            self.compute_size(children);
        }
        if self.wrap {
            self.layout_wrapped(children)
        } else {
            self.layout_single_row(children);
            false
        }
    }

    fn compute_size<E: FlowElement>(&mut self, children: &[E]) {
        self.size_invalid = false;
        let n = children.len();
        self.pref_height = 0.0;
        if self.wrap {
            self.pref_width = 0.0;
            self.rows.clear();
            let pad = self.pad_left + self.pad_right;
            let group_width = self.size.width - pad;
            if n > 0 && group_width <= 0.0 {
                warn!("wrapping within a group of width {}; every child gets its own row", self.size.width);
            }
            let (mut x, mut y, mut row_height) = (0.0f64, 0.0f64, 0.0f64);
            for child in directed(children.iter(), self.reverse) {
                let (width, height) = child_pref(child);
                let mut incr_x = width + if x > 0.0 { self.space } else { 0.0 };
                if x + incr_x > group_width && x > 0.0 {
                    self.rows.push(Row {
                        width: x,
                        height: row_height,
                    });
                    self.pref_width = self.pref_width.max(x + pad);
                    if y > 0.0 {
                        y += self.wrap_space;
                    }
                    y += row_height;
                    row_height = 0.0;
                    x = 0.0;
                    incr_x = width;
                }
                x += incr_x;
                row_height = row_height.max(height);
            }
            // the last row is flushed unconditionally, so there is always at
            // least one row entry
            self.rows.push(Row {
                width: x,
                height: row_height,
            });
            self.pref_width = self.pref_width.max(x + pad);
            if y > 0.0 {
                y += self.wrap_space;
            }
            self.pref_height = self.pref_height.max(y + row_height);
        } else {
            // the spacing term must not go negative when there are no children
            self.pref_width =
                self.pad_left + self.pad_right + self.space * n.saturating_sub(1) as f64;
            for child in children {
                let (width, height) = child_pref(child);
                self.pref_width += width;
                self.pref_height = self.pref_height.max(height);
            }
        }
        self.pref_height += self.pad_top + self.pad_bottom;
        if self.round {
            self.pref_width = self.pref_width.round();
            self.pref_height = self.pref_height.round();
        }
        trace!(
            "computed preferred size {}x{}",
            self.pref_width,
            self.pref_height
        );
    }

    fn layout_single_row<E: FlowElement>(&mut self, children: &mut [E]) {
        let row_height = (if self.expand {
            self.size.height
        } else {
            self.pref_height
        }) - self.pad_top
            - self.pad_bottom;

        let mut x = self.pad_left + self.align.x_offset(self.size.width - self.pref_width);
        let start_y = self.pad_bottom
            + self
                .align
                .y_offset(self.size.height - self.pad_bottom - self.pad_top - row_height);

        for child in directed(children.iter_mut(), self.reverse) {
            let (width, _) = child_pref(&*child);
            let height = self.child_height(&*child, row_height);
            let y = start_y + self.row_align.y_offset(row_height - height);
            child.set_bounds(bounds(self.round, x, y, width, height));
            x += width + self.space;
            child.validate();
        }
    }

    fn layout_wrapped<E: FlowElement>(&mut self, children: &mut [E]) -> bool {
        // wrapped layouts may need two passes: one for the parent to fix our
        // width, one for it to react to the height that width produced
        let mut parent_relayout = false;
        if self.pref_height != self.last_pref_height {
            trace!(
                "wrapped preferred height changed: {} -> {}",
                self.last_pref_height,
                self.pref_height
            );
            self.last_pref_height = self.pref_height;
            parent_relayout = true;
        }

        let max_width = self.pref_width - self.pad_left - self.pad_right;
        // same break test as compute_size, so each child lands in the row
        // whose metrics were reserved for it
        let group_width = self.size.width - self.pad_left - self.pad_right;

        let mut row_y = self.pref_height - self.pad_top
            + self.align.y_offset(self.size.height - self.pref_height);
        let x_start = self.pad_left + self.align.x_offset(self.size.width - self.pref_width);

        let mut x = 0.0;
        let mut row_x = 0.0;
        let mut row_height = 0.0;
        let mut first = true;
        let mut r = 0;
        for child in directed(children.iter_mut(), self.reverse) {
            let (width, _) = child_pref(&*child);
            let incr_x = width + if row_x > 0.0 { self.space } else { 0.0 };
            if first || (row_x + incr_x > group_width && row_x > 0.0) {
                debug_assert!(r < self.rows.len());
                let row = self.rows[r];
                x = x_start + self.row_align.x_offset(max_width - row.width);
                row_height = row.height;
                if r > 0 {
                    row_y -= self.wrap_space;
                }
                row_y -= row_height;
                r += 1;
                row_x = width;
                first = false;
            } else {
                row_x += incr_x;
            }

            let height = self.child_height(&*child, row_height);
            let y = row_y + self.row_align.y_offset(row_height - height);
            child.set_bounds(bounds(self.round, x, y, width, height));
            x += width + self.space;
            child.validate();
        }

        parent_relayout
    }

    /// A child's assigned height: its preferred height, overridden by
    /// `row_height × fill` when fill is set, clamped up to the child's
    /// minimum and down to its maximum (a maximum of 0 is unbounded).
    fn child_height<E: FlowElement + ?Sized>(&self, child: &E, row_height: f64) -> f64 {
        let mut height = if self.fill > 0.0 {
            row_height * self.fill
        } else {
            child.preferred_height()
        };
        height = height.max(child.min_height());
        let max_height = child.max_height();
        if max_height > 0.0 && height > max_height {
            height = max_height;
        }
        height
    }

    #[cfg(test)]
    pub(crate) fn row_metrics(&self) -> &[Row] {
        &self.rows
    }
}

impl Default for HorizontalFlow {
    fn default() -> Self {
        HorizontalFlow::new()
    }
}

/// Configuration. Builder-style methods for assembling a group in one
/// expression, with `set_` twins for mutation between layout passes.
/// Setters that affect the computed size mark the cache invalid.
impl HorizontalFlow {
    /// Builder-style method for setting whether geometry is rounded.
    pub fn round(mut self, round: bool) -> Self {
        self.set_round(round);
        self
    }

    /// If true (the default), assigned positions and sizes are rounded to
    /// integers.
    pub fn set_round(&mut self, round: bool) {
        self.round = round;
        self.invalidate();
    }

    /// Builder-style method for setting reverse traversal.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.set_reverse(reverse);
        self
    }

    /// If true, children are laid out last to first.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
        self.invalidate();
    }

    /// Builder-style method for setting the space between children.
    pub fn space(mut self, space: f64) -> Self {
        self.set_space(space);
        self
    }

    /// Set the horizontal space between children.
    pub fn set_space(&mut self, space: f64) {
        self.space = space;
        self.invalidate();
    }

    /// Builder-style method for setting the space between wrapped rows.
    pub fn wrap_space(mut self, wrap_space: f64) -> Self {
        self.set_wrap_space(wrap_space);
        self
    }

    /// Set the vertical space between rows when wrapping is enabled.
    pub fn set_wrap_space(&mut self, wrap_space: f64) {
        self.wrap_space = wrap_space;
        self.invalidate();
    }

    /// Builder-style method for setting padding.
    ///
    /// Accepts anything that converts to [`Insets`]: an `f64` for uniform
    /// padding, or a `(left, top, right, bottom)` tuple.
    pub fn padding(mut self, insets: impl Into<Insets>) -> Self {
        self.set_padding(insets);
        self
    }

    /// Set the padding on all four sides.
    pub fn set_padding(&mut self, insets: impl Into<Insets>) {
        let insets = insets.into();
        self.pad_left = insets.x0;
        self.pad_top = insets.y0;
        self.pad_right = insets.x1;
        self.pad_bottom = insets.y1;
        self.invalidate();
    }

    /// Builder-style method for setting the alignment of the whole block of
    /// children within the container.
    pub fn align(mut self, align: Align) -> Self {
        self.set_align(align);
        self
    }

    /// Set the alignment of the whole block of children within the
    /// container. Any combination of [`Align`] bits.
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Center the block of children; clears any other alignment.
    pub fn center(mut self) -> Self {
        self.align = Align::CENTER;
        self
    }

    /// Add top alignment and clear bottom.
    pub fn top(mut self) -> Self {
        self.align.insert(Align::TOP);
        self.align.remove(Align::BOTTOM);
        self
    }

    /// Add bottom alignment and clear top.
    pub fn bottom(mut self) -> Self {
        self.align.insert(Align::BOTTOM);
        self.align.remove(Align::TOP);
        self
    }

    /// Add left alignment and clear right.
    pub fn left(mut self) -> Self {
        self.align.insert(Align::LEFT);
        self.align.remove(Align::RIGHT);
        self
    }

    /// Add right alignment and clear left.
    pub fn right(mut self) -> Self {
        self.align.insert(Align::RIGHT);
        self.align.remove(Align::LEFT);
        self
    }

    /// Builder-style method for setting the fill fraction.
    pub fn fill(mut self, fill: f64) -> Self {
        self.set_fill(fill);
        self
    }

    /// Set the fraction of the row height children are stretched to.
    /// 0 (the default) uses each child's preferred height.
    pub fn set_fill(&mut self, fill: f64) {
        self.fill = fill;
    }

    /// Builder-style method for setting expand.
    pub fn expand(mut self, expand: bool) -> Self {
        self.set_expand(expand);
        self
    }

    /// When true and wrapping is disabled, the single row takes up the
    /// entire container height.
    pub fn set_expand(&mut self, expand: bool) {
        self.expand = expand;
    }

    /// Sets fill to 1 and expand to true.
    pub fn grow(mut self) -> Self {
        self.fill = 1.0;
        self.expand = true;
        self
    }

    /// Builder-style method for enabling wrapping.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.set_wrap(wrap);
        self
    }

    /// If false (the default), children are arranged in a single row. If
    /// true, children wrap into rows using the container width, and the
    /// group's preferred width is 0: something external is expected to set
    /// the group's width.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
        self.invalidate();
    }

    /// Builder-style method for setting the alignment of children within
    /// each row.
    pub fn row_align(mut self, row_align: Align) -> Self {
        self.set_row_align(row_align);
        self
    }

    /// Set the alignment of children within each row. The vertical bits
    /// place each child within its row's height; the horizontal bits place
    /// each wrapped row within the widest row. Defaults to centered.
    pub fn set_row_align(&mut self, row_align: Align) {
        self.row_align = row_align;
    }

    /// Center children within each row; clears any other row alignment.
    pub fn row_center(mut self) -> Self {
        self.row_align = Align::CENTER;
        self
    }

    /// Add top row alignment and clear bottom.
    pub fn row_top(mut self) -> Self {
        self.row_align.insert(Align::TOP);
        self.row_align.remove(Align::BOTTOM);
        self
    }

    /// Add bottom row alignment and clear top.
    pub fn row_bottom(mut self) -> Self {
        self.row_align.insert(Align::BOTTOM);
        self.row_align.remove(Align::TOP);
        self
    }

    /// Add left row alignment and clear right.
    pub fn row_left(mut self) -> Self {
        self.row_align.insert(Align::LEFT);
        self.row_align.remove(Align::RIGHT);
        self
    }

    /// Add right row alignment and clear left.
    pub fn row_right(mut self) -> Self {
        self.row_align.insert(Align::RIGHT);
        self.row_align.remove(Align::LEFT);
        self
    }
}
