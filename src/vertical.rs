// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! A group that lays out its children top to bottom, with optional wrapping.

use tracing::{trace, warn};

use crate::kurbo::{Insets, Size};
use crate::util::{bounds, child_pref, directed};
use crate::{Align, FlowElement};

/// The metrics of one wrapped column, in child-traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Column {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// The transpose of [`HorizontalFlow`]: children are stacked top to bottom,
/// optionally wrapping into columns that advance left to right.
///
/// The preferred height is the sum of the children's preferred heights plus
/// spacing and padding; the preferred width is the largest preferred width
/// of any child plus padding. Both are different when [`wrap`] is enabled.
/// `fill` and `expand` operate on widths, [`column_align`] takes the place
/// of row alignment, and [`wrap_space`] is the horizontal gap between
/// consecutive columns. Everything else — host-owned children, explicit
/// [`invalidate`], y-up coordinates — matches the horizontal group.
///
/// [`HorizontalFlow`]: crate::HorizontalFlow
/// [`wrap`]: VerticalFlow::wrap
/// [`column_align`]: VerticalFlow::column_align
/// [`wrap_space`]: VerticalFlow::wrap_space
/// [`invalidate`]: VerticalFlow::invalidate
pub struct VerticalFlow {
    size: Size,
    pref_width: f64,
    pref_height: f64,
    last_pref_width: f64,
    size_invalid: bool,
    cols: Vec<Column>,

    align: Align,
    column_align: Align,
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

impl VerticalFlow {
    /// Create a group with the default configuration: children top-aligned,
    /// columns centered, no spacing or padding, geometry rounded to
    /// integers.
    pub fn new() -> VerticalFlow {
        VerticalFlow {
            size: Size::ZERO,
            pref_width: 0.0,
            pref_height: 0.0,
            last_pref_width: 0.0,
            size_invalid: true,
            cols: Vec::new(),
            align: Align::TOP,
            column_align: Align::empty(),
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
    /// [`set_size`]: VerticalFlow::set_size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Mark the cached preferred size and column metrics stale.
    ///
    /// The host must call this whenever children are added, removed or
    /// reordered, or when a child's size hints change.
    pub fn invalidate(&mut self) {
        self.size_invalid = true;
    }

    /// The group's preferred width.
    ///
    /// When wrapping is enabled this depends on the container height, so the
    /// host should call [`set_size`] first; see [`layout`] for the two-pass
    /// feedback.
    ///
    /// [`set_size`]: VerticalFlow::set_size
    /// [`layout`]: VerticalFlow::layout
    pub fn pref_width<E: FlowElement>(&mut self, children: &[E]) -> f64 {
        if self.size_invalid {
            self.compute_size(children);
        }
        self.pref_width
    }

    /// The group's preferred height.
    ///
    /// Always 0 when wrapping is enabled: a wrapping group expects something
    /// external to decide its height, and reports no preference of its own.
    pub fn pref_height<E: FlowElement>(&mut self, children: &[E]) -> f64 {
        if self.wrap {
            return 0.0;
        }
        if self.size_invalid {
            self.compute_size(children);
        }
        self.pref_height
    }

    /// Assign bounds to every child, recomputing the cached size first if it
    /// is stale. Each child receives [`FlowElement::validate`] after its
    /// bounds are written.
    ///
    /// Returns `true` when the wrapped preferred width changed since the
    /// previous pass, in which case the host must lay out this group's
    /// parent again. Always `false` when wrapping is disabled.
    pub fn layout<E: FlowElement>(&mut self, children: &mut [E]) -> bool {
        if self.size_invalid {
            self.compute_size(children);
        }
        if self.wrap {
            self.layout_wrapped(children)
        } else {
            self.layout_single_column(children);
            false
        }
    }

    fn compute_size<E: FlowElement>(&mut self, children: &[E]) {
        self.size_invalid = false;
        let n = children.len();
        self.pref_width = 0.0;
        if self.wrap {
            self.pref_height = 0.0;
            self.cols.clear();
            let pad = self.pad_top + self.pad_bottom;
            let group_height = self.size.height - pad;
            if n > 0 && group_height <= 0.0 {
                warn!("wrapping within a group of height {}; every child gets its own column", self.size.height);
            }
            let (mut y, mut x, mut column_width) = (0.0f64, 0.0f64, 0.0f64);
            for child in directed(children.iter(), self.reverse) {
                let (width, height) = child_pref(child);
                let mut incr_y = height + if y > 0.0 { self.space } else { 0.0 };
                if y + incr_y > group_height && y > 0.0 {
                    self.cols.push(Column {
                        width: column_width,
                        height: y,
                    });
                    self.pref_height = self.pref_height.max(y + pad);
                    if x > 0.0 {
                        x += self.wrap_space;
                    }
                    x += column_width;
                    column_width = 0.0;
                    y = 0.0;
                    incr_y = height;
                }
                y += incr_y;
                column_width = column_width.max(width);
            }
            // the last column is flushed unconditionally, so there is always
            // at least one column entry
            self.cols.push(Column {
                width: column_width,
                height: y,
            });
            self.pref_height = self.pref_height.max(y + pad);
            if x > 0.0 {
                x += self.wrap_space;
            }
            self.pref_width = self.pref_width.max(x + column_width);
        } else {
            // the spacing term must not go negative when there are no children
            self.pref_height =
                self.pad_top + self.pad_bottom + self.space * n.saturating_sub(1) as f64;
            for child in children {
                let (width, height) = child_pref(child);
                self.pref_height += height;
                self.pref_width = self.pref_width.max(width);
            }
        }
        self.pref_width += self.pad_left + self.pad_right;
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

    fn layout_single_column<E: FlowElement>(&mut self, children: &mut [E]) {
        let column_width = (if self.expand {
            self.size.width
        } else {
            self.pref_width
        }) - self.pad_left
            - self.pad_right;

        let start_x = self.pad_left
            + self
                .align
                .x_offset(self.size.width - self.pad_left - self.pad_right - column_width);
        // `top` is the upper edge of the next child; children descend from it
        let mut top = self.pref_height - self.pad_top
            + self.align.y_offset(self.size.height - self.pref_height);

        for child in directed(children.iter_mut(), self.reverse) {
            let (_, height) = child_pref(&*child);
            let width = self.child_width(&*child, column_width);
            let x = start_x + self.column_align.x_offset(column_width - width);
            let y = top - height;
            child.set_bounds(bounds(self.round, x, y, width, height));
            top -= height + self.space;
            child.validate();
        }
    }

    fn layout_wrapped<E: FlowElement>(&mut self, children: &mut [E]) -> bool {
        // two-pass feedback, as in the horizontal group but on the width
        let mut parent_relayout = false;
        if self.pref_width != self.last_pref_width {
            trace!(
                "wrapped preferred width changed: {} -> {}",
                self.last_pref_width,
                self.pref_width
            );
            self.last_pref_width = self.pref_width;
            parent_relayout = true;
        }

        let max_height = self.pref_height - self.pad_top - self.pad_bottom;
        // same break test as compute_size, so each child lands in the column
        // whose metrics were reserved for it
        let group_height = self.size.height - self.pad_top - self.pad_bottom;

        let mut col_x = self.pad_left + self.align.x_offset(self.size.width - self.pref_width);
        let y_start = self.pref_height - self.pad_top
            + self.align.y_offset(self.size.height - self.pref_height);

        let mut top = 0.0;
        let mut col_y = 0.0;
        let mut col_width = 0.0;
        let mut first = true;
        let mut c = 0;
        for child in directed(children.iter_mut(), self.reverse) {
            let (_, height) = child_pref(&*child);
            let incr_y = height + if col_y > 0.0 { self.space } else { 0.0 };
            if first || (col_y + incr_y > group_height && col_y > 0.0) {
                debug_assert!(c < self.cols.len());
                let col = self.cols[c];
                if c > 0 {
                    col_x += col_width + self.wrap_space;
                }
                col_width = col.width;
                top = y_start - self.column_align.y_offset_down(max_height - col.height);
                c += 1;
                col_y = height;
                first = false;
            } else {
                col_y += incr_y;
            }

            let width = self.child_width(&*child, col_width);
            let x = col_x + self.column_align.x_offset(col_width - width);
            let y = top - height;
            child.set_bounds(bounds(self.round, x, y, width, height));
            top -= height + self.space;
            child.validate();
        }

        parent_relayout
    }

    /// A child's assigned width: its preferred width, overridden by
    /// `column_width × fill` when fill is set, clamped up to the child's
    /// minimum and down to its maximum (a maximum of 0 is unbounded).
    fn child_width<E: FlowElement + ?Sized>(&self, child: &E, column_width: f64) -> f64 {
        let mut width = if self.fill > 0.0 {
            column_width * self.fill
        } else {
            child.preferred_width()
        };
        width = width.max(child.min_width());
        let max_width = child.max_width();
        if max_width > 0.0 && width > max_width {
            width = max_width;
        }
        width
    }

    #[cfg(test)]
    pub(crate) fn column_metrics(&self) -> &[Column] {
        &self.cols
    }
}

impl Default for VerticalFlow {
    fn default() -> Self {
        VerticalFlow::new()
    }
}

/// Configuration. Builder-style methods for assembling a group in one
/// expression, with `set_` twins for mutation between layout passes.
/// Setters that affect the computed size mark the cache invalid.
impl VerticalFlow {
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

    /// Set the vertical space between children.
    pub fn set_space(&mut self, space: f64) {
        self.space = space;
        self.invalidate();
    }

    /// Builder-style method for setting the space between wrapped columns.
    pub fn wrap_space(mut self, wrap_space: f64) -> Self {
        self.set_wrap_space(wrap_space);
        self
    }

    /// Set the horizontal space between columns when wrapping is enabled.
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

    /// Set the fraction of the column width children are stretched to.
    /// 0 (the default) uses each child's preferred width.
    pub fn set_fill(&mut self, fill: f64) {
        self.fill = fill;
    }

    /// Builder-style method for setting expand.
    pub fn expand(mut self, expand: bool) -> Self {
        self.set_expand(expand);
        self
    }

    /// When true and wrapping is disabled, the single column takes up the
    /// entire container width.
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

    /// If false (the default), children are arranged in a single column. If
    /// true, children wrap into columns using the container height, and the
    /// group's preferred height is 0: something external is expected to set
    /// the group's height.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
        self.invalidate();
    }

    /// Builder-style method for setting the alignment of children within
    /// each column.
    pub fn column_align(mut self, column_align: Align) -> Self {
        self.set_column_align(column_align);
        self
    }

    /// Set the alignment of children within each column. The horizontal bits
    /// place each child within its column's width; the vertical bits place
    /// each wrapped column within the tallest column. Defaults to centered.
    pub fn set_column_align(&mut self, column_align: Align) {
        self.column_align = column_align;
    }

    /// Center children within each column; clears any other column
    /// alignment.
    pub fn column_center(mut self) -> Self {
        self.column_align = Align::CENTER;
        self
    }

    /// Add top column alignment and clear bottom.
    pub fn column_top(mut self) -> Self {
        self.column_align.insert(Align::TOP);
        self.column_align.remove(Align::BOTTOM);
        self
    }

    /// Add bottom column alignment and clear top.
    pub fn column_bottom(mut self) -> Self {
        self.column_align.insert(Align::BOTTOM);
        self.column_align.remove(Align::TOP);
        self
    }

    /// Add left column alignment and clear right.
    pub fn column_left(mut self) -> Self {
        self.column_align.insert(Align::LEFT);
        self.column_align.remove(Align::RIGHT);
        self
    }

    /// Add right column alignment and clear left.
    pub fn column_right(mut self) -> Self {
        self.column_align.insert(Align::RIGHT);
        self.column_align.remove(Align::LEFT);
        self
    }
}
