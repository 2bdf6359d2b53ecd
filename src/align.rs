// Copyright 2025 the Rowflow Authors
// SPDX-License-Identifier: Apache-2.0

//! Bitmask alignment for groups and rows.

use bitflags::bitflags;

bitflags! {
    /// Alignment of content within a containing box.
    ///
    /// Alignment is a bitmask so a single value can carry both a horizontal
    /// and a vertical component, e.g. `Align::TOP | Align::LEFT`. An axis
    /// with neither of its bits set is centered on that axis; an empty
    /// `Align` centers on both. When both bits of one axis are set, `RIGHT`
    /// wins over `LEFT` and `BOTTOM` wins over `TOP`; the convenience
    /// methods on the groups ([`top`] and friends) clear the opposite bit so
    /// this only arises with hand-built masks.
    ///
    /// [`top`]: crate::HorizontalFlow::top
    pub struct Align: u32 {
        const CENTER = 1 << 0;
        const TOP = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const RIGHT = 1 << 4;
    }
}

impl Align {
    /// Horizontal offset of content within `extra` leftover space.
    pub(crate) fn x_offset(self, extra: f64) -> f64 {
        if self.contains(Align::RIGHT) {
            extra
        } else if self.contains(Align::LEFT) {
            0.0
        } else {
            // center
            extra / 2.0
        }
    }

    /// Vertical offset of content within `extra` leftover space, measured
    /// from the bottom (the scene graph is y-up).
    pub(crate) fn y_offset(self, extra: f64) -> f64 {
        if self.contains(Align::BOTTOM) {
            0.0
        } else if self.contains(Align::TOP) {
            extra
        } else {
            // center
            extra / 2.0
        }
    }

    /// Vertical offset measured from the top, for top-down placement.
    pub(crate) fn y_offset_down(self, extra: f64) -> f64 {
        extra - self.y_offset(extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_offsets() {
        assert_eq!(Align::LEFT.x_offset(10.0), 0.0);
        assert_eq!(Align::RIGHT.x_offset(10.0), 10.0);
        assert_eq!(Align::CENTER.x_offset(10.0), 5.0);
        // no horizontal bits means centered, whatever the vertical bits say
        assert_eq!(Align::TOP.x_offset(10.0), 5.0);
        assert_eq!(Align::empty().x_offset(10.0), 5.0);
    }

    #[test]
    fn y_offsets() {
        assert_eq!(Align::BOTTOM.y_offset(10.0), 0.0);
        assert_eq!(Align::TOP.y_offset(10.0), 10.0);
        assert_eq!(Align::LEFT.y_offset(10.0), 5.0);
        assert_eq!(Align::TOP.y_offset_down(10.0), 0.0);
        assert_eq!(Align::BOTTOM.y_offset_down(10.0), 10.0);
        assert_eq!(Align::CENTER.y_offset_down(10.0), 5.0);
    }

    #[test]
    fn conflicting_bits() {
        assert_eq!((Align::LEFT | Align::RIGHT).x_offset(10.0), 10.0);
        assert_eq!((Align::TOP | Align::BOTTOM).y_offset(10.0), 0.0);
    }
}
