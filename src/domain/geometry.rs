// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry for visibility observation.
//!
//! Rectangles use page pixels with `y` growing downwards. A [`RootMargin`]
//! grows (positive) or shrinks (negative) the observation root the way a
//! CSS `rootMargin` does.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Returns the overlap of two rectangles, edges included.
    ///
    /// Rectangles that only touch produce a zero-area intersection rather
    /// than `None`, matching how browsers treat edge-adjacent targets.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Applies a root margin, never producing negative extents.
    #[must_use]
    pub fn expand(&self, margin: RootMargin) -> Rect {
        Rect::new(
            self.x - margin.left,
            self.y - margin.top,
            (self.width + margin.left + margin.right).max(0.0),
            (self.height + margin.top + margin.bottom).max(0.0),
        )
    }
}

/// Margin applied around the observation root, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Margin affecting only the bottom edge.
    #[must_use]
    pub const fn bottom(px: f64) -> Self {
        RootMargin {
            top: 0.0,
            right: 0.0,
            bottom: px,
            left: 0.0,
        }
    }
}

/// Fraction of `target` lying inside `root`, in `0.0..=1.0`.
///
/// A zero-area target counts as fully visible when it touches the root.
#[must_use]
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f64 {
    let Some(overlap) = target.intersection(root) else {
        return 0.0;
    };

    let area = target.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn fully_visible_target_has_ratio_one() {
        let target = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert_relative_eq!(intersection_ratio(&target, &VIEWPORT), 1.0);
    }

    #[test]
    fn half_visible_target_has_ratio_half() {
        let target = Rect::new(0.0, 750.0, 100.0, 100.0);
        assert_relative_eq!(intersection_ratio(&target, &VIEWPORT), 0.5);
    }

    #[test]
    fn target_below_viewport_has_ratio_zero() {
        let target = Rect::new(0.0, 900.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&target, &VIEWPORT), 0.0);
    }

    #[test]
    fn negative_bottom_margin_shrinks_root() {
        let root = VIEWPORT.expand(RootMargin::bottom(-50.0));
        assert_relative_eq!(root.height, 750.0);

        // 40px of a 100px target inside the viewport, none inside the shrunk root
        let target = Rect::new(0.0, 760.0, 100.0, 100.0);
        assert_relative_eq!(intersection_ratio(&target, &VIEWPORT), 0.4);
        assert_eq!(intersection_ratio(&target, &root), 0.0);
    }

    #[test]
    fn zero_area_target_touching_root_counts_as_visible() {
        let target = Rect::new(10.0, 800.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&target, &VIEWPORT), 1.0);
    }

    #[test]
    fn oversized_margin_never_produces_negative_extent() {
        let root = VIEWPORT.expand(RootMargin::bottom(-5000.0));
        assert_eq!(root.height, 0.0);
        assert_eq!(root.area(), 0.0);
    }
}
