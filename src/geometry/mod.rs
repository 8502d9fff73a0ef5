//! Geometric primitives for region analysis.
//!
//! Rectangles are stored as four edges in image space: `left`/`right` along x,
//! `top`/`bottom` along y with y growing downwards. Coordinates may be
//! sub-pixel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs().hypot((self.y - other.y).abs())
    }
}

/// An axis-aligned rectangle in image space.
///
/// `right >= left` and `bottom >= top` are expected but not checked by
/// [`Rect::new`]; inverted bounds yield negative width, height and area.
/// Use [`Rect::try_new`] to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge x-coordinate
    pub left: f64,
    /// Right edge x-coordinate
    pub right: f64,
    /// Top edge y-coordinate
    pub top: f64,
    /// Bottom edge y-coordinate
    pub bottom: f64,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 100.0, 0.0, 50.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Create a rectangle, rejecting inverted bounds.
    ///
    /// Zero-sized rectangles are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Rect;
    ///
    /// assert!(Rect::try_new(0.0, 10.0, 0.0, 10.0).is_ok());
    /// assert!(Rect::try_new(10.0, 0.0, 0.0, 10.0).is_err());
    /// ```
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn try_new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self> {
        // Negated comparisons also reject NaN edges.
        if !(right >= left) || !(bottom >= top) {
            return Err(Error::InvalidGeometry {
                left,
                right,
                top,
                bottom,
            });
        }
        Ok(Self::new(left, right, top, bottom))
    }

    /// Width of the rectangle. May be fractional.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the rectangle. May be fractional.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Length of the perimeter around the rectangle.
    pub fn perimeter(&self) -> f64 {
        2.0 * self.height() + 2.0 * self.width()
    }

    /// Area of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 100.0, 0.0, 50.0);
    /// assert_eq!(rect.area(), 5000.0);
    /// ```
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Rect;
    ///
    /// let center = Rect::new(0.0, 100.0, 0.0, 50.0).center();
    /// assert_eq!(center.x, 50.0);
    /// assert_eq!(center.y, 25.0);
    /// ```
    pub fn center(&self) -> Point {
        Point {
            x: (self.left + self.right) / 2.0,
            y: (self.top + self.bottom) / 2.0,
        }
    }

    /// Coordinates of the pixel nearest to the center point.
    ///
    /// Halves round to the nearest even integer.
    pub fn center_px(&self) -> (i64, i64) {
        let center = self.center();
        (center.x.round_ties_even() as i64, center.y.round_ties_even() as i64)
    }

    /// Check whether `other` lies entirely within this rectangle.
    ///
    /// Edges are inclusive, so every rectangle contains itself.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Check whether this rectangle overlaps `other`.
    ///
    /// The shared area must be strictly positive on both axes: rectangles that
    /// only touch along an edge or a corner do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    /// let b = Rect::new(5.0, 15.0, 0.0, 10.0);
    /// let c = Rect::new(10.0, 20.0, 0.0, 10.0);
    ///
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right.min(other.right) > self.left.max(other.left)
            && self.bottom.min(other.bottom) > self.top.max(other.top)
    }

    /// Distance between the centers of this rectangle and `other`.
    ///
    /// This is a centroid distance, not the gap between nearest edges, so two
    /// overlapping rectangles can still be separated.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 10.0, 0.0, 10.0);
    /// let b = Rect::new(10.0, 20.0, 0.0, 10.0);
    /// assert_eq!(a.separation(&b), 10.0);
    /// ```
    pub fn separation(&self, other: &Rect) -> f64 {
        self.center().distance(&other.center())
    }

    /// Writes the `<Name (left, right, top, bottom)>` form shared by every
    /// region type.
    pub(crate) fn fmt_tagged(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} ({}, {}, {}, {})>",
            name, self.left, self.right, self.top, self.bottom
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tagged("Rect", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(&p2), 5.0);
        assert_eq!(p2.distance(&p1), 5.0);
    }

    #[test]
    fn test_rect_dimensions() {
        let r = Rect::new(5.0, 105.0, 10.0, 60.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.perimeter(), 300.0);
        assert_eq!(r.area(), 5000.0);
    }

    #[test]
    fn test_degenerate_rect() {
        let r = Rect::new(3.0, 3.0, 7.0, 7.0);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.area(), 0.0);
        assert_eq!(r.perimeter(), 0.0);
        assert!(r.contains(&r));
        assert!(!r.overlaps(&r));
    }

    #[test]
    fn test_inverted_rect_propagates() {
        let r = Rect::new(10.0, 0.0, 0.0, 5.0);
        assert_eq!(r.width(), -10.0);
        assert_eq!(r.area(), -50.0);
    }

    #[test]
    fn test_try_new_rejects_inverted_bounds() {
        assert!(matches!(
            Rect::try_new(0.0, 10.0, 5.0, 1.0),
            Err(Error::InvalidGeometry { top, bottom, .. }) if top == 5.0 && bottom == 1.0
        ));
        assert!(Rect::try_new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert_eq!(Rect::try_new(1.0, 1.0, 2.0, 2.0).unwrap(), Rect::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(0.0, 5.0, 0.0, 3.0);
        assert_eq!(r.center(), Point::new(2.5, 1.5));
    }

    #[test]
    fn test_center_px_rounds_half_to_even() {
        assert_eq!(Rect::new(0.0, 5.0, 0.0, 3.0).center_px(), (2, 2));
        assert_eq!(Rect::new(0.0, 7.0, 0.0, 1.0).center_px(), (4, 0));
        assert_eq!(Rect::new(0.0, 5.4, 0.0, 3.4).center_px(), (3, 2));
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0.0, 100.0, 0.0, 100.0);
        let inner = Rect::new(10.0, 20.0, 10.0, 20.0);
        let straddling = Rect::new(90.0, 110.0, 10.0, 20.0);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&straddling));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0.0, 10.0, 0.0, 10.0);
        let touching = Rect::new(10.0, 20.0, 0.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 20.0);
        let corner = Rect::new(10.0, 20.0, 10.0, 20.0);
        let overlapping = Rect::new(5.0, 15.0, 0.0, 10.0);

        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
    }

    #[test]
    fn test_separation() {
        let a = Rect::new(0.0, 10.0, 0.0, 10.0);
        let b = Rect::new(10.0, 20.0, 0.0, 10.0);
        let c = Rect::new(3.0, 13.0, 4.0, 14.0);

        assert_eq!(a.separation(&b), 10.0);
        assert_eq!(a.separation(&a), 0.0);
        assert_eq!(a.separation(&c), 5.0);
        // Overlapping rectangles still have a centroid distance.
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_display() {
        let r = Rect::new(1.0, 2.5, 3.0, 4.0);
        assert_eq!(r.to_string(), "<Rect (1, 2.5, 3, 4)>");
    }
}
