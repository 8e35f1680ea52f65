use std::fmt;

use approx::{AbsDiffEq, RelativeEq};
use geobound_core::{GeoError, Result, Tolerance, Validate};
use serde::{Deserialize, Serialize};

use crate::{Point, Polygon, Ring, Shape, ShapeKind};

/// An enclosed box defined by its minimum and maximum corners.
///
/// The zero value (`Bound::default()`) is the single point at the origin,
/// not an empty set. A bound whose `min` exceeds its `max` on some axis is
/// degenerate and reported by [`Bound::is_empty`]. The anti-meridian is not
/// handled: a box is always the region between `min` and `max` on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: Point,
    pub max: Point,
}

impl Bound {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates a bound from two opposite corners, either sw/ne or se/nw.
    pub fn from_points(corner: Point, opposite_corner: Point) -> Self {
        Self::new(corner, corner).extend(opposite_corner)
    }

    /// The closed boundary loop, counter-clockwise starting at `min`.
    pub fn to_ring(&self) -> Ring {
        Ring::new(vec![
            self.min,
            Point::new(self.max[0], self.min[1]),
            self.max,
            Point::new(self.min[0], self.max[1]),
            self.min,
        ])
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(vec![self.to_ring()])
    }

    /// Grows the bound to include the point.
    pub fn extend(&self, point: Point) -> Self {
        if self.contains(point) {
            return *self;
        }

        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Smallest bound covering both `self` and `other`.
    ///
    /// All four corners of `other` are absorbed, so a negatively padded
    /// operand still contributes its full extent on both axes.
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            log::debug!("union absorbing degenerate bound {other}");
        }

        self.extend(other.min)
            .extend(other.max)
            .extend(other.left_top())
            .extend(other.right_bottom())
    }

    /// Whether the point lies within the bound; the boundary counts.
    pub fn contains(&self, point: Point) -> bool {
        if !(self.min[1] <= point[1] && point[1] <= self.max[1]) {
            return false;
        }

        self.min[0] <= point[0] && point[0] <= self.max[0]
    }

    /// Whether the two bounds overlap; touching edges or corners count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.max[0] >= other.min[0]
            && self.min[0] <= other.max[0]
            && self.max[1] >= other.min[1]
            && self.min[1] <= other.max[1]
    }

    /// Grows every side by `amount`. Negative amounts shrink the bound and
    /// can leave it degenerate.
    pub fn pad(&self, amount: f64) -> Self {
        let offset = Point::splat(amount);
        let padded = Self {
            min: self.min - offset,
            max: self.max + offset,
        };

        if padded.is_empty() && !self.is_empty() {
            log::trace!("padding {self} by {amount} produced degenerate bound {padded}");
        }

        padded
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        )
    }

    pub fn top(&self) -> f64 {
        self.max[1]
    }

    pub fn bottom(&self) -> f64 {
        self.min[1]
    }

    pub fn right(&self) -> f64 {
        self.max[0]
    }

    pub fn left(&self) -> f64 {
        self.min[0]
    }

    pub fn left_top(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn right_bottom(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn extents(&self) -> Point {
        self.max - self.min
    }

    /// True only for the malformed state where `min` exceeds `max` on some
    /// axis. A zero-area bound is not empty.
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    /// True if the bound is exactly the point at the origin.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Exact corner-wise equality, no epsilon.
    pub fn equal(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }

    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.linear_eq(self.min.x, other.min.x)
            && tol.linear_eq(self.min.y, other.min.y)
            && tol.linear_eq(self.max.x, other.max.x)
            && tol.linear_eq(self.max.y, other.max.y)
    }
}

impl Shape for Bound {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn dimensions(&self) -> u8 {
        2
    }

    fn bound(&self) -> Bound {
        *self
    }
}

impl Validate for Bound {
    fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            log::debug!("bound {self} has non-finite coordinates");
            return Err(GeoError::NonFinite(self.to_string()));
        }
        if self.is_empty() {
            log::debug!("bound {self} is degenerate");
            return Err(GeoError::Degenerate(format!(
                "{self} has min greater than max"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

impl AbsDiffEq for Bound {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.min.abs_diff_eq(other.min, epsilon) && self.max.abs_diff_eq(other.max, epsilon)
    }
}

impl RelativeEq for Bound {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        [
            (self.min.x, other.min.x),
            (self.min.y, other.min.y),
            (self.max.x, other.max.x),
            (self.max.y, other.max.y),
        ]
        .iter()
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
