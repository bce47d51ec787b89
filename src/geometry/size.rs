use std::ops::{Add, Neg, Sub};

use crate::geometry::anchor::{Anchor, pivot_point};

/// Integer point in pixel space. Coordinates may be negative.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// Rectangle dimensions plus a pivot point in the rectangle's local space.
///
/// A fresh `Size` has its pivot at the top-left corner. [`Size::move_pivot`] returns a copy
/// whose pivot sits on an anchor, which is how "place relative to this anchor" is expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pivot: Point,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pivot: Point::ORIGIN,
        }
    }

    pub fn with_pivot(self, pivot: Point) -> Self {
        Self { pivot, ..self }
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Copy of this size with the pivot moved onto `anchor`, shifted by the offsets.
    pub fn move_pivot(self, anchor: Anchor, offset_x: i32, offset_y: i32) -> Self {
        self.with_pivot(pivot_point(self, anchor, offset_x, offset_y))
    }

    /// Point at which `other`'s origin lands when its pivot is placed on this size's pivot.
    ///
    /// Both sizes are expected to have their pivots moved beforehand; the result is the plain
    /// vector difference of the two pivots.
    pub fn relative_position_to(&self, other: &Size) -> Point {
        self.pivot - other.pivot
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/size.rs"]
mod tests;
