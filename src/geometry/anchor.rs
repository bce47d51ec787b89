use std::{fmt, str::FromStr};

use crate::{
    foundation::error::{ImageError, ImageResult},
    geometry::size::{Point, Size},
};

/// Named reference point on a rectangle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// All nine anchors in reading order.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];

    /// Fractional position `(fx, fy)` of the anchor, each in `{0, 0.5, 1}`.
    pub fn fraction(self) -> (f64, f64) {
        let fx = match self {
            Anchor::TopLeft | Anchor::Left | Anchor::BottomLeft => 0.0,
            Anchor::Top | Anchor::Center | Anchor::Bottom => 0.5,
            Anchor::TopRight | Anchor::Right | Anchor::BottomRight => 1.0,
        };
        let fy = match self {
            Anchor::TopLeft | Anchor::Top | Anchor::TopRight => 0.0,
            Anchor::Left | Anchor::Center | Anchor::Right => 0.5,
            Anchor::BottomLeft | Anchor::Bottom | Anchor::BottomRight => 1.0,
        };
        (fx, fy)
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::Top => "top",
            Anchor::TopRight => "top-right",
            Anchor::Left => "left",
            Anchor::Center => "center",
            Anchor::Right => "right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::Bottom => "bottom",
            Anchor::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Anchor {
    type Err = ImageError;

    fn from_str(s: &str) -> ImageResult<Self> {
        let anchor = match s.trim().to_ascii_lowercase().as_str() {
            "top-left" | "left-top" => Anchor::TopLeft,
            "top" | "top-center" | "top-middle" | "center-top" | "middle-top" => Anchor::Top,
            "top-right" | "right-top" => Anchor::TopRight,
            "left" | "left-center" | "left-middle" | "center-left" | "middle-left" => Anchor::Left,
            "center" | "middle" | "center-center" | "middle-middle" => Anchor::Center,
            "right" | "right-center" | "right-middle" | "center-right" | "middle-right" => {
                Anchor::Right
            }
            "bottom-left" | "left-bottom" => Anchor::BottomLeft,
            "bottom" | "bottom-center" | "bottom-middle" | "center-bottom" | "middle-bottom" => {
                Anchor::Bottom
            }
            "bottom-right" | "right-bottom" => Anchor::BottomRight,
            other => return Err(ImageError::validation(format!("unknown anchor `{other}`"))),
        };
        Ok(anchor)
    }
}

/// Absolute position of `anchor` on a rectangle of `size`, shifted by the offsets.
///
/// Offsets are added as-is: a positive `offset_x` moves toward increasing x for every anchor.
pub fn pivot_point(size: Size, anchor: Anchor, offset_x: i32, offset_y: i32) -> Point {
    let (fx, fy) = anchor.fraction();
    let x = (fx * f64::from(size.width)).round() as i64 + i64::from(offset_x);
    let y = (fy * f64::from(size.height)).round() as i64 + i64::from(offset_y);
    Point::new(saturate_i32(x), saturate_i32(y))
}

fn saturate_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/anchor.rs"]
mod tests;
