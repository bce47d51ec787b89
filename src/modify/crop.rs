use crate::{
    decode::driver::Driver,
    foundation::error::{ImageError, ImageResult},
    geometry::anchor::Anchor,
    geometry::size::{Point, Size},
    modify::{Modifier, frames::apply_across_frames},
    raster::model::Image,
};

/// Cut a `width`x`height` region out of every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropModifier {
    pub width: u32,
    pub height: u32,
    pub anchor: Anchor,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl CropModifier {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            anchor: Anchor::TopLeft,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn at(mut self, anchor: Anchor, offset_x: i32, offset_y: i32) -> Self {
        self.anchor = anchor;
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Top-left corner of the crop region in the coordinates of an image of `size`.
    pub fn origin(&self, size: Size) -> Point {
        size.move_pivot(self.anchor, self.offset_x, self.offset_y)
            .relative_position_to(
                &Size::new(self.width, self.height).move_pivot(self.anchor, 0, 0),
            )
    }
}

impl Modifier for CropModifier {
    fn apply(&self, image: Image, driver: &Driver) -> ImageResult<Image> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::validation(format!(
                "crop size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let max_pixels = driver.config().max_canvas_pixels;
        let origin = self.origin(image.size());
        apply_across_frames(image, |frame| {
            let cropped = frame
                .surface()
                .try_cropped(origin, self.width, self.height, max_pixels)?;
            frame.replace_surface(cropped);
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modify/crop.rs"]
mod tests;
