use crate::{
    decode::driver::Driver,
    foundation::color::Color,
    foundation::error::{ImageError, ImageResult},
    geometry::anchor::Anchor,
    geometry::size::{Point, Size},
    modify::{Modifier, frames::apply_across_frames},
    raster::model::Image,
    raster::surface::Surface,
};

/// Put every frame on a new `width`x`height` canvas filled with `background`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeCanvasModifier {
    pub width: u32,
    pub height: u32,
    pub anchor: Anchor,
    pub background: Color,
}

impl ResizeCanvasModifier {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            anchor: Anchor::Center,
            background: Color::transparent(),
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Where the top-left corner of a frame of `size` lands on the new canvas.
    pub fn position(&self, size: Size) -> Point {
        Size::new(self.width, self.height)
            .move_pivot(self.anchor, 0, 0)
            .relative_position_to(&size.move_pivot(self.anchor, 0, 0))
    }
}

impl Modifier for ResizeCanvasModifier {
    fn apply(&self, image: Image, driver: &Driver) -> ImageResult<Image> {
        if self.width == 0 || self.height == 0 {
            return Err(ImageError::validation(format!(
                "canvas size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        let max_pixels = driver.config().max_canvas_pixels;
        apply_across_frames(image, |frame| {
            let src = frame.surface();
            let pos = self.position(src.size());
            let mut canvas =
                Surface::try_filled(self.width, self.height, self.background, max_pixels)?;
            canvas.set_alpha_blending(true);
            canvas.copy_from(src, pos, Point::ORIGIN, src.width(), src.height());
            canvas.set_alpha_blending(src.alpha_blending());
            frame.replace_surface(canvas);
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modify/resize_canvas.rs"]
mod tests;
