use crate::{
    decode::decoders::Input,
    decode::driver::Driver,
    foundation::error::ImageResult,
    geometry::anchor::Anchor,
    geometry::size::Point,
    modify::{Modifier, frames::apply_across_frames},
    raster::model::Image,
};

/// Overlay `element` onto every frame of the image.
///
/// The element's pivot is placed on the image's pivot, both taken at `anchor`; the offsets
/// shift the image pivot only. Only the element's first frame is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceModifier {
    pub element: Input,
    pub anchor: Anchor,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl PlaceModifier {
    pub fn new(element: impl Into<Input>) -> Self {
        Self {
            element: element.into(),
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

    /// Top-left corner of the element in image coordinates.
    pub fn position(&self, image: &Image, element: &Image) -> Point {
        image
            .size()
            .move_pivot(self.anchor, self.offset_x, self.offset_y)
            .relative_position_to(&element.size().move_pivot(self.anchor, 0, 0))
    }
}

impl Modifier for PlaceModifier {
    fn apply(&self, image: Image, driver: &Driver) -> ImageResult<Image> {
        let element = driver.read_image(self.element.clone())?;
        let pos = self.position(&image, &element);
        let overlay = element.first_frame().surface();
        tracing::debug!(x = pos.x, y = pos.y, anchor = %self.anchor, "place");

        apply_across_frames(image, |frame| {
            let surface = frame.surface_mut();
            surface.set_alpha_blending(true);
            surface.copy_from(
                overlay,
                pos,
                Point::ORIGIN,
                overlay.width(),
                overlay.height(),
            );
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/modify/place.rs"]
mod tests;
