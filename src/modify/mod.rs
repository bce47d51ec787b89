//! Spatial modifiers built on the pivot geometry and the frame applicator.

pub(crate) mod crop;
pub(crate) mod frames;
pub(crate) mod place;
pub(crate) mod resize_canvas;

use crate::{decode::driver::Driver, foundation::error::ImageResult, raster::model::Image};

/// An operation producing a new image from `image`.
///
/// The driver is passed so modifiers can resolve secondary inputs (e.g. an overlay) through
/// the same decoder chain that produced `image`.
pub trait Modifier {
    fn apply(&self, image: Image, driver: &Driver) -> ImageResult<Image>;
}
