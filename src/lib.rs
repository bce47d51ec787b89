//! pivot-image resolves untyped caller input into images and places images on each other
//! with a pivot-based anchor system.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: [`Input`] (bytes, text, path, image, color) goes through a [`DecoderChain`]
//!    of [`Decode`] implementations; the first decoder that accepts it wins.
//! 2. **Represent**: images are a non-empty list of [`Frame`]s, each owning a premultiplied
//!    RGBA8 [`Surface`], plus an optional [`MetadataMapping`].
//! 3. **Modify**: spatial [`Modifier`]s compute one position from [`Size`] pivots and apply it
//!    to every frame with [`apply_across_frames`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit configuration**: there is no global driver; build a [`Driver`] from a
//!   [`DriverConfig`].
//! - **Typed fallback**: only [`ImageError::Decoder`] lets the chain move on to the next decoder.
#![forbid(unsafe_code)]

mod decode;
mod foundation;
mod geometry;
mod input;
mod modify;
mod raster;

#[cfg(test)]
#[path = "../tests/support/mod.rs"]
mod test_support;

pub use decode::chain::DecoderChain;
pub use decode::config::DriverConfig;
pub use decode::decoders::{Decode, Decoded, Decoder, DecoderKind, Input};
pub use decode::driver::Driver;
pub use foundation::color::Color;
pub use foundation::error::{ImageError, ImageResult};
pub use geometry::anchor::{Anchor, pivot_point};
pub use geometry::size::{Point, Size};
pub use input::base64::{decode_base64_strict, is_valid_base64};
pub use input::data_uri::{ParsedDataUri, decode_payload, parse_data_uri};
pub use input::metadata::{MetadataMapping, MetadataSource, MetadataValue, extract_metadata};
pub use input::path::is_file;
pub use input::sniff::{FormatKind, detect_format, is_format, is_gif_format};
pub use modify::Modifier;
pub use modify::crop::CropModifier;
pub use modify::frames::apply_across_frames;
pub use modify::place::PlaceModifier;
pub use modify::resize_canvas::ResizeCanvasModifier;
pub use raster::model::{Disposal, Frame, Image};
pub use raster::surface::Surface;
