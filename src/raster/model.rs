use std::time::Duration;

use crate::{
    foundation::error::{ImageError, ImageResult},
    geometry::size::Size,
    input::metadata::{MetadataMapping, MetadataValue},
    input::sniff::FormatKind,
    raster::surface::Surface,
};

/// What happens to a frame's area before the next frame is shown.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Disposal {
    #[default]
    Unspecified,
    Keep,
    Background,
    Previous,
}

/// One still image of a possibly animated [`Image`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    surface: Surface,
    delay: Duration,
    disposal: Disposal,
}

impl Frame {
    /// Static frame: zero delay, unspecified disposal.
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            delay: Duration::ZERO,
            disposal: Disposal::Unspecified,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_disposal(mut self, disposal: Disposal) -> Self {
        self.disposal = disposal;
        self
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Swap in a new surface, keeping delay and disposal. Returns the old surface.
    pub fn replace_surface(&mut self, surface: Surface) -> Surface {
        std::mem::replace(&mut self.surface, surface)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn disposal(&self) -> Disposal {
        self.disposal
    }

    pub fn size(&self) -> Size {
        self.surface.size()
    }
}

/// Decoded image: an ordered, non-empty list of frames plus extracted metadata.
///
/// The image owns its frames exclusively. Frames can be mutated only through
/// [`crate::apply_across_frames`] and the modifiers built on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    frames: Vec<Frame>,
    metadata: MetadataMapping,
    source_format: Option<FormatKind>,
}

impl Image {
    /// Build an image from frames in display order.
    pub fn from_frames(frames: Vec<Frame>) -> ImageResult<Self> {
        if frames.is_empty() {
            return Err(ImageError::validation("an image needs at least one frame"));
        }
        Ok(Self {
            frames,
            metadata: MetadataMapping::default(),
            source_format: None,
        })
    }

    /// Single-frame image.
    pub fn from_surface(surface: Surface) -> Self {
        Self {
            frames: vec![Frame::new(surface)],
            metadata: MetadataMapping::default(),
            source_format: None,
        }
    }

    pub fn with_metadata(mut self, metadata: MetadataMapping) -> Self {
        self.metadata = metadata;
        self
    }

    pub(crate) fn with_source_format(mut self, format: FormatKind) -> Self {
        self.source_format = Some(format);
        self
    }

    /// Size of the reference (first) frame.
    pub fn size(&self) -> Size {
        self.first_frame().size()
    }

    pub fn width(&self) -> u32 {
        self.size().width
    }

    pub fn height(&self) -> u32 {
        self.size().height
    }

    /// Number of frames. Always at least one.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn first_frame(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn metadata(&self) -> &MetadataMapping {
        &self.metadata
    }

    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Format the image was decoded from, if it came from encoded bytes.
    pub fn source_format(&self) -> Option<FormatKind> {
        self.source_format
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    pub(crate) fn truncate_to_first_frame(&mut self) {
        self.frames.truncate(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/model.rs"]
mod tests;
