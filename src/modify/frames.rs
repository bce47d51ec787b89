use crate::{
    foundation::error::ImageResult,
    raster::model::{Frame, Image},
};

/// Run `op` on every frame of `image`, in frame order.
///
/// Frames are not assumed to share dimensions. The first error aborts the pass and is
/// returned; frames before it have already been modified.
pub fn apply_across_frames<F>(mut image: Image, mut op: F) -> ImageResult<Image>
where
    F: FnMut(&mut Frame) -> ImageResult<()>,
{
    for frame in image.frames_mut() {
        op(frame)?;
    }
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/modify/frames.rs"]
mod tests;
