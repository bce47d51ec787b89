use crate::{
    decode::chain::DecoderChain,
    decode::config::DriverConfig,
    decode::decoders::{Decoded, Input},
    foundation::error::ImageResult,
    modify::Modifier,
    raster::model::Image,
};

/// Entry point: resolves caller input through a [`DecoderChain`] and applies modifiers.
#[derive(Clone, Debug)]
pub struct Driver {
    chain: DecoderChain,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            chain: DecoderChain::new(config),
        }
    }

    /// Driver around a prepared chain, e.g. one extended with custom decoders.
    pub fn with_chain(chain: DecoderChain) -> Self {
        Self { chain }
    }

    pub fn config(&self) -> &DriverConfig {
        self.chain.config()
    }

    pub fn chain(&self) -> &DecoderChain {
        &self.chain
    }

    /// Resolve `input` to an image or a color.
    ///
    /// With `decode_animation` disabled, images keep only their first frame, including
    /// images handed in as [`Input::Image`].
    pub fn read(&self, input: impl Into<Input>) -> ImageResult<Decoded> {
        let input = input.into();
        match self.chain.handle(&input)? {
            Decoded::Image(mut image) if !self.config().decode_animation => {
                image.truncate_to_first_frame();
                Ok(Decoded::Image(image))
            }
            decoded => Ok(decoded),
        }
    }

    /// Resolve `input` and require an image.
    pub fn read_image(&self, input: impl Into<Input>) -> ImageResult<Image> {
        self.read(input)?.into_image()
    }

    pub fn modify(&self, image: Image, modifier: &impl Modifier) -> ImageResult<Image> {
        modifier.apply(image, self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/driver.rs"]
mod tests;
