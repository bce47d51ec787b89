use crate::{
    decode::config::DriverConfig,
    decode::decoders::{Decode, Decoded, Decoder, Input},
    foundation::error::{ImageError, ImageResult},
};

/// Ordered decoder list tried front to back until one accepts the input.
#[derive(Clone, Debug)]
pub struct DecoderChain {
    config: DriverConfig,
    decoders: Vec<Decoder>,
}

impl DecoderChain {
    /// Chain built from the decoder kinds listed in `config`.
    pub fn new(config: DriverConfig) -> Self {
        let decoders = config.decoders.iter().copied().map(Decoder::from).collect();
        Self { config, decoders }
    }

    /// Chain with an explicit decoder list; `config.decoders` is ignored.
    pub fn from_decoders(config: DriverConfig, decoders: Vec<Decoder>) -> Self {
        Self { config, decoders }
    }

    /// Append a decoder at the end of the chain.
    pub fn push(&mut self, decoder: impl Into<Decoder>) {
        self.decoders.push(decoder.into());
    }

    pub fn with(mut self, decoder: impl Into<Decoder>) -> Self {
        self.push(decoder);
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn decoders(&self) -> &[Decoder] {
        &self.decoders
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    #[tracing::instrument(skip_all, fields(input = input.kind_name()))]
    /// Run `input` through the chain.
    ///
    /// A decoder answering [`ImageError::Decoder`] hands over to the next one; any other
    /// error stops the chain and is returned as is. When every decoder declines, the last
    /// decoder error is returned.
    pub fn handle(&self, input: &Input) -> ImageResult<Decoded> {
        let mut last = None;
        for decoder in &self.decoders {
            match decoder.decode(input, &self.config) {
                Ok(decoded) => {
                    tracing::debug!(decoder = decoder.name(), "decoded");
                    return Ok(decoded);
                }
                Err(err) if err.is_decoder() => {
                    tracing::debug!(decoder = decoder.name(), error = %err, "declined");
                    last = Some(err);
                }
                Err(err) => {
                    tracing::debug!(decoder = decoder.name(), error = %err, "failed");
                    return Err(err);
                }
            }
        }
        Err(last.unwrap_or_else(|| ImageError::decoder("decoder chain is empty")))
    }
}

impl Default for DecoderChain {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/chain.rs"]
mod tests;
