use anyhow::Context;

use crate::{decode::decoders::DecoderKind, foundation::error::ImageResult};

/// Explicit driver configuration. There is no process-wide default driver; every
/// [`crate::Driver`] is built from one of these.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Decoders tried in order; the first to accept the input wins.
    pub decoders: Vec<DecoderKind>,
    /// Keep every frame of animated inputs. When `false` only the first frame is decoded.
    pub decode_animation: bool,
    /// Attach the metadata mapping to images decoded from encoded bytes.
    pub extract_metadata: bool,
    /// Upper bound for encoded input size in bytes.
    pub max_input_bytes: u64,
    /// Upper bound for the pixel count of surfaces allocated by modifiers.
    pub max_canvas_pixels: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            decoders: DecoderKind::DEFAULT_ORDER.to_vec(),
            decode_animation: true,
            extract_metadata: true,
            max_input_bytes: 64 * 1024 * 1024,
            max_canvas_pixels: 64 * 1024 * 1024,
        }
    }
}

impl DriverConfig {
    /// Parse a JSON document. Missing fields take their default values.
    pub fn from_json(json: &str) -> ImageResult<Self> {
        let cfg: Self = serde_json::from_str(json).context("parse driver config json")?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> ImageResult<String> {
        let s = serde_json::to_string_pretty(self).context("serialize driver config json")?;
        Ok(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/config.rs"]
mod tests;
