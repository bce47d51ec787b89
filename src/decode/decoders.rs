//! Built-in decoders and the [`Decode`] seam for caller-supplied ones.
//!
//! A decoder answers [`ImageError::Decoder`] when the input is not something it handles; that
//! is the only outcome that lets the chain move on. IO failures and broken payloads of a
//! recognized format surface as [`ImageError::Io`] and [`ImageError::Malformed`].

use std::{
    fmt,
    io::Cursor,
    path::{Path, PathBuf},
    sync::Arc,
};

use image::AnimationDecoder as _;

use crate::{
    decode::config::DriverConfig,
    foundation::color::{self, Color},
    foundation::error::{ImageError, ImageResult},
    input::base64::decode_base64_strict,
    input::sniff::FormatKind,
    input::{data_uri, metadata, path, sniff},
    raster::model::{Frame, Image},
    raster::surface::Surface,
};

/// Caller input handed to the decoder chain.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Encoded image bytes.
    Bytes(Vec<u8>),
    /// Free-form text: a file path, a data URI, base64, or a color string.
    Text(String),
    /// Explicit filesystem path.
    Path(PathBuf),
    /// Already decoded image, passed through unchanged.
    Image(Image),
    /// Already materialized color, passed through unchanged.
    Color(Color),
}

impl Input {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Input::Bytes(_) => "bytes",
            Input::Text(_) => "text",
            Input::Path(_) => "path",
            Input::Image(_) => "image",
            Input::Color(_) => "color",
        }
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Input::Bytes(value)
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(value: PathBuf) -> Self {
        Input::Path(value)
    }
}

impl From<&Path> for Input {
    fn from(value: &Path) -> Self {
        Input::Path(value.to_path_buf())
    }
}

impl From<Image> for Input {
    fn from(value: Image) -> Self {
        Input::Image(value)
    }
}

impl From<Color> for Input {
    fn from(value: Color) -> Self {
        Input::Color(value)
    }
}

/// Successful decode result.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    Image(Image),
    Color(Color),
}

impl Decoded {
    /// The image, or a decoder error if a color was decoded.
    pub fn into_image(self) -> ImageResult<Image> {
        match self {
            Decoded::Image(img) => Ok(img),
            Decoded::Color(_) => Err(ImageError::decoder(
                "input resolved to a color, not an image",
            )),
        }
    }

    /// The color, or a decoder error if an image was decoded.
    pub fn into_color(self) -> ImageResult<Color> {
        match self {
            Decoded::Color(c) => Ok(c),
            Decoded::Image(_) => Err(ImageError::decoder(
                "input resolved to an image, not a color",
            )),
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Decoded::Image(img) => Some(img),
            Decoded::Color(_) => None,
        }
    }
}

/// A single link of the decoder chain.
pub trait Decode {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Decode `input`, or answer [`ImageError::Decoder`] to let the next decoder try.
    fn decode(&self, input: &Input, config: &DriverConfig) -> ImageResult<Decoded>;
}

/// Built-in decoder kinds, selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoderKind {
    ImageObject,
    ColorObject,
    HexColor,
    RgbColor,
    TransparentColor,
    FilePath,
    Binary,
    DataUri,
    Base64,
}

impl DecoderKind {
    /// Order used by [`DriverConfig::default`].
    pub const DEFAULT_ORDER: [DecoderKind; 9] = [
        DecoderKind::ImageObject,
        DecoderKind::ColorObject,
        DecoderKind::HexColor,
        DecoderKind::RgbColor,
        DecoderKind::TransparentColor,
        DecoderKind::FilePath,
        DecoderKind::Binary,
        DecoderKind::DataUri,
        DecoderKind::Base64,
    ];
}

impl Decode for DecoderKind {
    fn name(&self) -> &str {
        match self {
            DecoderKind::ImageObject => "image-object",
            DecoderKind::ColorObject => "color-object",
            DecoderKind::HexColor => "hex-color",
            DecoderKind::RgbColor => "rgb-color",
            DecoderKind::TransparentColor => "transparent-color",
            DecoderKind::FilePath => "file-path",
            DecoderKind::Binary => "binary",
            DecoderKind::DataUri => "data-uri",
            DecoderKind::Base64 => "base64",
        }
    }

    fn decode(&self, input: &Input, config: &DriverConfig) -> ImageResult<Decoded> {
        match self {
            DecoderKind::ImageObject => match input {
                Input::Image(img) => Ok(Decoded::Image(img.clone())),
                _ => Err(ImageError::decoder("input is not an image object")),
            },
            DecoderKind::ColorObject => match input {
                Input::Color(c) => Ok(Decoded::Color(*c)),
                _ => Err(ImageError::decoder("input is not a color object")),
            },
            DecoderKind::HexColor => text(input)
                .and_then(color::parse_hex)
                .map(Decoded::Color)
                .ok_or_else(|| ImageError::decoder("input is not a hex color")),
            DecoderKind::RgbColor => text(input)
                .and_then(color::parse_rgb_function)
                .map(Decoded::Color)
                .ok_or_else(|| ImageError::decoder("input is not an rgb() color")),
            DecoderKind::TransparentColor => match text(input) {
                Some(s) if color::is_transparent_keyword(s) => {
                    Ok(Decoded::Color(Color::transparent()))
                }
                _ => Err(ImageError::decoder("input is not `transparent`")),
            },
            DecoderKind::FilePath => decode_file_path(input, config),
            DecoderKind::Binary => match input {
                Input::Bytes(bytes) => decode_bytes(bytes, config),
                _ => Err(ImageError::decoder("input is not binary data")),
            },
            DecoderKind::DataUri => decode_data_uri(input, config),
            DecoderKind::Base64 => {
                let bytes = text(input)
                    .and_then(decode_base64_strict)
                    .ok_or_else(|| ImageError::decoder("input is not valid base64"))?;
                decode_bytes(&bytes, config)
            }
        }
    }
}

/// Chain entry: a built-in kind or a caller-supplied decoder.
#[derive(Clone)]
pub enum Decoder {
    Builtin(DecoderKind),
    Custom(Arc<dyn Decode + Send + Sync>),
}

impl Decoder {
    /// Wrap a caller-supplied decoder.
    pub fn custom(decoder: impl Decode + Send + Sync + 'static) -> Self {
        Decoder::Custom(Arc::new(decoder))
    }
}

impl Decode for Decoder {
    fn name(&self) -> &str {
        match self {
            Decoder::Builtin(kind) => kind.name(),
            Decoder::Custom(d) => d.name(),
        }
    }

    fn decode(&self, input: &Input, config: &DriverConfig) -> ImageResult<Decoded> {
        match self {
            Decoder::Builtin(kind) => kind.decode(input, config),
            Decoder::Custom(d) => d.decode(input, config),
        }
    }
}

impl From<DecoderKind> for Decoder {
    fn from(value: DecoderKind) -> Self {
        Decoder::Builtin(value)
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoder::Builtin(kind) => f.debug_tuple("Builtin").field(kind).finish(),
            Decoder::Custom(d) => f.debug_tuple("Custom").field(&d.name()).finish(),
        }
    }
}

fn text(input: &Input) -> Option<&str> {
    match input {
        Input::Text(s) => Some(s.as_str()),
        _ => None,
    }
}

fn decode_file_path(input: &Input, config: &DriverConfig) -> ImageResult<Decoded> {
    // Text that does not name a file is "not a path"; an explicit path must be readable.
    let path = match input {
        Input::Path(p) => p.as_path(),
        Input::Text(s) if path::is_file(s) => Path::new(s),
        _ => return Err(ImageError::decoder("input is not a file path")),
    };

    let meta = std::fs::metadata(path).map_err(|e| ImageError::io(path, e))?;
    if meta.len() > config.max_input_bytes {
        return Err(ImageError::malformed(format!(
            "{} is {} bytes, limit is {}",
            path.display(),
            meta.len(),
            config.max_input_bytes
        )));
    }
    let bytes = std::fs::read(path).map_err(|e| ImageError::io(path, e))?;
    decode_bytes(&bytes, config)
}

fn decode_data_uri(input: &Input, config: &DriverConfig) -> ImageResult<Decoded> {
    let Some(s) = text(input) else {
        return Err(ImageError::decoder("input is not a data uri"));
    };
    let uri = data_uri::parse_data_uri(s);
    if !uri.is_valid() {
        return Err(ImageError::decoder("input is not a data uri"));
    }
    let bytes = data_uri::decode_payload(&uri)?;
    decode_bytes(&bytes, config)
}

/// Sniff and decode encoded image bytes.
pub(crate) fn decode_bytes(bytes: &[u8], config: &DriverConfig) -> ImageResult<Decoded> {
    let kind = sniff::detect_format(bytes)
        .ok_or_else(|| ImageError::decoder("unrecognized image signature"))?;
    if bytes.len() as u64 > config.max_input_bytes {
        return Err(ImageError::malformed(format!(
            "{} input is {} bytes, limit is {}",
            kind.mime_type(),
            bytes.len(),
            config.max_input_bytes
        )));
    }

    let mut image = if kind == FormatKind::Gif && config.decode_animation {
        decode_gif_frames(bytes)?
    } else {
        decode_still(bytes, kind)?
    };
    if config.extract_metadata {
        image = image.with_metadata(metadata::extract_from_bytes(bytes));
    }
    Ok(Decoded::Image(image.with_source_format(kind)))
}

fn decode_still(bytes: &[u8], kind: FormatKind) -> ImageResult<Image> {
    let dyn_img = image::load_from_memory_with_format(bytes, kind.image_format())
        .map_err(|e| ImageError::malformed(format!("{}: {e}", kind.mime_type())))?;
    Ok(Image::from_surface(Surface::from_rgba_image(dyn_img.to_rgba8())))
}

// Frames come out of the gif codec already composited onto the full logical screen.
fn decode_gif_frames(bytes: &[u8]) -> ImageResult<Image> {
    let malformed = |e: image::ImageError| ImageError::malformed(format!("image/gif: {e}"));
    let decoder = image::codecs::gif::GifDecoder::new(Cursor::new(bytes)).map_err(malformed)?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(malformed)?
        .into_iter()
        .map(|f| {
            let delay = f.delay().into();
            Frame::new(Surface::from_rgba_image(f.into_buffer())).with_delay(delay)
        })
        .collect::<Vec<_>>();

    if frames.is_empty() {
        return Err(ImageError::malformed("image/gif: no frames"));
    }
    Image::from_frames(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/decode/decoders.rs"]
mod tests;
