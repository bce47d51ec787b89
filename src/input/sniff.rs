//! Signature-based format membership checks.
//!
//! Every check is a pure look at the leading bytes: extensions and declared media types are
//! never consulted, and short or garbage buffers simply answer `false`.

const GIF87A: &[u8; 6] = b"GIF87a";
const GIF89A: &[u8; 6] = b"GIF89a";

/// Raster formats the binary decoder can route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Gif,
    Jpeg,
    Png,
    Webp,
    Bmp,
    Tiff,
    Ico,
}

impl FormatKind {
    pub const ALL: [FormatKind; 7] = [
        FormatKind::Gif,
        FormatKind::Jpeg,
        FormatKind::Png,
        FormatKind::Webp,
        FormatKind::Bmp,
        FormatKind::Tiff,
        FormatKind::Ico,
    ];

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            FormatKind::Gif => image::ImageFormat::Gif,
            FormatKind::Jpeg => image::ImageFormat::Jpeg,
            FormatKind::Png => image::ImageFormat::Png,
            FormatKind::Webp => image::ImageFormat::WebP,
            FormatKind::Bmp => image::ImageFormat::Bmp,
            FormatKind::Tiff => image::ImageFormat::Tiff,
            FormatKind::Ico => image::ImageFormat::Ico,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            FormatKind::Gif => "image/gif",
            FormatKind::Jpeg => "image/jpeg",
            FormatKind::Png => "image/png",
            FormatKind::Webp => "image/webp",
            FormatKind::Bmp => "image/bmp",
            FormatKind::Tiff => "image/tiff",
            FormatKind::Ico => "image/vnd.microsoft.icon",
        }
    }
}

/// Whether `bytes` carry the signature of `kind`.
pub fn is_format(kind: FormatKind, bytes: &[u8]) -> bool {
    match kind {
        FormatKind::Gif => is_gif_format(bytes),
        FormatKind::Jpeg => infer::image::is_jpeg(bytes),
        FormatKind::Png => infer::image::is_png(bytes),
        FormatKind::Webp => infer::image::is_webp(bytes),
        FormatKind::Bmp => infer::image::is_bmp(bytes),
        FormatKind::Tiff => infer::image::is_tiff(bytes),
        FormatKind::Ico => infer::image::is_ico(bytes),
    }
}

/// `true` iff the first six bytes are `GIF87a` or `GIF89a`.
pub fn is_gif_format(bytes: &[u8]) -> bool {
    match bytes.get(..6) {
        Some(head) => head == GIF87A || head == GIF89A,
        None => false,
    }
}

/// First format whose signature matches `bytes`.
pub fn detect_format(bytes: &[u8]) -> Option<FormatKind> {
    FormatKind::ALL
        .into_iter()
        .find(|&kind| is_format(kind, bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/input/sniff.rs"]
mod tests;
