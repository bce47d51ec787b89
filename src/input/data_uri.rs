//! RFC 2397 `data:` URI parsing.
//!
//! Parsing never fails: structural problems are reported through [`ParsedDataUri::is_valid`].
//! Payload well-formedness (base64 alphabet, percent escapes) is checked separately by
//! [`decode_payload`].

use crate::{
    foundation::error::{ImageError, ImageResult},
    input::base64::decode_base64_strict,
};

const SCHEME: &str = "data:";
const BASE64_DIRECTIVE: &str = "base64";
const CHARSET_DIRECTIVE: &str = "charset=";

/// Parsed form of `data:[<mediatype>][;charset=<value>][;base64],<data>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDataUri {
    valid: bool,
    media_type: Option<String>,
    charset: Option<String>,
    base64: bool,
    data: Option<String>,
}

impl ParsedDataUri {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn has_media_type(&self) -> bool {
        self.media_type.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn is_base64_encoded(&self) -> bool {
        self.base64
    }

    /// Raw data segment; an empty segment is reported as `None`.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

/// Parse `input` as a data URI.
pub fn parse_data_uri(input: &str) -> ParsedDataUri {
    let Some(rest) = input.strip_prefix(SCHEME) else {
        return ParsedDataUri::default();
    };
    let Some((params, data)) = rest.split_once(',') else {
        return ParsedDataUri::default();
    };

    let mut media_type = None;
    let mut charset = None;
    let mut base64 = false;

    for (idx, token) in params.split(';').enumerate() {
        if token == BASE64_DIRECTIVE {
            base64 = true;
        } else if let Some(value) = token.strip_prefix(CHARSET_DIRECTIVE) {
            charset = Some(value.to_string());
        } else if idx == 0 && !token.is_empty() {
            media_type = Some(token.to_string());
        }
    }

    ParsedDataUri {
        valid: true,
        media_type,
        charset,
        base64,
        data: (!data.is_empty()).then(|| data.to_string()),
    }
}

/// Decode the payload of a valid data URI into bytes.
///
/// Base64 payloads must pass the strict validator; other payloads are percent-decoded with `+`
/// kept as a literal character.
pub fn decode_payload(uri: &ParsedDataUri) -> ImageResult<Vec<u8>> {
    if !uri.is_valid() {
        return Err(ImageError::decoder("not a data uri"));
    }
    let data = uri
        .data()
        .ok_or_else(|| ImageError::malformed("data uri has an empty payload"))?;

    if uri.is_base64_encoded() {
        return decode_base64_strict(data)
            .ok_or_else(|| ImageError::malformed("data uri payload is not valid base64"));
    }
    percent_decode(data)
}

fn percent_decode(data: &str) -> ImageResult<Vec<u8>> {
    let bytes = data.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| {
                        ImageError::malformed(format!("bad percent escape at byte {i}"))
                    })?;
                out.push(hex);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/input/data_uri.rs"]
mod tests;
