use crate::foundation::math::mul_div255_u8;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiplied RGBA8 pixel for this color.
    pub fn to_premultiplied(self) -> [u8; 4] {
        let a = u16::from(self.a);
        [
            mul_div255_u8(u16::from(self.r), a),
            mul_div255_u8(u16::from(self.g), a),
            mul_div255_u8(u16::from(self.b), a),
            self.a,
        ]
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
pub(crate) fn parse_hex(input: &str) -> Option<Color> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => {
            let mut ch = [255u8; 4];
            for (i, c) in ch.iter_mut().enumerate().take(hex.len()) {
                *c = nibble(i)? * 17;
            }
            Some(Color::rgba(ch[0], ch[1], ch[2], ch[3]))
        }
        6 | 8 => {
            let mut ch = [255u8; 4];
            for (i, c) in ch.iter_mut().enumerate().take(hex.len() / 2) {
                *c = byte(i * 2)?;
            }
            Some(Color::rgba(ch[0], ch[1], ch[2], ch[3]))
        }
        _ => None,
    }
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)` where `a` is in `[0, 1]`.
pub(crate) fn parse_rgb_function(input: &str) -> Option<Color> {
    let s = input.trim().to_ascii_lowercase();
    let (args, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let parts = args.split(',').map(str::trim).collect::<Vec<_>>();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |s: &str| s.parse::<u8>().ok();
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let a = parts[3].parse::<f64>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        (a * 255.0).round() as u8
    } else {
        255
    };
    Some(Color::rgba(r, g, b, a))
}

pub(crate) fn is_transparent_keyword(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("transparent")
}
