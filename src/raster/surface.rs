use crate::{
    foundation::color::Color,
    foundation::error::{ImageError, ImageResult},
    foundation::math::{mul_div255_u8, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    geometry::size::{Point, Size},
};

type PremulRgba8 = [u8; 4];

/// CPU pixel surface: row-major premultiplied RGBA8 plus an alpha-blending switch.
///
/// With blending off, [`Surface::copy_from`] replaces destination pixels; with blending on it
/// composites source-over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    alpha_blending: bool,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
            alpha_blending: false,
        }
    }

    /// Fully transparent surface, refusing more than `max_pixels` pixels.
    pub fn try_new(width: u32, height: u32, max_pixels: u64) -> ImageResult<Self> {
        let len = checked_byte_len(width, height, max_pixels)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
            alpha_blending: false,
        })
    }

    /// Surface filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut surface = Self::new(width, height);
        surface.fill(color);
        surface
    }

    /// Fallible [`Surface::filled`], see [`Surface::try_new`].
    pub fn try_filled(width: u32, height: u32, color: Color, max_pixels: u64) -> ImageResult<Self> {
        let mut surface = Self::try_new(width, height, max_pixels)?;
        surface.fill(color);
        Ok(surface)
    }

    /// Build from straight-alpha RGBA8 bytes.
    pub fn from_rgba8_straight(width: u32, height: u32, mut data: Vec<u8>) -> ImageResult<Self> {
        if data.len() != byte_len(width, height) {
            return Err(ImageError::validation(format!(
                "expected {} rgba8 bytes for {width}x{height}, got {}",
                byte_len(width, height),
                data.len()
            )));
        }
        premultiply_rgba8_in_place(&mut data);
        Ok(Self {
            width,
            height,
            data,
            alpha_blending: false,
        })
    }

    pub(crate) fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
            alpha_blending: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    pub fn alpha_blending(&self) -> bool {
        self.alpha_blending
    }

    pub fn set_alpha_blending(&mut self, enabled: bool) {
        self.alpha_blending = enabled;
    }

    /// Copy a `width`x`height` block of `src` starting at `src_origin` onto this surface at `dst`.
    ///
    /// Pixels falling outside either surface are skipped, so `dst` may be negative or overhang.
    pub fn copy_from(
        &mut self,
        src: &Surface,
        dst: Point,
        src_origin: Point,
        width: u32,
        height: u32,
    ) {
        for dy in 0..i64::from(height) {
            let sy = i64::from(src_origin.y) + dy;
            let ty = i64::from(dst.y) + dy;
            if !(0..i64::from(src.height)).contains(&sy)
                || !(0..i64::from(self.height)).contains(&ty)
            {
                continue;
            }
            for dx in 0..i64::from(width) {
                let sx = i64::from(src_origin.x) + dx;
                let tx = i64::from(dst.x) + dx;
                if !(0..i64::from(src.width)).contains(&sx)
                    || !(0..i64::from(self.width)).contains(&tx)
                {
                    continue;
                }

                let si = src.index(sx as u32, sy as u32);
                let ti = self.index(tx as u32, ty as u32);
                let s = [src.data[si], src.data[si + 1], src.data[si + 2], src.data[si + 3]];
                let out = if self.alpha_blending {
                    let d = [
                        self.data[ti],
                        self.data[ti + 1],
                        self.data[ti + 2],
                        self.data[ti + 3],
                    ];
                    over(d, s)
                } else {
                    s
                };
                self.data[ti..ti + 4].copy_from_slice(&out);
            }
        }
    }

    /// New `width`x`height` surface holding the region of `self` whose top-left is `origin`.
    ///
    /// Areas outside `self` stay transparent. The blending flag is carried over.
    pub fn cropped(&self, origin: Point, width: u32, height: u32) -> Surface {
        let mut out = Surface::new(width, height);
        out.copy_from(self, Point::ORIGIN, origin, width, height);
        out.alpha_blending = self.alpha_blending;
        out
    }

    /// Fallible [`Surface::cropped`], see [`Surface::try_new`].
    pub fn try_cropped(
        &self,
        origin: Point,
        width: u32,
        height: u32,
        max_pixels: u64,
    ) -> ImageResult<Surface> {
        let mut out = Surface::try_new(width, height, max_pixels)?;
        out.copy_from(self, Point::ORIGIN, origin, width, height);
        out.alpha_blending = self.alpha_blending;
        Ok(out)
    }

    /// Export as straight-alpha RGBA8.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    fn fill(&mut self, color: Color) {
        let px = color.to_premultiplied();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

/// Buffer length for a `width`x`height` surface, or a validation error past `max_pixels`.
pub(crate) fn checked_byte_len(width: u32, height: u32, max_pixels: u64) -> ImageResult<usize> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels > max_pixels {
        return Err(ImageError::validation(format!(
            "{width}x{height} is {pixels} pixels, limit is {max_pixels}"
        )));
    }
    usize::try_from(pixels)
        .ok()
        .and_then(|p| p.checked_mul(4))
        .ok_or_else(|| ImageError::validation(format!("{width}x{height} does not fit in memory")))
}

fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
}

fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
