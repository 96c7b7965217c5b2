use crate::foundation::error::{StampError, StampResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Channel 0.
    pub r: u8,
    /// Channel 1.
    pub g: u8,
    /// Channel 2.
    pub b: u8,
}

impl Rgb8 {
    /// All channels zero.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Split the low 24 bits of one random draw into three channels
    /// (`draw & 0xFF`, `(draw >> 8) & 0xFF`, `(draw >> 16) & 0xFF`).
    pub fn from_draw(draw: u32) -> Self {
        Self {
            r: (draw & 0xFF) as u8,
            g: ((draw >> 8) & 0xFF) as u8,
            b: ((draw >> 16) & 0xFF) as u8,
        }
    }

    /// Channels as an array in buffer order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Return `true` when every channel is zero.
    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Owned 3-channel, 8-bit raster stored row-major as `[r, g, b, r, g, b, ...]`.
///
/// Width and height are always non-zero and the buffer always holds exactly
/// `width * height * 3` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Allocate an all-zero (black) raster.
    pub fn black(width: u32, height: u32) -> StampResult<Self> {
        let len = buffer_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing row-major RGB8 buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> StampResult<Self> {
        let len = buffer_len(width, height)?;
        if data.len() != len {
            return Err(StampError::invalid_input(format!(
                "raster buffer holds {} bytes, expected {len} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of an `image` RGB buffer.
    pub fn from_rgb_image(img: image::RgbImage) -> StampResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    /// Convert into an `image` RGB buffer without copying.
    pub fn into_rgb_image(self) -> image::RgbImage {
        let Self {
            width,
            height,
            data,
        } = self;
        // Length is validated on construction.
        image::RgbImage::from_raw(width, height, data)
            .unwrap_or_else(|| image::RgbImage::new(width, height))
    }

    /// Copy into an `image` RGB buffer.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        self.clone().into_rgb_image()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one pixel. Returns `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        let idx = self.index(x, y)?;
        Some(Rgb8::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Write one pixel. Writes outside the raster are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgb8) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + Self::CHANNELS].copy_from_slice(&px.to_array());
        }
    }

    /// Return `true` when every byte is zero.
    pub fn is_black(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Copy `src` into this raster with its top-left corner at `(x, y)`.
    ///
    /// The source must fit entirely.
    pub fn blit(&mut self, src: &Raster, x: u32, y: u32) -> StampResult<()> {
        let fits_x = x.checked_add(src.width).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(src.height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(StampError::geometry(format!(
                "{}x{} at ({x},{y}) does not fit a {}x{} raster",
                src.width, src.height, self.width, self.height
            )));
        }

        let row_bytes = src.width as usize * Self::CHANNELS;
        let dst_stride = self.width as usize * Self::CHANNELS;
        for (row, src_row) in src.data.chunks_exact(row_bytes).enumerate() {
            let start = (y as usize + row) * dst_stride + x as usize * Self::CHANNELS;
            self.data[start..start + row_bytes].copy_from_slice(src_row);
        }
        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * Self::CHANNELS)
    }
}

fn buffer_len(width: u32, height: u32) -> StampResult<usize> {
    if width == 0 || height == 0 {
        return Err(StampError::invalid_input(format!(
            "raster dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(Raster::CHANNELS))
        .ok_or_else(|| StampError::invalid_input("raster buffer size overflow"))
}

/// Sub-rectangle of a canvas that receives the scaled source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacementRect {
    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.y + self.height
    }

    /// Return `true` when the rectangle is non-empty and inside a `w x h` canvas.
    pub fn fits_within(self, w: u32, h: u32) -> bool {
        self.width > 0
            && self.height > 0
            && u64::from(self.x) + u64::from(self.width) <= u64::from(w)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(h)
    }

    /// Return `true` when the rectangle spans the whole width or the whole height.
    pub fn fills_one_axis(self, w: u32, h: u32) -> bool {
        (self.x == 0 && self.width == w) || (self.y == 0 && self.height == h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
