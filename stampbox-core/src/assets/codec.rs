use std::path::Path;

use crate::foundation::core::Raster;
use crate::foundation::error::{StampError, StampResult};

/// Boundary between files on disk and in-memory rasters.
pub trait ImageCodec {
    /// Read and decode `path` into an RGB8 raster.
    fn decode(&self, path: &Path) -> StampResult<Raster>;

    /// Encode `raster` to `path`.
    fn encode(&self, raster: &Raster, path: &Path) -> StampResult<()>;
}

/// [`ImageCodec`] backed by the `image` crate; the format follows the file extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsCodec;

impl ImageCodec for FsCodec {
    fn decode(&self, path: &Path) -> StampResult<Raster> {
        let dyn_img = image::ImageReader::open(path)
            .map_err(|e| StampError::decode(format!("open '{}': {e}", path.display())))?
            .with_guessed_format()
            .map_err(|e| StampError::decode(format!("sniff '{}': {e}", path.display())))?
            .decode()
            .map_err(|e| StampError::decode(format!("decode '{}': {e}", path.display())))?;
        Raster::from_rgb_image(dyn_img.to_rgb8())
            .map_err(|e| StampError::decode(format!("'{}': {e}", path.display())))
    }

    fn encode(&self, raster: &Raster, path: &Path) -> StampResult<()> {
        let format = image::ImageFormat::from_path(path)
            .map_err(|e| StampError::encode(format!("'{}': {e}", path.display())))?;
        image::save_buffer_with_format(
            path,
            raster.as_bytes(),
            raster.width(),
            raster.height(),
            image::ColorType::Rgb8,
            format,
        )
        .map_err(|e| StampError::encode(format!("write '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
