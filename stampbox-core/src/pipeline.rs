use crate::effects::composite::composite;
use crate::foundation::core::Raster;
use crate::foundation::error::StampResult;
use crate::resize::letterbox;
use crate::text::layer::synthesize;
use crate::watermark::random::{WatermarkRng, draw_params};

/// Default watermark text.
pub const DEFAULT_WATERMARK_TEXT: &str = "Desung";

/// Options for one [`process`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOpts {
    /// Side of the square output canvas.
    pub canvas_size: u32,
    pub watermark: bool,
    pub text: String,
    /// Blend strength of the text layer.
    pub alpha: f32,
    pub clean_before_add: bool,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            canvas_size: 750,
            watermark: true,
            text: DEFAULT_WATERMARK_TEXT.to_string(),
            alpha: 0.5,
            clean_before_add: false,
        }
    }
}

/// Letterbox `source` onto a black `target_size` square.
pub fn normalize(source: &Raster, target_size: u32) -> StampResult<Raster> {
    letterbox::normalize(source, target_size)
}

/// Stamp `canvas` with a freshly drawn watermark and return it.
pub fn watermark(
    canvas: Raster,
    text: &str,
    rng: &mut WatermarkRng,
    alpha: f32,
    clean_before_add: bool,
) -> StampResult<Raster> {
    let (w, h) = canvas.dimensions();
    let params = draw_params(rng, text, w, h)?;
    tracing::debug!(?params, "watermark params");
    let layer = synthesize(w, h, text, &params)?;
    composite(canvas, &layer, alpha, clean_before_add)
}

/// Normalize then, if enabled, watermark one image.
#[tracing::instrument(level = "debug", skip(source, rng), fields(src_w = source.width(), src_h = source.height()))]
pub fn process(
    source: &Raster,
    opts: &PipelineOpts,
    rng: &mut WatermarkRng,
) -> StampResult<Raster> {
    let canvas = normalize(source, opts.canvas_size)?;
    if !opts.watermark {
        return Ok(canvas);
    }
    watermark(canvas, &opts.text, rng, opts.alpha, opts.clean_before_add)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
