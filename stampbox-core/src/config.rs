use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::batch::driver::BatchOpts;
use crate::foundation::error::{StampError, StampResult};
use crate::pipeline::{DEFAULT_WATERMARK_TEXT, PipelineOpts};

/// User-facing run configuration, read from JSON with camelCase keys.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct StampConfig {
    /// Blend strength of the watermark layer, in `[0, 1]`.
    pub alpha: f32,
    /// Side of the square output canvas.
    pub img_size: u32,
    pub need_watermark: bool,
    /// Keep only black canvas pixels before adding the text layer.
    pub clean_before_add: bool,
    /// Overwrite existing outputs. Has no effect with `random_naming`.
    pub replace_old_file: bool,
    pub random_naming: bool,
    pub watermark_text: String,
    pub suffix_len: usize,
    /// Fixed seed for both generators. `None` seeds from the clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            img_size: 750,
            need_watermark: true,
            clean_before_add: false,
            replace_old_file: false,
            random_naming: true,
            watermark_text: DEFAULT_WATERMARK_TEXT.to_string(),
            suffix_len: 3,
            seed: None,
        }
    }
}

impl StampConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StampResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StampError::invalid_input(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StampResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StampError::invalid_input(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> StampResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(StampError::invalid_input(format!(
                "alpha must be finite and within [0, 1], got {}",
                self.alpha
            )));
        }
        if self.img_size == 0 || self.img_size > u32::from(u16::MAX) {
            return Err(StampError::invalid_input(format!(
                "imgSize must be within 1..={}, got {}",
                u16::MAX,
                self.img_size
            )));
        }
        if self.need_watermark && self.watermark_text.trim().is_empty() {
            return Err(StampError::invalid_input("watermarkText must be non-empty"));
        }
        if self.random_naming && self.suffix_len == 0 {
            return Err(StampError::invalid_input(
                "suffixLen must be > 0 when randomNaming is on",
            ));
        }
        Ok(())
    }

    pub fn pipeline_opts(&self) -> PipelineOpts {
        PipelineOpts {
            canvas_size: self.img_size,
            watermark: self.need_watermark,
            text: self.watermark_text.clone(),
            alpha: self.alpha,
            clean_before_add: self.clean_before_add,
        }
    }

    /// Driver options; random naming forces `replace_old_file` off.
    pub fn batch_opts(&self) -> BatchOpts {
        BatchOpts {
            pipeline: self.pipeline_opts(),
            replace_old_file: self.replace_old_file && !self.random_naming,
            random_naming: self.random_naming,
            ..BatchOpts::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
