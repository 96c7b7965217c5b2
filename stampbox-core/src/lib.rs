//! stampbox turns a directory of arbitrary images into uniform square canvases.
//!
//! Each image goes through a two stage pipeline:
//!
//! 1. **Letterbox**: scale with Lanczos resampling so the image fits the canvas,
//!    keep its aspect ratio and pad the rest with black ([`normalize`]).
//! 2. **Watermark** (optional): draw random style, thickness, color, angle and
//!    position from a seeded [`WatermarkRng`], render the text with a built-in
//!    stroke font, rotate it about the canvas center and add it onto the canvas
//!    ([`watermark`]).
//!
//! [`BatchDriver`] walks an input tree, mirrors it under an output root and runs
//! [`process`] on every decodable file. Per-image failures are logged and counted,
//! never fatal to a run.
#![forbid(unsafe_code)]

mod assets;
mod batch;
mod config;
mod effects;
mod foundation;
mod pipeline;
mod resize;
mod text;
mod watermark;

/// Shared transform helpers (rotation, affine warps).
pub mod transform;

pub use assets::codec::{FsCodec, ImageCodec};
pub use batch::driver::{BatchDriver, BatchOpts, BatchReport, default_output_root};
pub use batch::naming::{SUFFIX_ALPHABET, SuffixGenerator, randomized_file_name};
pub use config::StampConfig;
pub use effects::composite::{add_weighted_in_place, apply_mask_in_place, composite, compute_mask};
pub use foundation::core::{Affine, BezPath, PlacementRect, Point, Raster, Rect, Rgb8, Vec2};
pub use foundation::error::{StampError, StampResult};
pub use pipeline::{DEFAULT_WATERMARK_TEXT, PipelineOpts, normalize, process, watermark};
pub use resize::letterbox::{compute_placement, letterbox_into};
pub use text::font::{
    FontStyle, PX_PER_UNIT, StyleMetrics, TEXT_SCALE, TextExtent, has_glyph, layout_text,
    stroke_width, text_extent,
};
pub use text::layer::{render_text_layer, synthesize};
pub use watermark::params::{PositionBounds, WatermarkParams};
pub use watermark::random::{WatermarkRng, draw_anchor, draw_params};
