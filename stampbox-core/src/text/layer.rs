use kurbo::{Cap, Join, Stroke, StrokeOpts};

use crate::foundation::core::{BezPath, Point, Raster};
use crate::foundation::error::{StampError, StampResult};
use crate::text::font::{TEXT_SCALE, layout_text, stroke_width};
use crate::transform::affine::rotate_about_center;
use crate::watermark::params::WatermarkParams;

const STROKE_TOLERANCE: f64 = 0.05;

/// Render `text` onto a black `width x height` raster at the params' anchor,
/// style, color and thickness. No rotation is applied.
///
/// Edges are anti-aliased; a partially covered pixel holds `color * coverage`.
pub fn render_text_layer(
    width: u32,
    height: u32,
    text: &str,
    params: &WatermarkParams,
) -> StampResult<Raster> {
    let mut layer = Raster::black(width, height)?;
    let width_u16: u16 = width
        .try_into()
        .map_err(|_| StampError::render("text layer width exceeds u16"))?;
    let height_u16: u16 = height
        .try_into()
        .map_err(|_| StampError::render("text layer height exceeds u16"))?;

    let origin = Point::new(params.anchor_x, params.anchor_y);
    let centerline = layout_text(text, params.font_style, TEXT_SCALE, origin)?;
    if centerline.elements().is_empty() {
        return Ok(layer);
    }

    let style = Stroke::new(stroke_width(params.font_style, params.thickness))
        .with_caps(Cap::Round)
        .with_join(Join::Round);
    let outline = kurbo::stroke(
        centerline.iter(),
        &style,
        &StrokeOpts::default(),
        STROKE_TOLERANCE,
    );

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    let c = params.color;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
    ctx.fill_path(&bezpath_to_cpu(&outline));
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    ctx.render_to_pixmap(&mut pixmap);

    // Premultiplied RGBA over transparent is the same as RGB over black.
    for (dst, src) in layer
        .as_bytes_mut()
        .chunks_exact_mut(Raster::CHANNELS)
        .zip(pixmap.data_as_u8_slice().chunks_exact(4))
    {
        dst.copy_from_slice(&src[..3]);
    }
    Ok(layer)
}

/// Render the watermark layer and rotate it about its center by `params.angle_deg`.
pub fn synthesize(
    width: u32,
    height: u32,
    text: &str,
    params: &WatermarkParams,
) -> StampResult<Raster> {
    let layer = render_text_layer(width, height, text, params)?;
    Ok(rotate_about_center(&layer, params.angle_deg))
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/layer.rs"]
mod tests;
