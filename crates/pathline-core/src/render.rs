// File: crates/pathline-core/src/render.rs
// Summary: Headless Skia rendering of a chart (axes, line, segment overlay, marker) to PNG or RGBA.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::animate::Clock;
use crate::axis::{Axis, AxisOrient};
use crate::chart::LineChart;
use crate::path::{PathCommand, SampledPath};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

const TICK_SIZE: f32 = 6.0;
const LABEL_SIZE: f32 = 10.0;
const STATUS_SIZE: f32 = 12.0;
const LINE_WIDTH: f32 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Tick labels and status text; off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), draw_labels: true }
    }
}

impl<C: Clock> LineChart<C> {
    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8; returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let layout = self.config().layout;
        let mut surface = skia::surfaces::raster_n32_premul((layout.width, layout.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        // plot coordinates: scales map into the inner area
        canvas.save();
        canvas.translate((layout.insets.left as f32, layout.insets.top as f32));

        draw_axis(canvas, &self.x_axis(), layout.inner_height() as f32, &opts.theme, shaper.as_ref());
        draw_axis(canvas, &self.y_axis(), 0.0, &opts.theme, shaper.as_ref());

        draw_stroke(canvas, self.line_path(), opts.theme.line_stroke);
        if self.show_segment() {
            draw_stroke(canvas, self.segment_path(), opts.theme.segment_stroke);
        }
        draw_marker(canvas, self, &opts.theme);
        canvas.restore();

        if let Some(shaper) = shaper.as_ref() {
            let x = (layout.width - layout.insets.right as i32) as f32 - 4.0;
            let y = layout.insets.top as f32 + STATUS_SIZE + 2.0;
            shaper.draw(canvas, self.status(), x, y, STATUS_SIZE, opts.theme.status_text, Anchor::End);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Convert measured path commands to a Skia path.
pub fn to_skia_path(path: &SampledPath) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to(<(f32, f32)>::from(p)); }
            PathCommand::LineTo(p) => { out.line_to(<(f32, f32)>::from(p)); }
            PathCommand::CubicTo(c1, c2, p) => {
                out.cubic_to(<(f32, f32)>::from(c1), <(f32, f32)>::from(c2), <(f32, f32)>::from(p));
            }
        }
    }
    out
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_stroke(canvas: &skia::Canvas, path: &SampledPath, color: skia::Color) {
    if path.is_empty() {
        return;
    }
    canvas.draw_path(&to_skia_path(path), &stroke_paint(color, LINE_WIDTH));
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, offset: f32, theme: &Theme, shaper: Option<&TextShaper>) {
    let line = stroke_paint(theme.axis_line, 1.0);
    let tick = stroke_paint(theme.tick, 1.0);
    let (r0, r1) = axis.scale.range();
    match axis.orient {
        AxisOrient::Bottom => {
            canvas.draw_line((r0 as f32, offset), (r1 as f32, offset), &line);
            for (px, label) in axis.labelled_ticks() {
                let x = px as f32;
                canvas.draw_line((x, offset), (x, offset + TICK_SIZE), &tick);
                if let Some(shaper) = shaper {
                    shaper.draw(canvas, &label, x, offset + TICK_SIZE + LABEL_SIZE + 1.0, LABEL_SIZE, theme.axis_label, Anchor::Middle);
                }
            }
        }
        AxisOrient::Left => {
            canvas.draw_line((offset, r0 as f32), (offset, r1 as f32), &line);
            for (py, label) in axis.labelled_ticks() {
                let y = py as f32;
                canvas.draw_line((offset - TICK_SIZE, y), (offset, y), &tick);
                if let Some(shaper) = shaper {
                    shaper.draw(canvas, &label, offset - TICK_SIZE - 2.0, y + LABEL_SIZE * 0.35, LABEL_SIZE, theme.axis_label, Anchor::End);
                }
            }
        }
    }
}

fn draw_marker<C: Clock>(canvas: &skia::Canvas, chart: &LineChart<C>, theme: &Theme) {
    let p = chart.marker();
    let r = chart.config().marker_radius;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker_fill);

    let center: (f32, f32) = p.into();
    canvas.draw_circle(center, r, &fill);
    canvas.draw_circle(center, r, &stroke_paint(theme.marker_stroke, LINE_WIDTH));
}
