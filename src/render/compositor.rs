//! The compositor: one render call turns a request plus geometry into pixels.
//!
//! Drawing goes through a [`vello_cpu::RenderContext`]; prepared images
//! become pixmap paints, text becomes stroked-then-filled glyph runs. The
//! draw order is fixed (background, title, subtitle, items with badges,
//! captions, footer) because later draws land on top of earlier ones.

use std::sync::Arc;

use crate::{
    assets::store::{PreparedAssetStore, PreparedImage},
    composition::model::PinRequest,
    editor::elements::{EditorLayout, NUMBER_MAIN_SIZE, NUMBER_SHADOW_SIZE},
    foundation::core::{aspect_fit, clamp_to, scale_around_center, Canvas, Rect},
    foundation::error::{PinError, PinResult},
    foundation::math::jitter_offsets,
    processing::cutout::{prepare_item, CutoutOpts},
    template::catalog::TemplateDefinition,
    text::fit::{layout_auto_fit, layout_fixed, Align, FitSpec, FittedText},
    text::layout::{ParleyMeasurer, TextBrushRgba8, TextLayoutEngine},
};

/// Horizontal offset of a badge's shadow glyph relative to its main glyph.
const NUMBER_SHADOW_DX: f64 = 6.0;

const TITLE_SPEC: FitSpec = FitSpec {
    max_size: 64.0,
    min_size: 24.0,
    align: Align::Center,
    stroke_width: 4.0,
};

const SUBTITLE_SPEC: FitSpec = FitSpec {
    max_size: 32.0,
    min_size: 24.0,
    align: Align::Center,
    stroke_width: 2.0,
};

const FOOTER_SPEC: FitSpec = FitSpec {
    max_size: 48.0,
    min_size: 18.0,
    align: Align::Center,
    stroke_width: 4.0,
};

/// Stroke width used for caption outlines.
const CAPTION_STROKE: f64 = 2.0;

#[derive(Clone, Debug)]
/// A rendered pin as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default; the `premultiplied` flag
/// makes this explicit at API boundaries. [`crate::save_png`] converts back
/// to straight alpha before encoding.
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Render `request` against a template.
///
/// `y_offsets` supplies one vertical jitter offset per drawn item (drawn
/// count = `min(request.items.len(), template.slots.len())`); passing the
/// same offsets reproduces the exact frame byte-for-byte. Use
/// [`render_seeded`] to derive offsets from a seed instead.
#[tracing::instrument(skip_all, fields(items = request.items.len(), slots = template.slots.len()))]
pub fn render(
    request: &PinRequest,
    template: &TemplateDefinition,
    assets: &PreparedAssetStore,
    y_offsets: &[f64],
) -> PinResult<FrameRgba> {
    let drawn = request.items.len().min(template.slots.len());
    if y_offsets.len() < drawn {
        return Err(PinError::validation(format!(
            "expected {drawn} y offsets, got {}",
            y_offsets.len()
        )));
    }

    let mut r = Renderer::new(assets, template.canvas)?;
    r.draw_background()?;
    r.draw_auto_fit(&request.title, template.title_area, &TITLE_SPEC)?;
    r.draw_auto_fit(&request.subtitle, template.subtitle_area, &SUBTITLE_SPEC)?;

    for i in 0..drawn {
        let Some(decoded) = assets.item(i) else {
            continue;
        };
        let item = &request.items[i];
        let slot = &template.slots[i];
        let dy = y_offsets[i];

        let placed = shift_y(
            scale_around_center(slot.bounds, item.scale * slot.image_scale),
            dy,
        );
        let Some(clamped) = clamp_to(placed, template.safe_area) else {
            continue;
        };

        let opts = CutoutOpts {
            remove_white: item.remove_white,
            tolerance: item.tolerance,
        };
        let prepared = prepare_item(
            decoded,
            clamped.width().round().max(1.0) as u32,
            clamped.height().round().max(1.0) as u32,
            &opts,
        );
        let dest = aspect_fit(clamped, prepared.width, prepared.height);
        r.draw_image(&prepared, dest)?;

        if slot.show_number
            && let Some(number_area) = slot.number_area
        {
            r.draw_badge((i + 1) as u32, number_area, item.number_scale, dy)?;
        }
    }

    for (caption, area) in request.captions.iter().zip(&template.caption_areas) {
        r.draw_caption(&caption.text, *area, caption.size_px)?;
    }

    if request.has_footer()
        && let Some(footer_area) = template.footer_area
    {
        r.draw_auto_fit(&request.footer, footer_area, &FOOTER_SPEC)?;
    }

    r.finish()
}

/// [`render`] with jitter offsets derived from `seed` via
/// [`jitter_offsets`]. The convenience path for callers that want variety
/// between pins but reproducibility for a known seed.
pub fn render_seeded(
    request: &PinRequest,
    template: &TemplateDefinition,
    assets: &PreparedAssetStore,
    seed: u64,
) -> PinResult<FrameRgba> {
    let drawn = request.items.len().min(template.slots.len());
    let offsets = jitter_offsets(seed, drawn);
    render(request, template, assets, &offsets)
}

/// Render `request` with freeform editor geometry instead of a template.
///
/// Every rectangle and font size comes from `layout`; per-element drawing is
/// identical to template mode, but there is no jitter and no safe-area
/// clamping — editor positions are authoritative.
#[tracing::instrument(skip_all, fields(items = request.items.len()))]
pub fn render_with_positions(
    request: &PinRequest,
    assets: &PreparedAssetStore,
    canvas: Canvas,
    layout: &EditorLayout,
) -> PinResult<FrameRgba> {
    let mut r = Renderer::new(assets, canvas)?;
    r.draw_background()?;

    let title_spec = FitSpec {
        max_size: layout.title_size,
        ..TITLE_SPEC
    };
    r.draw_auto_fit(&request.title, layout.title.to_rect(), &title_spec)?;
    let subtitle_spec = FitSpec {
        max_size: layout.subtitle_size,
        ..SUBTITLE_SPEC
    };
    r.draw_auto_fit(&request.subtitle, layout.subtitle.to_rect(), &subtitle_spec)?;

    for element in &layout.images {
        let Some(item) = request.items.get(element.item) else {
            continue;
        };
        let Some(decoded) = assets.item(element.item) else {
            continue;
        };

        let placed = scale_around_center(element.position.to_rect(), item.scale);
        let opts = CutoutOpts {
            remove_white: item.remove_white,
            tolerance: item.tolerance,
        };
        let prepared = prepare_item(
            decoded,
            placed.width().round().max(1.0) as u32,
            placed.height().round().max(1.0) as u32,
            &opts,
        );
        let dest = aspect_fit(placed, prepared.width, prepared.height);
        r.draw_image(&prepared, dest)?;
    }

    for number in &layout.numbers {
        r.draw_badge(number.number, number.bounds(), number.scale, 0.0)?;
    }

    for (caption, position) in request.captions.iter().zip(&layout.captions) {
        r.draw_caption(&caption.text, position.to_rect(), caption.size_px)?;
    }

    if request.has_footer()
        && let Some(footer) = layout.footer
    {
        let footer_spec = FitSpec {
            max_size: layout.footer_size,
            ..FOOTER_SPEC
        };
        r.draw_auto_fit(&request.footer, footer.to_rect(), &footer_spec)?;
    }

    r.finish()
}

fn shift_y(rect: Rect, dy: f64) -> Rect {
    Rect::new(rect.x0, rect.y0 + dy, rect.x1, rect.y1 + dy)
}

/// Per-call drawing state: one vello context, one text engine, the prepared
/// assets the pin draws from.
struct Renderer<'a> {
    ctx: vello_cpu::RenderContext,
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
    assets: &'a PreparedAssetStore,
    canvas: Canvas,
}

impl<'a> Renderer<'a> {
    fn new(assets: &'a PreparedAssetStore, canvas: Canvas) -> PinResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PinError::validation("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PinError::validation("canvas height exceeds u16"))?;

        let font_bytes: Vec<u8> = assets.font_bytes().as_ref().clone();
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);

        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            engine: TextLayoutEngine::new(),
            font,
            assets,
            canvas,
        })
    }

    fn draw_background(&mut self) -> PinResult<()> {
        let bg = self.assets.background().clone();
        let dest = Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        );
        self.draw_image(&bg, dest)
    }

    fn draw_image(&mut self, image: &PreparedImage, dest: Rect) -> PinResult<()> {
        if dest.width() <= 0.0 || dest.height() <= 0.0 || image.width == 0 || image.height == 0 {
            return Ok(());
        }
        let paint = image_paint(image)?;
        let sx = dest.width() / f64::from(image.width);
        let sy = dest.height() / f64::from(image.height);
        self.ctx.set_transform(
            vello_cpu::kurbo::Affine::translate((dest.x0, dest.y0))
                * vello_cpu::kurbo::Affine::scale_non_uniform(sx, sy),
        );
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    fn draw_auto_fit(&mut self, text: &str, rect: Rect, spec: &FitSpec) -> PinResult<()> {
        let font_bytes = Arc::clone(self.assets.font_bytes());
        let fitted = {
            let mut measurer = ParleyMeasurer::new(&mut self.engine, &font_bytes);
            layout_auto_fit(&mut measurer, text, rect, spec)?
        };
        let Some(fitted) = fitted else {
            return Ok(());
        };
        self.draw_outlined(&fitted, rect, spec.align, spec.stroke_width)
    }

    fn draw_caption(&mut self, text: &str, rect: Rect, size_px: f32) -> PinResult<()> {
        let font_bytes = Arc::clone(self.assets.font_bytes());
        let fitted = {
            let mut measurer = ParleyMeasurer::new(&mut self.engine, &font_bytes);
            layout_fixed(&mut measurer, text, rect, size_px)?
        };
        let Some(fitted) = fitted else {
            return Ok(());
        };
        self.draw_outlined(&fitted, rect, Align::Center, CAPTION_STROKE)
    }

    /// Draw a fitted text block as white stroke under black fill, vertically
    /// centered in `rect`. The stroke-first order is what produces the
    /// legible sticker look over busy photo backgrounds.
    fn draw_outlined(
        &mut self,
        fitted: &FittedText,
        rect: Rect,
        align: Align,
        stroke_width: f64,
    ) -> PinResult<()> {
        let font_bytes = Arc::clone(self.assets.font_bytes());
        let layout = self.engine.layout_plain(
            &fitted.text,
            &font_bytes,
            fitted.size_px,
            TextBrushRgba8::BLACK,
            Some(rect.width() as f32),
            align,
        )?;

        let y = rect.y0 + (rect.height() - f64::from(layout.height())) / 2.0;
        let origin = (rect.x0, y);

        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(stroke_width));
        self.draw_glyph_pass(&layout, origin, TextBrushRgba8::WHITE, GlyphPass::Stroke);
        self.draw_glyph_pass(&layout, origin, TextBrushRgba8::BLACK, GlyphPass::Fill);
        Ok(())
    }

    /// Draw a number badge: black shadow glyph (larger, offset right), then
    /// the white main glyph on top. `dy` is the owning image's jitter so
    /// badge and photo move together.
    fn draw_badge(&mut self, number: u32, area: Rect, scale: f64, dy: f64) -> PinResult<()> {
        let digits = number.to_string();
        let font_bytes = Arc::clone(self.assets.font_bytes());

        let shadow_size = NUMBER_SHADOW_SIZE * scale as f32;
        let shadow = self.engine.layout_plain(
            &digits,
            &font_bytes,
            shadow_size,
            TextBrushRgba8::BLACK,
            None,
            Align::Left,
        )?;
        let origin = centered_origin(&shadow, area);
        self.draw_glyph_pass(
            &shadow,
            (origin.0 + NUMBER_SHADOW_DX, origin.1 + dy),
            TextBrushRgba8::BLACK,
            GlyphPass::Fill,
        );

        let main_size = NUMBER_MAIN_SIZE * scale as f32;
        let main = self.engine.layout_plain(
            &digits,
            &font_bytes,
            main_size,
            TextBrushRgba8::WHITE,
            None,
            Align::Left,
        )?;
        let origin = centered_origin(&main, area);
        self.draw_glyph_pass(
            &main,
            (origin.0, origin.1 + dy),
            TextBrushRgba8::WHITE,
            GlyphPass::Fill,
        );
        Ok(())
    }

    fn draw_glyph_pass(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        origin: (f64, f64),
        color: TextBrushRgba8,
        pass: GlyphPass,
    ) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate(origin));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                let builder = self
                    .ctx
                    .glyph_run(&self.font)
                    .font_size(run.run().font_size());
                match pass {
                    GlyphPass::Fill => builder.fill_glyphs(glyphs),
                    GlyphPass::Stroke => builder.stroke_glyphs(glyphs),
                }
            }
        }
    }

    fn finish(mut self) -> PinResult<FrameRgba> {
        let width: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| PinError::validation("canvas width exceeds u16"))?;
        let height: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| PinError::validation("canvas height exceeds u16"))?;

        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

#[derive(Clone, Copy)]
enum GlyphPass {
    Fill,
    Stroke,
}

fn centered_origin(layout: &parley::Layout<TextBrushRgba8>, area: Rect) -> (f64, f64) {
    let x = area.x0 + (area.width() - f64::from(layout.width())) / 2.0;
    let y = area.y0 + (area.height() - f64::from(layout.height())) / 2.0;
    (x, y)
}

fn image_paint(image: &PreparedImage) -> PinResult<vello_cpu::Image> {
    let w: u16 = image
        .width
        .try_into()
        .map_err(|_| PinError::validation("image width exceeds u16"))?;
    let h: u16 = image
        .height
        .try_into()
        .map_err(|_| PinError::validation("image height exceeds u16"))?;
    let expected = (image.width as usize)
        .saturating_mul(image.height as usize)
        .saturating_mul(4);
    if image.rgba8_premul.len() != expected {
        return Err(PinError::validation("prepared image byte length mismatch"));
    }

    // Pixmap stores PremulRgba8; prepared bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        image.width as usize * image.height as usize,
    );
    for px in image.rgba8_premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
