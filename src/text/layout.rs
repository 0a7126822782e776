use crate::{
    foundation::error::{PinError, PinResult},
    text::fit::{Align, TextMeasurer, TextMetrics},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    /// Opaque black, the fill color of every pin text element.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    /// Opaque white, the stroke/badge color.
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out plain text using provided font bytes and styling.
    ///
    /// When `max_width_px` is given, lines break at that width and align per
    /// `align` inside it; otherwise the text stays on a single line.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
        align: Align,
    ) -> PinResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PinError::validation("text size_px must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PinError::resource_load("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PinError::resource_load("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            let alignment = match align {
                Align::Left => parley::Alignment::Start,
                Align::Center => parley::Alignment::Center,
            };
            layout.align(Some(w), alignment, parley::AlignmentOptions::default());
        } else {
            layout.break_all_lines(None);
        }

        Ok(layout)
    }
}

/// [`TextMeasurer`] backed by the Parley engine and one concrete font.
pub struct ParleyMeasurer<'a> {
    engine: &'a mut TextLayoutEngine,
    font_bytes: &'a [u8],
}

impl<'a> ParleyMeasurer<'a> {
    /// Borrow an engine and font for a measurement pass.
    pub fn new(engine: &'a mut TextLayoutEngine, font_bytes: &'a [u8]) -> Self {
        Self { engine, font_bytes }
    }
}

impl TextMeasurer for ParleyMeasurer<'_> {
    fn measure(
        &mut self,
        text: &str,
        size_px: f32,
        max_width: Option<f32>,
    ) -> PinResult<TextMetrics> {
        let layout = self.engine.layout_plain(
            text,
            self.font_bytes,
            size_px,
            TextBrushRgba8::BLACK,
            max_width,
            Align::Left,
        )?;
        Ok(TextMetrics {
            width: layout.width(),
            height: layout.height(),
        })
    }
}
