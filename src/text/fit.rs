//! Auto-fit and fixed-size text planning.
//!
//! Fitting is separated from rasterization: these functions only decide the
//! final font size and (possibly ellipsis-truncated) text, behind a
//! [`TextMeasurer`] seam so the shrink loop is testable without fonts. The
//! compositor turns the resulting [`FittedText`] into stroked glyph runs.

use crate::{foundation::core::Rect, foundation::error::PinResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Horizontal alignment of a text block within its rectangle.
pub enum Align {
    /// Align lines to the left edge.
    Left,
    /// Center lines horizontally.
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Measured extents of a laid-out text block.
pub struct TextMetrics {
    /// Widest line width in pixels.
    pub width: f32,
    /// Total block height in pixels.
    pub height: f32,
}

/// Measures text blocks at a given size, optionally wrapped to a width.
///
/// The production implementation is [`crate::ParleyMeasurer`]; tests use
/// synthetic measurers with exactly controllable metrics.
pub trait TextMeasurer {
    /// Measure `text` at `size_px`, wrapped to `max_width` when given.
    fn measure(&mut self, text: &str, size_px: f32, max_width: Option<f32>)
        -> PinResult<TextMetrics>;
}

#[derive(Clone, Copy, Debug)]
/// Sizing and styling bounds for one auto-fit text element.
pub struct FitSpec {
    /// Largest size tried.
    pub max_size: f32,
    /// Smallest size accepted before ellipsis truncation kicks in.
    pub min_size: f32,
    /// Horizontal alignment inside the target rect.
    pub align: Align,
    /// Outline stroke width drawn under the fill.
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// The outcome of a fitting pass: what to draw and at which size.
pub struct FittedText {
    /// Text to lay out, possibly truncated with a trailing ellipsis.
    pub text: String,
    /// Chosen font size in pixels.
    pub size_px: f32,
}

/// Find the largest font size in `[min_size, max_size]` at which `text`,
/// wrapped to `rect`'s width, fits `rect`'s height.
///
/// The size is decremented in steps of 1.0 from the maximum. If the text
/// still overflows at the minimum size it is truncated to a single ellipsed
/// line instead. Empty or whitespace-only text fits trivially: the result is
/// `None` and nothing should be drawn.
pub fn layout_auto_fit(
    measurer: &mut dyn TextMeasurer,
    text: &str,
    rect: Rect,
    spec: &FitSpec,
) -> PinResult<Option<FittedText>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let max_width = rect.width() as f32;
    let mut size = spec.max_size;
    loop {
        let metrics = measurer.measure(text, size, Some(max_width))?;
        if metrics.height <= rect.height() as f32 {
            return Ok(Some(FittedText {
                text: text.to_string(),
                size_px: size,
            }));
        }
        if size - 1.0 < spec.min_size {
            break;
        }
        size -= 1.0;
    }

    let truncated = truncate_to_width(measurer, text, spec.min_size, max_width)?;
    Ok(Some(FittedText {
        text: truncated,
        size_px: spec.min_size,
    }))
}

/// Plan `text` at a fixed size, ellipsis-truncating when it overflows the
/// rect width. Used for captions, where the caller already picked the size.
pub fn layout_fixed(
    measurer: &mut dyn TextMeasurer,
    text: &str,
    rect: Rect,
    size_px: f32,
) -> PinResult<Option<FittedText>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let max_width = rect.width() as f32;
    let metrics = measurer.measure(text, size_px, None)?;
    let text = if metrics.width <= max_width {
        text.to_string()
    } else {
        truncate_to_width(measurer, text, size_px, max_width)?
    };
    Ok(Some(FittedText { text, size_px }))
}

/// Drop characters from the end until `text…` fits `max_width` on one line.
fn truncate_to_width(
    measurer: &mut dyn TextMeasurer,
    text: &str,
    size_px: f32,
    max_width: f32,
) -> PinResult<String> {
    let mut chars: Vec<char> = text.trim_end().chars().collect();
    while !chars.is_empty() {
        let candidate: String = chars.iter().collect::<String>() + "…";
        let metrics = measurer.measure(&candidate, size_px, None)?;
        if metrics.width <= max_width {
            return Ok(candidate);
        }
        chars.pop();
    }
    Ok("…".to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
