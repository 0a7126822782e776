//! Pincraft composes fixed-canvas promotional "pin" images on the CPU.
//!
//! A pin is built from a [`PinRequest`] (title, subtitle, footer, captions and
//! 4–8 product photos) and a [`TemplateDefinition`] (hand-tuned slot geometry
//! for each supported item count), rendered over one of two background images
//! into a single 1000×1500 premultiplied-RGBA frame.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: [`validate`] checks the request shape before any work.
//! 2. **Prepare**: [`PreparedAssetStore::prepare`] front-loads all IO
//!    (background, font, item photos) so rendering stays IO-free.
//! 3. **Render**: [`render`] draws background, auto-fit text, cutout-processed
//!    item images with per-slot jitter and safe-area clamping, numbered
//!    badges and captions, in a fixed order, into a [`FrameRgba`].
//! 4. **Save** (optional): [`save_png`] writes the frame as a PNG file.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: rendering the same request, template and
//!   jitter offsets twice produces byte-identical frames. The core [`render`]
//!   API takes offsets explicitly; [`render_seeded`] is the convenience
//!   wrapper with a documented seeding strategy.
//! - **No IO in the renderer**: external IO is front-loaded in
//!   [`PreparedAssetStore`].
//! - **Premultiplied RGBA8** end-to-end: prepared images and output frames
//!   carry premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod editor;
mod foundation;
mod output;
mod processing;
mod render;
mod template;
mod text;

pub use assets::decode::{decode_image, decode_rgba};
pub use assets::store::{AssetConfig, PreparedAssetStore, PreparedImage};
pub use composition::model::{
    Background, CaptionItem, ItemImage, PinRequest, CAPTION_SIZES, DEFAULT_CAPTION_SIZE,
};
pub use composition::validate::validate;
pub use editor::elements::{
    EditorImageElement, EditorLayout, EditorNumberElement, ElementPosition,
};
pub use foundation::core::{aspect_fit, clamp_to, scale_around_center, Canvas, Point, Rect, Vec2};
pub use foundation::error::{PinError, PinResult};
pub use foundation::math::jitter_offsets;
pub use output::save::{sanitize_file_name, save_png};
pub use processing::cutout::{prepare_item, trim_white_edges, CutoutOpts};
pub use render::compositor::{render, render_seeded, render_with_positions, FrameRgba};
pub use template::catalog::{template_for, TemplateDefinition, TemplateSlot};
pub use text::fit::{layout_auto_fit, layout_fixed, Align, FitSpec, FittedText, TextMeasurer, TextMetrics};
pub use text::layout::{ParleyMeasurer, TextBrushRgba8, TextLayoutEngine};
