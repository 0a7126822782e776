//! Freeform positioning overlay for the interactive editor.
//!
//! The editor lets a user drag every element of a pin independently; the
//! resulting geometry is handed to [`crate::render_with_positions`] instead
//! of a template lookup. Elements reference their backing request data by
//! index into the owning collections, never by pointer, so the overlay stays
//! a plain serializable value.

use crate::{
    composition::model::PinRequest,
    foundation::core::Rect,
    template::catalog::TemplateDefinition,
};

/// Base font size of a badge's white main glyph at scale 1.0.
pub const NUMBER_MAIN_SIZE: f32 = 64.0;
/// Base font size of a badge's black shadow glyph at scale 1.0.
pub const NUMBER_SHADOW_SIZE: f32 = 72.0;
/// Base box size of a draggable badge element at scale 1.0.
pub const NUMBER_BOX_SIZE: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A draggable element's position and size on the editor canvas.
pub struct ElementPosition {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Element width.
    pub width: f64,
    /// Element height.
    pub height: f64,
}

impl ElementPosition {
    /// Build a position from explicit coordinates.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a position from a [`Rect`].
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Convert to a [`Rect`] for the renderer.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A draggable image element, backed by one request item.
pub struct EditorImageElement {
    /// 1-based slot number shown in the editor.
    pub slot_number: usize,
    /// Current position and size on the canvas.
    pub position: ElementPosition,
    /// Index of the backing [`crate::ItemImage`] in `PinRequest::items`.
    pub item: usize,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A draggable number-badge element, tied to an image element.
pub struct EditorNumberElement {
    /// The 1-based number the badge displays.
    pub number: u32,
    /// Left edge of the badge box.
    pub x: f64,
    /// Top edge of the badge box.
    pub y: f64,
    /// Scale multiplier for the badge glyphs and box.
    pub scale: f64,
    /// Index of the associated element in `EditorLayout::images`.
    pub image: usize,
}

impl EditorNumberElement {
    /// Badge box size at the current scale.
    pub fn box_size(&self) -> f64 {
        NUMBER_BOX_SIZE * self.scale
    }

    /// Badge bounds at the current scale.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.box_size(), self.y + self.box_size())
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Complete freeform geometry for one render call.
pub struct EditorLayout {
    /// Title block position.
    pub title: ElementPosition,
    /// Subtitle block position.
    pub subtitle: ElementPosition,
    /// Footer block position, when a footer is shown.
    pub footer: Option<ElementPosition>,
    /// Caption block positions.
    pub captions: Vec<ElementPosition>,
    /// Image elements, one per drawn item.
    pub images: Vec<EditorImageElement>,
    /// Badge elements.
    pub numbers: Vec<EditorNumberElement>,
    /// Title font size (acts as the auto-fit maximum).
    pub title_size: f32,
    /// Subtitle font size (acts as the auto-fit maximum).
    pub subtitle_size: f32,
    /// Footer font size (acts as the auto-fit maximum).
    pub footer_size: f32,
}

impl EditorLayout {
    /// Seed a freeform layout from a template, one image/badge element per
    /// drawn item.
    pub fn from_template(template: &TemplateDefinition, request: &PinRequest) -> Self {
        let count = request.items.len().min(template.slots.len());
        let mut images = Vec::with_capacity(count);
        let mut numbers = Vec::new();
        for (i, slot) in template.slots.iter().take(count).enumerate() {
            images.push(EditorImageElement {
                slot_number: i + 1,
                position: ElementPosition::from_rect(slot.bounds),
                item: i,
            });
            if slot.show_number
                && let Some(num_area) = slot.number_area
            {
                numbers.push(EditorNumberElement {
                    number: (i + 1) as u32,
                    x: num_area.x0,
                    y: num_area.y0,
                    scale: request.items[i].number_scale,
                    image: i,
                });
            }
        }

        Self {
            title: ElementPosition::from_rect(template.title_area),
            subtitle: ElementPosition::from_rect(template.subtitle_area),
            footer: template.footer_area.map(ElementPosition::from_rect),
            captions: template
                .caption_areas
                .iter()
                .map(|r| ElementPosition::from_rect(*r))
                .collect(),
            images,
            numbers,
            title_size: 64.0,
            subtitle_size: 32.0,
            footer_size: 48.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/elements.rs"]
mod tests;
