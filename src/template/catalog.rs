use crate::{
    foundation::core::{Canvas, Rect},
    foundation::error::{PinError, PinResult},
};

/// Canvas width shared by every template in the catalog.
pub const CANVAS_WIDTH: u32 = 1000;
/// Canvas height shared by every template in the catalog.
pub const CANVAS_HEIGHT: u32 = 1500;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Immutable slot-geometry description of one pin layout.
///
/// Templates are keyed by item count and selected by exact match via
/// [`template_for`]; each is hand-tuned data, not computed. They can also be
/// loaded from JSON through Serde for external template files.
pub struct TemplateDefinition {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Rectangle the title is auto-fit into.
    pub title_area: Rect,
    /// Rectangle the subtitle is auto-fit into.
    pub subtitle_area: Rect,
    /// Rectangle the footer is auto-fit into, when the layout reserves one.
    pub footer_area: Option<Rect>,
    /// Zone all item-image placements are clamped to after scale and jitter.
    pub safe_area: Rect,
    /// Ordered image slots; one item image is fit into each.
    pub slots: Vec<TemplateSlot>,
    /// Ordered caption rectangles.
    pub caption_areas: Vec<Rect>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One image slot within a template.
pub struct TemplateSlot {
    /// Slot bounds on the canvas.
    pub bounds: Rect,
    /// Default scale applied to images in this slot.
    pub image_scale: f64,
    /// Whether a number badge is drawn over this slot.
    pub show_number: bool,
    /// Rectangle the badge is centered in, when shown.
    pub number_area: Option<Rect>,
}

/// Look up the layout for `item_count` images.
///
/// Supported counts are exactly 4 through 8; anything else fails with
/// [`PinError::UnsupportedItemCount`]. When `with_footer` is false the
/// footer area is dropped and the safe area extends toward the canvas
/// bottom.
pub fn template_for(item_count: usize, with_footer: bool) -> PinResult<TemplateDefinition> {
    let (slots, caption_areas) = match item_count {
        4 => four_item_layout(),
        5 => five_item_layout(),
        6 => six_item_layout(),
        7 => seven_item_layout(),
        8 => eight_item_layout(),
        other => return Err(PinError::UnsupportedItemCount(other)),
    };

    Ok(TemplateDefinition {
        canvas: Canvas {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        },
        title_area: area(25.0, 30.0, 950.0, 125.0),
        subtitle_area: area(25.0, 120.0, 950.0, 150.0),
        footer_area: with_footer.then(|| area(25.0, 1325.0, 950.0, 140.0)),
        safe_area: if with_footer {
            area(0.0, 270.0, 1000.0, 1060.0)
        } else {
            area(0.0, 270.0, 1000.0, 1200.0)
        },
        slots,
        caption_areas,
    })
}

/// Build a rect from `(x, y, width, height)`, the form the layout tables are
/// tuned in.
fn area(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

fn slot(bounds: Rect, number_area: Rect) -> TemplateSlot {
    TemplateSlot {
        bounds,
        image_scale: 1.0,
        show_number: true,
        number_area: Some(number_area),
    }
}

fn four_item_layout() -> (Vec<TemplateSlot>, Vec<Rect>) {
    (
        vec![
            slot(area(100.0, 300.0, 400.0, 500.0), area(370.0, 370.0, 80.0, 80.0)),
            slot(area(550.0, 300.0, 400.0, 500.0), area(820.0, 375.0, 80.0, 80.0)),
            slot(area(100.0, 800.0, 400.0, 500.0), area(370.0, 870.0, 80.0, 80.0)),
            slot(area(550.0, 800.0, 400.0, 500.0), area(820.0, 875.0, 80.0, 80.0)),
        ],
        vec![
            area(25.0, 270.0, 925.0, 30.0),
            area(250.0, 740.0, 925.0, 30.0),
            area(25.0, 1300.0, 925.0, 30.0),
        ],
    )
}

fn five_item_layout() -> (Vec<TemplateSlot>, Vec<Rect>) {
    (
        vec![
            slot(area(25.0, 280.0, 360.0, 420.0), area(275.0, 300.0, 80.0, 80.0)),
            slot(area(615.0, 280.0, 360.0, 420.0), area(865.0, 300.0, 80.0, 80.0)),
            slot(area(300.0, 540.0, 360.0, 520.0), area(620.0, 560.0, 90.0, 90.0)),
            slot(area(25.0, 900.0, 360.0, 420.0), area(275.0, 1000.0, 80.0, 80.0)),
            slot(area(615.0, 900.0, 360.0, 420.0), area(865.0, 1000.0, 80.0, 80.0)),
        ],
        vec![
            area(25.0, 250.0, 925.0, 30.0),
            area(580.0, 720.0, 400.0, 30.0),
            area(25.0, 1300.0, 925.0, 30.0),
        ],
    )
}

fn six_item_layout() -> (Vec<TemplateSlot>, Vec<Rect>) {
    (
        vec![
            slot(area(25.0, 300.0, 310.0, 450.0), area(250.0, 330.0, 85.0, 85.0)),
            slot(area(345.0, 300.0, 310.0, 450.0), area(570.0, 330.0, 85.0, 85.0)),
            slot(area(665.0, 300.0, 310.0, 450.0), area(890.0, 330.0, 85.0, 85.0)),
            slot(area(25.0, 810.0, 310.0, 470.0), area(250.0, 840.0, 85.0, 85.0)),
            slot(area(345.0, 810.0, 310.0, 470.0), area(570.0, 840.0, 85.0, 85.0)),
            slot(area(665.0, 810.0, 310.0, 470.0), area(890.0, 840.0, 85.0, 85.0)),
        ],
        vec![
            area(25.0, 270.0, 925.0, 30.0),
            area(25.0, 770.0, 925.0, 30.0),
            area(25.0, 1300.0, 925.0, 30.0),
        ],
    )
}

// Seven items: a row of three over a row of four, compact badges.
fn seven_item_layout() -> (Vec<TemplateSlot>, Vec<Rect>) {
    (
        vec![
            slot(area(55.0, 310.0, 280.0, 410.0), area(255.0, 330.0, 70.0, 70.0)),
            slot(area(345.0, 310.0, 280.0, 410.0), area(545.0, 330.0, 70.0, 70.0)),
            slot(area(635.0, 310.0, 280.0, 410.0), area(835.0, 330.0, 70.0, 70.0)),
            slot(area(25.0, 780.0, 230.0, 500.0), area(185.0, 800.0, 70.0, 70.0)),
            slot(area(265.0, 780.0, 230.0, 500.0), area(425.0, 800.0, 70.0, 70.0)),
            slot(area(505.0, 780.0, 230.0, 500.0), area(665.0, 800.0, 70.0, 70.0)),
            slot(area(745.0, 780.0, 230.0, 500.0), area(905.0, 800.0, 70.0, 70.0)),
        ],
        vec![
            area(25.0, 270.0, 925.0, 30.0),
            area(25.0, 740.0, 925.0, 30.0),
            area(25.0, 1300.0, 925.0, 30.0),
        ],
    )
}

fn eight_item_layout() -> (Vec<TemplateSlot>, Vec<Rect>) {
    (
        vec![
            slot(area(25.0, 320.0, 225.0, 420.0), area(180.0, 340.0, 70.0, 70.0)),
            slot(area(265.0, 320.0, 225.0, 420.0), area(420.0, 340.0, 70.0, 70.0)),
            slot(area(505.0, 320.0, 225.0, 420.0), area(660.0, 340.0, 70.0, 70.0)),
            slot(area(745.0, 320.0, 225.0, 420.0), area(900.0, 340.0, 70.0, 70.0)),
            slot(area(25.0, 860.0, 225.0, 420.0), area(180.0, 880.0, 70.0, 70.0)),
            slot(area(265.0, 860.0, 225.0, 420.0), area(420.0, 880.0, 70.0, 70.0)),
            slot(area(505.0, 860.0, 225.0, 420.0), area(660.0, 880.0, 70.0, 70.0)),
            slot(area(745.0, 860.0, 225.0, 420.0), area(900.0, 880.0, 70.0, 70.0)),
        ],
        vec![
            area(25.0, 270.0, 925.0, 30.0),
            area(25.0, 780.0, 925.0, 30.0),
            area(25.0, 1300.0, 925.0, 30.0),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/template/catalog.rs"]
mod tests;
