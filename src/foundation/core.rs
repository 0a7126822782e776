pub use kurbo::{Point, Rect, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Scale `rect` by `factor` around its own center.
///
/// A factor of 1.0 returns the rect unchanged; 2.0 doubles both dimensions
/// while keeping the center fixed.
pub fn scale_around_center(rect: Rect, factor: f64) -> Rect {
    let w = rect.width() * factor;
    let h = rect.height() * factor;
    let c = rect.center();
    Rect::new(c.x - w / 2.0, c.y - h / 2.0, c.x + w / 2.0, c.y + h / 2.0)
}

/// Fit content of `content_w × content_h` pixels into `outer`, preserving
/// aspect ratio and centering on both axes.
pub fn aspect_fit(outer: Rect, content_w: u32, content_h: u32) -> Rect {
    if content_w == 0 || content_h == 0 {
        return Rect::new(outer.center().x, outer.center().y, outer.center().x, outer.center().y);
    }
    let scale = (outer.width() / f64::from(content_w)).min(outer.height() / f64::from(content_h));
    let w = f64::from(content_w) * scale;
    let h = f64::from(content_h) * scale;
    let x = outer.x0 + (outer.width() - w) / 2.0;
    let y = outer.y0 + (outer.height() - h) / 2.0;
    Rect::new(x, y, x + w, y + h)
}

/// Intersect `rect` with `bounds`, returning `None` when the intersection has
/// no area.
pub fn clamp_to(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clamped = rect.intersect(bounds);
    if clamped.width() <= 0.0 || clamped.height() <= 0.0 {
        return None;
    }
    Some(clamped)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
