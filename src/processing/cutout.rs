//! White-background removal and slot-fitting for product photos.
//!
//! Product shots commonly come on a plain white studio background. The
//! cutout pass peels contiguous white regions inward from each of the four
//! image edges (it is deliberately not a flood fill: enclosed white areas,
//! like a white shirt in the middle of the photo, must survive), then
//! resizes the result to its slot and premultiplies for compositing.

use std::sync::Arc;

use image::RgbaImage;

use crate::{assets::store::PreparedImage, foundation::math::premultiply_rgba8_in_place};

#[derive(Clone, Copy, Debug)]
/// Settings for one cutout pass.
pub struct CutoutOpts {
    /// Whether to run edge-trim white removal at all.
    pub remove_white: bool,
    /// Whiteness tolerance as a byte distance from 255: a pixel is "white"
    /// when each of R, G and B is at least `255 - tolerance`.
    pub tolerance: u8,
}

impl Default for CutoutOpts {
    fn default() -> Self {
        Self {
            remove_white: true,
            tolerance: 15,
        }
    }
}

/// Process one decoded photo for compositing into a slot.
///
/// Steps, in order: edge-trim white removal (optional), RGB zeroing under
/// transparent pixels, aspect-preserving Lanczos3 resize into
/// `target_w × target_h` (the result never exceeds the box), and alpha
/// premultiplication. A fully white input becomes fully transparent; that is
/// accepted, not special-cased.
pub fn prepare_item(image: &RgbaImage, target_w: u32, target_h: u32, opts: &CutoutOpts) -> PreparedImage {
    let mut work = image.clone();
    if opts.remove_white {
        trim_white_edges(&mut work, opts.tolerance);
    }
    zero_rgb_where_transparent(&mut work);

    let (w, h) = work.dimensions();
    let (fit_w, fit_h) = fit_dimensions(w, h, target_w, target_h);
    let resized = if (fit_w, fit_h) == (w, h) {
        work
    } else {
        image::imageops::resize(&work, fit_w, fit_h, image::imageops::FilterType::Lanczos3)
    };

    let (out_w, out_h) = resized.dimensions();
    let mut rgba8_premul = resized.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    PreparedImage {
        width: out_w,
        height: out_h,
        rgba8_premul: Arc::new(rgba8_premul),
    }
}

/// Zero the alpha of contiguous white border pixels, scanning inward from
/// all four image edges.
///
/// Each column is scanned top→bottom and bottom→top, each row left→right and
/// right→left; a scan stops at the first non-white pixel, so interior white
/// regions are left opaque.
pub fn trim_white_edges(image: &mut RgbaImage, tolerance: u8) {
    let (w, h) = image.dimensions();
    let floor = 255u8.saturating_sub(tolerance);
    let is_white = |p: &image::Rgba<u8>| p.0[0] >= floor && p.0[1] >= floor && p.0[2] >= floor;

    for x in 0..w {
        for y in 0..h {
            let p = image.get_pixel_mut(x, y);
            if !is_white(p) {
                break;
            }
            p.0[3] = 0;
        }
        for y in (0..h).rev() {
            let p = image.get_pixel_mut(x, y);
            if !is_white(p) {
                break;
            }
            p.0[3] = 0;
        }
    }

    for y in 0..h {
        for x in 0..w {
            let p = image.get_pixel_mut(x, y);
            if !is_white(p) {
                break;
            }
            p.0[3] = 0;
        }
        for x in (0..w).rev() {
            let p = image.get_pixel_mut(x, y);
            if !is_white(p) {
                break;
            }
            p.0[3] = 0;
        }
    }
}

// Avoids fringing when the resampler later averages fully transparent
// neighbors into edge pixels.
fn zero_rgb_where_transparent(image: &mut RgbaImage) {
    for p in image.pixels_mut() {
        if p.0[3] == 0 {
            p.0[0] = 0;
            p.0[1] = 0;
            p.0[2] = 0;
        }
    }
}

/// Compute the aspect-preserving fit of `w × h` into a target box, "max"
/// mode: the longest side meets the box, nothing exceeds it.
fn fit_dimensions(w: u32, h: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    if w == 0 || h == 0 || target_w == 0 || target_h == 0 {
        return (w.min(target_w).max(1), h.min(target_h).max(1));
    }
    let scale = (f64::from(target_w) / f64::from(w)).min(f64::from(target_h) / f64::from(h));
    let fit_w = ((f64::from(w) * scale).round() as u32).clamp(1, target_w);
    let fit_h = ((f64::from(h) * scale).round() as u32).clamp(1, target_h);
    (fit_w, fit_h)
}

#[cfg(test)]
#[path = "../../tests/unit/processing/cutout.rs"]
mod tests;
