use super::*;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const RED: [u8; 4] = [200, 30, 30, 255];

fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba(px))
}

/// White border, solid red ring, white interior square.
fn bordered_with_white_core(size: u32) -> RgbaImage {
    let mut img = solid(size, size, WHITE);
    let ring0 = size / 4;
    let ring1 = size - size / 4;
    for y in ring0..ring1 {
        for x in ring0..ring1 {
            img.put_pixel(x, y, image::Rgba(RED));
        }
    }
    let core0 = ring0 + 2;
    let core1 = ring1 - 2;
    for y in core0..core1 {
        for x in core0..core1 {
            img.put_pixel(x, y, image::Rgba(WHITE));
        }
    }
    img
}

#[test]
fn trim_strips_border_but_keeps_enclosed_white() {
    let mut img = bordered_with_white_core(16);
    trim_white_edges(&mut img, 15);

    // Border pixels are cleared...
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(15, 15).0[3], 0);
    assert_eq!(img.get_pixel(8, 0).0[3], 0);
    // ...the ring is untouched...
    assert_eq!(img.get_pixel(4, 8).0[3], 255);
    // ...and the enclosed white core stays opaque: this is an edge peel,
    // not a flood fill.
    assert_eq!(img.get_pixel(8, 8).0, WHITE);
}

#[test]
fn trim_respects_tolerance() {
    let near_white = [245u8, 244, 246, 255];
    let mut img = solid(4, 4, near_white);
    trim_white_edges(&mut img, 15);
    assert!(img.pixels().all(|p| p.0[3] == 0), "within tolerance, all trimmed");

    let mut img = solid(4, 4, near_white);
    trim_white_edges(&mut img, 5);
    assert!(img.pixels().all(|p| p.0[3] == 255), "outside tolerance, untouched");
}

#[test]
fn fully_white_image_becomes_fully_transparent() {
    let img = solid(8, 8, WHITE);
    let prepared = prepare_item(&img, 8, 8, &CutoutOpts::default());
    assert!(prepared.rgba8_premul.iter().all(|&b| b == 0));
}

#[test]
fn prepared_pixels_are_premultiplied_with_zeroed_fringe() {
    let mut img = solid(3, 3, RED);
    // A white top edge that gets trimmed.
    for x in 0..3 {
        img.put_pixel(x, 0, image::Rgba(WHITE));
    }
    let prepared = prepare_item(&img, 3, 3, &CutoutOpts::default());
    let px = |x: usize, y: usize| {
        let i = (y * 3 + x) * 4;
        &prepared.rgba8_premul[i..i + 4]
    };
    assert_eq!(px(1, 0), &[0, 0, 0, 0], "trimmed pixel fully zeroed");
    assert_eq!(px(1, 1), &RED, "opaque pixel unchanged by premultiply");
}

#[test]
fn resize_fits_the_box_and_preserves_aspect() {
    let img = solid(200, 100, RED);
    let prepared = prepare_item(&img, 80, 80, &CutoutOpts { remove_white: false, tolerance: 15 });
    assert_eq!((prepared.width, prepared.height), (80, 40));

    let img = solid(100, 400, RED);
    let prepared = prepare_item(&img, 90, 120, &CutoutOpts { remove_white: false, tolerance: 15 });
    assert_eq!((prepared.width, prepared.height), (30, 120));
}

#[test]
fn resize_upscales_to_the_box_but_never_past_it() {
    let img = solid(10, 20, RED);
    let prepared = prepare_item(&img, 100, 100, &CutoutOpts { remove_white: false, tolerance: 15 });
    assert_eq!((prepared.width, prepared.height), (50, 100));
    assert!(prepared.width <= 100 && prepared.height <= 100);
}

#[test]
fn interior_survives_the_full_pipeline() {
    let img = bordered_with_white_core(32);
    let prepared = prepare_item(&img, 32, 32, &CutoutOpts::default());
    let alpha = |x: usize, y: usize| prepared.rgba8_premul[(y * 32 + x) * 4 + 3];
    assert_eq!(alpha(0, 0), 0, "border transparent");
    assert_eq!(alpha(16, 16), 255, "enclosed white core still opaque");
}
