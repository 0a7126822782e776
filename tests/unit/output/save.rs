use super::*;

#[test]
fn sanitize_strips_invalid_characters() {
    assert_eq!(
        sanitize_file_name(r#"Tiny: Closet / Big * Wardrobe?"#, 199),
        "Tiny Closet Big Wardrobe"
    );
}

#[test]
fn sanitize_trims_trailing_periods_and_whitespace() {
    assert_eq!(sanitize_file_name("  My Pin... ", 199), "My Pin");
}

#[test]
fn sanitize_collapses_space_runs() {
    assert_eq!(sanitize_file_name("a   b\t\tc", 199), "a b c");
}

#[test]
fn sanitize_truncates_to_max_len() {
    let long = "x".repeat(500);
    assert_eq!(sanitize_file_name(&long, 199).chars().count(), 199);
}

#[test]
fn sanitize_falls_back_when_nothing_survives() {
    assert_eq!(sanitize_file_name(r#"\/:*?"<>|"#, 199), "output");
    assert_eq!(sanitize_file_name("   ", 199), "output");
    assert_eq!(sanitize_file_name("...", 199), "output");
}

#[test]
fn save_png_roundtrips_premultiplied_frames() {
    let frame = FrameRgba {
        width: 2,
        height: 1,
        // Premul half-transparent red and opaque green.
        data: vec![128, 0, 0, 128, 0, 255, 0, 255],
        premultiplied: true,
    };

    let path = std::env::temp_dir().join(format!(
        "pincraft-save-test-{}.png",
        std::process::id()
    ));
    save_png(&frame, &path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.dimensions(), (2, 1));
    let px0 = loaded.get_pixel(0, 0).0;
    assert_eq!(px0[3], 128);
    assert!(px0[0].abs_diff(255) <= 1, "straight alpha restored, got {}", px0[0]);
    assert_eq!(loaded.get_pixel(1, 0).0, [0, 255, 0, 255]);
}
