use super::*;

#[test]
fn item_defaults_match_editor_slots() {
    let item = ItemImage::default();
    assert_eq!(item.scale, 1.0);
    assert_eq!(item.number_scale, 1.0);
    assert!(item.remove_white);
    assert_eq!(item.tolerance, 15);
    assert!(!item.has_image());
}

#[test]
fn clear_resets_source_and_scale_only() {
    let mut item = ItemImage::new("photos/a.png");
    item.scale = 1.8;
    item.tolerance = 40;
    item.clear();
    assert!(!item.has_image());
    assert_eq!(item.scale, 1.0);
    assert_eq!(item.tolerance, 40);
}

#[test]
fn caption_default_size_is_mid_range() {
    assert!(CAPTION_SIZES.contains(&DEFAULT_CAPTION_SIZE));
    assert_eq!(CaptionItem::default().size_px, DEFAULT_CAPTION_SIZE);
}

#[test]
fn has_footer_ignores_whitespace() {
    let mut request = PinRequest {
        title: "t".to_string(),
        subtitle: String::new(),
        footer: "   ".to_string(),
        items: vec![],
        captions: vec![],
    };
    assert!(!request.has_footer());
    request.footer = "visit the shop".to_string();
    assert!(request.has_footer());
}

#[test]
fn background_file_names() {
    assert_eq!(Background::Primary.file_name(), "bg1.png");
    assert_eq!(Background::Secondary.file_name(), "bg2.png");
}

#[test]
fn request_json_roundtrip_fills_defaults() {
    let json = r#"{
        "title": "Tiny Closet, Big Wardrobe",
        "items": [{"source": "a.png"}, {"source": "b.png", "scale": 1.5}],
        "captions": [{"text": "above"}]
    }"#;
    let request: PinRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.items.len(), 2);
    assert_eq!(request.items[0].scale, 1.0);
    assert_eq!(request.items[1].scale, 1.5);
    assert!(request.items[0].remove_white);
    assert_eq!(request.captions[0].size_px, DEFAULT_CAPTION_SIZE);
    assert_eq!(request.subtitle, "");

    let back: PinRequest =
        serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
    assert_eq!(back.items[1].scale, 1.5);
}
