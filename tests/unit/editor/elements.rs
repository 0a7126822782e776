use super::*;
use crate::{
    composition::model::{ItemImage, PinRequest},
    template::catalog::template_for,
};

fn request(n: usize) -> PinRequest {
    PinRequest {
        title: "t".to_string(),
        subtitle: String::new(),
        footer: String::new(),
        items: (0..n).map(|i| ItemImage::new(format!("{i}.png"))).collect(),
        captions: vec![],
    }
}

#[test]
fn element_position_rect_roundtrip() {
    let pos = ElementPosition::new(10.0, 20.0, 100.0, 50.0);
    let rect = pos.to_rect();
    assert_eq!(rect.width(), 100.0);
    assert_eq!(rect.height(), 50.0);
    assert_eq!(ElementPosition::from_rect(rect), pos);
}

#[test]
fn from_template_builds_one_element_per_drawn_item() {
    let template = template_for(6, true).unwrap();
    let layout = EditorLayout::from_template(&template, &request(6));

    assert_eq!(layout.images.len(), 6);
    assert_eq!(layout.numbers.len(), 6);
    assert_eq!(layout.captions.len(), 3);
    assert!(layout.footer.is_some());

    // Index back-references, not pointers: element i owns item i.
    for (i, element) in layout.images.iter().enumerate() {
        assert_eq!(element.item, i);
        assert_eq!(element.slot_number, i + 1);
        assert_eq!(element.position.to_rect(), template.slots[i].bounds);
    }
    for (i, number) in layout.numbers.iter().enumerate() {
        assert_eq!(number.image, i);
        assert_eq!(number.number as usize, i + 1);
    }
}

#[test]
fn from_template_caps_at_slot_count() {
    let template = template_for(4, false).unwrap();
    let layout = EditorLayout::from_template(&template, &request(8));
    assert_eq!(layout.images.len(), 4);
    assert!(layout.footer.is_none());
}

#[test]
fn number_scale_follows_the_backing_item() {
    let template = template_for(4, true).unwrap();
    let mut req = request(4);
    req.items[2].number_scale = 1.5;
    let layout = EditorLayout::from_template(&template, &req);
    assert_eq!(layout.numbers[2].scale, 1.5);
    assert_eq!(layout.numbers[2].box_size(), NUMBER_BOX_SIZE * 1.5);
}

#[test]
fn default_text_sizes_match_the_renderer() {
    let template = template_for(4, true).unwrap();
    let layout = EditorLayout::from_template(&template, &request(4));
    assert_eq!(layout.title_size, 64.0);
    assert_eq!(layout.subtitle_size, 32.0);
    assert_eq!(layout.footer_size, 48.0);
}
