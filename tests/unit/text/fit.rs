use super::*;
use crate::foundation::error::PinResult;

/// Deterministic measurer: every char is `size/2` wide, lines are `size`
/// tall, wrapping packs as many chars per line as fit.
struct BlockMeasurer;

impl TextMeasurer for BlockMeasurer {
    fn measure(
        &mut self,
        text: &str,
        size_px: f32,
        max_width: Option<f32>,
    ) -> PinResult<TextMetrics> {
        let chars = text.chars().count() as f32;
        let char_w = size_px / 2.0;
        match max_width {
            None => Ok(TextMetrics {
                width: chars * char_w,
                height: size_px,
            }),
            Some(w) => {
                let per_line = (w / char_w).floor().max(1.0);
                let lines = (chars / per_line).ceil().max(1.0);
                Ok(TextMetrics {
                    width: (chars * char_w).min(per_line * char_w),
                    height: lines * size_px,
                })
            }
        }
    }
}

fn spec(max: f32, min: f32) -> FitSpec {
    FitSpec {
        max_size: max,
        min_size: min,
        align: Align::Center,
        stroke_width: 4.0,
    }
}

#[test]
fn short_text_keeps_the_maximum_size() {
    let rect = Rect::new(0.0, 0.0, 950.0, 125.0);
    let fitted = layout_auto_fit(&mut BlockMeasurer, "Short", rect, &spec(64.0, 24.0))
        .unwrap()
        .unwrap();
    assert_eq!(fitted.size_px, 64.0);
    assert_eq!(fitted.text, "Short");
}

#[test]
fn long_text_shrinks_until_it_fits() {
    let rect = Rect::new(0.0, 0.0, 400.0, 70.0);
    let text = "a".repeat(40);
    let fitted = layout_auto_fit(&mut BlockMeasurer, &text, rect, &spec(64.0, 24.0))
        .unwrap()
        .unwrap();
    assert!(fitted.size_px < 64.0);
    assert!(fitted.size_px >= 24.0);
    assert_eq!(fitted.text, text, "no truncation while shrinking suffices");

    let metrics = BlockMeasurer
        .measure(&fitted.text, fitted.size_px, Some(400.0))
        .unwrap();
    assert!(metrics.height <= 70.0);
}

#[test]
fn impossible_fit_truncates_at_the_minimum() {
    let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
    let text = "a".repeat(200);
    let fitted = layout_auto_fit(&mut BlockMeasurer, &text, rect, &spec(64.0, 24.0))
        .unwrap()
        .unwrap();
    assert_eq!(fitted.size_px, 24.0);
    assert!(fitted.text.ends_with('…'));
    assert!(fitted.text.chars().count() < 200);

    let metrics = BlockMeasurer
        .measure(&fitted.text, fitted.size_px, None)
        .unwrap();
    assert!(metrics.width <= 100.0);
}

#[test]
fn size_never_leaves_the_configured_range() {
    let text = "wardrobe refresh ideas for small spaces";
    for h in [10.0, 40.0, 80.0, 200.0, 1000.0] {
        let rect = Rect::new(0.0, 0.0, 300.0, h);
        let fitted = layout_auto_fit(&mut BlockMeasurer, text, rect, &spec(64.0, 24.0))
            .unwrap()
            .unwrap();
        assert!(fitted.size_px <= 64.0);
        assert!(fitted.size_px >= 24.0);
    }
}

#[test]
fn shrinking_the_rect_never_grows_the_size() {
    let text = "wardrobe refresh ideas for small spaces";
    let mut last = f32::INFINITY;
    for h in [300.0, 200.0, 120.0, 80.0, 40.0, 10.0] {
        let rect = Rect::new(0.0, 0.0, 300.0, h);
        let fitted = layout_auto_fit(&mut BlockMeasurer, text, rect, &spec(64.0, 24.0))
            .unwrap()
            .unwrap();
        assert!(fitted.size_px <= last, "height {h} grew the font size");
        last = fitted.size_px;
    }
}

#[test]
fn blank_text_is_a_no_op() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(layout_auto_fit(&mut BlockMeasurer, "", rect, &spec(64.0, 24.0))
        .unwrap()
        .is_none());
    assert!(layout_auto_fit(&mut BlockMeasurer, "   \n", rect, &spec(64.0, 24.0))
        .unwrap()
        .is_none());
    assert!(layout_fixed(&mut BlockMeasurer, "  ", rect, 30.0).unwrap().is_none());
}

#[test]
fn fixed_layout_truncates_on_width_overflow_only() {
    let rect = Rect::new(0.0, 0.0, 150.0, 30.0);

    let fitted = layout_fixed(&mut BlockMeasurer, "tiny", rect, 30.0)
        .unwrap()
        .unwrap();
    assert_eq!(fitted.text, "tiny");
    assert_eq!(fitted.size_px, 30.0);

    let fitted = layout_fixed(&mut BlockMeasurer, &"x".repeat(50), rect, 30.0)
        .unwrap()
        .unwrap();
    assert_eq!(fitted.size_px, 30.0, "fixed layout never changes the size");
    assert!(fitted.text.ends_with('…'));
    let metrics = BlockMeasurer.measure(&fitted.text, 30.0, None).unwrap();
    assert!(metrics.width <= 150.0);
}
