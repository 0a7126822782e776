use crate::{
    composition::model::PinRequest,
    foundation::error::{PinError, PinResult},
};

/// Check that a request is renderable before any compositing work begins.
///
/// The rule set: the title must be non-blank, there must be at least one
/// item, and every item must carry a non-blank source. Subtitle, captions
/// and footer may be empty (empty text is a draw-time no-op, not an error).
pub fn validate(request: &PinRequest) -> PinResult<()> {
    if request.title.trim().is_empty() {
        return Err(PinError::validation("title must be non-empty"));
    }
    if request.items.is_empty() {
        return Err(PinError::validation("request must contain at least one item image"));
    }
    for (i, item) in request.items.iter().enumerate() {
        if item.source.trim().is_empty() {
            return Err(PinError::validation(format!(
                "item {i} has an empty image source"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/validate.rs"]
mod tests;
