use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::PinResult,
    foundation::math::unpremultiply_rgba8_in_place,
    render::compositor::FrameRgba,
};

/// Encode `frame` as a PNG file at `path`, creating parent directories.
///
/// Premultiplied frames are converted back to straight alpha first, since
/// PNG stores unassociated alpha.
pub fn save_png(frame: &FrameRgba, path: impl AsRef<Path>) -> PinResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }

    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Turn a pin title into a safe file name.
///
/// Strips characters that are invalid in file names, trims surrounding
/// whitespace and trailing periods, collapses runs of spaces, truncates to
/// `max_len` characters (leave headroom for a numeric suffix and extension),
/// and falls back to `"output"` when nothing survives.
pub fn sanitize_file_name(title: &str, max_len: usize) -> String {
    const INVALID: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

    let mut out = String::with_capacity(title.len());
    let mut last_was_space = false;
    for c in title.chars() {
        if INVALID.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }

    let trimmed = out.trim().trim_end_matches('.').trim_end();
    let truncated: String = trimmed.chars().take(max_len).collect();
    let final_name = truncated.trim_end();

    if final_name.is_empty() {
        return "output".to_string();
    }
    final_name.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/output/save.rs"]
mod tests;
