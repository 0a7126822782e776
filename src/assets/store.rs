use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode,
    composition::model::{Background, PinRequest},
    foundation::error::{PinError, PinResult},
};

#[derive(Clone, Debug)]
/// Prepared raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Build a solid-color prepared image. Handy for tests and placeholder
    /// backgrounds.
    pub fn solid(width: u32, height: u32, rgba_straight: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba_straight;
        let px = [
            crate::foundation::math::mul_div255_u8(u16::from(r), u16::from(a)),
            crate::foundation::math::mul_div255_u8(u16::from(g), u16::from(a)),
            crate::foundation::math::mul_div255_u8(u16::from(b), u16::from(a)),
            a,
        ];
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        }
    }
}

#[derive(Clone, Debug)]
/// Where the fixed assets of a render live on disk.
pub struct AssetConfig {
    /// Directory holding the two background images (`bg1.png`, `bg2.png`).
    /// Relative item sources are also resolved against it.
    pub assets_root: PathBuf,
    /// Which of the two backgrounds to composite over.
    pub background: Background,
    /// Font file used for every text element.
    pub font_file: PathBuf,
}

/// Immutable store of everything a render call needs, with all IO
/// front-loaded.
///
/// Renderers never touch the filesystem; they read prepared data from here.
/// Item photos that fail to load are recorded (and warned about) rather than
/// failing the whole store: the corresponding slot renders empty. The
/// background and the font are load-bearing for every pin and stay fatal.
#[derive(Clone, Debug)]
pub struct PreparedAssetStore {
    background: PreparedImage,
    items: Vec<Option<image::RgbaImage>>,
    failed: Vec<usize>,
    font_bytes: Arc<Vec<u8>>,
}

impl PreparedAssetStore {
    /// Load and decode every asset referenced by `request` per `cfg`.
    #[tracing::instrument(skip(request, cfg), fields(items = request.items.len()))]
    pub fn prepare(request: &PinRequest, cfg: &AssetConfig) -> PinResult<Self> {
        let bg_path = cfg.assets_root.join(cfg.background.file_name());
        let bg_bytes = std::fs::read(&bg_path).map_err(|e| {
            PinError::resource_load(format!("read background '{}': {e}", bg_path.display()))
        })?;
        let background = decode::decode_image(&bg_bytes)?;

        let font_bytes = std::fs::read(&cfg.font_file).map_err(|e| {
            PinError::resource_load(format!("read font '{}': {e}", cfg.font_file.display()))
        })?;

        let mut items = Vec::with_capacity(request.items.len());
        let mut failed = Vec::new();
        for (i, item) in request.items.iter().enumerate() {
            match load_item(&cfg.assets_root, &item.source) {
                Ok(img) => items.push(Some(img)),
                Err(err) => {
                    tracing::warn!(slot = i + 1, source = %item.source, error = %err, "skipping unloadable item image");
                    failed.push(i);
                    items.push(None);
                }
            }
        }

        Ok(Self {
            background,
            items,
            failed,
            font_bytes: Arc::new(font_bytes),
        })
    }

    /// Build a store from already-prepared parts. Used by tests and by
    /// callers that source pixels from memory.
    pub fn from_parts(
        background: PreparedImage,
        items: Vec<Option<image::RgbaImage>>,
        font_bytes: Vec<u8>,
    ) -> Self {
        Self {
            background,
            items,
            failed: Vec::new(),
            font_bytes: Arc::new(font_bytes),
        }
    }

    /// The prepared background image.
    pub fn background(&self) -> &PreparedImage {
        &self.background
    }

    /// Decoded photo for item `index`, if it loaded.
    pub fn item(&self, index: usize) -> Option<&image::RgbaImage> {
        self.items.get(index).and_then(|i| i.as_ref())
    }

    /// Number of item entries (loaded or not).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Indices of items whose sources failed to load.
    pub fn failed_items(&self) -> &[usize] {
        &self.failed
    }

    /// Raw bytes of the configured font.
    pub fn font_bytes(&self) -> &Arc<Vec<u8>> {
        &self.font_bytes
    }
}

fn load_item(root: &Path, source: &str) -> PinResult<image::RgbaImage> {
    let path = resolve_source(root, source);
    let bytes = std::fs::read(&path)
        .with_context(|| format!("read item image '{}'", path.display()))?;
    decode::decode_rgba(&bytes)
}

fn resolve_source(root: &Path, source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
