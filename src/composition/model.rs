/// Caption font sizes selectable in the authoring UI.
pub const CAPTION_SIZES: [f32; 10] = [
    22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 34.0, 36.0, 38.0, 40.0,
];

/// Default caption font size (mid-range of [`CAPTION_SIZES`]).
pub const DEFAULT_CAPTION_SIZE: f32 = 30.0;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete pin request.
///
/// A request is a pure data model that can be built programmatically or
/// deserialized from JSON. Rendering a request is performed by
/// [`crate::render`] against a [`crate::TemplateDefinition`] and a
/// [`crate::PreparedAssetStore`].
///
/// Empty `footer` or caption text means "omit that element from the render";
/// it is never an error.
pub struct PinRequest {
    /// Pin title, drawn auto-fit at the top of the canvas. Required.
    pub title: String,
    /// Subtitle drawn below the title. May be empty.
    #[serde(default)]
    pub subtitle: String,
    /// Footer drawn at the bottom when non-empty and the template defines a
    /// footer area.
    #[serde(default)]
    pub footer: String,
    /// Ordered product photos, one per template slot.
    pub items: Vec<ItemImage>,
    /// Ordered captions; the renderer draws at most as many as the template
    /// has caption areas.
    #[serde(default)]
    pub captions: Vec<CaptionItem>,
}

impl PinRequest {
    /// Whether the footer should be rendered (non-blank text).
    pub fn has_footer(&self) -> bool {
        !self.footer.trim().is_empty()
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One product photo plus its per-slot presentation settings.
pub struct ItemImage {
    /// Image source path (absolute, or relative to the configured assets
    /// root).
    pub source: String,
    /// Uniform scale multiplier applied to the slot rect around its center.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Scale multiplier for this slot's number badge.
    #[serde(default = "default_scale")]
    pub number_scale: f64,
    /// Whether to run edge-trim white-background removal on this photo.
    #[serde(default = "default_true")]
    pub remove_white: bool,
    /// White-removal tolerance as a byte distance from 255.
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,
}

impl ItemImage {
    /// Build an item with default presentation settings.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Whether the slot holds an image source.
    pub fn has_image(&self) -> bool {
        !self.source.is_empty()
    }

    /// Reset the slot: source becomes empty and scale returns to 1.0. Other
    /// settings are kept, matching slot-clear semantics in the editor.
    pub fn clear(&mut self) {
        self.source.clear();
        self.scale = 1.0;
    }
}

impl Default for ItemImage {
    fn default() -> Self {
        Self {
            source: String::new(),
            scale: 1.0,
            number_scale: 1.0,
            remove_white: true,
            tolerance: 15,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One caption line with its configured font size.
pub struct CaptionItem {
    /// Caption text; empty suppresses rendering for that caption area.
    #[serde(default)]
    pub text: String,
    /// Font size in pixels, one of [`CAPTION_SIZES`].
    #[serde(default = "default_caption_size")]
    pub size_px: f32,
}

impl CaptionItem {
    /// Build a caption at the default size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size_px: DEFAULT_CAPTION_SIZE,
        }
    }
}

impl Default for CaptionItem {
    fn default() -> Self {
        Self {
            text: String::new(),
            size_px: DEFAULT_CAPTION_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Selector for one of the two supplied background assets.
pub enum Background {
    /// The first background asset (`bg1.png`).
    #[default]
    Primary,
    /// The second background asset (`bg2.png`).
    Secondary,
}

impl Background {
    /// File name of this background under the assets root.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Primary => "bg1.png",
            Self::Secondary => "bg2.png",
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_tolerance() -> u8 {
    15
}

fn default_caption_size() -> f32 {
    DEFAULT_CAPTION_SIZE
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
