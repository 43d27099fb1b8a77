//! Product-image options and prompt assembly.
//!
//! Each user-facing option is a closed set of labels mapped to a fixed
//! provider parameter. Unrecognised labels resolve to the documented default
//! instead of failing, so a stale UI never blocks a generation.

/// Maximum number of images generated for a single request.
pub const MAX_BATCH_SIZE: u32 = 4;

/// Suffix appended to every image prompt after the brand style phrase.
pub const PHOTOGRAPHY_SUFFIX: &str =
    "Professional product photography, high-end commercial quality, studio lighting.";

// ---------------------------------------------------------------------------
// Brand style
// ---------------------------------------------------------------------------

/// Named brand preset appended to image prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrandStyle {
    #[default]
    WilliamsSonomaClassic,
    WestElmModern,
    PotteryBarnRustic,
    WilliamsSonomaHomeLuxury,
}

impl BrandStyle {
    pub const ALL: [BrandStyle; 4] = [
        BrandStyle::WilliamsSonomaClassic,
        BrandStyle::WestElmModern,
        BrandStyle::PotteryBarnRustic,
        BrandStyle::WilliamsSonomaHomeLuxury,
    ];

    /// Resolve a UI label, falling back to the classic preset.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            BrandStyle::WilliamsSonomaClassic => "Williams-Sonoma Classic",
            BrandStyle::WestElmModern => "West Elm Modern",
            BrandStyle::PotteryBarnRustic => "Pottery Barn Rustic",
            BrandStyle::WilliamsSonomaHomeLuxury => "Williams-Sonoma Home Luxury",
        }
    }

    /// Descriptive phrase appended to the user's prompt.
    pub fn style_phrase(self) -> &'static str {
        match self {
            BrandStyle::WilliamsSonomaClassic => {
                "in the style of Williams-Sonoma classic elegant home design, neutral colors, \
                 warm lighting, sophisticated styling, clean white background"
            }
            BrandStyle::WestElmModern => {
                "in the style of West Elm modern contemporary design, clean lines, \
                 minimalist aesthetic, natural materials"
            }
            BrandStyle::PotteryBarnRustic => {
                "in the style of Pottery Barn rustic farmhouse design, warm wood tones, \
                 cozy textures, lived-in comfort"
            }
            BrandStyle::WilliamsSonomaHomeLuxury => {
                "in the style of Williams-Sonoma Home luxury design, premium materials, \
                 sophisticated lighting, upscale presentation"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Aspect ratio
// ---------------------------------------------------------------------------

/// Output frame shape, mapped to a provider pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    #[default]
    Square,
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    /// Resolve a UI label, falling back to square.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|a| a.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "Square (1:1)",
            AspectRatio::Landscape => "Landscape (16:9)",
            AspectRatio::Portrait => "Portrait (4:5)",
        }
    }

    /// Pixel size string understood by the image endpoint.
    pub fn size(self) -> &'static str {
        match self {
            AspectRatio::Square => "1024x1024",
            AspectRatio::Landscape => "1792x1024",
            AspectRatio::Portrait => "1024x1792",
        }
    }
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

/// Rendering quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuality {
    High,
    #[default]
    Standard,
}

impl ImageQuality {
    /// Only the exact `High Quality` label selects the HD tier.
    pub fn from_label(label: &str) -> Self {
        if label.trim() == "High Quality" {
            ImageQuality::High
        } else {
            ImageQuality::Standard
        }
    }

    /// Quality parameter understood by the image endpoint.
    pub fn provider_value(self) -> &'static str {
        match self {
            ImageQuality::High => "hd",
            ImageQuality::Standard => "standard",
        }
    }
}

// ---------------------------------------------------------------------------
// Prompt and batch helpers
// ---------------------------------------------------------------------------

/// Combine the user prompt with the brand phrase and photography suffix.
pub fn build_image_prompt(prompt: &str, style: BrandStyle) -> String {
    format!("{} {}. {PHOTOGRAPHY_SUFFIX}", prompt.trim(), style.style_phrase())
}

/// Clamp a requested batch size into `[1, MAX_BATCH_SIZE]`.
///
/// A missing batch size means a single image.
pub fn clamp_batch_size(requested: Option<i64>) -> u32 {
    requested.unwrap_or(1).clamp(1, MAX_BATCH_SIZE as i64) as u32
}
