//! Marketing-copy options: content type, tone and length tables.

/// Text returned when the model omits the main content.
pub const FALLBACK_CONTENT: &str = "Content generation failed";

/// Maximum number of alternative variants kept from a reply.
pub const MAX_ALTERNATIVES: usize = 2;

/// Sampling temperature for copywriting calls.
pub const CONTENT_TEMPERATURE: f32 = 0.7;

/// Kind of copy to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    ProductDescription,
    MarketingEmail,
    SocialMediaPost,
    BlogArticle,
    SeoMetaDescription,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::ProductDescription,
        ContentType::MarketingEmail,
        ContentType::SocialMediaPost,
        ContentType::BlogArticle,
        ContentType::SeoMetaDescription,
    ];

    /// Resolve a UI label, falling back to a product description.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::ProductDescription => "Product Description",
            ContentType::MarketingEmail => "Marketing Email",
            ContentType::SocialMediaPost => "Social Media Post",
            ContentType::BlogArticle => "Blog Article",
            ContentType::SeoMetaDescription => "SEO Meta Description",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            ContentType::ProductDescription => {
                "Write a compelling product description that highlights key features, benefits, \
                 and appeal to customers. Focus on quality, craftsmanship, and lifestyle benefits."
            }
            ContentType::MarketingEmail => {
                "Write an engaging marketing email that drives action. Include a clear subject \
                 line, compelling body copy, and strong call-to-action."
            }
            ContentType::SocialMediaPost => {
                "Write an engaging social media post that's platform-appropriate, includes \
                 relevant hashtags, and encourages engagement."
            }
            ContentType::BlogArticle => {
                "Write an informative blog article that provides value to readers while subtly \
                 promoting the product. Include SEO-friendly structure."
            }
            ContentType::SeoMetaDescription => {
                "Write an SEO-optimized meta description that accurately describes the content \
                 and includes target keywords within 160 characters."
            }
        }
    }
}

/// Voice of the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Luxury,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Professional, Tone::Friendly, Tone::Luxury, Tone::Casual];

    /// Resolve a UI label, falling back to professional.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
            Tone::Luxury => "Luxury",
            Tone::Casual => "Casual",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Professional => {
                "Use a professional, authoritative tone that builds trust and credibility."
            }
            Tone::Friendly => "Use a warm, conversational tone that feels personal and approachable.",
            Tone::Luxury => {
                "Use an elegant, sophisticated tone that conveys premium quality and exclusivity."
            }
            Tone::Casual => "Use a relaxed, informal tone that feels natural and conversational.",
        }
    }
}

/// Target word count band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    pub const ALL: [ContentLength; 3] =
        [ContentLength::Short, ContentLength::Medium, ContentLength::Long];

    /// Resolve a UI label, falling back to medium.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|l| l.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentLength::Short => "Short (50-100 words)",
            ContentLength::Medium => "Medium (100-200 words)",
            ContentLength::Long => "Long (200+ words)",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            ContentLength::Short => "Keep it concise, around 50-100 words.",
            ContentLength::Medium => "Provide moderate detail, around 100-200 words.",
            ContentLength::Long => "Include comprehensive details, 200+ words.",
        }
    }
}
