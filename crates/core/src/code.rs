//! Front-end component options: component, framework and complexity tables.

/// Source returned when the model omits the generated code.
pub const FALLBACK_CODE: &str = "// Code generation failed";

/// Sampling temperature for code generation calls.
pub const CODE_TEMPERATURE: f32 = 0.3;

/// Brand palette every generated component is asked to use.
pub const BRAND_COLORS: &str = "forest green (#2B4B39), cream (#F5F3F0), gold (#D4AF37)";

/// Storefront component to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentType {
    #[default]
    ProductCard,
    ShoppingCart,
    ProductGallery,
    CheckoutForm,
    FilterComponent,
    NavigationMenu,
}

impl ComponentType {
    pub const ALL: [ComponentType; 6] = [
        ComponentType::ProductCard,
        ComponentType::ShoppingCart,
        ComponentType::ProductGallery,
        ComponentType::CheckoutForm,
        ComponentType::FilterComponent,
        ComponentType::NavigationMenu,
    ];

    /// Resolve a UI label, falling back to a product card.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            ComponentType::ProductCard => "Product Card",
            ComponentType::ShoppingCart => "Shopping Cart",
            ComponentType::ProductGallery => "Product Gallery",
            ComponentType::CheckoutForm => "Checkout Form",
            ComponentType::FilterComponent => "Filter Component",
            ComponentType::NavigationMenu => "Navigation Menu",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            ComponentType::ProductCard => {
                "Create a React product card component that displays product image, title, \
                 price, rating, and add to cart functionality."
            }
            ComponentType::ShoppingCart => {
                "Create a React shopping cart component with item management, quantity \
                 controls, and total calculation."
            }
            ComponentType::ProductGallery => {
                "Create a React product image gallery with thumbnails, zoom functionality, \
                 and navigation."
            }
            ComponentType::CheckoutForm => {
                "Create a React checkout form with validation, payment integration, and \
                 order summary."
            }
            ComponentType::FilterComponent => {
                "Create a React filter/search component for product listings with multiple \
                 filter options."
            }
            ComponentType::NavigationMenu => {
                "Create a React navigation menu with responsive design and mobile-friendly \
                 dropdown."
            }
        }
    }
}

/// Target UI framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framework {
    #[default]
    ReactTailwind,
    Vue,
    Angular,
    VanillaJs,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::ReactTailwind,
        Framework::Vue,
        Framework::Angular,
        Framework::VanillaJs,
    ];

    /// Resolve a UI label, falling back to React + Tailwind.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Framework::ReactTailwind => "React + Tailwind",
            Framework::Vue => "Vue.js",
            Framework::Angular => "Angular",
            Framework::VanillaJs => "Vanilla JS",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Framework::ReactTailwind => {
                "Use React with TypeScript and Tailwind CSS for styling. Follow modern React \
                 patterns with hooks."
            }
            Framework::Vue => "Use Vue.js 3 with Composition API and TypeScript support.",
            Framework::Angular => {
                "Use Angular with TypeScript and Angular Material for UI components."
            }
            Framework::VanillaJs => {
                "Use vanilla JavaScript with modern ES6+ features and CSS modules."
            }
        }
    }
}

/// How much behaviour the component should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Complexity {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl Complexity {
    pub const ALL: [Complexity; 3] =
        [Complexity::Basic, Complexity::Intermediate, Complexity::Advanced];

    /// Resolve a UI label, falling back to intermediate.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label.trim())
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Complexity::Basic => "Keep it simple with core functionality only.",
            Complexity::Intermediate => {
                "Include additional features like error handling and loading states."
            }
            Complexity::Advanced => {
                "Include advanced features like state management, animations, and optimization."
            }
        }
    }
}
