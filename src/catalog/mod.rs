//! Static option lists offered by the wizard steps, plus the offline data
//! used when the backend cannot be reached.

mod platforms;
mod products;

pub use platforms::fallback_platforms;
pub use products::{generate_mock_products, templates_for, ProductTemplate};

/// A selectable option with a stable id and a display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn opt(id: &'static str, name: &'static str, description: &'static str) -> CatalogOption {
    CatalogOption {
        id,
        name,
        description,
    }
}

/// Industries offered on the business step (stored by label)
pub const INDUSTRIES: &[&str] = &[
    "Fashion & Apparel",
    "Electronics",
    "Home & Garden",
    "Health & Beauty",
    "Sports & Outdoor",
    "Food & Beverage",
    "Books & Media",
    "Automotive",
    "Jewelry & Accessories",
    "Toys & Games",
];

pub const BUSINESS_TYPES: &[CatalogOption] = &[
    opt("b2c", "B2C", "Selling to consumers"),
    opt("b2b", "B2B", "Selling to businesses"),
];

pub const EXPERIENCE_LEVELS: &[CatalogOption] = &[
    opt("beginner", "Beginner - New to e-commerce", ""),
    opt("intermediate", "Intermediate - Some experience", ""),
    opt("advanced", "Advanced - Experienced seller", ""),
];

/// Product categories, in the order they are offered and generated
pub const CATEGORIES: &[CatalogOption] = &[
    opt("electronics", "Electronics", "Premium smartphones, laptops, audio equipment, and smart devices"),
    opt("fashion", "Fashion & Apparel", "Luxury clothing, designer accessories, premium footwear, and watches"),
    opt("home", "Home & Garden", "High-end appliances, smart home systems, premium furniture, and outdoor equipment"),
    opt("sports", "Sports & Outdoors", "Professional sports equipment, fitness technology, outdoor gear, and athletic wear"),
    opt("beauty", "Beauty & Personal Care", "Luxury skincare, premium cosmetics, advanced hair tools, and fragrances"),
    opt("books", "Books & Media", "Bestselling novels, self-help books, educational content, and digital media"),
    opt("toys", "Toys & Games", "Premium toys, gaming consoles, educational games, and collectibles"),
    opt("automotive", "Automotive", "Electric vehicles, performance parts, navigation systems, and car accessories"),
    opt("health", "Health & Wellness", "Advanced fitness trackers, wellness devices, premium supplements, and health technology"),
    opt("food", "Food & Beverages", "Gourmet foods, premium beverages, luxury ingredients, and culinary experiences"),
];

pub const THEMES: &[CatalogOption] = &[
    opt("modern", "Modern Minimal", "Clean and contemporary design"),
    opt("classic", "Classic Elegant", "Timeless and sophisticated"),
    opt("bold", "Bold & Dynamic", "Eye-catching and energetic"),
    opt("warm", "Warm & Welcoming", "Friendly and approachable"),
];

/// Color schemes; the description carries the primary hex color
pub const COLOR_SCHEMES: &[CatalogOption] = &[
    opt("blue", "Ocean Blue", "#3b82f6"),
    opt("purple", "Royal Purple", "#8b5cf6"),
    opt("green", "Emerald Green", "#10b981"),
    opt("orange", "Sunset Orange", "#f97316"),
];

pub const PAYMENT_PROVIDERS: &[CatalogOption] = &[
    opt("stripe", "Stripe", "Credit cards, digital wallets"),
    opt("paypal", "PayPal", "PayPal, Venmo"),
    opt("square", "Square", "In-person & online payments"),
];

pub const SHIPPING_PROVIDERS: &[CatalogOption] = &[
    opt("usps", "USPS", "United States Postal Service"),
    opt("fedex", "FedEx", "Express & ground shipping"),
    opt("ups", "UPS", "United Parcel Service"),
];

pub const MARKETING_PROVIDERS: &[CatalogOption] = &[
    opt("mailchimp", "Mailchimp", "Email marketing"),
    opt("google-analytics", "Google Analytics", "Website analytics"),
    opt("facebook-pixel", "Facebook Pixel", "Social media tracking"),
];

pub const CONTENT_TYPES: &[CatalogOption] = &[
    opt("product-descriptions", "Product Descriptions", "SEO-optimized product descriptions"),
    opt("marketing-copy", "Marketing Copy", "Compelling sales copy and headlines"),
    opt("legal-documents", "Legal Documents", "Privacy policy, terms of service"),
    opt("blog-posts", "Blog Posts", "Industry-relevant content for SEO"),
];

pub const TONES: &[CatalogOption] = &[
    opt("professional", "Professional", "Formal and business-like"),
    opt("friendly", "Friendly", "Warm and approachable"),
    opt("casual", "Casual", "Relaxed and conversational"),
    opt("luxury", "Luxury", "Premium and sophisticated"),
];

/// SEO switches as (config key, label)
pub const SEO_OPTIONS: &[(&str, &str)] = &[
    ("optimizeSEO", "Optimize for search engines"),
    ("keywordResearch", "Keyword research"),
    ("generateMetaTags", "Generate meta tags"),
];

/// Look up an option by id
pub fn find(options: &[CatalogOption], id: &str) -> Option<CatalogOption> {
    options.iter().copied().find(|o| o.id == id)
}

/// Display label for an id, falling back to the id itself
pub fn label_for(options: &[CatalogOption], id: &str) -> String {
    find(options, id).map_or_else(|| id.to_string(), |o| o.name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_counts() {
        assert_eq!(INDUSTRIES.len(), 10);
        assert_eq!(CATEGORIES.len(), 10);
        assert_eq!(THEMES.len(), 4);
        assert_eq!(COLOR_SCHEMES.len(), 4);
        assert_eq!(CONTENT_TYPES.len(), 4);
        assert_eq!(TONES.len(), 4);
    }

    #[test]
    fn test_every_category_has_three_templates() {
        for category in CATEGORIES {
            assert_eq!(
                templates_for(category.id).map(<[ProductTemplate]>::len),
                Some(3),
                "category {}",
                category.id
            );
        }
    }

    #[test]
    fn test_label_for_unknown_id() {
        assert_eq!(label_for(THEMES, "modern"), "Modern Minimal");
        assert_eq!(label_for(THEMES, "retro"), "retro");
    }
}
