use crate::types::Platform;

fn platform(
    id: &str,
    name: &str,
    description: &str,
    setup_time: &str,
    monthly_cost: &str,
    features: &[&str],
) -> Platform {
    Platform {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        setup_time: setup_time.to_string(),
        monthly_cost: monthly_cost.to_string(),
        features: features.iter().map(|f| (*f).to_string()).collect(),
    }
}

/// Platforms offered when the integration service cannot be reached
pub fn fallback_platforms() -> Vec<Platform> {
    vec![
        platform(
            "nextbasket",
            "Next Basket",
            "AI-powered e-commerce platform",
            "3-5 minutes",
            "$19-99",
            &["AI optimization", "Smart pricing", "Automated marketing"],
        ),
        platform(
            "shopify",
            "Shopify",
            "Popular e-commerce platform with extensive features",
            "5-10 minutes",
            "$29-299",
            &["Payment processing", "Inventory management", "Marketing tools"],
        ),
        platform(
            "woocommerce",
            "WooCommerce",
            "WordPress-based e-commerce solution",
            "10-15 minutes",
            "$0-50",
            &["Customizable", "WordPress integration", "Free to start"],
        ),
    ]
}
