//! Products placed in the store catalog.

use serde::{Deserialize, Serialize};

/// A catalog entry produced by the generation endpoint or the offline generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        rename = "imageUrl",
        alias = "image_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    /// Image gallery as returned by the generation service
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl GeneratedProduct {
    /// Image to show for the product, preferring the explicit image URL
    pub fn primary_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }

    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wizard_shape() {
        let json = r#"{
            "id": "product-1",
            "name": "MacBook Air M3 13-inch",
            "price": 1099.99,
            "category": "Electronics",
            "description": "Ultra-thin laptop",
            "imageUrl": "https://source.unsplash.com/300x300/?laptop&sig=1"
        }"#;
        let product: GeneratedProduct = serde_json::from_str(json).unwrap();
        assert_eq!(
            product.primary_image(),
            Some("https://source.unsplash.com/300x300/?laptop&sig=1")
        );
        assert_eq!(product.display_price(), "$1099.99");
    }

    #[test]
    fn test_deserialize_generation_service_shape() {
        let json = r#"{
            "id": "prod_1a2b3c4d",
            "name": "Sample electronics Product 1",
            "description": "This is a high-quality electronics product.",
            "price": 42.5,
            "category": "electronics",
            "images": ["https://images.unsplash.com/photo-1?w=400", "https://images.unsplash.com/photo-2?w=400"],
            "inventory": 12,
            "rating": 4.2
        }"#;
        let product: GeneratedProduct = serde_json::from_str(json).unwrap();
        assert!(product.image_url.is_none());
        assert_eq!(
            product.primary_image(),
            Some("https://images.unsplash.com/photo-1?w=400")
        );
        assert_eq!(product.display_price(), "$42.50");
    }

    #[test]
    fn test_serialize_uses_camel_case_image_url() {
        let product = GeneratedProduct {
            id: "product-2".to_string(),
            name: "Atomic Habits".to_string(),
            price: 23.99,
            category: "Books & Media".to_string(),
            description: String::new(),
            image_url: Some("https://example.test/a.png".to_string()),
            images: Vec::new(),
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(!json.contains("\"images\""));
    }
}
