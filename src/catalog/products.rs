//! Offline product generator.
//!
//! Used when the remote generation endpoint fails. Output depends only on the
//! selected categories, so the same selection always yields the same catalog.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::GeneratedProduct;

use super::{find, CATEGORIES};

/// Products generated per selected category
pub const PRODUCTS_PER_CATEGORY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductTemplate {
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
    /// Search terms for the placeholder image
    pub image_keywords: &'static str,
}

const fn t(
    name: &'static str,
    price: f64,
    description: &'static str,
    image_keywords: &'static str,
) -> ProductTemplate {
    ProductTemplate {
        name,
        price,
        description,
        image_keywords,
    }
}

const ELECTRONICS: [ProductTemplate; 3] = [
    t("iPhone 15 Pro Max 256GB", 1199.99, "Latest iPhone with A17 Pro chip, titanium design, and advanced camera system with 5x optical zoom.", "smartphone phone mobile device"),
    t("MacBook Air M3 13-inch", 1099.99, "Ultra-thin laptop with M3 chip, 18-hour battery life, and Liquid Retina display.", "laptop computer macbook"),
    t("Sony WH-1000XM5 Headphones", 399.99, "Premium noise-canceling headphones with 30-hour battery and exceptional sound quality.", "headphones audio wireless"),
];

const FASHION: [ProductTemplate; 3] = [
    t("Nike Air Jordan 1 Retro High", 170.00, "Classic basketball sneakers with premium leather upper and Air-Sole unit for comfort.", "sneakers shoes nike jordan"),
    t("Levi's 501 Original Jeans", 89.50, "Iconic straight-fit jeans with button fly and classic 5-pocket styling.", "jeans denim pants"),
    t("Chanel Classic Flap Bag", 8800.00, "Timeless quilted leather handbag with chain strap and CC logo closure.", "handbag purse luxury bag"),
];

const HOME: [ProductTemplate; 3] = [
    t("Dyson V15 Detect Cordless Vacuum", 749.99, "Advanced cordless vacuum with laser dust detection and 60-minute runtime.", "vacuum cleaner dyson"),
    t("KitchenAid Professional 600 Stand Mixer", 449.99, "Professional stand mixer with 6-quart bowl and 10-speed planetary mixing.", "mixer kitchen appliance"),
    t("IKEA PAX Wardrobe System", 299.99, "Customizable wardrobe with sliding doors, drawers, and hanging rails.", "wardrobe closet furniture"),
];

const SPORTS: [ProductTemplate; 3] = [
    t("Peloton Bike+", 2495.00, "Premium indoor cycling bike with 24\" rotating HD touchscreen and live classes.", "exercise bike peloton"),
    t("Wilson Pro Staff RF97 Tennis Racket", 249.99, "Roger Federer signature racket with 97 sq inch head and 16x19 string pattern.", "tennis racket sports"),
    t("Nike ZoomX Vaporfly NEXT% 2", 250.00, "Elite racing shoes with carbon fiber plate and ZoomX foam for maximum speed.", "running shoes nike"),
];

const BEAUTY: [ProductTemplate; 3] = [
    t("La Mer Moisturizing Cream", 345.00, "Luxury moisturizer with Miracle Broth and marine ingredients for intense hydration.", "skincare cream moisturizer"),
    t("Dyson Airwrap Multi-styler", 599.99, "Revolutionary hair styling tool with Coanda airflow technology for multiple styles.", "hair dryer styling tool"),
    t("SK-II Facial Treatment Essence", 159.00, "Iconic essence with Pitera complex for clear, radiant skin.", "skincare essence beauty"),
];

const BOOKS: [ProductTemplate; 3] = [
    t("The Seven Husbands of Evelyn Hugo", 16.99, "Bestselling historical fiction novel by Taylor Jenkins Reid about Hollywood glamour.", "book novel fiction"),
    t("Atomic Habits by James Clear", 23.99, "International bestseller on building good habits and breaking bad ones.", "book self help"),
    t("The Midnight Library by Matt Haig", 15.99, "Fiction novel about infinite possibilities and the choices that shape our lives.", "book fiction novel"),
];

const TOYS: [ProductTemplate; 3] = [
    t("LEGO Star Wars Millennium Falcon", 159.99, "Iconic 1,329-piece LEGO set with detailed interior and minifigures.", "lego star wars toy"),
    t("Nintendo Switch OLED Model", 349.99, "Gaming console with 7-inch OLED screen, enhanced audio, and 64GB storage.", "nintendo switch gaming console"),
    t("Hot Wheels Ultimate Garage Playset", 89.99, "Multi-level garage with elevator, car wash, and 6 Hot Wheels cars included.", "hot wheels toy cars"),
];

const AUTOMOTIVE: [ProductTemplate; 3] = [
    t("Tesla Model 3 Long Range", 45990.00, "Electric sedan with 358-mile range, 0-60 mph in 4.2 seconds, and Autopilot.", "tesla car electric vehicle"),
    t("Michelin Pilot Sport 4S Tires", 299.99, "Ultra-high performance summer tires with excellent grip and handling.", "tires car wheels"),
    t("Garmin DriveSmart 65 GPS Navigator", 199.99, "6.95-inch GPS with traffic alerts, voice control, and smartphone connectivity.", "gps navigator car"),
];

const HEALTH: [ProductTemplate; 3] = [
    t("Oura Ring Gen 3", 299.00, "Smart ring with sleep tracking, heart rate monitoring, and activity insights.", "smart ring fitness tracker"),
    t("Theragun PRO Massage Device", 599.00, "Professional-grade percussion therapy device with 5 speeds and 4 attachments.", "massage device theragun"),
    t("Vitamix 5200 Blender", 449.99, "Professional blender with 2-horsepower motor and 64-ounce container.", "blender vitamix kitchen"),
];

const FOOD: [ProductTemplate; 3] = [
    t("Blue Bottle Coffee Subscription", 89.99, "Monthly subscription to freshly roasted single-origin coffee beans.", "coffee beans subscription"),
    t("Omakase Sushi Experience Kit", 299.99, "Premium sushi-making kit with fresh fish, rice, and traditional tools.", "sushi kit japanese food"),
    t("Truffle Black Truffle Oil", 49.99, "Premium black truffle oil for enhancing pasta, risotto, and gourmet dishes.", "truffle oil gourmet food"),
];

/// Templates for a category id
pub fn templates_for(category_id: &str) -> Option<&'static [ProductTemplate]> {
    let templates: &'static [ProductTemplate] = match category_id {
        "electronics" => &ELECTRONICS,
        "fashion" => &FASHION,
        "home" => &HOME,
        "sports" => &SPORTS,
        "beauty" => &BEAUTY,
        "books" => &BOOKS,
        "toys" => &TOYS,
        "automotive" => &AUTOMOTIVE,
        "health" => &HEALTH,
        "food" => &FOOD,
        _ => return None,
    };
    Some(templates)
}

/// Characters escaped in a URI component, the same set as `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn image_url(keywords: &str, product_number: usize) -> String {
    format!(
        "https://source.unsplash.com/300x300/?{}&sig={}",
        encode_component(keywords),
        product_number
    )
}

/// Build a catalog locally from the selected category ids.
///
/// Each known category contributes three products. Product numbers run from 1
/// across all categories and pick the template at `number % 3`.
pub fn generate_mock_products(category_ids: &[String]) -> Vec<GeneratedProduct> {
    let mut products = Vec::with_capacity(category_ids.len() * PRODUCTS_PER_CATEGORY);
    let mut product_number = 1;

    for category_id in category_ids {
        let (Some(category), Some(templates)) =
            (find(CATEGORIES, category_id), templates_for(category_id))
        else {
            tracing::debug!(category = %category_id, "Skipping unknown category");
            continue;
        };

        for _ in 0..PRODUCTS_PER_CATEGORY {
            let template = &templates[product_number % templates.len()];
            products.push(GeneratedProduct {
                id: format!("product-{product_number}"),
                name: template.name.to_string(),
                price: template.price,
                category: category.name.to_string(),
                description: template.description.to_string(),
                image_url: Some(image_url(template.image_keywords, product_number)),
                images: Vec::new(),
            });
            product_number += 1;
        }
    }

    products
}
