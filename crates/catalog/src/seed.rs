//! Static data the UI starts from: the demo catalog, the category list,
//! and the fixed color palette offered by the swatch row.

use crate::domain::{Category, Product, ProductDraft, ProductId};

/// Color tags offered by the form's swatch row.
pub const COLOR_CHOICES: [&str; 10] = [
    "#A855F7", "#2563EB", "#DC2626", "#CA8A04", "#166534", "#84D2C5", "#D864A9", "#FF6E31",
    "#3C2A21", "#1F2937",
];

/// The fixed category list backing the form's dropdown.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("Furniture", "https://images.example/categories/furniture.png"),
        Category::new("Lighting", "https://images.example/categories/lighting.png"),
        Category::new("Electronics", "https://images.example/categories/electronics.png"),
        Category::new("Accessories", "https://images.example/categories/accessories.png"),
    ]
}

fn product(
    title: &str,
    description: &str,
    image_url: &str,
    price: &str,
    colors: &[&str],
    category: Category,
) -> Product {
    Product {
        id: ProductId::generate(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        price: price.to_string(),
        colors: colors.iter().map(|color| color.to_string()).collect(),
        category,
    }
}

/// The catalog shown on first launch. Nothing here is persisted; a reload
/// starts from this list again.
pub fn seed_catalog() -> Vec<Product> {
    let categories = categories();
    vec![
        product(
            "Aria Desk Chair",
            "High-back mesh chair with adjustable lumbar support and a tilt lock.",
            "https://images.example/products/aria-chair.png",
            "189.00",
            &["#1F2937", "#2563EB"],
            categories[0].clone(),
        ),
        product(
            "Nord Floor Lamp",
            "Three-legged floor lamp with a linen shade and a warm-white bulb.",
            "https://images.example/products/nord-lamp.png",
            "74.50",
            &["#CA8A04", "#3C2A21"],
            categories[1].clone(),
        ),
        product(
            "Pulse Wireless Headphones",
            "Over-ear headphones with active noise cancelling and a 30 hour battery.",
            "https://images.example/products/pulse-headphones.png",
            "129.99",
            &["#DC2626", "#1F2937", "#A855F7"],
            categories[2].clone(),
        ),
        product(
            "Slate Desk Mat",
            "Stitched-edge desk mat in muted slate, large enough for keyboard and mouse.",
            "https://images.example/products/slate-mat.png",
            "24.00",
            &["#166534"],
            categories[3].clone(),
        ),
    ]
}
