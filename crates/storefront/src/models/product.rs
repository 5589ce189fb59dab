//! Catalog products.

use handora_core::{Category, Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Serialized with camelCase field names to match the persisted
/// collection layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image_url: String,
    pub stock: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Form input for creating or editing a product.
///
/// `id` is `None` for new products; the store mints one on save.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image_url: String,
    pub stock: u32,
    pub featured: bool,
}

impl ProductDraft {
    /// Materialize the draft into a product with the given id.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            description: self.description,
            ingredients: self.ingredients,
            image_url: self.image_url,
            stock: self.stock,
            featured: self.featured,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Pomelo Peel Vegan Hand Wash".to_string(),
            category: Category::HandWash,
            price: Price::from_cents(1800),
            description: "Citrus hand wash".to_string(),
            ingredients: vec!["Pomelo Peel Extract".to_string()],
            image_url: "https://example.com/pomelo.jpg".to_string(),
            stock: 50,
            featured: true,
        }
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/pomelo.jpg");
        assert_eq!(json["category"], "Hand Wash");
        assert_eq!(json["price"], "18.00");
    }

    #[test]
    fn test_featured_defaults_to_false() {
        let json = r#"{
            "id": "9",
            "name": "Plain Soap",
            "category": "Skincare",
            "price": "5.00",
            "description": "",
            "ingredients": [],
            "imageUrl": "",
            "stock": 0
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.featured);
        assert!(!product.in_stock());
    }
}
