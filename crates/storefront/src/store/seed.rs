//! Seed collections written on first boot or when a collection is
//! missing or unreadable.

use chrono::NaiveDate;
use handora_core::{BlogPostId, Category, Price, ProductId};

use crate::models::{BlogPost, Product};

/// The starter catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Pomelo Peel Vegan Hand Wash".to_string(),
            category: Category::HandWash,
            price: Price::from_cents(1800),
            description: "Enriched with natural pomelo peel extracts to cleanse gently \
                          while leaving a refreshing, citrusy scent."
                .to_string(),
            ingredients: vec![
                "Pomelo Peel Extract".to_string(),
                "Aloe Vera".to_string(),
                "Vitamin E".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1556228720-195a672e8a03?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            stock: 50,
            featured: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Green Tea Revitalizing Soap".to_string(),
            category: Category::HandWash,
            price: Price::from_cents(1600),
            description: "Antioxidant-rich green tea helps soothe and protect sensitive \
                          skin with every wash."
                .to_string(),
            ingredients: vec![
                "Green Tea Extract".to_string(),
                "Glycerin".to_string(),
                "Shea Butter".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1600175107436-1199b44585ec?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            stock: 35,
            featured: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Aloe Vera Calming Wash".to_string(),
            category: Category::HandWash,
            price: Price::from_cents(1700),
            description: "Deeply hydrating formula from aloe vera for sensitive skin. \
                          Restores moisture instantly."
                .to_string(),
            ingredients: vec![
                "Aloe Vera Juice".to_string(),
                "Chamomile".to_string(),
                "Cucumber Extract".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1556228578-0d85b1a4d571?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            stock: 20,
            featured: true,
        },
    ]
}

/// The starter journal.
#[must_use]
pub fn blogs() -> Vec<BlogPost> {
    vec![BlogPost {
        id: BlogPostId::new("1"),
        title: "The Benefits of Vegan Skincare".to_string(),
        excerpt: "Discover why plant-based products are better for your skin and our planet."
            .to_string(),
        content: "Long article content...".to_string(),
        // Seed publication date.
        date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default(),
        image_url: "https://images.unsplash.com/photo-1512290923902-8a9f81dc236c?auto=format&fit=crop&q=80&w=800"
            .to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_featured_hand_wash() {
        let catalog = products();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|p| p.featured));
        assert!(catalog.iter().all(|p| p.category == Category::HandWash));
    }

    #[test]
    fn test_seed_journal_has_one_article() {
        assert_eq!(blogs().len(), 1);
    }
}
