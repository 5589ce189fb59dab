//! Personalized skin quiz recommendations.
//!
//! A quiz submission is turned into a prompt for the Gemini API; the
//! model answers with short advice and product name suggestions, which
//! are resolved against the live catalog. Any failure degrades to a
//! fixed fallback so the quiz always produces a result.

pub mod client;
pub mod error;
pub mod types;

pub use client::RecommendClient;
pub use error::RecommendError;

use crate::models::Product;

/// Advice shown when the model is unavailable or answers garbage.
pub const FALLBACK_ADVICE: &str = "Based on your unique profile, HANDORA recommends gentle \
    vegan formulas that maintain your skin's natural moisture barrier.";

/// A completed quiz submission.
#[derive(Debug, Clone)]
pub struct SkinProfile {
    pub skin_type: String,
    pub concerns: Vec<String>,
    pub sensitivity: String,
}

/// The final recommendation shown on the quiz result page.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub advice: String,
    pub products: Vec<Product>,
}

/// Produce a personalized recommendation for a quiz submission.
///
/// When `client` is `None` (no API key configured) or the model call
/// fails in any way, the fixed fallback is returned instead; the quiz
/// never errors out.
pub async fn personalized(
    client: Option<&RecommendClient>,
    profile: &SkinProfile,
    catalog: &[Product],
) -> Recommendation {
    let Some(client) = client else {
        return fallback(catalog);
    };

    match client.generate(build_prompt(profile, catalog)).await {
        Ok(answer) => Recommendation {
            advice: answer.recommendation,
            products: resolve_suggestions(&answer.products.names(), catalog),
        },
        Err(e) => {
            tracing::warn!(error = %e, "recommendation failed, using fallback");
            fallback(catalog)
        }
    }
}

/// Build the model prompt from the quiz answers and the catalog.
fn build_prompt(profile: &SkinProfile, catalog: &[Product]) -> String {
    let product_list = catalog
        .iter()
        .map(|p| format!("{} (Category: {})", p.name, p.category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Customer: {} skin, concerns: {}, sensitivity: {}. Available: {}. \
         Provide 2 sentence advice and suitable product names in JSON \
         with keys \"recommendation\" and \"products\".",
        profile.skin_type,
        profile.concerns.join(", "),
        profile.sensitivity,
        product_list,
    )
}

/// Match suggested names against the catalog.
///
/// A catalog product matches when its name contains a suggested name,
/// case-insensitively. When nothing matches, the first catalog product
/// is recommended so the result page is never empty.
fn resolve_suggestions(names: &[&str], catalog: &[Product]) -> Vec<Product> {
    let matched: Vec<Product> = catalog
        .iter()
        .filter(|p| {
            let haystack = p.name.to_lowercase();
            names.iter().any(|n| haystack.contains(&n.to_lowercase()))
        })
        .cloned()
        .collect();

    if matched.is_empty() {
        catalog.first().cloned().into_iter().collect()
    } else {
        matched
    }
}

/// The fixed fallback: canned advice plus the first and third catalog
/// products (or just the first when the catalog is short).
fn fallback(catalog: &[Product]) -> Recommendation {
    let mut products: Vec<Product> = catalog.first().cloned().into_iter().collect();
    if let Some(third) = catalog.get(2) {
        products.push(third.clone());
    }
    Recommendation {
        advice: FALLBACK_ADVICE.to_string(),
        products,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use handora_core::{Category, Price, ProductId};

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: Category::HandWash,
            price: Price::from_cents(1800),
            description: String::new(),
            ingredients: vec![],
            image_url: String::new(),
            stock: 10,
            featured: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Pomelo Peel Vegan Hand Wash"),
            product("2", "Green Tea Revitalizing Soap"),
            product("3", "Aloe Vera Calming Wash"),
        ]
    }

    #[test]
    fn test_resolve_matches_case_insensitive_substring() {
        let resolved = resolve_suggestions(&["aloe vera"], &catalog());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Aloe Vera Calming Wash");
    }

    #[test]
    fn test_resolve_zero_matches_falls_back_to_first() {
        let resolved = resolve_suggestions(&["Charcoal Bar"], &catalog());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Pomelo Peel Vegan Hand Wash");
    }

    #[test]
    fn test_resolve_empty_catalog_yields_nothing() {
        assert!(resolve_suggestions(&["anything"], &[]).is_empty());
    }

    #[test]
    fn test_fallback_picks_first_and_third() {
        let result = fallback(&catalog());
        assert_eq!(result.advice, FALLBACK_ADVICE);
        assert_eq!(result.products.len(), 2);
        assert_eq!(result.products[0].name, "Pomelo Peel Vegan Hand Wash");
        assert_eq!(result.products[1].name, "Aloe Vera Calming Wash");
    }

    #[test]
    fn test_fallback_short_catalog() {
        let short = vec![product("1", "Only Wash")];
        let result = fallback(&short);
        assert_eq!(result.products.len(), 1);
    }

    #[tokio::test]
    async fn test_personalized_without_client_uses_fallback() {
        let profile = SkinProfile {
            skin_type: "Dry".to_string(),
            concerns: vec!["Dryness".to_string(), "Redness".to_string()],
            sensitivity: "Very Sensitive".to_string(),
        };
        let result = personalized(None, &profile, &catalog()).await;
        assert_eq!(result.advice, FALLBACK_ADVICE);
        assert_eq!(result.products.len(), 2);
    }

    #[test]
    fn test_prompt_contains_profile_and_catalog() {
        let profile = SkinProfile {
            skin_type: "Oily".to_string(),
            concerns: vec!["Aging".to_string()],
            sensitivity: "Not Sensitive".to_string(),
        };
        let prompt = build_prompt(&profile, &catalog());
        assert!(prompt.contains("Oily skin"));
        assert!(prompt.contains("concerns: Aging"));
        assert!(prompt.contains("Green Tea Revitalizing Soap (Category: Hand Wash)"));
    }
}
