//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Build a single-turn request asking for a JSON response.
    #[must_use]
    pub fn json_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

/// Response body for `generateContent`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The text of the first candidate's first part, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// The model's answer, parsed out of the candidate text.
///
/// Field aliases tolerate the model drifting from the requested schema.
#[derive(Debug, Deserialize)]
pub struct ModelRecommendation {
    #[serde(alias = "advice")]
    pub recommendation: String,
    #[serde(alias = "suggest", alias = "productNames")]
    pub products: Suggestions,
}

/// Product name suggestions, as a list or a single string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Suggestions {
    Many(Vec<String>),
    One(String),
}

impl Suggestions {
    /// The suggested names as a slice-backed vector.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Many(names) => names.iter().map(String::as_str).collect(),
            Self::One(name) => vec![name.as_str()],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_layout() {
        let request = GenerateContentRequest::json_prompt("hello".to_string());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_first_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"ok\":true}"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("{\"ok\":true}"));
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_recommendation_with_list_of_products() {
        let json = r#"{
            "recommendation": "Use gentle cleansers.",
            "products": ["Aloe Vera Calming Wash", "Green Tea Revitalizing Soap"]
        }"#;
        let parsed: ModelRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.products.names().len(), 2);
    }

    #[test]
    fn test_recommendation_with_single_product_string() {
        let json = r#"{
            "advice": "Try a calming wash.",
            "products": "Aloe Vera Calming Wash"
        }"#;
        let parsed: ModelRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.recommendation, "Try a calming wash.");
        assert_eq!(parsed.products.names(), vec!["Aloe Vera Calming Wash"]);
    }
}
