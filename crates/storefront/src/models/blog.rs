//! Journal articles.

use chrono::NaiveDate;
use handora_core::BlogPostId;
use serde::{Deserialize, Serialize};

/// A published journal article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub image_url: String,
}

/// Form input for creating or editing an article.
///
/// When `date` is absent the store stamps today's date on save.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub id: Option<BlogPostId>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: Option<NaiveDate>,
    pub image_url: String,
}

impl BlogDraft {
    /// Materialize the draft into a post with the given id and date.
    #[must_use]
    pub fn into_post(self, id: BlogPostId, date: NaiveDate) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            date,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_serde() {
        let post = BlogPost {
            id: BlogPostId::new("1"),
            title: "The Benefits of Vegan Skincare".to_string(),
            excerpt: "Plant-based is better.".to_string(),
            content: "Long article content...".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            image_url: "https://example.com/leaf.jpg".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["date"], "2024-03-20");
        assert_eq!(json["imageUrl"], "https://example.com/leaf.jpg");

        let back: BlogPost = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }
}
