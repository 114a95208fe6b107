use serde::{Deserialize, Serialize};

use crate::ItemId;
use crate::normalize::{AssetBase, ListField, display_date, text};

/// A news article as the API sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNews {
    pub id: ItemId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub published_date: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: ListField,
    pub is_featured: Option<bool>,
    pub view_count: Option<u64>,
    pub author: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A news article ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct News {
    pub id: ItemId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    /// Long-form publication date, e.g. "May 15, 2025".
    pub published_date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub view_count: u64,
    pub author: String,
    pub thumbnail_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RawNews {
    pub fn normalize(self, assets: &AssetBase) -> News {
        News {
            id: self.id,
            title: text(self.title),
            content: text(self.content),
            excerpt: text(self.excerpt),
            published_date: display_date(self.published_date.as_deref()),
            category: text(self.category),
            tags: self.tags.into_strings(),
            is_featured: self.is_featured.unwrap_or(false),
            view_count: self.view_count.unwrap_or(0),
            author: text(self.author),
            thumbnail_url: assets.resolve_opt(self.thumbnail_url),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_article_gets_safe_defaults() {
        let raw: RawNews = serde_json::from_value(json!({
            "id": 3,
            "title": "Bridge reopened",
            "tags": "roads\nbridges",
            "thumbnail_url": "/rails/active_storage/blobs/x/bridge.jpg"
        }))
        .unwrap();
        let news = raw.normalize(&AssetBase::new("http://api.test/api/v1"));

        assert_eq!(news.id, ItemId::from("3"));
        assert_eq!(news.tags, vec!["roads", "bridges"]);
        assert_eq!(news.excerpt, "");
        assert_eq!(news.published_date, "Not specified");
        assert!(!news.is_featured);
        assert_eq!(
            news.thumbnail_url.as_deref(),
            Some("http://api.test/rails/active_storage/blobs/x/bridge.jpg")
        );
    }
}
