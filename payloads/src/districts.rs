use serde::{Deserialize, Serialize};

use crate::ItemId;
use crate::normalize::{AssetBase, ListField, NOT_SPECIFIED, text, text_or};

#[derive(Debug, Clone, Deserialize)]
pub struct RawDistrict {
    pub id: ItemId,
    pub name: Option<String>,
    pub address: Option<String>,
    pub map_embed: Option<String>,
    #[serde(default)]
    pub phone_numbers: ListField,
    #[serde(default)]
    pub emails: ListField,
    #[serde(default)]
    pub social_media_links: ListField,
    pub district_overview: Option<String>,
    pub detail_description: Option<String>,
    pub is_published: Option<bool>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: ListField,
    pub published_by: Option<String>,
    pub updated_by: Option<String>,
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub gallery_images_urls: ListField,
}

/// A regional district office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: ItemId,
    pub name: String,
    pub address: String,
    /// Embeddable map markup or url, when the office has one.
    pub map_embed: Option<String>,
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
    pub social_media_links: Vec<String>,
    pub district_overview: String,
    pub detail_description: String,
    pub is_published: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Vec<String>,
    pub published_by: Option<String>,
    pub updated_by: Option<String>,
    pub main_image_url: Option<String>,
    pub gallery_images_urls: Vec<String>,
}

impl RawDistrict {
    pub fn normalize(self, assets: &AssetBase) -> District {
        let blank_to_none =
            |v: Option<String>| v.filter(|v| !v.trim().is_empty());
        District {
            id: self.id,
            name: text(self.name),
            address: text_or(self.address, NOT_SPECIFIED),
            map_embed: blank_to_none(self.map_embed),
            phone_numbers: self.phone_numbers.into_strings(),
            emails: self.emails.into_strings(),
            social_media_links: self.social_media_links.into_strings(),
            district_overview: text(self.district_overview),
            detail_description: text(self.detail_description),
            is_published: self.is_published.unwrap_or(true),
            meta_title: blank_to_none(self.meta_title),
            meta_description: blank_to_none(self.meta_description),
            meta_keywords: self.meta_keywords.into_strings(),
            published_by: blank_to_none(self.published_by),
            updated_by: blank_to_none(self.updated_by),
            main_image_url: assets.resolve_opt(self.main_image_url),
            gallery_images_urls: self
                .gallery_images_urls
                .into_strings()
                .iter()
                .map(|url| assets.resolve(url))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_lists_and_images() {
        let raw: RawDistrict = serde_json::from_value(json!({
            "id": 2,
            "name": "Adama District",
            "phone_numbers": "+251 22 111 2233\n+251 22 111 2244",
            "emails": ["adama@era.gov.et", null],
            "main_image_url": "/rails/active_storage/blobs/d/main.jpg",
            "gallery_images_urls": [
                "uploads/one.jpg",
                "https://cdn.test/two.jpg"
            ]
        }))
        .unwrap();
        let district = raw.normalize(&AssetBase::new("http://api.test"));

        assert_eq!(district.phone_numbers.len(), 2);
        assert_eq!(district.emails, vec!["adama@era.gov.et"]);
        assert_eq!(district.address, NOT_SPECIFIED);
        assert_eq!(
            district.main_image_url.as_deref(),
            Some("http://api.test/rails/active_storage/blobs/d/main.jpg")
        );
        assert_eq!(
            district.gallery_images_urls,
            vec!["http://api.test/uploads/one.jpg", "https://cdn.test/two.jpg"]
        );
    }
}
