use serde::{Deserialize, Serialize};

use crate::ItemId;
use crate::normalize::{
    AssetBase, ListField, NOT_SPECIFIED, display_date, text, text_or,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: ItemId,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
    pub registration_required: Option<bool>,
    pub registration_open: Option<bool>,
    pub capacity: Option<u32>,
    #[serde(default)]
    pub agenda: ListField,
    #[serde(default)]
    pub speakers: ListField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: ItemId,
    pub title: String,
    /// Path segment for the detail endpoint. Falls back to the id.
    pub slug: String,
    pub excerpt: String,
    pub description: String,
    pub image_url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub event_type: String,
    pub status: String,
    pub registration_required: bool,
    pub registration_open: bool,
    pub capacity: Option<u32>,
    pub agenda: Vec<String>,
    pub speakers: Vec<String>,
}

impl RawEvent {
    pub fn normalize(self, assets: &AssetBase) -> Event {
        let slug = text_or(self.slug, self.id.as_str());
        Event {
            slug,
            title: text(self.title),
            excerpt: text(self.excerpt),
            description: text(self.description),
            image_url: assets.resolve_opt(self.image_url),
            start_date: display_date(self.start_date.as_deref()),
            end_date: display_date(self.end_date.as_deref()),
            location: text_or(self.location, NOT_SPECIFIED),
            event_type: text(self.event_type),
            status: text(self.status),
            registration_required: self.registration_required.unwrap_or(false),
            registration_open: self.registration_open.unwrap_or(false),
            capacity: self.capacity,
            agenda: self.agenda.into_strings(),
            speakers: self.speakers.into_strings(),
            id: self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_fields_and_slug_fallback() {
        let raw: RawEvent = serde_json::from_value(json!({
            "id": "12",
            "title": "Road Safety Week",
            "start_date": "2025-06-02",
            "agenda": "[\"Opening\",\"Panel\"]",
            "speakers": ["Dr. Abebe", null, ""]
        }))
        .unwrap();
        let event = raw.normalize(&AssetBase::new("http://api.test"));

        assert_eq!(event.slug, "12");
        assert_eq!(event.start_date, "June 2, 2025");
        assert_eq!(event.end_date, NOT_SPECIFIED);
        assert_eq!(event.location, NOT_SPECIFIED);
        assert_eq!(event.agenda, vec!["Opening", "Panel"]);
        assert_eq!(event.speakers, vec!["Dr. Abebe"]);
        assert_eq!(event.image_url, None);
    }
}
