use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ItemId;
use crate::normalize::{
    AssetBase, ListField, NOT_SPECIFIED, display_date, lenient_vec, text,
    text_or,
};

/// A tender notice as the API sends it. Older records use camelCase keys,
/// newer ones snake_case; both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBid {
    pub id: ItemId,
    pub bid_number: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type", alias = "bid_type")]
    pub bid_type: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "publishDate", alias = "publish_date")]
    pub publish_date: Option<String>,
    #[serde(rename = "deadlineDate", alias = "deadline_date")]
    pub deadline_date: Option<String>,
    /// Free text ("$320 million") or a plain number.
    #[serde(default)]
    pub budget: Value,
    #[serde(rename = "fundingSource", alias = "funding_source")]
    pub funding_source: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub eligibility: ListField,
    #[serde(rename = "contactPerson", alias = "contact_person")]
    pub contact_person: Option<String>,
    #[serde(rename = "contactEmail", alias = "contact_email")]
    pub contact_email: Option<String>,
    #[serde(rename = "contactPhone", alias = "contact_phone")]
    pub contact_phone: Option<String>,
    #[serde(rename = "awardStatus", alias = "award_status")]
    pub award_status: Option<String>,
    #[serde(rename = "awardedTo", alias = "awarded_to")]
    pub awarded_to: Option<String>,
    #[serde(rename = "awardDate", alias = "award_date")]
    pub award_date: Option<String>,
    #[serde(default, rename = "contractValue", alias = "contract_value")]
    pub contract_value: Value,
    #[serde(rename = "cancellationReason", alias = "cancellation_reason")]
    pub cancellation_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub documents: Vec<RawBidDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBidDocument {
    pub id: Option<ItemId>,
    pub name: Option<String>,
    pub filename: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub content_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bid {
    pub id: ItemId,
    pub bid_number: Option<String>,
    pub title: String,
    pub category: String,
    pub bid_type: String,
    /// "active" or "closed".
    pub status: String,
    pub publish_date: String,
    pub deadline_date: String,
    pub budget: String,
    pub funding_source: String,
    pub description: String,
    pub eligibility: Vec<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub award_status: Option<String>,
    pub awarded_to: Option<String>,
    pub award_date: Option<String>,
    pub contract_value: Option<String>,
    pub cancellation_reason: Option<String>,
    pub documents: Vec<BidDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidDocument {
    pub id: Option<ItemId>,
    pub name: String,
    pub size: Option<String>,
    pub file_type: Option<String>,
    /// Download link. Documents without one cannot be opened.
    pub url: Option<String>,
}

impl Bid {
    /// The reference shown in listings: the bid number when there is one.
    pub fn reference(&self) -> &str {
        self.bid_number.as_deref().unwrap_or(self.id.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

impl RawBid {
    pub fn normalize(self, assets: &AssetBase) -> Bid {
        Bid {
            id: self.id,
            bid_number: non_blank(self.bid_number),
            title: text(self.title),
            category: text(self.category),
            bid_type: text(self.bid_type),
            status: text(self.status).to_lowercase(),
            publish_date: display_date(self.publish_date.as_deref()),
            deadline_date: display_date(self.deadline_date.as_deref()),
            budget: amount_text(&self.budget)
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            funding_source: text_or(self.funding_source, NOT_SPECIFIED),
            description: text(self.description),
            eligibility: self.eligibility.into_strings(),
            contact_person: non_blank(self.contact_person),
            contact_email: non_blank(self.contact_email),
            contact_phone: non_blank(self.contact_phone),
            award_status: non_blank(self.award_status),
            awarded_to: non_blank(self.awarded_to),
            award_date: non_blank(self.award_date)
                .map(|date| display_date(Some(&date))),
            contract_value: amount_text(&self.contract_value),
            cancellation_reason: non_blank(self.cancellation_reason),
            documents: self
                .documents
                .into_iter()
                .map(|doc| doc.normalize(assets))
                .collect(),
        }
    }
}

impl RawBidDocument {
    fn normalize(self, assets: &AssetBase) -> BidDocument {
        let name = self.name.or(self.filename);
        BidDocument {
            id: self.id,
            name: text_or(name, "document"),
            size: non_blank(self.size),
            file_type: non_blank(self.file_type.or(self.content_type)),
            url: assets.resolve_opt(self.url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn amount_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_blank(Some(text.clone())),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_camel_and_snake_case_keys() {
        let assets = AssetBase::new("http://api.test/api/v1");
        let camel: RawBid = serde_json::from_value(json!({
            "id": "ICB-2025-01",
            "title": "Expressway",
            "type": "International Competitive Bidding",
            "status": "Active",
            "publishDate": "2025-03-15",
            "budget": 320000000,
            "documents": [
                {"filename": "spec.pdf", "url": "/files/spec.pdf"},
                "not a document"
            ]
        }))
        .unwrap();
        let snake: RawBid = serde_json::from_value(json!({
            "id": 9,
            "bid_number": "NCB-2025-03",
            "publish_date": "2025-04-05",
            "funding_source": "Government"
        }))
        .unwrap();

        let camel = camel.normalize(&assets);
        assert!(camel.is_active());
        assert_eq!(camel.publish_date, "March 15, 2025");
        assert_eq!(camel.budget, "320000000");
        assert_eq!(camel.documents.len(), 1);
        assert_eq!(camel.documents[0].name, "spec.pdf");
        assert_eq!(
            camel.documents[0].url.as_deref(),
            Some("http://api.test/files/spec.pdf")
        );

        let snake = snake.normalize(&assets);
        assert_eq!(snake.reference(), "NCB-2025-03");
        assert_eq!(snake.publish_date, "April 5, 2025");
        assert_eq!(snake.funding_source, "Government");
        assert_eq!(snake.budget, NOT_SPECIFIED);
    }
}
