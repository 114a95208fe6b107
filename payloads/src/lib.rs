//! Wire types, normalization and the HTTP client for the roads authority
//! content API.
//!
//! Everything the API returns passes through a `Raw*` type first and is then
//! normalized into the public entity types, so consumers never see the
//! inconsistent shapes the server sometimes produces.

pub mod api_client;
pub mod config;
pub mod normalize;
pub mod requests;
pub mod responses;
pub mod samples;

mod about;
mod admin_users;
mod bids;
mod districts;
mod events;
mod news;
mod projects;
mod vacancies;

pub use about::{
    AboutUs, Achievement, CoreValue, HistoryMilestone, Partner, RawAboutUs,
    SeoMeta, TeamMember,
};
pub use admin_users::{AdminUser, RawAdminUser};
pub use api_client::{APIClient, ClientError};
pub use bids::{Bid, BidDocument, RawBid};
pub use config::{ClientConfig, ConfigError};
pub use districts::{District, RawDistrict};
pub use events::{Event, RawEvent};
pub use news::{News, RawNews};
pub use projects::{
    Milestone, Project, ProjectDocument, ProjectImage, RawProject,
};
pub use responses::{Listing, PageMeta};
pub use vacancies::{RawVacancy, Vacancy};

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the API.
///
/// Some resources use integer ids and others use strings (bid numbers,
/// slugs), so both are accepted on the wire and kept as text.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(text) => ItemId(text),
            Wire::Signed(n) => ItemId(n.to_string()),
            Wire::Unsigned(n) => ItemId(n.to_string()),
        })
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ItemId;

    #[test]
    fn item_id_accepts_numbers_and_strings() {
        let numeric: ItemId = serde_json::from_str("42").unwrap();
        let text: ItemId = serde_json::from_str("\"ICB-2025-01\"").unwrap();
        assert_eq!(numeric, ItemId::from("42"));
        assert_eq!(text.to_string(), "ICB-2025-01");
    }
}
