use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ClientError;

/// Pagination details returned alongside paginated collections.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
}

/// A normalized collection, with pagination details when the endpoint
/// provides them.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: None,
        }
    }
}

impl<T> Listing<T> {
    pub fn unpaged(items: Vec<T>) -> Self {
        Self { items, meta: None }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

/// Extract a collection from a response body.
///
/// Collections arrive either as a bare array or wrapped as
/// `{ "<key>": [...], "meta": {...} }`. Entries that are not objects or do
/// not decode are skipped with a warning; any other body shape is an error.
pub fn collection<R: DeserializeOwned>(
    body: Value,
    key: &str,
) -> Result<Listing<R>, ClientError> {
    let (entries, meta) = match body {
        Value::Array(entries) => (entries, None),
        Value::Object(mut envelope) => {
            let entries = match envelope.remove(key) {
                Some(Value::Array(entries)) => entries,
                Some(Value::Null) => Vec::new(),
                _ => {
                    return Err(ClientError::UnexpectedShape(format!(
                        "expected an array of {key}"
                    )));
                }
            };
            let meta = match envelope.remove("meta") {
                Some(meta) => serde_json::from_value(meta).ok(),
                None => None,
            };
            (entries, meta)
        }
        _ => {
            return Err(ClientError::UnexpectedShape(format!(
                "expected an array of {key}"
            )));
        }
    };

    let items = entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| match serde_json::from_value::<R>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping malformed {key} entry: {e}");
                None
            }
        })
        .collect();

    Ok(Listing { items, meta })
}

/// Decode a single resource from a response body.
pub fn single<R: DeserializeOwned>(
    body: Value,
    what: &str,
) -> Result<R, ClientError> {
    serde_json::from_value(body).map_err(|e| {
        ClientError::UnexpectedShape(format!("malformed {what}: {e}"))
    })
}
