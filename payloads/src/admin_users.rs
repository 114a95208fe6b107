use serde::{Deserialize, Serialize};

use crate::ItemId;
use crate::normalize::{display_date, text};

#[derive(Debug, Clone, Deserialize)]
pub struct RawAdminUser {
    pub id: ItemId,
    pub email: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// A site administrator, as listed on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUser {
    pub id: ItemId,
    pub email: String,
    /// Long-form date the account was created.
    pub created_at: String,
    pub updated_at: String,
}

impl RawAdminUser {
    pub fn normalize(self) -> AdminUser {
        AdminUser {
            id: self.id,
            email: text(self.email),
            created_at: display_date(self.created_at.as_deref()),
            updated_at: display_date(self.updated_at.as_deref()),
        }
    }
}
