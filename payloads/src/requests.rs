use serde::Serialize;

/// Select value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All Categories";
/// Select value meaning "no type filter".
pub const ALL_TYPES: &str = "All Types";

pub const EVENTS_PER_PAGE: u32 = 6;
pub const DISTRICTS_PER_PAGE: u32 = 10;

/// Query for `GET /news`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsQuery {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewsQuery {
    pub fn featured() -> Self {
        Self {
            featured: true,
            category: None,
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            featured: false,
            category: Some(category.into()),
        }
    }
}

/// Query for `GET /events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl EventQuery {
    /// Pages and page sizes below 1 are raised to 1.
    pub fn new(page: u32, per_page: u32, event_type: Option<String>) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            event_type: event_type.filter(|t| !t.is_empty()),
        }
    }
}

impl Default for EventQuery {
    fn default() -> Self {
        Self::new(1, EVENTS_PER_PAGE, None)
    }
}

/// Query for `GET /districts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistrictQuery {
    pub page: u32,
    pub per_page: u32,
}

impl DistrictQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }
}

impl Default for DistrictQuery {
    fn default() -> Self {
        Self::new(1, DISTRICTS_PER_PAGE)
    }
}

/// Query for `GET /bids`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BidQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub bid_type: Option<String>,
}

impl BidQuery {
    /// Build a query from select values, leaving out the "all" sentinels.
    pub fn from_selection(category: &str, bid_type: &str) -> Self {
        let keep = |value: &str, sentinel: &str| {
            (!value.is_empty() && value != sentinel).then(|| value.to_string())
        };
        Self {
            category: keep(category, ALL_CATEGORIES),
            bid_type: keep(bid_type, ALL_TYPES),
        }
    }
}

/// Which slice of the project portfolio to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectScope {
    #[default]
    All,
    Completed,
    Ongoing,
}

impl ProjectScope {
    pub fn path(self) -> &'static str {
        match self {
            Self::All => "projects",
            Self::Completed => "projects/completed",
            Self::Ongoing => "projects/ongoing",
        }
    }
}

/// Which vacancies to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VacancyScope {
    #[default]
    All,
    Active,
    Expired,
}

impl VacancyScope {
    pub fn path(self) -> &'static str {
        match self {
            Self::All => "vacancies",
            Self::Active => "vacancies/active",
            Self::Expired => "vacancies/expired",
        }
    }
}
