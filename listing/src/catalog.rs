//! How each listing page searches, filters and pages its entity.

use payloads::requests::{ALL_CATEGORIES, ALL_TYPES};
use payloads::{Bid, District, Event, News, Project, Vacancy};

use crate::view::{Facet, Filterable, NoFacet};

pub const NEWS_PER_PAGE: usize = 6;
pub const EVENTS_PER_PAGE: usize = 6;
pub const BIDS_PER_PAGE: usize = 6;
pub const VACANCIES_PER_PAGE: usize = 6;
pub const DISTRICTS_PER_PAGE: usize = 10;
pub const PROJECTS_PER_PAGE: usize = 6;

/// Category select options for bids. Fixed rather than taken from the
/// data, because the server narrows the list to the current selection.
pub const BID_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Road Construction",
    "Road Rehabilitation",
    "Road Maintenance",
    "Bridge Construction",
    "Consultancy Services",
    "Goods",
];

pub const BID_TYPES: &[&str] = &[
    ALL_TYPES,
    "International Competitive Bidding",
    "National Competitive Bidding",
];

/// Event type select options. The server filters by type, so these cannot
/// come from the fetched page.
pub const EVENT_TYPES: &[&str] =
    &["all", "Conference", "Workshop", "Seminar", "Training"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsFacet {
    Category,
}

impl Facet for NewsFacet {
    const ALL: &'static [Self] = &[NewsFacet::Category];

    fn sentinel(self) -> &'static str {
        "All"
    }
}

impl Filterable for News {
    type Facet = NewsFacet;
    const PAGE_SIZE: usize = NEWS_PER_PAGE;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: NewsFacet) -> &str {
        match facet {
            NewsFacet::Category => &self.category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFacet {
    EventType,
}

impl Facet for EventFacet {
    const ALL: &'static [Self] = &[EventFacet::EventType];

    fn sentinel(self) -> &'static str {
        "all"
    }
}

impl Filterable for Event {
    type Facet = EventFacet;
    const PAGE_SIZE: usize = EVENTS_PER_PAGE;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.event_type]
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    fn facet_value(&self, facet: EventFacet) -> &str {
        match facet {
            EventFacet::EventType => &self.event_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidFacet {
    Category,
    Type,
}

impl Facet for BidFacet {
    const ALL: &'static [Self] = &[BidFacet::Category, BidFacet::Type];

    fn sentinel(self) -> &'static str {
        match self {
            BidFacet::Category => ALL_CATEGORIES,
            BidFacet::Type => ALL_TYPES,
        }
    }
}

impl Filterable for Bid {
    type Facet = BidFacet;
    const PAGE_SIZE: usize = BIDS_PER_PAGE;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.id.as_str()];
        if let Some(number) = &self.bid_number {
            fields.push(number);
        }
        fields
    }

    fn facet_value(&self, facet: BidFacet) -> &str {
        match facet {
            BidFacet::Category => &self.category,
            BidFacet::Type => &self.bid_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacancyFacet {
    Location,
    JobType,
}

impl Facet for VacancyFacet {
    const ALL: &'static [Self] =
        &[VacancyFacet::Location, VacancyFacet::JobType];

    fn sentinel(self) -> &'static str {
        "all"
    }
}

impl Filterable for Vacancy {
    type Facet = VacancyFacet;
    const PAGE_SIZE: usize = VACANCIES_PER_PAGE;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.department.as_str(),
            self.description.as_str(),
        ]
    }

    fn facet_value(&self, facet: VacancyFacet) -> &str {
        match facet {
            VacancyFacet::Location => &self.location,
            VacancyFacet::JobType => &self.job_type,
        }
    }
}

impl Filterable for District {
    type Facet = NoFacet;
    const PAGE_SIZE: usize = DISTRICTS_PER_PAGE;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }

    fn facet_value(&self, facet: NoFacet) -> &str {
        match facet {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFacet {
    Status,
}

impl Facet for ProjectFacet {
    const ALL: &'static [Self] = &[ProjectFacet::Status];

    fn sentinel(self) -> &'static str {
        "all"
    }
}

impl Filterable for Project {
    type Facet = ProjectFacet;
    const PAGE_SIZE: usize = PROJECTS_PER_PAGE;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }

    fn facet_value(&self, facet: ProjectFacet) -> &str {
        match facet {
            ProjectFacet::Status => &self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ViewAction, ViewState, facet_options};
    use payloads::samples::{sample_bids, sample_vacancies};

    fn bid(title: &str, category: &str) -> Bid {
        let mut bid = sample_bids().remove(0);
        bid.title = title.to_string();
        bid.category = category.to_string();
        bid
    }

    #[test]
    fn search_and_category_combine() {
        let bids = vec![bid("Road A", "X"), bid("Bridge B", "Y")];
        let mut view = ViewState::<BidFacet>::new();

        view.reduce(ViewAction::SetSearch("road".into()));
        let page = view.apply(&bids);
        let titles: Vec<&str> =
            page.items.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Road A"]);

        view.reduce(ViewAction::SetFilter(BidFacet::Category, "Y".into()));
        assert!(view.apply(&bids).items.is_empty());
    }

    #[test]
    fn bids_match_on_reference() {
        let bids = sample_bids();
        let mut view = ViewState::<BidFacet>::new();
        view.reduce(ViewAction::SetSearch("ncb-2024".into()));
        let page = view.apply(&bids);
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.items[0].reference(), "NCB-2024-12");
    }

    #[test]
    fn fixed_options_start_with_the_sentinel() {
        assert_eq!(BID_CATEGORIES[0], BidFacet::Category.sentinel());
        assert_eq!(BID_TYPES[0], BidFacet::Type.sentinel());
        assert_eq!(EVENT_TYPES[0], EventFacet::EventType.sentinel());

        // every sample tender stays selectable whatever is picked
        for bid in sample_bids() {
            assert!(BID_CATEGORIES.contains(&bid.category.as_str()));
            assert!(BID_TYPES.contains(&bid.bid_type.as_str()));
        }
    }

    #[test]
    fn vacancy_options_come_from_the_data() {
        let vacancies = sample_vacancies();
        assert_eq!(
            facet_options(&vacancies, VacancyFacet::Location),
            vec!["all", "Addis Ababa", "Adama", "Hawassa"]
        );
        assert_eq!(
            facet_options(&vacancies, VacancyFacet::JobType),
            vec!["all", "Full-Time", "Contract"]
        );
    }
}
