//! The endpoint families the site loads, with their failure messages and
//! sample fallbacks.

use payloads::requests::{
    BidQuery, DistrictQuery, EventQuery, NewsQuery, ProjectScope,
    VacancyScope,
};
use payloads::samples::{
    fallback_about, sample_bids, sample_bids_with_status, sample_vacancies,
};
use payloads::{
    APIClient, AboutUs, AdminUser, Bid, ClientError, District, Event, ItemId,
    Listing, News, Project, Vacancy,
};
use reqwest::StatusCode;

use crate::resource::Resource;

pub struct NewsList;

impl Resource for NewsList {
    type Params = NewsQuery;
    type Output = Listing<News>;
    const NAME: &'static str = "news";

    async fn fetch(
        client: &APIClient,
        params: &NewsQuery,
    ) -> Result<Listing<News>, ClientError> {
        client.list_news(params).await
    }

    fn failure_message(_: &NewsQuery, _: &ClientError) -> String {
        "Failed to fetch news".into()
    }
}

pub struct NewsArticle;

impl Resource for NewsArticle {
    type Params = ItemId;
    type Output = News;
    const NAME: &'static str = "news article";

    async fn fetch(
        client: &APIClient,
        id: &ItemId,
    ) -> Result<News, ClientError> {
        client.get_news(id).await
    }

    fn failure_message(_: &ItemId, _: &ClientError) -> String {
        "Failed to fetch news".into()
    }
}

pub struct EventList;

impl Resource for EventList {
    type Params = EventQuery;
    type Output = Listing<Event>;
    const NAME: &'static str = "events";

    async fn fetch(
        client: &APIClient,
        params: &EventQuery,
    ) -> Result<Listing<Event>, ClientError> {
        client.list_events(params).await
    }

    fn failure_message(_: &EventQuery, _: &ClientError) -> String {
        "Failed to fetch events".into()
    }
}

pub struct FeaturedEvents;

impl Resource for FeaturedEvents {
    type Params = ();
    type Output = Listing<Event>;
    const NAME: &'static str = "featured events";

    async fn fetch(
        client: &APIClient,
        _: &(),
    ) -> Result<Listing<Event>, ClientError> {
        client.featured_events().await
    }

    fn failure_message(_: &(), _: &ClientError) -> String {
        "Failed to fetch featured events".into()
    }
}

pub struct UpcomingEvents;

impl Resource for UpcomingEvents {
    type Params = ();
    type Output = Listing<Event>;
    const NAME: &'static str = "upcoming events";

    async fn fetch(
        client: &APIClient,
        _: &(),
    ) -> Result<Listing<Event>, ClientError> {
        client.upcoming_events().await
    }

    fn failure_message(_: &(), _: &ClientError) -> String {
        "Failed to fetch events".into()
    }
}

pub struct EventDetail;

impl Resource for EventDetail {
    /// The event's slug.
    type Params = String;
    type Output = Event;
    const NAME: &'static str = "event";

    async fn fetch(
        client: &APIClient,
        slug: &String,
    ) -> Result<Event, ClientError> {
        client.get_event(slug).await
    }

    fn failure_message(_: &String, _: &ClientError) -> String {
        "Failed to fetch event details".into()
    }
}

pub struct BidList;

impl Resource for BidList {
    type Params = BidQuery;
    type Output = Listing<Bid>;
    const NAME: &'static str = "bids";

    async fn fetch(
        client: &APIClient,
        query: &BidQuery,
    ) -> Result<Listing<Bid>, ClientError> {
        client.list_bids(query).await
    }

    /// The sample tenders, narrowed the way the server would narrow them.
    fn sample_data(query: &BidQuery) -> Option<Listing<Bid>> {
        let selected = |wanted: &Option<String>, value: &str| {
            wanted.as_deref().is_none_or(|wanted| wanted == value)
        };
        let bids = sample_bids()
            .into_iter()
            .filter(|bid| selected(&query.category, &bid.category))
            .filter(|bid| selected(&query.bid_type, &bid.bid_type))
            .collect();
        Some(Listing::unpaged(bids))
    }

    fn failure_message(_: &BidQuery, _: &ClientError) -> String {
        "Failed to fetch bids. Please try again later.".into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidStatus {
    Active,
    Closed,
}

impl BidStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BidStatus::Active => "active",
            BidStatus::Closed => "closed",
        }
    }
}

pub struct BidsByStatus;

impl Resource for BidsByStatus {
    type Params = BidStatus;
    type Output = Listing<Bid>;
    const NAME: &'static str = "bids by status";

    async fn fetch(
        client: &APIClient,
        status: &BidStatus,
    ) -> Result<Listing<Bid>, ClientError> {
        match status {
            BidStatus::Active => client.active_bids().await,
            BidStatus::Closed => client.closed_bids().await,
        }
    }

    fn sample_data(status: &BidStatus) -> Option<Listing<Bid>> {
        Some(Listing::unpaged(sample_bids_with_status(status.as_str())))
    }

    fn failure_message(_: &BidStatus, _: &ClientError) -> String {
        "Failed to fetch bids. Please try again later.".into()
    }
}

pub struct BidDetail;

impl Resource for BidDetail {
    type Params = ItemId;
    type Output = Bid;
    const NAME: &'static str = "bid";

    async fn fetch(
        client: &APIClient,
        id: &ItemId,
    ) -> Result<Bid, ClientError> {
        client.get_bid(id).await
    }

    fn sample_data(id: &ItemId) -> Option<Bid> {
        sample_bids().into_iter().find(|bid| &bid.id == id)
    }

    fn failure_message(_: &ItemId, _: &ClientError) -> String {
        "Failed to fetch bid details".into()
    }
}

pub struct ProjectList;

impl Resource for ProjectList {
    type Params = ProjectScope;
    type Output = Listing<Project>;
    const NAME: &'static str = "projects";

    async fn fetch(
        client: &APIClient,
        scope: &ProjectScope,
    ) -> Result<Listing<Project>, ClientError> {
        client.list_projects(*scope).await
    }

    fn failure_message(_: &ProjectScope, _: &ClientError) -> String {
        "Failed to fetch projects".into()
    }
}

pub struct ProjectDetail;

impl Resource for ProjectDetail {
    type Params = ItemId;
    type Output = Project;
    const NAME: &'static str = "project";

    async fn fetch(
        client: &APIClient,
        id: &ItemId,
    ) -> Result<Project, ClientError> {
        client.get_project(id).await
    }

    fn failure_message(_: &ItemId, _: &ClientError) -> String {
        "Failed to fetch project details".into()
    }
}

pub struct VacancyList;

impl Resource for VacancyList {
    type Params = VacancyScope;
    type Output = Listing<Vacancy>;
    const NAME: &'static str = "vacancies";

    async fn fetch(
        client: &APIClient,
        scope: &VacancyScope,
    ) -> Result<Listing<Vacancy>, ClientError> {
        client.list_vacancies(*scope).await
    }

    /// Every sample opening is still open, so there is nothing to show for
    /// expired vacancies.
    fn sample_data(scope: &VacancyScope) -> Option<Listing<Vacancy>> {
        match scope {
            VacancyScope::All | VacancyScope::Active => {
                Some(Listing::unpaged(sample_vacancies()))
            }
            VacancyScope::Expired => None,
        }
    }

    fn failure_message(_: &VacancyScope, _: &ClientError) -> String {
        "Failed to fetch vacancies. Please try again later.".into()
    }
}

pub struct VacancyDetail;

impl Resource for VacancyDetail {
    type Params = ItemId;
    type Output = Vacancy;
    const NAME: &'static str = "vacancy";

    async fn fetch(
        client: &APIClient,
        id: &ItemId,
    ) -> Result<Vacancy, ClientError> {
        client.get_vacancy(id).await
    }

    fn sample_data(id: &ItemId) -> Option<Vacancy> {
        sample_vacancies().into_iter().find(|v| &v.id == id)
    }

    fn failure_message(_: &ItemId, _: &ClientError) -> String {
        "Failed to fetch vacancy details".into()
    }
}

pub struct DistrictList;

impl Resource for DistrictList {
    type Params = DistrictQuery;
    type Output = Listing<District>;
    const NAME: &'static str = "districts";

    async fn fetch(
        client: &APIClient,
        query: &DistrictQuery,
    ) -> Result<Listing<District>, ClientError> {
        client.list_districts(query).await
    }

    fn failure_message(_: &DistrictQuery, _: &ClientError) -> String {
        "Failed to fetch districts".into()
    }
}

pub struct DistrictDetail;

impl Resource for DistrictDetail {
    type Params = ItemId;
    type Output = District;
    const NAME: &'static str = "district";

    async fn fetch(
        client: &APIClient,
        id: &ItemId,
    ) -> Result<District, ClientError> {
        client.get_district(id).await
    }

    fn failure_message(_: &ItemId, error: &ClientError) -> String {
        match error.status() {
            Some(StatusCode::NOT_FOUND) => "District not found".into(),
            Some(StatusCode::UNAUTHORIZED) => "Unauthorized access".into(),
            _ => "Failed to fetch district details".into(),
        }
    }
}

pub struct AboutPage;

impl Resource for AboutPage {
    type Params = ();
    type Output = AboutUs;
    const NAME: &'static str = "about";

    async fn fetch(
        client: &APIClient,
        _: &(),
    ) -> Result<AboutUs, ClientError> {
        client.about().await
    }

    fn sample_data(_: &()) -> Option<AboutUs> {
        Some(fallback_about())
    }

    fn failure_message(_: &(), _: &ClientError) -> String {
        "Failed to fetch about data".into()
    }
}

pub struct AdminUserList;

impl Resource for AdminUserList {
    type Params = ();
    type Output = Listing<AdminUser>;
    const NAME: &'static str = "admin users";

    async fn fetch(
        client: &APIClient,
        _: &(),
    ) -> Result<Listing<AdminUser>, ClientError> {
        client.list_admin_users().await
    }

    fn failure_message(_: &(), _: &ClientError) -> String {
        "Failed to fetch admin users".into()
    }
}

pub struct AdminUserDetail;

impl Resource for AdminUserDetail {
    type Params = ItemId;
    type Output = AdminUser;
    const NAME: &'static str = "admin user";

    async fn fetch(
        client: &APIClient,
        id: &ItemId,
    ) -> Result<AdminUser, ClientError> {
        client.get_admin_user(id).await
    }

    fn failure_message(_: &ItemId, _: &ClientError) -> String {
        "Failed to fetch admin users".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::requests::{ALL_CATEGORIES, ALL_TYPES};

    #[test]
    fn bid_samples_follow_the_query() {
        let all = BidQuery::from_selection(ALL_CATEGORIES, ALL_TYPES);
        assert_eq!(BidList::sample_data(&all).map(|l| l.len()), Some(7));

        let roads = BidQuery::from_selection("Road Construction", ALL_TYPES);
        let roads = BidList::sample_data(&roads).unwrap_or_default();
        assert!(!roads.is_empty());
        let road = |b: &Bid| b.category == "Road Construction";
        assert!(roads.items.iter().all(road));
    }

    #[test]
    fn status_samples_split_the_set() {
        let active = BidsByStatus::sample_data(&BidStatus::Active);
        let closed = BidsByStatus::sample_data(&BidStatus::Closed);
        assert_eq!(active.map(|l| l.len()), Some(4));
        assert_eq!(closed.map(|l| l.len()), Some(3));
    }

    #[test]
    fn expired_vacancies_have_no_sample() {
        assert!(VacancyList::sample_data(&VacancyScope::Expired).is_none());
        assert!(VacancyList::sample_data(&VacancyScope::Active).is_some());
    }
}
