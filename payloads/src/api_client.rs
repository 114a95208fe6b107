use crate::normalize::{API_PREFIX, AssetBase};
use crate::requests::{
    BidQuery, DistrictQuery, EventQuery, NewsQuery, ProjectScope,
    VacancyScope,
};
use crate::responses::{self, Listing};
use crate::{
    AboutUs, AdminUser, Bid, ClientConfig, District, Event, ItemId, News,
    Project, RawAboutUs, RawAdminUser, RawBid, RawDistrict, RawEvent, RawNews,
    RawProject, RawVacancy, Vacancy,
};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the content backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    /// Origin of the backend, without the `/api/v1` prefix.
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl APIClient {
    /// Build a client with JSON default headers and, on native targets, the
    /// configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let json = HeaderValue::from_static("application/json");
        headers.insert(ACCEPT, json.clone());
        headers.insert(CONTENT_TYPE, json);

        let builder = reqwest::Client::builder().default_headers(headers);

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        Ok(Self {
            address: config.origin(),
            inner_client: builder.build()?,
        })
    }

    /// Resolver for image and document paths returned by this backend.
    pub fn assets(&self) -> AssetBase {
        AssetBase::new(&self.address)
    }

    /// Absolute URL for a stored image path.
    pub fn image_url(&self, path: &str) -> String {
        self.assets().resolve(path)
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        tracing::debug!("GET {path}");
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        tracing::debug!("GET {path} (with query)");
        self.inner_client
            .get(self.format_url(path))
            .query(query)
            .send()
            .await
    }
}

/// Methods on the content API
impl APIClient {
    pub async fn list_news(
        &self,
        query: &NewsQuery,
    ) -> Result<Listing<News>, ClientError> {
        let response = self.get_with_query("news", query).await?;
        let body = ok_json(response).await?;
        let assets = self.assets();
        Ok(responses::collection::<RawNews>(body, "news")?
            .map(|raw| raw.normalize(&assets)))
    }

    pub async fn get_news(&self, id: &ItemId) -> Result<News, ClientError> {
        let response = self.empty_get(&format!("news/{id}")).await?;
        let body = ok_json(response).await?;
        let raw: RawNews = responses::single(body, "news item")?;
        Ok(raw.normalize(&self.assets()))
    }

    /// Paginated events, optionally restricted to one event type.
    pub async fn list_events(
        &self,
        query: &EventQuery,
    ) -> Result<Listing<Event>, ClientError> {
        let response = self.get_with_query("events", query).await?;
        self.events_from(response).await
    }

    pub async fn featured_events(
        &self,
    ) -> Result<Listing<Event>, ClientError> {
        let response = self.empty_get("events/featured").await?;
        self.events_from(response).await
    }

    pub async fn upcoming_events(
        &self,
    ) -> Result<Listing<Event>, ClientError> {
        let response = self.empty_get("events/upcoming").await?;
        self.events_from(response).await
    }

    pub async fn get_event(&self, slug: &str) -> Result<Event, ClientError> {
        let response = self.empty_get(&format!("events/{slug}")).await?;
        let body = ok_json(response).await?;
        let raw: RawEvent = responses::single(body, "event")?;
        Ok(raw.normalize(&self.assets()))
    }

    async fn events_from(
        &self,
        response: reqwest::Response,
    ) -> Result<Listing<Event>, ClientError> {
        let body = ok_json(response).await?;
        let assets = self.assets();
        Ok(responses::collection::<RawEvent>(body, "events")?
            .map(|raw| raw.normalize(&assets)))
    }

    /// Bids, filtered server-side by category and type.
    pub async fn list_bids(
        &self,
        query: &BidQuery,
    ) -> Result<Listing<Bid>, ClientError> {
        let response = self.get_with_query("bids", query).await?;
        self.bids_from(response).await
    }

    pub async fn active_bids(&self) -> Result<Listing<Bid>, ClientError> {
        let response = self.empty_get("bids/active").await?;
        self.bids_from(response).await
    }

    pub async fn closed_bids(&self) -> Result<Listing<Bid>, ClientError> {
        let response = self.empty_get("bids/closed").await?;
        self.bids_from(response).await
    }

    pub async fn get_bid(&self, id: &ItemId) -> Result<Bid, ClientError> {
        let response = self.empty_get(&format!("bids/{id}")).await?;
        let body = ok_json(response).await?;
        let raw: RawBid = responses::single(body, "bid")?;
        Ok(raw.normalize(&self.assets()))
    }

    async fn bids_from(
        &self,
        response: reqwest::Response,
    ) -> Result<Listing<Bid>, ClientError> {
        let body = ok_json(response).await?;
        let assets = self.assets();
        Ok(responses::collection::<RawBid>(body, "bids")?
            .map(|raw| raw.normalize(&assets)))
    }

    /// Projects in the given scope. Everything under `/projects/completed`
    /// reports full progress regardless of its milestones.
    pub async fn list_projects(
        &self,
        scope: ProjectScope,
    ) -> Result<Listing<Project>, ClientError> {
        let response = self.empty_get(scope.path()).await?;
        let body = ok_json(response).await?;
        let assets = self.assets();
        Ok(responses::collection::<RawProject>(body, "projects")?.map(
            |raw| {
                let mut project = raw.normalize(&assets);
                if scope == ProjectScope::Completed {
                    project.progress = 100;
                }
                project
            },
        ))
    }

    pub async fn get_project(
        &self,
        id: &ItemId,
    ) -> Result<Project, ClientError> {
        let response = self.empty_get(&format!("projects/{id}")).await?;
        let body = ok_json(response).await?;
        let raw: RawProject = responses::single(body, "project")?;
        Ok(raw.normalize(&self.assets()))
    }

    pub async fn list_vacancies(
        &self,
        scope: VacancyScope,
    ) -> Result<Listing<Vacancy>, ClientError> {
        let response = self.empty_get(scope.path()).await?;
        let body = ok_json(response).await?;
        Ok(responses::collection::<RawVacancy>(body, "vacancies")?
            .map(RawVacancy::normalize))
    }

    pub async fn get_vacancy(
        &self,
        id: &ItemId,
    ) -> Result<Vacancy, ClientError> {
        let response = self.empty_get(&format!("vacancies/{id}")).await?;
        let body = ok_json(response).await?;
        let raw: RawVacancy = responses::single(body, "vacancy")?;
        Ok(raw.normalize())
    }

    pub async fn list_districts(
        &self,
        query: &DistrictQuery,
    ) -> Result<Listing<District>, ClientError> {
        let response = self.get_with_query("districts", query).await?;
        let body = ok_json(response).await?;
        let assets = self.assets();
        Ok(responses::collection::<RawDistrict>(body, "districts")?
            .map(|raw| raw.normalize(&assets)))
    }

    pub async fn get_district(
        &self,
        id: &ItemId,
    ) -> Result<District, ClientError> {
        let response = self.empty_get(&format!("districts/{id}")).await?;
        let body = ok_json(response).await?;
        let raw: RawDistrict = responses::single(body, "district")?;
        Ok(raw.normalize(&self.assets()))
    }

    /// The organisation profile shown on the About page.
    pub async fn about(&self) -> Result<AboutUs, ClientError> {
        let response = self.empty_get("about").await?;
        let body = ok_json(response).await?;
        let raw: RawAboutUs = responses::single(body, "about content")?;
        Ok(raw.normalize(&self.assets()))
    }

    pub async fn list_admin_users(
        &self,
    ) -> Result<Listing<AdminUser>, ClientError> {
        let response = self.empty_get("admin_users").await?;
        let body = ok_json(response).await?;
        Ok(responses::collection::<RawAdminUser>(body, "admin_users")?
            .map(RawAdminUser::normalize))
    }

    pub async fn get_admin_user(
        &self,
        id: &ItemId,
    ) -> Result<AdminUser, ClientError> {
        let response = self.empty_get(&format!("admin_users/{id}")).await?;
        let body = ok_json(response).await?;
        let raw: RawAdminUser = responses::single(body, "admin user")?;
        Ok(raw.normalize())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-2xx response, containing the response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The body was not the JSON shape the endpoint documents.
    #[error("Unexpected response: {0}")]
    UnexpectedShape(String),
}

impl ClientError {
    /// Status code of an API error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::APIError(status, _) => Some(*status),
            _ => None,
        }
    }
}

/// Read a successful response as untyped JSON, or return an appropriate
/// error.
pub async fn ok_json(
    response: reqwest::Response,
) -> Result<Value, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::UnexpectedShape(format!("invalid json: {e}")))
}
