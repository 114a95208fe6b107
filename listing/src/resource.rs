//! One fetch of one endpoint, and the `{data, loading, error}` record a
//! page renders from.
//!
//! Every fetch is stamped with a [`Ticket`] when it starts. A completion
//! carrying anything but the latest ticket is dropped, so a slow response
//! to old parameters never replaces the result of newer ones.

use std::fmt::Debug;
use std::future::Future;

use payloads::{APIClient, ClientConfig, ClientError, Listing, PageMeta};

/// What a resource does when its endpoint cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Clear the data and report a message.
    SurfaceError,
    /// Show the built-in sample content instead, for resources that have
    /// it.
    DegradeToSample,
}

impl FailurePolicy {
    pub fn from_config(config: &ClientConfig) -> Self {
        if config.degrade_to_sample_data {
            FailurePolicy::DegradeToSample
        } else {
            FailurePolicy::SurfaceError
        }
    }
}

/// An endpoint family a page can load.
pub trait Resource {
    type Params: Clone + PartialEq + Debug + 'static;
    type Output: Clone + PartialEq + 'static;

    /// Used in log lines.
    const NAME: &'static str;

    fn fetch(
        client: &APIClient,
        params: &Self::Params,
    ) -> impl Future<Output = Result<Self::Output, ClientError>>;

    /// Content shown instead of an error under
    /// [`FailurePolicy::DegradeToSample`]. `None` means the resource always
    /// surfaces its errors.
    fn sample_data(_params: &Self::Params) -> Option<Self::Output> {
        None
    }

    /// The message a page shows when the fetch fails.
    fn failure_message(params: &Self::Params, error: &ClientError) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Fetched(T),
    /// The fetch failed and sample content stands in for it.
    Degraded(T),
    Failed(String),
}

/// Fetch a resource and settle the result according to `policy`.
pub async fn fetch<R: Resource>(
    client: &APIClient,
    params: &R::Params,
    policy: FailurePolicy,
) -> FetchOutcome<R::Output> {
    tracing::debug!("fetching {} with {params:?}", R::NAME);
    let error = match R::fetch(client, params).await {
        Ok(data) => return FetchOutcome::Fetched(data),
        Err(e) => e,
    };

    if policy == FailurePolicy::DegradeToSample {
        if let Some(sample) = R::sample_data(params) {
            tracing::warn!(
                "{} unavailable, showing sample data: {error}",
                R::NAME
            );
            return FetchOutcome::Degraded(sample);
        }
    }

    tracing::error!("failed to fetch {}: {error:#}", R::NAME);
    FetchOutcome::Failed(R::failure_message(params, &error))
}

/// Generation stamp of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Hands out increasing tickets.
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    degraded: bool,
    current: Option<Ticket>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            degraded: false,
            current: None,
        }
    }
}

impl<T> ResourceState<T> {
    /// Mark a fetch as started. Data from the previous fetch stays visible
    /// until this one settles.
    pub fn start(&mut self, ticket: Ticket) {
        if self.current.is_some_and(|current| ticket < current) {
            return;
        }
        self.current = Some(ticket);
        self.loading = true;
        self.error = None;
    }

    /// Settle the fetch stamped `ticket`. Returns false, leaving the state
    /// untouched, when a newer fetch has started since.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        outcome: FetchOutcome<T>,
    ) -> bool {
        if self.current != Some(ticket) {
            tracing::debug!("dropping stale response {ticket:?}");
            return false;
        }
        match outcome {
            FetchOutcome::Fetched(data) => {
                self.data = Some(data);
                self.error = None;
                self.degraded = false;
            }
            FetchOutcome::Degraded(data) => {
                self.data = Some(data);
                self.error = None;
                self.degraded = true;
            }
            FetchOutcome::Failed(message) => {
                self.data = None;
                self.error = Some(message);
                self.degraded = false;
            }
        }
        self.loading = false;
        true
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the data is sample content standing in for a failed fetch.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Nothing fetched yet and nothing in flight.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }
}

impl<T> ResourceState<Listing<T>> {
    /// The fetched items; empty while nothing has loaded or after a
    /// failure.
    pub fn items(&self) -> &[T] {
        self.data
            .as_ref()
            .map(|listing| listing.items.as_slice())
            .unwrap_or_default()
    }

    pub fn meta(&self) -> Option<PageMeta> {
        self.data.as_ref().and_then(|listing| listing.meta)
    }
}

/// Drives one resource outside of a component, remembering the last
/// parameters for [`Loader::refetch`].
pub struct Loader<R: Resource> {
    client: APIClient,
    policy: FailurePolicy,
    tickets: TicketCounter,
    state: ResourceState<R::Output>,
    params: Option<R::Params>,
}

impl<R: Resource> Loader<R> {
    pub fn new(client: APIClient, config: &ClientConfig) -> Self {
        Self {
            client,
            policy: FailurePolicy::from_config(config),
            tickets: TicketCounter::default(),
            state: ResourceState::default(),
            params: None,
        }
    }

    pub fn state(&self) -> &ResourceState<R::Output> {
        &self.state
    }

    pub async fn load(
        &mut self,
        params: R::Params,
    ) -> &ResourceState<R::Output> {
        let ticket = self.tickets.issue();
        self.state.start(ticket);
        let outcome = fetch::<R>(&self.client, &params, self.policy).await;
        self.params = Some(params);
        self.state.finish(ticket, outcome);
        &self.state
    }

    /// Fetch again with the parameters of the last load. Does nothing
    /// before the first load.
    pub async fn refetch(&mut self) -> &ResourceState<R::Output> {
        match self.params.clone() {
            Some(params) => self.load(params).await,
            None => &self.state,
        }
    }
}
