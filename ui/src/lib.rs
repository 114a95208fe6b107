use listing::FailurePolicy;
use payloads::{APIClient, ClientConfig};
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
pub mod logs;
mod pages;

use components::layout::MainLayout;
use pages::*;

/// Client settings, fixed at build time.
///
/// `API_URL` and `DEGRADE_TO_SAMPLE_DATA` are read when the wasm bundle is
/// compiled, e.g. `API_URL=https://roads.example.org/api/v1 trunk build`.
pub fn client_config() -> ClientConfig {
    let lookup = |name: &str| {
        match name {
            "API_URL" => option_env!("API_URL"),
            "DEGRADE_TO_SAMPLE_DATA" => option_env!("DEGRADE_TO_SAMPLE_DATA"),
            _ => None,
        }
        .map(str::to_string)
    };
    ClientConfig::from_lookup(lookup).unwrap_or_else(|e| {
        tracing::error!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    })
}

pub fn failure_policy() -> FailurePolicy {
    FailurePolicy::from_config(&client_config())
}

pub fn get_api_client() -> APIClient {
    let config = client_config();
    APIClient::new(&config).unwrap_or_else(|e| {
        tracing::error!("failed to build api client: {e}");
        APIClient {
            address: config.origin(),
            inner_client: reqwest::Client::new(),
        }
    })
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/news")]
    News,
    #[at("/news/:id")]
    NewsDetail { id: String },
    #[at("/faq")]
    Faq,
    #[at("/vacancies")]
    Vacancies,
    #[at("/events")]
    Events,
    #[at("/bids")]
    Bids,
    #[at("/publications")]
    Publications,
    #[at("/projects")]
    Projects,
    #[at("/projects/:id")]
    ProjectDetail { id: String },
    #[at("/districts")]
    Districts,
    #[at("/districts/:id")]
    DistrictDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::News => html! { <NewsPage /> },
        Route::NewsDetail { id } => html! { <NewsDetailPage {id} /> },
        Route::Faq => html! { <FaqPage /> },
        Route::Vacancies => html! { <VacanciesPage /> },
        Route::Events => html! { <EventsPage /> },
        Route::Bids => html! { <BidsPage /> },
        Route::Publications => html! { <PublicationsPage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::ProjectDetail { id } => html! { <ProjectDetailPage {id} /> },
        Route::Districts => html! { <DistrictsPage /> },
        Route::DistrictDetail { id } => {
            html! { <DistrictDetailPage {id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
