pub mod about;
pub mod bids;
pub mod contact;
pub mod district_detail;
pub mod districts;
pub mod events;
pub mod faq;
pub mod home;
pub mod news;
pub mod news_detail;
pub mod not_found;
pub mod project_detail;
pub mod projects;
pub mod publications;
pub mod vacancies;

pub use about::AboutPage;
pub use bids::BidsPage;
pub use contact::ContactPage;
pub use district_detail::DistrictDetailPage;
pub use districts::DistrictsPage;
pub use events::EventsPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use news::NewsPage;
pub use news_detail::NewsDetailPage;
pub use not_found::NotFoundPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use publications::PublicationsPage;
pub use vacancies::VacanciesPage;
