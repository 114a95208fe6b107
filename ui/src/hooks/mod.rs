pub mod use_about;
pub mod use_admin_users;
pub mod use_bids;
pub mod use_districts;
pub mod use_events;
pub mod use_list_view;
pub mod use_news;
pub mod use_projects;
pub mod use_resource;
pub mod use_title;
pub mod use_vacancies;

pub use use_about::use_about;
pub use use_admin_users::use_admin_users;
pub use use_bids::{use_bids, use_bids_by_status};
pub use use_districts::{use_district, use_districts};
pub use use_events::{use_events, use_featured_events, use_upcoming_events};
pub use use_list_view::use_list_view;
pub use use_news::{use_news, use_news_article};
pub use use_projects::{use_project, use_projects};
pub use use_resource::{ResourceHandle, use_resource};
pub use use_title::use_title;
pub use use_vacancies::use_vacancies;
