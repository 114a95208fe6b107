use listing::resources::VacancyList;
use payloads::requests::VacancyScope;
use payloads::{Listing, Vacancy};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

#[hook]
pub fn use_vacancies(scope: VacancyScope) -> ResourceHandle<Listing<Vacancy>> {
    use_resource::<VacancyList>(scope)
}
