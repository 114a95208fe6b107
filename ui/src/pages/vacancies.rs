use listing::catalog::VacancyFacet;
use listing::view::facet_options;
use payloads::Vacancy;
use payloads::requests::VacancyScope;
use yew::prelude::*;

use crate::components::{
    FilterSelect, PaginationControls, ResourceStatus, SearchInput,
};
use crate::hooks::{use_list_view, use_title, use_vacancies};

#[function_component]
pub fn VacanciesPage() -> Html {
    use_title("Vacancies");
    let vacancies = use_vacancies(VacancyScope::Active);
    let view = use_list_view::<VacancyFacet>();
    let state = view.state();

    let items = vacancies.items();
    let page = state.apply(items);

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"Career Opportunities"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Join the team building the national road network"}
                </p>
            </div>

            if vacancies.is_degraded() {
                <div class="p-3 rounded-md bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-800 text-sm text-amber-800 dark:text-amber-300">
                    {"Live vacancy data is unavailable. Showing sample openings."}
                </div>
            }

            <div class="flex flex-col md:flex-row gap-4 md:items-center">
                <SearchInput
                    value={state.search().to_string()}
                    placeholder="Search vacancies..."
                    on_change={view.on_search()}
                />
                <FilterSelect
                    label="Location"
                    value={state.filter(VacancyFacet::Location).to_string()}
                    options={facet_options(items, VacancyFacet::Location)}
                    on_change={view.on_filter(VacancyFacet::Location)}
                />
                <FilterSelect
                    label="Job type"
                    value={state.filter(VacancyFacet::JobType).to_string()}
                    options={facet_options(items, VacancyFacet::JobType)}
                    on_change={view.on_filter(VacancyFacet::JobType)}
                />
            </div>

            <ResourceStatus
                context="vacancies"
                is_loading={vacancies.is_loading()}
                error={vacancies.error().map(str::to_string)}
                is_empty={page.items.is_empty()}
                on_retry={vacancies.refetch.clone()}
            >
                <div class="space-y-4">
                    {page.items.iter().map(|vacancy| vacancy_card(vacancy)).collect::<Html>()}
                </div>
                <PaginationControls
                    page={page.page}
                    total_pages={page.total_pages}
                    on_page_change={view.on_page()}
                />
            </ResourceStatus>
        </div>
    }
}

fn bullet_list(title: &str, entries: &[String]) -> Html {
    if entries.is_empty() {
        return html! {};
    }
    html! {
        <div>
            <h4 class="text-sm font-semibold mt-2">{title}</h4>
            <ul class="text-sm list-disc list-inside text-neutral-600 dark:text-neutral-400">
                {entries.iter().map(|entry| html! { <li>{entry}</li> }).collect::<Html>()}
            </ul>
        </div>
    }
}

fn vacancy_card(vacancy: &Vacancy) -> Html {
    html! {
        <div key={vacancy.id.to_string()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 p-6 space-y-2">
            <h3 class="text-lg font-semibold">{&vacancy.title}</h3>
            <p class="text-sm text-neutral-500">
                {&vacancy.department}{" · "}{&vacancy.location}{" · "}{&vacancy.job_type}
            </p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{&vacancy.description}</p>
            <p class="text-sm">
                {format!("Posted {} · Apply by {}", vacancy.posted_date, vacancy.deadline)}
            </p>
            <p class="text-sm">{format!("Salary: {}", vacancy.salary)}</p>
            {bullet_list("Requirements", &vacancy.requirements)}
            {bullet_list("Responsibilities", &vacancy.responsibilities)}
            {bullet_list("Benefits", &vacancy.benefits)}
        </div>
    }
}
