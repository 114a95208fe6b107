use listing::catalog::ProjectFacet;
use listing::view::facet_options;
use payloads::Project;
use payloads::requests::ProjectScope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    FilterSelect, PaginationControls, ResourceStatus, SearchInput, TabBar,
};
use crate::hooks::{use_list_view, use_projects, use_title};

const TABS: [(&str, ProjectScope); 3] = [
    ("All Projects", ProjectScope::All),
    ("Ongoing Projects", ProjectScope::Ongoing),
    ("Completed Projects", ProjectScope::Completed),
];

#[function_component]
pub fn ProjectsPage() -> Html {
    use_title("Projects");
    let scope = use_state(|| ProjectScope::Ongoing);
    let projects = use_projects(*scope);
    let view = use_list_view::<ProjectFacet>();
    let state = view.state();

    let active_tab = TABS
        .iter()
        .position(|(_, s)| *s == *scope)
        .unwrap_or_default();
    let on_tab = {
        let scope = scope.clone();
        let on_reset = view.on_reset();
        Callback::from(move |index: usize| {
            if let Some((_, selected)) = TABS.get(index) {
                scope.set(*selected);
                on_reset.emit(());
            }
        })
    };

    let items = projects.items();
    let page = state.apply(items);

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"Projects"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Road and bridge works across the country"}
                </p>
            </div>

            <TabBar
                labels={TABS.iter().map(|(label, _)| AttrValue::from(*label)).collect::<Vec<_>>()}
                active={active_tab}
                on_select={on_tab}
            />

            <div class="flex flex-col md:flex-row gap-4 md:items-center">
                <SearchInput
                    value={state.search().to_string()}
                    placeholder="Search projects..."
                    on_change={view.on_search()}
                />
                <FilterSelect
                    label="Status"
                    value={state.filter(ProjectFacet::Status).to_string()}
                    options={facet_options(items, ProjectFacet::Status)}
                    on_change={view.on_filter(ProjectFacet::Status)}
                />
            </div>

            <ResourceStatus
                context="projects"
                is_loading={projects.is_loading()}
                error={projects.error().map(str::to_string)}
                is_empty={page.items.is_empty()}
                on_retry={projects.refetch.clone()}
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {page.items.iter().map(|project| project_card(project)).collect::<Html>()}
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

fn project_card(project: &Project) -> Html {
    html! {
        <div key={project.id.to_string()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-hidden">
            <img src={project.image_url.clone()} alt={project.title.clone()} class="w-full h-48 object-cover" />
            <div class="p-6 space-y-3">
                <p class="text-xs uppercase tracking-wide text-neutral-500">
                    {&project.project_type}{" · "}{&project.status}
                </p>
                <h3 class="text-xl font-semibold">{&project.title}</h3>
                <p class="text-sm text-neutral-500">{&project.location}</p>
                <div class="w-full bg-neutral-200 dark:bg-neutral-700 rounded-full h-2">
                    <div
                        class="bg-neutral-900 dark:bg-neutral-100 h-2 rounded-full"
                        style={format!("width: {}%", project.progress)}
                    />
                </div>
                <p class="text-xs text-neutral-500">{format!("{}% complete", project.progress)}</p>
                <Link<Route>
                    to={Route::ProjectDetail { id: project.id.to_string() }}
                    classes="inline-block text-sm font-medium underline"
                >
                    {"View project"}
                </Link<Route>>
            </div>
        </div>
    }
}
