use listing::catalog::{EVENT_TYPES, EVENTS_PER_PAGE, EventFacet};
use listing::{Facet, ViewState};
use payloads::Event;
use payloads::requests::EventQuery;
use yew::prelude::*;

use crate::components::{
    FilterSelect, PaginationControls, ResourceStatus, SearchInput,
};
use crate::hooks::{
    use_events, use_featured_events, use_list_view, use_title,
};

/// The server pages and filters by type; the search box narrows the
/// current server page.
fn query_for(view: &ViewState<EventFacet>) -> EventQuery {
    let event_type = view.filter(EventFacet::EventType);
    let event_type = (event_type != EventFacet::EventType.sentinel())
        .then(|| event_type.to_string());
    let page = u32::try_from(view.page()).unwrap_or(u32::MAX);
    let per_page = u32::try_from(EVENTS_PER_PAGE).unwrap_or(u32::MAX);
    EventQuery::new(page, per_page, event_type)
}

#[function_component]
pub fn EventsPage() -> Html {
    use_title("Events");
    let view = use_list_view::<EventFacet>();
    let state = view.state();
    let events = use_events(query_for(state));
    let featured = use_featured_events();

    let items = events.items();
    let visible: Vec<&Event> =
        items.iter().filter(|event| state.matches(*event)).collect();
    let total_pages = events
        .meta()
        .map_or(1, |meta| usize::try_from(meta.total_pages).unwrap_or(1));

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"Events"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Conferences, workshops and public consultations"}
                </p>
            </div>

            if !featured.items().is_empty() {
                <section class="space-y-2">
                    <h2 class="text-xl font-semibold">{"Featured"}</h2>
                    <ul class="space-y-1">
                        {featured.items().iter().map(|event| html! {
                            <li key={event.id.to_string()}>
                                {&event.title}
                                <span class="text-sm text-neutral-500">
                                    {" · "}{&event.start_date}{" · "}{&event.location}
                                </span>
                            </li>
                        }).collect::<Html>()}
                    </ul>
                </section>
            }

            <div class="flex flex-col md:flex-row gap-4 md:items-center">
                <SearchInput
                    value={state.search().to_string()}
                    placeholder="Search events..."
                    on_change={view.on_search()}
                />
                <FilterSelect
                    label="Type"
                    value={state.filter(EventFacet::EventType).to_string()}
                    options={EVENT_TYPES.iter().map(|t| t.to_string()).collect::<Vec<_>>()}
                    on_change={view.on_filter(EventFacet::EventType)}
                />
            </div>

            <ResourceStatus
                context="events"
                is_loading={events.is_loading()}
                error={events.error().map(str::to_string)}
                is_empty={visible.is_empty()}
                on_retry={events.refetch.clone()}
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {visible.iter().map(|event| event_card(event)).collect::<Html>()}
                </div>
            </ResourceStatus>
            <PaginationControls
                page={state.page()}
                {total_pages}
                on_page_change={view.on_page()}
                is_loading={events.is_loading()}
            />
        </div>
    }
}

fn event_card(event: &Event) -> Html {
    html! {
        <div key={event.id.to_string()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 p-6 space-y-3">
            <div class="flex items-center justify-between text-xs uppercase tracking-wide text-neutral-500">
                <span>{&event.event_type}</span>
                <span>{&event.status}</span>
            </div>
            <h3 class="text-xl font-semibold">{&event.title}</h3>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{&event.excerpt}</p>
            <p class="text-sm">
                {&event.start_date}
                if event.end_date != event.start_date {
                    {" - "}{&event.end_date}
                }
            </p>
            <p class="text-sm text-neutral-500">{&event.location}</p>
            if event.registration_required {
                <p class="text-xs font-medium">
                    if event.registration_open {
                        {"Registration open"}
                    } else {
                        {"Registration closed"}
                    }
                </p>
            }
        </div>
    }
}
