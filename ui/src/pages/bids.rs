use listing::ViewPhase;
use listing::catalog::{BID_CATEGORIES, BID_TYPES, BidFacet};
use listing::resources::BidStatus;
use payloads::Bid;
use payloads::requests::BidQuery;
use yew::prelude::*;

use crate::components::{
    FilterSelect, PaginationControls, ResourceStatus, SearchInput, TabBar,
};
use crate::hooks::{use_bids, use_bids_by_status, use_list_view, use_title};

const TABS: [(&str, Option<BidStatus>); 3] = [
    ("All Bids", None),
    ("Active", Some(BidStatus::Active)),
    ("Closed", Some(BidStatus::Closed)),
];

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[function_component]
pub fn BidsPage() -> Html {
    use_title("Bids & Tenders");
    let tab = use_state(|| None::<BidStatus>);
    let view = use_list_view::<BidFacet>();
    let state = view.state();
    let query = BidQuery::from_selection(
        state.filter(BidFacet::Category),
        state.filter(BidFacet::Type),
    );
    let all = use_bids(query);
    let active = use_bids_by_status(BidStatus::Active);
    let closed = use_bids_by_status(BidStatus::Closed);

    // the status lists are narrowed by category and type on the client
    let bids = match *tab {
        None => &all,
        Some(BidStatus::Active) => &active,
        Some(BidStatus::Closed) => &closed,
    };
    let items = bids.items();
    let page = state.apply(items);

    let active_tab = TABS
        .iter()
        .position(|(_, status)| *status == *tab)
        .unwrap_or_default();
    let on_tab = {
        let tab = tab.clone();
        let on_page = view.on_page();
        Callback::from(move |index: usize| {
            tab.set(TABS.get(index).and_then(|(_, status)| *status));
            on_page.emit(1);
        })
    };

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"Bids & Tenders"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Open procurement opportunities and past awards"}
                </p>
            </div>

            <TabBar
                labels={TABS.iter().map(|(label, _)| AttrValue::from(*label)).collect::<Vec<_>>()}
                active={active_tab}
                on_select={on_tab}
            />

            if bids.is_degraded() {
                <div class="p-3 rounded-md bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-800 text-sm text-amber-800 dark:text-amber-300">
                    {"Live tender data is unavailable. Showing sample listings."}
                </div>
            }

            <div class="flex flex-col md:flex-row gap-4 md:items-center">
                <SearchInput
                    value={state.search().to_string()}
                    placeholder="Search by title or bid number..."
                    on_change={view.on_search()}
                />
                <FilterSelect
                    label="Category"
                    value={state.filter(BidFacet::Category).to_string()}
                    options={options(BID_CATEGORIES)}
                    on_change={view.on_filter(BidFacet::Category)}
                />
                <FilterSelect
                    label="Type"
                    value={state.filter(BidFacet::Type).to_string()}
                    options={options(BID_TYPES)}
                    on_change={view.on_filter(BidFacet::Type)}
                />
                if state.phase() != ViewPhase::Idle {
                    <button
                        onclick={view.on_reset().reform(|_: MouseEvent| ())}
                        class="text-sm underline text-neutral-600 dark:text-neutral-400"
                    >
                        {"Clear filters"}
                    </button>
                }
            </div>

            <ResourceStatus
                context="bids"
                is_loading={bids.is_loading()}
                error={bids.error().map(str::to_string)}
                is_empty={page.items.is_empty()}
                on_retry={bids.refetch.clone()}
            >
                <div class="space-y-4">
                    {page.items.iter().map(|bid| bid_row(bid)).collect::<Html>()}
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

fn bid_row(bid: &Bid) -> Html {
    let status_class = if bid.is_active() {
        "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300"
    } else {
        "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-300"
    };

    html! {
        <div key={bid.id.to_string()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 p-6 space-y-3">
            <div class="flex items-center justify-between">
                <span class="text-sm font-mono text-neutral-500">{bid.reference()}</span>
                <span class={classes!("text-xs", "px-2", "py-1", "rounded", status_class)}>
                    {&bid.status}
                </span>
            </div>
            <h3 class="text-lg font-semibold">{&bid.title}</h3>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{&bid.description}</p>
            <dl class="grid grid-cols-2 md:grid-cols-4 gap-2 text-sm">
                <div><dt class="text-neutral-500">{"Category"}</dt><dd>{&bid.category}</dd></div>
                <div><dt class="text-neutral-500">{"Type"}</dt><dd>{&bid.bid_type}</dd></div>
                <div><dt class="text-neutral-500">{"Published"}</dt><dd>{&bid.publish_date}</dd></div>
                <div><dt class="text-neutral-500">{"Deadline"}</dt><dd>{&bid.deadline_date}</dd></div>
            </dl>
            if let Some(awarded_to) = &bid.awarded_to {
                <p class="text-sm">{format!("Awarded to {awarded_to}")}</p>
            }
            if !bid.documents.is_empty() {
                <ul class="text-sm list-disc list-inside">
                    {bid.documents.iter().map(|doc| html! {
                        <li>
                            if let Some(url) = &doc.url {
                                <a href={url.clone()} class="underline">{&doc.name}</a>
                            } else {
                                {&doc.name}
                            }
                        </li>
                    }).collect::<Html>()}
                </ul>
            }
        </div>
    }
}
