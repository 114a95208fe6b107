use listing::NoFacet;
use listing::catalog::DISTRICTS_PER_PAGE;
use payloads::District;
use payloads::requests::DistrictQuery;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{PaginationControls, ResourceStatus, SearchInput};
use crate::hooks::{use_districts, use_list_view, use_title};

#[function_component]
pub fn DistrictsPage() -> Html {
    use_title("District Offices");
    let view = use_list_view::<NoFacet>();
    let state = view.state();
    let page = u32::try_from(state.page()).unwrap_or(u32::MAX);
    let per_page = u32::try_from(DISTRICTS_PER_PAGE).unwrap_or(u32::MAX);
    let districts = use_districts(DistrictQuery::new(page, per_page));

    let visible: Vec<&District> = districts
        .items()
        .iter()
        .filter(|district| state.matches(*district))
        .collect();
    let total_pages = districts
        .meta()
        .map_or(1, |meta| usize::try_from(meta.total_pages).unwrap_or(1));

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"District Offices"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"Find the office responsible for roads in your area"}
                </p>
            </div>

            <SearchInput
                value={state.search().to_string()}
                placeholder="Search by name or address..."
                on_change={view.on_search()}
            />

            <ResourceStatus
                context="districts"
                is_loading={districts.is_loading()}
                error={districts.error().map(str::to_string)}
                is_empty={visible.is_empty()}
                on_retry={districts.refetch.clone()}
            >
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {visible.iter().map(|district| district_card(district)).collect::<Html>()}
                </div>
            </ResourceStatus>
            <PaginationControls
                page={state.page()}
                {total_pages}
                on_page_change={view.on_page()}
                is_loading={districts.is_loading()}
            />
        </div>
    }
}

fn district_card(district: &District) -> Html {
    html! {
        <div key={district.id.to_string()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 p-6 space-y-2">
            <h3 class="text-lg font-semibold">{&district.name}</h3>
            <p class="text-sm text-neutral-500">{&district.address}</p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{&district.district_overview}</p>
            if let Some(phone) = district.phone_numbers.first() {
                <p class="text-sm">{phone}</p>
            }
            <Link<Route>
                to={Route::DistrictDetail { id: district.id.to_string() }}
                classes="inline-block text-sm font-medium underline"
            >
                {"View office"}
            </Link<Route>>
        </div>
    }
}
