use listing::ViewState;
use listing::catalog::NewsFacet;
use listing::view::facet_options;
use payloads::News;
use payloads::requests::NewsQuery;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    FilterSelect, PaginationControls, ResourceStatus, SearchInput,
};
use crate::hooks::{use_list_view, use_news, use_title};

#[function_component]
pub fn NewsPage() -> Html {
    use_title("News");
    let news = use_news(NewsQuery::default());
    let view = use_list_view::<NewsFacet>();

    let items = news.items();
    let state: &ViewState<NewsFacet> = view.state();
    let page = state.apply(items);

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">{"News & Updates"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                    {"The latest from the Ethiopian Roads Administration"}
                </p>
            </div>

            <div class="flex flex-col md:flex-row gap-4 md:items-center">
                <SearchInput
                    value={state.search().to_string()}
                    placeholder="Search news..."
                    on_change={view.on_search()}
                />
                <FilterSelect
                    label="Category"
                    value={state.filter(NewsFacet::Category).to_string()}
                    options={facet_options(items, NewsFacet::Category)}
                    on_change={view.on_filter(NewsFacet::Category)}
                />
            </div>

            <ResourceStatus
                context="news"
                is_loading={news.is_loading()}
                error={news.error().map(str::to_string)}
                is_empty={page.items.is_empty()}
                on_retry={news.refetch.clone()}
            >
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {page.items.iter().map(|article| news_card(article)).collect::<Html>()}
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

fn news_card(article: &News) -> Html {
    html! {
        <div key={article.id.to_string()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-hidden">
            if let Some(thumbnail) = &article.thumbnail_url {
                <img src={thumbnail.clone()} alt={article.title.clone()} class="w-full h-48 object-cover" />
            }
            <div class="p-6 space-y-3">
                <p class="text-xs uppercase tracking-wide text-neutral-500">
                    {&article.category}{" · "}{&article.published_date}
                </p>
                <h3 class="text-xl font-semibold">{&article.title}</h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">{&article.excerpt}</p>
                <div class="flex flex-wrap gap-2">
                    {article.tags.iter().map(|tag| html! {
                        <span class="text-xs px-2 py-1 rounded bg-neutral-100 dark:bg-neutral-700">{tag}</span>
                    }).collect::<Html>()}
                </div>
                <Link<Route>
                    to={Route::NewsDetail { id: article.id.to_string() }}
                    classes="inline-block text-sm font-medium underline"
                >
                    {"Read more"}
                </Link<Route>>
            </div>
        </div>
    }
}
