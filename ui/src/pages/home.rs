use payloads::requests::NewsQuery;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{
    use_admin_users, use_news, use_title, use_upcoming_events,
};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Home");
    let news = use_news(NewsQuery::featured());
    let events = use_upcoming_events();
    let admins = use_admin_users();

    html! {
        <div class="space-y-12">
            <section class="text-center py-12 space-y-4">
                <h1 class="text-4xl font-bold">{"Ethiopian Roads Administration"}</h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400">
                    {"Connecting the nation through safe and sustainable roads"}
                </p>
                <div class="flex justify-center gap-4">
                    <Link<Route> to={Route::Projects} classes="bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900 px-4 py-2 rounded-md text-sm font-medium">
                        {"Our projects"}
                    </Link<Route>>
                    <Link<Route> to={Route::Bids} classes="border border-neutral-300 dark:border-neutral-600 px-4 py-2 rounded-md text-sm font-medium">
                        {"Open tenders"}
                    </Link<Route>>
                </div>
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-semibold">{"Featured news"}</h2>
                if let Some(error) = news.error() {
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                } else if news.is_loading() && news.items().is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading news..."}</p>
                } else {
                    <ul class="space-y-2">
                        {news.items().iter().map(|article| html! {
                            <li key={article.id.to_string()}>
                                <Link<Route> to={Route::NewsDetail { id: article.id.to_string() }} classes="underline">
                                    {&article.title}
                                </Link<Route>>
                                <span class="text-sm text-neutral-500">{" · "}{&article.published_date}</span>
                            </li>
                        }).collect::<Html>()}
                    </ul>
                }
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-semibold">{"Upcoming events"}</h2>
                if let Some(error) = events.error() {
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                } else if events.is_loading() && events.items().is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading events..."}</p>
                } else {
                    <ul class="space-y-2">
                        {events.items().iter().take(2).map(|event| html! {
                            <li key={event.id.to_string()}>
                                {&event.title}
                                <span class="text-sm text-neutral-500">
                                    {" · "}{&event.start_date}{" · "}{&event.location}
                                </span>
                            </li>
                        }).collect::<Html>()}
                    </ul>
                }
            </section>

            <section class="space-y-4">
                <h2 class="text-2xl font-semibold">{"Admin users"}</h2>
                if let Some(error) = admins.error() {
                    <p class="text-sm text-red-700 dark:text-red-400">{format!("Error: {error}")}</p>
                } else if admins.is_loading() && admins.items().is_empty() {
                    <p class="text-neutral-600 dark:text-neutral-400">{"Loading..."}</p>
                } else {
                    <div class="space-y-2">
                        {admins.items().iter().map(|user| html! {
                            <div key={user.id.to_string()} class="p-4 bg-white dark:bg-neutral-800 rounded-lg shadow">
                                <p class="font-medium">{&user.email}</p>
                                <p class="text-sm text-neutral-500">
                                    {format!("Created: {}", user.created_at)}
                                </p>
                            </div>
                        }).collect::<Html>()}
                    </div>
                }
            </section>
        </div>
    }
}
