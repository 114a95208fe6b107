use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV: &[(&str, Route)] = &[
    ("Home", Route::Home),
    ("About", Route::About),
    ("News", Route::News),
    ("Events", Route::Events),
    ("Projects", Route::Projects),
    ("Bids", Route::Bids),
    ("Vacancies", Route::Vacancies),
    ("Districts", Route::Districts),
    ("Publications", Route::Publications),
    ("Contact", Route::Contact),
];

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="flex-shrink-0 text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Ethiopian Roads Administration"}
                    </Link<Route>>
                    <nav class="hidden md:flex items-center space-x-4">
                        {NAV.iter().map(|(label, route)| {
                            let active = current.as_ref() == Some(route);
                            let classes = if active {
                                "text-sm font-medium text-neutral-900 dark:text-white"
                            } else {
                                "text-sm text-neutral-600 dark:text-neutral-400 \
                                 hover:text-neutral-900 dark:hover:text-white"
                            };
                            html! {
                                <Link<Route> to={route.clone()} {classes}>
                                    {*label}
                                </Link<Route>>
                            }
                        }).collect::<Html>()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
