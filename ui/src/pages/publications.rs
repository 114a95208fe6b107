use yew::prelude::*;

use crate::hooks::use_title;

const PUBLICATIONS: &[(&str, &str)] = &[
    ("Annual Performance Report", "Yearly summary of network condition and completed works"),
    ("Road Sector Development Program", "Long-term investment plan for the national network"),
    ("Design Manuals", "Geometric, pavement and bridge design standards"),
    ("Procurement Guidelines", "Rules for works, goods and consultancy tenders"),
];

#[function_component]
pub fn PublicationsPage() -> Html {
    use_title("Publications");

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"Publications"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {PUBLICATIONS.iter().map(|(title, summary)| html! {
                    <div class="p-6 rounded-lg border border-neutral-200 dark:border-neutral-700">
                        <h3 class="font-semibold">{*title}</h3>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">{*summary}</p>
                    </div>
                }).collect::<Html>()}
            </div>
        </div>
    }
}
