use yew::prelude::*;

use crate::components::ResourceStatus;
use crate::hooks::{use_about, use_title};

#[function_component]
pub fn AboutPage() -> Html {
    use_title("About Us");
    let about = use_about();

    html! {
        <ResourceStatus
            context="about information"
            is_loading={about.is_loading()}
            error={about.error().map(str::to_string)}
            is_empty={about.data().is_none()}
            on_retry={about.refetch.clone()}
        >
            if let Some(about) = about.data() {
                <div class="space-y-12">
                    <section class="space-y-2">
                        <h1 class="text-3xl font-bold">{&about.title}</h1>
                        <p class="text-lg text-neutral-600 dark:text-neutral-400">{&about.subtitle}</p>
                        <p>{&about.description}</p>
                    </section>

                    <section class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div>
                            <h2 class="text-xl font-semibold mb-2">{"Mission"}</h2>
                            <p>{&about.mission}</p>
                        </div>
                        <div>
                            <h2 class="text-xl font-semibold mb-2">{"Vision"}</h2>
                            <p>{&about.vision}</p>
                        </div>
                    </section>

                    if !about.values.is_empty() {
                        <section>
                            <h2 class="text-xl font-semibold mb-2">{&about.values_title}</h2>
                            <ul class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {about.values.iter().map(|value| html! {
                                    <li class="p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                                        <p class="font-medium">{&value.title}</p>
                                        if let Some(description) = &value.description {
                                            <p class="text-sm text-neutral-600 dark:text-neutral-400">{description}</p>
                                        }
                                    </li>
                                }).collect::<Html>()}
                            </ul>
                        </section>
                    }

                    <section>
                        <h2 class="text-xl font-semibold mb-2">{"History"}</h2>
                        <p class="whitespace-pre-line">{&about.history}</p>
                        <ul class="mt-4 space-y-2">
                            {about.milestones.iter().map(|m| html! {
                                <li><span class="font-mono">{&m.year}</span>{" "}{&m.title}</li>
                            }).collect::<Html>()}
                        </ul>
                    </section>

                    if !about.team_members.is_empty() {
                        <section>
                            <h2 class="text-xl font-semibold mb-2">{"Leadership"}</h2>
                            <p class="mb-4">{&about.team_description}</p>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {about.team_members.iter().map(|member| html! {
                                    <div class="p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                                        <p class="font-medium">{&member.name}</p>
                                        <p class="text-sm text-neutral-500">{&member.position}</p>
                                    </div>
                                }).collect::<Html>()}
                            </div>
                        </section>
                    }

                    if !about.partners.is_empty() {
                        <section>
                            <h2 class="text-xl font-semibold mb-2">{"Partners"}</h2>
                            <ul class="flex flex-wrap gap-4 text-sm">
                                {about.partners.iter().map(|p| html! { <li>{&p.name}</li> }).collect::<Html>()}
                            </ul>
                        </section>
                    }
                </div>
            }
        </ResourceStatus>
    }
}
