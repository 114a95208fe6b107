use payloads::ItemId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::ResourceStatus;
use crate::hooks::{use_project, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component]
pub fn ProjectDetailPage(props: &Props) -> Html {
    let project = use_project(ItemId::from(props.id.as_str()));
    use_title(project.data().map_or("Project", |p| p.title.as_str()));

    html! {
        <div class="space-y-6">
            <Link<Route> to={Route::Projects} classes="text-sm underline">
                {"← Back to projects"}
            </Link<Route>>
            <ResourceStatus
                context="project"
                is_loading={project.is_loading()}
                error={project.error().map(str::to_string)}
                is_empty={project.data().is_none()}
                on_retry={project.refetch.clone()}
            >
                if let Some(project) = project.data() {
                    <article class="space-y-6">
                        <img src={project.image_url.clone()} alt={project.title.clone()} class="w-full max-h-96 object-cover rounded-lg" />
                        <div>
                            <h1 class="text-3xl font-bold">{&project.title}</h1>
                            <p class="text-sm text-neutral-500 mt-1">
                                {&project.location}{" · "}{&project.status}
                                {" · "}{format!("{}% complete", project.progress)}
                            </p>
                        </div>
                        <p class="whitespace-pre-line">{&project.description}</p>
                        <dl class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm">
                            <div><dt class="text-neutral-500">{"Contractor"}</dt><dd>{&project.contractor}</dd></div>
                            <div><dt class="text-neutral-500">{"Project manager"}</dt><dd>{&project.project_manager}</dd></div>
                            <div><dt class="text-neutral-500">{"Start"}</dt><dd>{&project.start_date}</dd></div>
                            <div><dt class="text-neutral-500">{"Completion"}</dt><dd>{&project.end_date}</dd></div>
                            if let Some(budget) = project.budget {
                                <div><dt class="text-neutral-500">{"Budget"}</dt><dd>{format!("ETB {budget}")}</dd></div>
                            }
                            if let Some(funding) = &project.funding_source {
                                <div><dt class="text-neutral-500">{"Funding"}</dt><dd>{funding}</dd></div>
                            }
                        </dl>
                        if !project.milestones.is_empty() {
                            <section>
                                <h2 class="text-xl font-semibold mb-2">{"Milestones"}</h2>
                                <ul class="space-y-1 text-sm">
                                    {project.milestones.iter().map(|m| html! {
                                        <li>
                                            {if m.completed { "✓ " } else { "○ " }}
                                            {&m.title}
                                            if let Some(date) = &m.date {
                                                <span class="text-neutral-500">{format!(" ({date})")}</span>
                                            }
                                        </li>
                                    }).collect::<Html>()}
                                </ul>
                            </section>
                        }
                        if !project.challenges.is_empty() {
                            <section>
                                <h2 class="text-xl font-semibold mb-2">{"Challenges"}</h2>
                                <ul class="list-disc list-inside text-sm">
                                    {project.challenges.iter().map(|c| html! { <li>{c}</li> }).collect::<Html>()}
                                </ul>
                            </section>
                        }
                        if !project.images.is_empty() {
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-2">
                                {project.images.iter().map(|image| html! {
                                    <img src={image.thumbnail_url.clone().unwrap_or_else(|| image.url.clone())} class="w-full h-32 object-cover rounded" />
                                }).collect::<Html>()}
                            </div>
                        }
                        if !project.documents.is_empty() {
                            <ul class="text-sm list-disc list-inside">
                                {project.documents.iter().map(|doc| html! {
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
                    </article>
                }
            </ResourceStatus>
        </div>
    }
}
