use payloads::ItemId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::ResourceStatus;
use crate::hooks::{use_district, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

fn contact_list(
    title: &str,
    entries: &[String],
    href: fn(&str) -> String,
) -> Html {
    if entries.is_empty() {
        return html! {};
    }
    html! {
        <div>
            <dt class="text-neutral-500">{title}</dt>
            {entries.iter().map(|entry| html! {
                <dd><a href={href(entry)} class="underline">{entry}</a></dd>
            }).collect::<Html>()}
        </div>
    }
}

#[function_component]
pub fn DistrictDetailPage(props: &Props) -> Html {
    let district = use_district(ItemId::from(props.id.as_str()));
    let title = district.data().map_or("District Office", |d| d.name.as_str());
    use_title(title);

    html! {
        <div class="space-y-6">
            <Link<Route> to={Route::Districts} classes="text-sm underline">
                {"← Back to districts"}
            </Link<Route>>
            <ResourceStatus
                context="district"
                is_loading={district.is_loading()}
                error={district.error().map(str::to_string)}
                is_empty={district.data().is_none()}
                on_retry={district.refetch.clone()}
            >
                if let Some(district) = district.data() {
                    <article class="space-y-6">
                        if let Some(image) = &district.main_image_url {
                            <img src={image.clone()} alt={district.name.clone()} class="w-full max-h-96 object-cover rounded-lg" />
                        }
                        <div>
                            <h1 class="text-3xl font-bold">{&district.name}</h1>
                            <p class="text-sm text-neutral-500 mt-1">{&district.address}</p>
                        </div>
                        <p>{&district.district_overview}</p>
                        <p class="whitespace-pre-line">{&district.detail_description}</p>
                        <dl class="grid grid-cols-1 md:grid-cols-3 gap-4 text-sm">
                            {contact_list("Phone", &district.phone_numbers, |n| format!("tel:{n}"))}
                            {contact_list("Email", &district.emails, |e| format!("mailto:{e}"))}
                            {contact_list("Social media", &district.social_media_links, str::to_string)}
                        </dl>
                        if !district.gallery_images_urls.is_empty() {
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-2">
                                {district.gallery_images_urls.iter().map(|url| html! {
                                    <img src={url.clone()} class="w-full h-32 object-cover rounded" />
                                }).collect::<Html>()}
                            </div>
                        }
                    </article>
                }
            </ResourceStatus>
        </div>
    }
}
