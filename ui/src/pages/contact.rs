use yew::prelude::*;

use crate::hooks::use_title;

#[function_component]
pub fn ContactPage() -> Html {
    use_title("Contact");

    html! {
        <div class="space-y-6 max-w-2xl">
            <h1 class="text-3xl font-bold">{"Contact Us"}</h1>
            <dl class="space-y-4">
                <div>
                    <dt class="text-sm text-neutral-500">{"Head office"}</dt>
                    <dd>{"Ras Abebe Aregay Street, Addis Ababa, Ethiopia"}</dd>
                </div>
                <div>
                    <dt class="text-sm text-neutral-500">{"Phone"}</dt>
                    <dd><a href="tel:+251115517170" class="underline">{"+251 11 551 7170"}</a></dd>
                </div>
                <div>
                    <dt class="text-sm text-neutral-500">{"Email"}</dt>
                    <dd><a href="mailto:info@era.gov.et" class="underline">{"info@era.gov.et"}</a></dd>
                </div>
                <div>
                    <dt class="text-sm text-neutral-500">{"Office hours"}</dt>
                    <dd>{"Monday to Friday, 8:30 to 17:30"}</dd>
                </div>
            </dl>
        </div>
    }
}
