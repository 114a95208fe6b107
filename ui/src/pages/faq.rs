use yew::prelude::*;

use crate::hooks::use_title;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "How do I take part in a tender?",
        "Open tenders are listed on the Bids page with their deadlines, \
         eligibility and contact details. Submit your bid to the contact \
         office before the deadline.",
    ),
    (
        "Where can I report road damage?",
        "Contact the district office responsible for the area. Their \
         addresses and phone numbers are on the Districts page.",
    ),
    (
        "How do I apply for a vacancy?",
        "Each vacancy lists its requirements and deadline. Applications are \
         accepted until the listed deadline.",
    ),
];

#[function_component]
pub fn FaqPage() -> Html {
    use_title("FAQ");

    html! {
        <div class="space-y-6 max-w-3xl">
            <h1 class="text-3xl font-bold">{"Frequently Asked Questions"}</h1>
            {QUESTIONS.iter().map(|(question, answer)| html! {
                <details class="p-4 rounded-md border border-neutral-200 dark:border-neutral-700">
                    <summary class="font-medium cursor-pointer">{*question}</summary>
                    <p class="mt-2 text-neutral-600 dark:text-neutral-400">{*answer}</p>
                </details>
            }).collect::<Html>()}
        </div>
    }
}
