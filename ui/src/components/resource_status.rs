use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Plural noun for messages, e.g. "news" or "vacancies"
    pub context: AttrValue,
    pub is_loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    /// Whether the loaded data has nothing to show
    pub is_empty: bool,
    pub on_retry: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Loading, error and empty states in front of a page's content.
///
/// An error always comes with a retry button, and an empty result is
/// reported separately from a failed one.
#[function_component]
pub fn ResourceStatus(props: &Props) -> Html {
    let on_retry = props.on_retry.reform(|_: MouseEvent| ());

    if props.is_loading && props.is_empty {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("Loading {}...", props.context)}
                </p>
            </div>
        };
    }

    if let Some(error) = &props.error {
        return html! {
            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border \
                        border-red-200 dark:border-red-800 text-center">
                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                <button
                    onclick={on_retry}
                    class="mt-3 bg-neutral-900 hover:bg-neutral-800 \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           text-white px-4 py-2 rounded-md text-sm font-medium"
                >
                    {"Try Again"}
                </button>
            </div>
        };
    }

    if props.is_empty {
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {format!("No {} found", props.context)}
                </p>
            </div>
        };
    }

    html! { <>{for props.children.iter()}</> }
}
