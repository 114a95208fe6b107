use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub labels: Vec<AttrValue>,
    /// Index into `labels`
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component]
pub fn TabBar(props: &Props) -> Html {
    html! {
        <div class="border-b border-neutral-200 dark:border-neutral-700">
            <nav class="-mb-px flex space-x-8">
                {props.labels.iter().enumerate().map(|(index, label)| {
                    let onclick = props.on_select.reform(move |_: MouseEvent| index);
                    html! {
                        <button
                            {onclick}
                            class={classes!(format!(
                                "py-2 px-1 border-b-2 font-medium text-sm {}",
                                if index == props.active {
                                    "border-neutral-500 text-neutral-600 dark:text-neutral-400"
                                } else {
                                    "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300 dark:text-neutral-400 dark:hover:text-neutral-300"
                                }
                            ))}
                        >
                            {label.clone()}
                        </button>
                    }
                }).collect::<Html>()}
            </nav>
        </div>
    }
}
