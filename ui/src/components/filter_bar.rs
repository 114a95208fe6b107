use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const FIELD_CLASS: &str = "px-3 py-2 border border-neutral-300 \
    dark:border-neutral-600 rounded-md text-sm bg-white dark:bg-neutral-800";

#[derive(Properties, PartialEq)]
pub struct SearchInputProps {
    pub value: AttrValue,
    #[prop_or(AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn SearchInput(props: &SearchInputProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    html! {
        <input
            type="search"
            class={classes!(FIELD_CLASS, "w-full", "md:w-72")}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// Options in display order, starting with the "all" sentinel
    pub options: Vec<String>,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn FilterSelect(props: &FilterSelectProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>().value()
    });

    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-600 dark:text-neutral-400">
            {props.label.clone()}
            <select class={FIELD_CLASS} {onchange}>
                {props.options.iter().map(|option| html! {
                    <option
                        value={option.clone()}
                        selected={*option == *props.value}
                    >
                        {option}
                    </option>
                }).collect::<Html>()}
            </select>
        </label>
    }
}
