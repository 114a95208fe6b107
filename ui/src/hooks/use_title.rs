use yew::prelude::*;

const SITE_NAME: &str = "Ethiopian Roads Administration";

/// Sets the document title to "<page> | <site>".
#[hook]
pub fn use_title(page: &str) {
    let title = format!("{page} | {SITE_NAME}");
    use_effect_with(title, |title| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    });
}
