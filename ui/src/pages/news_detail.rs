use payloads::ItemId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::ResourceStatus;
use crate::hooks::{use_news_article, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

#[function_component]
pub fn NewsDetailPage(props: &Props) -> Html {
    let article = use_news_article(ItemId::from(props.id.as_str()));
    let title = article.data().map_or("News", |a| a.title.as_str());
    use_title(title);

    html! {
        <div class="space-y-6">
            <Link<Route> to={Route::News} classes="text-sm underline">
                {"← Back to news"}
            </Link<Route>>
            <ResourceStatus
                context="article"
                is_loading={article.is_loading()}
                error={article.error().map(str::to_string)}
                is_empty={article.data().is_none()}
                on_retry={article.refetch.clone()}
            >
                if let Some(article) = article.data() {
                    <article class="space-y-4">
                        <h1 class="text-3xl font-bold">{&article.title}</h1>
                        <p class="text-sm text-neutral-500">
                            {&article.author}{" · "}{&article.published_date}
                            {" · "}{format!("{} views", article.view_count)}
                        </p>
                        if let Some(thumbnail) = &article.thumbnail_url {
                            <img src={thumbnail.clone()} alt={article.title.clone()} class="w-full rounded-lg" />
                        }
                        <div class="prose dark:prose-invert max-w-none whitespace-pre-line">
                            {&article.content}
                        </div>
                    </article>
                }
            </ResourceStatus>
        </div>
    }
}
