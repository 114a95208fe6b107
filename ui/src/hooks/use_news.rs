use listing::resources::{NewsArticle, NewsList};
use payloads::requests::NewsQuery;
use payloads::{ItemId, Listing, News};
use yew::prelude::*;

use super::{ResourceHandle, use_resource};

#[hook]
pub fn use_news(query: NewsQuery) -> ResourceHandle<Listing<News>> {
    use_resource::<NewsList>(query)
}

#[hook]
pub fn use_news_article(id: ItemId) -> ResourceHandle<News> {
    use_resource::<NewsArticle>(id)
}
