mod about;
mod bids;
mod districts;
mod errors;
mod events;
mod news;
mod projects;
mod vacancies;

use payloads::requests::NewsQuery;
use test_helpers::spawn_app;

#[tokio::test]
async fn same_request_twice_gives_identical_items() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.client.list_news(&NewsQuery::default()).await?;
    let second = app.client.list_news(&NewsQuery::default()).await?;
    assert_eq!(first, second);

    Ok(())
}
