use payloads::ItemId;
use payloads::requests::NewsQuery;
use test_helpers::fixtures::NEWS_COUNT;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn list_all_news() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let news = app.client.list_news(&NewsQuery::default()).await?;
    assert_eq!(news.len(), NEWS_COUNT);
    assert_eq!(news.meta, None);

    // Tags arrive as an array, newline text, encoded json and null.
    assert_eq!(news.items[0].tags, vec!["expressway", "construction"]);
    assert_eq!(news.items[1].tags, vec!["safety", "awareness"]);
    assert_eq!(news.items[2].tags, vec!["bridges", "inspection"]);
    assert!(news.items[3].tags.is_empty());

    let origin = format!("http://127.0.0.1:{}", app.port);
    assert_eq!(
        news.items[0].thumbnail_url,
        Some(format!(
            "{origin}/rails/active_storage/blobs/n1/expressway.jpg"
        ))
    );
    assert_eq!(news.items[3].thumbnail_url, None);
    assert_eq!(news.items[0].published_date, "March 1, 2025");

    Ok(())
}

#[tokio::test]
async fn featured_and_category_queries() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let featured = app.client.list_news(&NewsQuery::featured()).await?;
    assert_eq!(featured.len(), 2);
    assert!(featured.items.iter().all(|n| n.is_featured));

    let projects =
        app.client.list_news(&NewsQuery::category("Projects")).await?;
    assert_eq!(projects.len(), 2);
    assert!(projects.items.iter().all(|n| n.category == "Projects"));

    Ok(())
}

#[tokio::test]
async fn news_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let item = app.client.get_news(&ItemId::from(2)).await?;
    assert_eq!(item.title, "Road safety week announced");

    assert_status_code(
        app.client.get_news(&ItemId::from(99)).await,
        reqwest::StatusCode::NOT_FOUND,
    );

    Ok(())
}
