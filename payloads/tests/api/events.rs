use payloads::requests::EventQuery;
use test_helpers::fixtures::EVENT_COUNT;
use test_helpers::spawn_app;

#[tokio::test]
async fn events_are_paginated_by_the_server() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.client.list_events(&EventQuery::default()).await?;
    assert_eq!(first.len(), 6);
    let meta = first.meta.expect("events carry pagination meta");
    assert_eq!(meta.current_page, 1);
    assert_eq!(meta.total_pages, 2);
    assert_eq!(meta.total_count, EVENT_COUNT as u64);

    let second =
        app.client.list_events(&EventQuery::new(2, 6, None)).await?;
    assert_eq!(second.len(), EVENT_COUNT - 6);
    assert_eq!(second.items[0].slug, "stakeholder-forum-7");

    Ok(())
}

#[tokio::test]
async fn events_filter_by_type() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let query = EventQuery::new(1, 6, Some("Workshop".into()));
    let workshops = app.client.list_events(&query).await?;
    assert_eq!(workshops.len(), EVENT_COUNT / 2);
    assert!(workshops.items.iter().all(|e| e.event_type == "Workshop"));

    Ok(())
}

#[tokio::test]
async fn featured_upcoming_and_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let featured = app.client.featured_events().await?;
    assert_eq!(featured.len(), 2);

    let upcoming = app.client.upcoming_events().await?;
    assert!(upcoming.items.iter().all(|e| e.status == "upcoming"));
    assert_eq!(upcoming.len(), 4);

    let event = app.client.get_event("stakeholder-forum-3").await?;
    assert_eq!(event.title, "Stakeholder Forum 3");
    assert_eq!(event.start_date, "June 3, 2025");
    assert_eq!(
        event.agenda,
        vec!["Opening remarks", "Presentations", "Discussion"]
    );
    assert_eq!(event.speakers, vec!["Director General"]);
    assert!(event.registration_required);

    Ok(())
}
