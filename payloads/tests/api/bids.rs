use payloads::ItemId;
use payloads::requests::{ALL_CATEGORIES, ALL_TYPES, BidQuery};
use test_helpers::spawn_app;

#[tokio::test]
async fn sentinel_selection_lists_everything() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let query = BidQuery::from_selection(ALL_CATEGORIES, ALL_TYPES);
    let bids = app.client.list_bids(&query).await?;
    assert_eq!(bids.len(), 4);

    // camelCase and snake_case records normalize to the same shape
    let expressway = &bids.items[0];
    assert_eq!(expressway.publish_date, "March 15, 2025");
    assert_eq!(expressway.funding_source, "World Bank");
    assert_eq!(expressway.documents[0].name, "bid-document.pdf");

    let nekemte = &bids.items[1];
    assert_eq!(nekemte.id, ItemId::from(17));
    assert_eq!(nekemte.reference(), "NCB-2025-03");
    assert_eq!(nekemte.publish_date, "April 5, 2025");
    assert_eq!(nekemte.budget, "1500000000");
    assert_eq!(
        nekemte.eligibility,
        vec!["Category 1 contractors", "Bid security required"]
    );

    Ok(())
}

#[tokio::test]
async fn server_side_filters() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let query =
        BidQuery::from_selection("Road Construction", ALL_TYPES);
    let bids = app.client.list_bids(&query).await?;
    assert_eq!(bids.len(), 2);

    let query = BidQuery::from_selection(
        "Road Construction",
        "National Competitive Bidding",
    );
    assert!(app.client.list_bids(&query).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn active_closed_and_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let active = app.client.active_bids().await?;
    assert_eq!(active.len(), 3);
    assert!(active.items.iter().all(|b| b.is_active()));

    let closed = app.client.closed_bids().await?;
    assert_eq!(closed.len(), 1);
    assert_eq!(
        closed.items[0].awarded_to.as_deref(),
        Some("Global Road Builders Consortium")
    );
    assert_eq!(closed.items[0].award_date.as_deref(), Some("January 15, 2025"));

    let bid = app.client.get_bid(&ItemId::from("ICB-2025-01")).await?;
    assert_eq!(bid.contact_email.as_deref(), Some("procurement@era.gov.et"));

    Ok(())
}
