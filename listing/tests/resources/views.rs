use listing::ViewState;
use listing::catalog::{BID_CATEGORIES, BID_TYPES, BidFacet, EventFacet};
use listing::resources::{
    BidList, BidStatus, BidsByStatus, EventList, ProjectList,
};
use listing::view::facet_options;
use listing::{Loader, ViewAction, ViewPhase};
use payloads::requests::{
    ALL_CATEGORIES, BidQuery, EventQuery, ProjectScope,
};
use test_helpers::spawn_app;

#[tokio::test]
async fn filtering_fetched_bids() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut loader = Loader::<BidList>::new(app.client.clone(), &app.config);
    let state = loader.load(BidQuery::default()).await;
    let bids = state.items();

    assert_eq!(
        facet_options(bids, BidFacet::Category),
        vec![
            ALL_CATEGORIES,
            "Road Construction",
            "Road Rehabilitation",
            "Goods"
        ]
    );

    let mut view = ViewState::<BidFacet>::new();
    view.reduce(ViewAction::SetSearch("road".into()));
    assert_eq!(view.apply(bids).total_matches, 3);

    view.reduce(ViewAction::SetSearch(String::new()));
    view.reduce(ViewAction::SetFilter(
        BidFacet::Category,
        "Road Construction".into(),
    ));
    let page = view.apply(bids);
    let references: Vec<&str> =
        page.items.iter().map(|bid| bid.reference()).collect();
    assert_eq!(references, vec!["ICB-2025-01", "ICB-2024-09"]);

    // search by bid number
    view.reduce(ViewAction::Reset);
    view.reduce(ViewAction::SetSearch("ncb-2025-04".into()));
    let page = view.apply(bids);
    assert_eq!(page.items[0].title, "Supply of Road Maintenance Equipment");

    Ok(())
}

#[tokio::test]
async fn filter_change_returns_to_the_first_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut loader =
        Loader::<EventList>::new(app.client.clone(), &app.config);
    // one large page so the client does the paging
    let state = loader.load(EventQuery::new(1, 50, None)).await;
    let events = state.items();
    assert_eq!(events.len(), 8);

    let mut view = ViewState::<EventFacet>::new();
    assert_eq!(view.phase(), ViewPhase::Idle);

    view.reduce(ViewAction::SetPage(2));
    assert_eq!(view.phase(), ViewPhase::Paginating);
    assert_eq!(view.apply(events).items.len(), 2);

    let workshops = "Workshop".to_string();
    view.reduce(ViewAction::SetFilter(EventFacet::EventType, workshops));
    assert_eq!(view.page(), 1);
    assert_eq!(view.phase(), ViewPhase::Filtering);
    let page = view.apply(events);
    assert_eq!(page.total_matches, 4);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

#[tokio::test]
async fn switching_tabs_loads_each_listing() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut bids =
        Loader::<BidsByStatus>::new(app.client.clone(), &app.config);
    let active = bids.load(BidStatus::Active).await.items().to_vec();
    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|bid| bid.status == "active"));
    // fixed options still cover what the server narrowed down to
    assert!(active.iter().all(|bid| {
        BID_CATEGORIES.contains(&bid.category.as_str())
            && BID_TYPES.contains(&bid.bid_type.as_str())
    }));

    let closed = bids.load(BidStatus::Closed).await.items().to_vec();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].status, "closed");

    let mut projects =
        Loader::<ProjectList>::new(app.client.clone(), &app.config);
    let ongoing = projects.load(ProjectScope::Ongoing).await.items().len();
    assert_eq!(ongoing, 2);
    let state = projects.load(ProjectScope::Completed).await;
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].progress, 100);

    Ok(())
}
