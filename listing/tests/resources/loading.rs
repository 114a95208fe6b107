use listing::Loader;
use listing::resources::{
    AboutPage, BidList, DistrictDetail, DistrictList, EventList, NewsList,
};
use payloads::ItemId;
use payloads::requests::{BidQuery, DistrictQuery, EventQuery, NewsQuery};
use test_helpers::fixtures::RESTRICTED_DISTRICT;
use test_helpers::spawn_app;

#[tokio::test]
async fn identical_parameters_give_identical_items() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut loader = Loader::<NewsList>::new(app.client.clone(), &app.config);

    let first = loader.load(NewsQuery::default()).await.items().to_vec();
    let second = loader.load(NewsQuery::default()).await.items().to_vec();
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn successful_load_settles_the_state() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut loader = Loader::<BidList>::new(app.client.clone(), &app.config);
    assert!(loader.state().is_idle());

    let state = loader.load(BidQuery::default()).await;
    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    assert!(!state.is_degraded());
    assert_eq!(state.items().len(), 4);

    Ok(())
}

#[tokio::test]
async fn refetch_reuses_the_last_parameters() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut loader =
        Loader::<EventList>::new(app.client.clone(), &app.config);

    // nothing to repeat yet
    assert!(loader.refetch().await.is_idle());

    loader.load(EventQuery::new(2, 6, None)).await;
    let state = loader.refetch().await;
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.meta().map(|m| m.current_page), Some(2));

    Ok(())
}

#[tokio::test]
async fn district_pages_and_detail_messages() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut list =
        Loader::<DistrictList>::new(app.client.clone(), &app.config);
    let state = list.load(DistrictQuery::new(2, 10)).await;
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.meta().map(|m| m.total_pages), Some(2));

    let mut detail =
        Loader::<DistrictDetail>::new(app.client.clone(), &app.config);
    let state = detail.load(ItemId::from(3)).await;
    assert_eq!(state.data().map(|d| d.name.as_str()), Some("District 3"));

    let state = detail.load(ItemId::from(404)).await;
    assert_eq!(state.error(), Some("District not found"));
    assert!(state.data().is_none());

    let state = detail.load(ItemId::from(RESTRICTED_DISTRICT)).await;
    assert_eq!(state.error(), Some("Unauthorized access"));

    Ok(())
}

#[tokio::test]
async fn about_loads_from_the_api() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut loader = Loader::<AboutPage>::new(app.client.clone(), &app.config);

    let state = loader.load(()).await;
    let about = state.data().expect("about content");
    assert_eq!(about.title, "About the Roads Administration");
    assert!(!state.is_degraded());

    Ok(())
}
