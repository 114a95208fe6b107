use listing::Loader;
use listing::resources::{
    AboutPage, BidList, BidStatus, BidsByStatus, NewsList, ProjectList,
    VacancyList,
};
use payloads::requests::{BidQuery, NewsQuery, ProjectScope, VacancyScope};
use payloads::samples::{fallback_about, sample_bids, sample_vacancies};
use test_helpers::{spawn_failing_app, unreachable_client, unreachable_config};

#[tokio::test]
async fn failed_news_is_empty_with_an_error() -> anyhow::Result<()> {
    let app = spawn_failing_app().await;
    let mut loader = Loader::<NewsList>::new(app.client.clone(), &app.config);

    let state = loader.load(NewsQuery::default()).await;
    assert!(state.items().is_empty());
    assert_eq!(state.error(), Some("Failed to fetch news"));
    assert!(!state.is_loading());

    Ok(())
}

#[tokio::test]
async fn bids_and_vacancies_degrade_to_samples() -> anyhow::Result<()> {
    let app = spawn_failing_app().await;

    let mut bids = Loader::<BidList>::new(app.client.clone(), &app.config);
    let state = bids.load(BidQuery::default()).await;
    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    assert!(state.is_degraded());
    assert_eq!(state.items(), sample_bids().as_slice());

    let mut vacancies =
        Loader::<VacancyList>::new(app.client.clone(), &app.config);
    let state = vacancies.load(VacancyScope::All).await;
    assert!(!state.is_loading());
    assert_eq!(state.items(), sample_vacancies().as_slice());

    let mut closed =
        Loader::<BidsByStatus>::new(app.client.clone(), &app.config);
    let state = closed.load(BidStatus::Closed).await;
    assert!(state.items().iter().all(|bid| bid.status == "closed"));
    assert_eq!(state.items().len(), 3);

    Ok(())
}

#[tokio::test]
async fn about_falls_back_when_unreachable() -> anyhow::Result<()> {
    let mut loader =
        Loader::<AboutPage>::new(unreachable_client(), &unreachable_config());

    let state = loader.load(()).await;
    assert_eq!(state.data(), Some(&fallback_about()));
    assert!(state.is_degraded());

    Ok(())
}

#[tokio::test]
async fn disabling_degradation_surfaces_errors() -> anyhow::Result<()> {
    let app = spawn_failing_app().await.with_degrade(false);

    let mut bids = Loader::<BidList>::new(app.client.clone(), &app.config);
    let state = bids.load(BidQuery::default()).await;
    assert!(state.items().is_empty());
    assert_eq!(
        state.error(),
        Some("Failed to fetch bids. Please try again later.")
    );

    let mut vacancies =
        Loader::<VacancyList>::new(app.client.clone(), &app.config);
    let state = vacancies.load(VacancyScope::Active).await;
    assert_eq!(
        state.error(),
        Some("Failed to fetch vacancies. Please try again later.")
    );

    Ok(())
}

#[tokio::test]
async fn expired_vacancies_and_projects_surface_errors() -> anyhow::Result<()> {
    let app = spawn_failing_app().await;

    let mut vacancies =
        Loader::<VacancyList>::new(app.client.clone(), &app.config);
    let state = vacancies.load(VacancyScope::Expired).await;
    assert!(state.items().is_empty());
    assert!(state.error().is_some());

    let mut projects =
        Loader::<ProjectList>::new(app.client.clone(), &app.config);
    let state = projects.load(ProjectScope::All).await;
    assert_eq!(state.error(), Some("Failed to fetch projects"));

    Ok(())
}
