use payloads::ItemId;
use payloads::requests::DistrictQuery;
use reqwest::StatusCode;
use test_helpers::fixtures::{DISTRICT_COUNT, RESTRICTED_DISTRICT};
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn districts_page_through_the_envelope() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let first = app.client.list_districts(&DistrictQuery::default()).await?;
    assert_eq!(first.len(), 10);
    let meta = first.meta.expect("districts carry pagination meta");
    assert_eq!(meta.total_pages, 2);
    assert_eq!(meta.total_count, DISTRICT_COUNT as u64);

    let second =
        app.client.list_districts(&DistrictQuery::new(2, 10)).await?;
    assert_eq!(second.len(), DISTRICT_COUNT - 10);

    let district = &first.items[0];
    assert_eq!(district.phone_numbers.len(), 2);
    assert_eq!(district.social_media_links, vec!["https://facebook.com/era"]);
    assert_eq!(district.meta_keywords, vec!["roads", "district"]);
    assert_eq!(
        district.gallery_images_urls,
        vec![format!("http://127.0.0.1:{}/uploads/districts/1-1.jpg", app.port)]
    );

    Ok(())
}

#[tokio::test]
async fn district_detail_statuses() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let district = app.client.get_district(&ItemId::from(4)).await?;
    assert_eq!(district.name, "District 4");

    assert_status_code(
        app.client.get_district(&ItemId::from(404)).await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client.get_district(&ItemId::from(RESTRICTED_DISTRICT)).await,
        StatusCode::UNAUTHORIZED,
    );

    Ok(())
}
