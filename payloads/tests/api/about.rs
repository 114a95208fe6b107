use payloads::ItemId;
use test_helpers::spawn_app;

#[tokio::test]
async fn about_content_is_normalized() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let about = app.client.about().await?;
    assert_eq!(about.title, "About the Roads Administration");
    assert_eq!(about.values.len(), 2);
    assert_eq!(about.values[0].title, "Integrity");
    assert_eq!(about.values[1].description.as_deref(), Some("High standards"));
    assert_eq!(about.milestones[0].year, "2010");
    assert_eq!(about.meta.keywords, vec!["roads", "infrastructure"]);
    assert_eq!(
        about.hero_image_url,
        Some(format!("http://127.0.0.1:{}/uploads/hero.jpg", app.port))
    );

    Ok(())
}

#[tokio::test]
async fn admin_users() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users = app.client.list_admin_users().await?;
    assert_eq!(users.len(), 2);
    assert_eq!(users.items[0].created_at, "November 2, 2024");

    let editor = app.client.get_admin_user(&ItemId::from(2)).await?;
    assert_eq!(editor.email, "editor@era.gov.et");

    Ok(())
}
