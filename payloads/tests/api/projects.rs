use payloads::ItemId;
use payloads::normalize::{DEFAULT_PROJECT_TYPE, PLACEHOLDER_PROJECT_IMAGE};
use payloads::requests::ProjectScope;
use test_helpers::spawn_app;

#[tokio::test]
async fn project_list_derives_view_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let projects = app.client.list_projects(ProjectScope::All).await?;
    assert_eq!(projects.len(), 3);

    let expressway = &projects.items[0];
    assert_eq!(expressway.progress, 67);
    assert_eq!(expressway.project_type, "Expressway");
    assert!(expressway.image_url.ends_with("/p1/cover.jpg"));
    assert_eq!(expressway.documents.len(), 1);

    let bridges = &projects.items[1];
    assert_eq!(bridges.progress, 50);
    assert_eq!(bridges.project_type, "Bridge");

    let jimma = &projects.items[2];
    assert_eq!(jimma.progress, 0);
    assert_eq!(jimma.project_type, DEFAULT_PROJECT_TYPE);
    assert_eq!(jimma.image_url, PLACEHOLDER_PROJECT_IMAGE);

    Ok(())
}

#[tokio::test]
async fn completed_projects_report_full_progress() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let completed =
        app.client.list_projects(ProjectScope::Completed).await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed.items[0].progress, 100);

    let ongoing = app.client.list_projects(ProjectScope::Ongoing).await?;
    assert_eq!(ongoing.len(), 2);
    assert!(ongoing.items.iter().all(|p| p.progress < 100));

    Ok(())
}

#[tokio::test]
async fn project_detail() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let project = app.client.get_project(&ItemId::from(1)).await?;
    assert_eq!(project.gallery().len(), 1);
    assert_eq!(project.milestones.len(), 3);
    assert_eq!(project.challenges, vec!["Right of way", "Rainy season"]);

    Ok(())
}
