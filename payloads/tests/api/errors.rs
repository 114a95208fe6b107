use payloads::requests::{NewsQuery, ProjectScope};
use payloads::{APIClient, ClientConfig, ClientError};
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, spawn_app, spawn_failing_app, unreachable_client,
};

#[tokio::test]
async fn server_errors_carry_the_status() -> anyhow::Result<()> {
    let app = spawn_failing_app().await;

    assert_status_code(
        app.client.list_news(&NewsQuery::default()).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    assert_status_code(
        app.client.list_projects(ProjectScope::All).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let client = unreachable_client();

    let result = client.list_news(&NewsQuery::default()).await;
    assert!(matches!(result, Err(ClientError::Network(_))));

    Ok(())
}

#[tokio::test]
async fn wrong_body_shape_is_reported() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // `/about` answers with an object, not a collection
    let config = ClientConfig {
        base_url: format!("http://127.0.0.1:{}", app.port),
        ..app.config.clone()
    };
    let client = APIClient::new(&config)?;
    assert_eq!(client.address, app.client.address);

    let response = client
        .inner_client
        .get(format!("{}/api/v1/about", client.address))
        .send()
        .await?;
    let body = payloads::api_client::ok_json(response).await?;
    let result = payloads::responses::collection::<payloads::RawNews>(
        body, "news",
    );
    assert!(matches!(result, Err(ClientError::UnexpectedShape(_))));

    Ok(())
}
