mod analytics;
mod block_date;
mod booking;
mod venue;

use test_helpers::{TEST_START, spawn_app};

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let health = app.client.health_check().await?;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.timestamp, TEST_START.parse()?);

    Ok(())
}
