use payloads::VenueId;
use payloads::requests::{BlockDate, DEFAULT_BLOCK_REASON};
use reqwest::StatusCode;
use test_helpers::{TestApp, assert_api_error, spawn_app};

async fn reasons(app: &TestApp, venue_id: VenueId) -> anyhow::Result<Vec<String>> {
    Ok(sqlx::query_scalar::<_, String>(
        "SELECT reason FROM blocked_dates WHERE venue_id = $1 ORDER BY id",
    )
    .bind(venue_id)
    .fetch_all(&app.db_pool)
    .await?)
}

#[tokio::test]
async fn block_a_date() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;

    let details = BlockDate::new(hall.id, app.days_from_today(6), "Renovation");
    let response = app.client.block_date(&details).await?;
    assert_eq!(response.message, "Date blocked successfully");

    let availability = app.client.get_availability(&hall.id).await?;
    assert_eq!(availability.blocked_dates, vec![app.days_from_today(6)]);
    assert!(!availability.available_dates.contains(&app.days_from_today(6)));
    assert_eq!(reasons(&app, hall.id).await?, vec!["Renovation"]);

    Ok(())
}

#[tokio::test]
async fn blank_reason_gets_the_default() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;

    // Bypass the client-side default to exercise the server's.
    let details = BlockDate {
        venue_id: hall.id,
        blocked_date: app.days_from_today(1),
        reason: "   ".into(),
    };
    app.client.block_date(&details).await?;

    assert_eq!(reasons(&app, hall.id).await?, vec![DEFAULT_BLOCK_REASON]);

    Ok(())
}

#[tokio::test]
async fn booked_date_cannot_be_blocked() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    app.book(hall.id, 2, "Alice").await?;

    let details = BlockDate::new(hall.id, app.days_from_today(2), "");
    assert_api_error(
        app.client.block_date(&details).await,
        StatusCode::BAD_REQUEST,
        "Date is already booked",
    );
    assert_eq!(app.count_rows_for_venue("blocked_dates", hall.id).await?, 0);

    Ok(())
}

#[tokio::test]
async fn date_cannot_be_blocked_twice() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    app.block(hall.id, 3).await?;

    let details = BlockDate::new(hall.id, app.days_from_today(3), "Again");
    assert_api_error(
        app.client.block_date(&details).await,
        StatusCode::BAD_REQUEST,
        "Date is already blocked",
    );
    assert_eq!(app.count_rows_for_venue("blocked_dates", hall.id).await?, 1);

    Ok(())
}

#[tokio::test]
async fn blocking_for_unknown_venue_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let details = BlockDate::new(VenueId(404), app.days_from_today(1), "");
    assert_api_error(
        app.client.block_date(&details).await,
        StatusCode::NOT_FOUND,
        "Venue not found",
    );

    Ok(())
}
