use payloads::{VenueId, requests};
use reqwest::StatusCode;
use test_helpers::{assert_api_error, booking_details, spawn_app};

#[tokio::test]
async fn create_and_list_bookings() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    assert!(app.client.list_bookings().await?.is_empty());

    let details = requests::CreateBooking {
        user_name: "  Alice  ".into(),
        user_email: " alice@example.com ".into(),
        ..booking_details(hall.id, app.days_from_today(3), "Alice")
    };
    let booking = app.client.create_booking(&details).await?;
    assert_eq!(booking.venue_id, hall.id);
    assert_eq!(booking.booking_date, app.days_from_today(3));
    assert_eq!(booking.user_name, "Alice");
    assert_eq!(booking.user_email, "alice@example.com");
    assert_eq!(booking.status, "confirmed");
    assert_eq!(booking.created_at, app.time_source.now());

    let second = app.book(hall.id, 4, "Bob").await?;
    assert_eq!(app.client.list_bookings().await?, vec![booking, second]);

    Ok(())
}

#[tokio::test]
async fn booked_date_cannot_be_booked_again() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    app.book(hall.id, 5, "Alice").await?;

    let result = app
        .client
        .create_booking(&booking_details(hall.id, app.days_from_today(5), "Bob"))
        .await;
    assert_api_error(
        result,
        StatusCode::BAD_REQUEST,
        "Venue already booked for this date",
    );

    // Same date at a different venue is fine.
    let loft = app.create_cozy_loft().await?;
    app.book(loft.id, 5, "Bob").await?;

    Ok(())
}

#[tokio::test]
async fn blocked_date_cannot_be_booked() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    app.block(hall.id, 7).await?;

    let result = app
        .client
        .create_booking(&booking_details(hall.id, app.days_from_today(7), "Alice"))
        .await;
    assert_api_error(
        result,
        StatusCode::BAD_REQUEST,
        "Date is blocked by venue owner",
    );
    assert_eq!(app.count_rows_for_venue("bookings", hall.id).await?, 0);

    Ok(())
}

#[tokio::test]
async fn booking_unknown_venue_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .create_booking(&booking_details(VenueId(404), app.days_from_today(1), "Alice"))
        .await;
    assert_api_error(result, StatusCode::NOT_FOUND, "Venue not found");

    Ok(())
}

#[tokio::test]
async fn invalid_guest_details_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    let date = app.days_from_today(2);

    let cases = [
        ("   ", "alice@example.com", "Name is required"),
        ("Alice", "", "A valid email address is required"),
        ("Alice", "alice.example.com", "A valid email address is required"),
        ("Alice", "alice@example", "A valid email address is required"),
    ];
    for (user_name, user_email, detail) in cases {
        let details = requests::CreateBooking {
            user_name: user_name.into(),
            user_email: user_email.into(),
            ..booking_details(hall.id, date, "Alice")
        };
        let result = app.client.create_booking(&details).await;
        assert_api_error(result, StatusCode::BAD_REQUEST, detail);
    }
    assert_eq!(app.count_rows_for_venue("bookings", hall.id).await?, 0);

    Ok(())
}

#[tokio::test]
async fn concurrent_double_booking_has_one_winner() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    let date = app.days_from_today(9);

    let alice = booking_details(hall.id, date, "Alice");
    let bob = booking_details(hall.id, date, "Bob");
    let (first, second) = tokio::join!(
        app.client.create_booking(&alice),
        app.client.create_booking(&bob),
    );

    let results = [first, second];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    let failure = results.into_iter().find(|r| r.is_err());
    assert_api_error(
        failure.expect("one booking should fail"),
        StatusCode::BAD_REQUEST,
        "Venue already booked for this date",
    );
    assert_eq!(app.count_rows_for_venue("bookings", hall.id).await?, 1);

    Ok(())
}
