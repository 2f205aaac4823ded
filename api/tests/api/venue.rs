use payloads::{VenueId, requests};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{
    assert_api_error, assert_status_code, grand_hall_details, spawn_app,
};

#[tokio::test]
async fn create_and_list_venues() -> anyhow::Result<()> {
    let app = spawn_app().await;
    assert!(app.client.list_venues().await?.is_empty());

    let hall = app.create_grand_hall().await?;
    let loft = app.create_cozy_loft().await?;
    assert_eq!(hall.name, "Grand Hall");
    assert_eq!(hall.capacity, 300);
    assert_eq!(hall.price_per_day, dec!(1200));

    let venues = app.client.list_venues().await?;
    assert_eq!(venues, vec![hall, loft]);

    Ok(())
}

#[tokio::test]
async fn venue_fields_are_trimmed() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let details = requests::CreateVenue {
        name: "  Rooftop  ".into(),
        location: " Uptown ".into(),
        ..grand_hall_details()
    };

    let venue = app.client.create_venue(&details).await?;
    assert_eq!(venue.name, "Rooftop");
    assert_eq!(venue.location, "Uptown");

    Ok(())
}

#[tokio::test]
async fn invalid_venues_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let cases = [
        (
            requests::CreateVenue {
                name: "   ".into(),
                ..grand_hall_details()
            },
            "Venue name is required",
        ),
        (
            requests::CreateVenue {
                name: "x".repeat(101),
                ..grand_hall_details()
            },
            "Venue name must be at most 100 characters",
        ),
        (
            requests::CreateVenue {
                location: String::new(),
                ..grand_hall_details()
            },
            "Location is required",
        ),
        (
            requests::CreateVenue {
                capacity: 0,
                ..grand_hall_details()
            },
            "Capacity must be greater than zero",
        ),
        (
            requests::CreateVenue {
                price_per_day: dec!(-1),
                ..grand_hall_details()
            },
            "Price per day cannot be negative",
        ),
    ];

    for (details, detail) in cases {
        let result = app.client.create_venue(&details).await;
        assert_api_error(result, StatusCode::BAD_REQUEST, detail);
    }
    assert!(app.client.list_venues().await?.is_empty());

    // a free venue is fine
    let free = requests::CreateVenue {
        price_per_day: dec!(0),
        ..grand_hall_details()
    };
    app.client.create_venue(&free).await?;

    Ok(())
}

#[tokio::test]
async fn delete_venue_removes_bookings_and_blocks() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    let loft = app.create_cozy_loft().await?;
    app.book(hall.id, 1, "Alice").await?;
    app.book(hall.id, 2, "Bob").await?;
    app.block(hall.id, 3).await?;
    app.book(loft.id, 1, "Carol").await?;

    app.client.delete_venue(&hall.id).await?;

    let venues = app.client.list_venues().await?;
    assert_eq!(venues, vec![loft.clone()]);
    assert_eq!(app.count_rows_for_venue("bookings", hall.id).await?, 0);
    assert_eq!(app.count_rows_for_venue("blocked_dates", hall.id).await?, 0);

    let bookings = app.client.list_bookings().await?;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].venue_id, loft.id);

    Ok(())
}

#[tokio::test]
async fn delete_missing_venue_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.delete_venue(&VenueId(42)).await;
    assert_api_error(result, StatusCode::NOT_FOUND, "Venue not found");

    let hall = app.create_grand_hall().await?;
    app.client.delete_venue(&hall.id).await?;
    let result = app.client.delete_venue(&hall.id).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn availability_lists_booked_and_blocked_dates() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    app.book(hall.id, 4, "Alice").await?;
    app.book(hall.id, 0, "Bob").await?;
    app.block(hall.id, 5).await?;
    app.block(hall.id, 40).await?;

    let availability = app.client.get_availability(&hall.id).await?;
    assert_eq!(availability.venue_id, hall.id);
    assert_eq!(
        availability.booked_dates,
        vec![app.days_from_today(0), app.days_from_today(4)]
    );
    assert_eq!(
        availability.blocked_dates,
        vec![app.days_from_today(5), app.days_from_today(40)]
    );

    // 30 day window minus the three taken days inside it
    assert_eq!(availability.available_dates.len(), 27);
    assert_eq!(availability.available_dates[0], app.days_from_today(1));
    assert!(!availability.available_dates.contains(&app.days_from_today(4)));
    assert!(!availability.available_dates.contains(&app.days_from_today(5)));
    assert_eq!(
        availability.available_dates.last(),
        Some(&app.days_from_today(29))
    );

    Ok(())
}

#[tokio::test]
async fn availability_window_follows_the_clock() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;

    app.time_source.advance(jiff::Span::new().hours(24));
    let availability = app.client.get_availability(&hall.id).await?;
    assert_eq!(availability.available_dates.len(), 30);
    assert_eq!(
        availability.available_dates[0],
        jiff::civil::date(2025, 6, 16)
    );

    Ok(())
}

#[tokio::test]
async fn availability_for_missing_venue() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_availability(&VenueId(7)).await;
    assert_api_error(result, StatusCode::NOT_FOUND, "Venue not found");

    Ok(())
}
