use jiff::civil::date;
use payloads::catalog::CapacityBucket;
use payloads::dashboard::month_over_month;
use payloads::responses::TopPerformer;
use rust_decimal::{Decimal, dec};
use test_helpers::mock::DemoDataset;
use test_helpers::spawn_app;

#[tokio::test]
async fn empty_dashboard() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let summary = app.client.dashboard_summary().await?;
    assert_eq!(summary.total_venues, 0);
    assert_eq!(summary.total_bookings, 0);
    assert_eq!(summary.total_revenue, Decimal::ZERO);
    assert_eq!(summary.top_venue, None);
    assert_eq!(summary.top_user, None);
    assert_eq!(summary.occupancy_rate, None);

    assert_eq!(summary.monthly.len(), 6);
    assert_eq!(summary.monthly[0].month, date(2025, 1, 1));
    assert_eq!(summary.monthly[5].month, date(2025, 6, 1));
    assert!(summary.monthly.iter().all(|m| m.bookings == 0));

    let buckets: Vec<_> =
        summary.revenue_by_capacity.iter().map(|b| b.bucket).collect();
    assert_eq!(buckets, CapacityBucket::ALL.to_vec());
    assert!(summary.revenue_by_capacity.iter().all(|b| b.revenue.is_zero()));

    Ok(())
}

#[tokio::test]
async fn dashboard_aggregates_seeded_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DemoDataset::create(&app).await?;

    let summary = app.client.dashboard_summary().await?;
    assert_eq!(summary.total_venues, 3);
    assert_eq!(summary.total_bookings, 5);
    assert_eq!(summary.total_revenue, dec!(4450));
    assert_eq!(
        summary.top_venue,
        Some(TopPerformer {
            name: "Grand Hall".into(),
            bookings: 3
        })
    );
    assert_eq!(
        summary.top_user,
        Some(TopPerformer {
            name: "Alice".into(),
            bookings: 3
        })
    );

    let monthly: Vec<_> = summary
        .monthly
        .iter()
        .map(|m| (m.month, m.bookings, m.revenue))
        .collect();
    assert_eq!(
        monthly,
        vec![
            (date(2025, 1, 1), 0, dec!(0)),
            (date(2025, 2, 1), 0, dec!(0)),
            (date(2025, 3, 1), 0, dec!(0)),
            (date(2025, 4, 1), 1, dec!(600)),
            (date(2025, 5, 1), 1, dec!(1200)),
            (date(2025, 6, 1), 3, dec!(2650)),
        ]
    );

    let trends = month_over_month(&summary.monthly);
    assert_eq!(trends.bookings_pct, Some(dec!(200)));
    assert_eq!(trends.revenue_delta, Some(dec!(1450)));

    let buckets: Vec<_> = summary
        .revenue_by_capacity
        .iter()
        .map(|b| (b.bucket, b.revenue))
        .collect();
    assert_eq!(
        buckets,
        vec![
            (CapacityBucket::Small, dec!(250)),
            (CapacityBucket::Medium, dec!(600)),
            (CapacityBucket::Large, dec!(3600)),
        ]
    );

    // Every seeded booking is in the past.
    assert_eq!(summary.occupancy_rate, Some(Decimal::ZERO));

    Ok(())
}

#[tokio::test]
async fn occupancy_counts_the_next_thirty_days() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let hall = app.create_grand_hall().await?;
    let loft = app.create_cozy_loft().await?;

    app.book(hall.id, 0, "Alice").await?;
    app.book(hall.id, 29, "Bob").await?;
    app.book(loft.id, 1, "Carol").await?;
    // Outside the window on either side.
    app.book(loft.id, 30, "Dave").await?;
    app.book(loft.id, -1, "Erin").await?;

    let summary = app.client.dashboard_summary().await?;
    // 3 of 2 venues x 30 days
    assert_eq!(summary.occupancy_rate, Some(dec!(5.0)));

    Ok(())
}

#[tokio::test]
async fn monthly_window_follows_the_clock() -> anyhow::Result<()> {
    let app = spawn_app().await;
    DemoDataset::create(&app).await?;

    app.time_source.set("2025-12-15T12:00:00Z".parse()?);

    let summary = app.client.dashboard_summary().await?;
    assert_eq!(summary.monthly[0].month, date(2025, 7, 1));
    assert_eq!(summary.monthly[5].month, date(2025, 12, 1));
    assert!(summary.monthly.iter().all(|m| m.bookings == 0));
    assert_eq!(month_over_month(&summary.monthly).bookings_pct, None);
    // Totals are not windowed.
    assert_eq!(summary.total_bookings, 5);

    Ok(())
}

#[tokio::test]
async fn deleted_venues_drop_out_of_the_totals() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let demo = DemoDataset::create(&app).await?;

    app.client.delete_venue(&demo.grand_hall.id).await?;

    let summary = app.client.dashboard_summary().await?;
    assert_eq!(summary.total_venues, 2);
    assert_eq!(summary.total_bookings, 2);
    assert_eq!(summary.total_revenue, dec!(850));
    assert_eq!(summary.top_venue.map(|t| t.bookings), Some(1));

    Ok(())
}
