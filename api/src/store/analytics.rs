//! Aggregates behind the analytics dashboard.
//!
//! Revenue is counted per booking as the booked venue's `price_per_day`.

use jiff::ToSpan;
use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, ToSqlx};
use payloads::catalog::CapacityBucket;
use payloads::responses::{
    BucketRevenue, DashboardSummary, MonthlyStats, TopPerformer,
};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{AVAILABILITY_WINDOW_DAYS, StoreError};
use crate::time::TimeSource;

/// Months in the analytics time series, including the current one.
pub const MONTHS_OF_HISTORY: usize = 6;

pub async fn dashboard_summary(
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<DashboardSummary, StoreError> {
    let today = time_source.today();

    let total_venues =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await?;
    let total_bookings =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings")
            .fetch_one(pool)
            .await?;
    let total_revenue = sqlx::query_scalar::<_, Decimal>(
        r#"
        SELECT COALESCE(SUM(v.price_per_day), 0)
        FROM bookings b
        JOIN venues v ON v.id = b.venue_id
        "#,
    )
    .fetch_one(pool)
    .await?;

    let top_venue = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT v.name, COUNT(b.id) AS bookings
        FROM venues v
        JOIN bookings b ON b.venue_id = v.id
        GROUP BY v.id, v.name
        ORDER BY bookings DESC, v.id
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?
    .map(|(name, bookings)| TopPerformer { name, bookings });

    let top_user = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT user_name, COUNT(*) AS bookings
        FROM bookings
        GROUP BY user_name
        ORDER BY bookings DESC, user_name
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?
    .map(|(name, bookings)| TopPerformer { name, bookings });

    let monthly = monthly_stats(today, pool).await?;

    let capacity_rows = sqlx::query_as::<_, (i32, Decimal)>(
        r#"
        SELECT v.capacity, SUM(v.price_per_day)
        FROM bookings b
        JOIN venues v ON v.id = b.venue_id
        GROUP BY v.id, v.capacity
        "#,
    )
    .fetch_all(pool)
    .await?;

    let window_end =
        today.saturating_add((AVAILABILITY_WINDOW_DAYS as i64).days());
    let upcoming_bookings = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM bookings
        WHERE booking_date >= $1 AND booking_date < $2
        "#,
    )
    .bind(today.to_sqlx())
    .bind(window_end.to_sqlx())
    .fetch_one(pool)
    .await?;

    Ok(DashboardSummary {
        total_venues,
        total_bookings,
        total_revenue,
        top_venue,
        top_user,
        monthly,
        revenue_by_capacity: revenue_by_bucket(&capacity_rows),
        occupancy_rate: occupancy_rate(
            upcoming_bookings,
            total_venues,
            AVAILABILITY_WINDOW_DAYS as i64,
        ),
    })
}

async fn monthly_stats(
    today: Date,
    pool: &PgPool,
) -> Result<Vec<MonthlyStats>, StoreError> {
    let first_month = first_month_of_window(today);
    let end = today.first_of_month().saturating_add(1.month());

    let rows = sqlx::query_as::<_, (SqlxDate, i64, Decimal)>(
        r#"
        SELECT date_trunc('month', b.booking_date::timestamp)::date AS month,
            COUNT(*),
            SUM(v.price_per_day)
        FROM bookings b
        JOIN venues v ON v.id = b.venue_id
        WHERE b.booking_date >= $1 AND b.booking_date < $2
        GROUP BY month
        "#,
    )
    .bind(first_month.to_sqlx())
    .bind(end.to_sqlx())
    .fetch_all(pool)
    .await?;

    let rows: Vec<MonthlyStats> = rows
        .into_iter()
        .map(|(month, bookings, revenue)| MonthlyStats {
            month: month.to_jiff(),
            bookings,
            revenue,
        })
        .collect();
    Ok(fill_months(first_month, &rows))
}

fn first_month_of_window(today: Date) -> Date {
    today
        .first_of_month()
        .saturating_sub(((MONTHS_OF_HISTORY - 1) as i64).months())
}

/// One entry per month starting at `first_month`, zeros where nothing was
/// booked.
fn fill_months(first_month: Date, rows: &[MonthlyStats]) -> Vec<MonthlyStats> {
    first_month
        .series(1.month())
        .take(MONTHS_OF_HISTORY)
        .map(|month| {
            rows.iter()
                .find(|row| row.month == month)
                .cloned()
                .unwrap_or(MonthlyStats {
                    month,
                    bookings: 0,
                    revenue: Decimal::ZERO,
                })
        })
        .collect()
}

/// Fold per-venue revenue into the three capacity buckets, smallest first.
fn revenue_by_bucket(rows: &[(i32, Decimal)]) -> Vec<BucketRevenue> {
    CapacityBucket::ALL
        .into_iter()
        .map(|bucket| BucketRevenue {
            bucket,
            revenue: rows
                .iter()
                .filter(|(capacity, _)| bucket.contains(*capacity))
                .map(|(_, revenue)| *revenue)
                .sum(),
        })
        .collect()
}

/// Percent of venue-days booked, or `None` without venues.
fn occupancy_rate(booked: i64, venues: i64, days: i64) -> Option<Decimal> {
    if venues <= 0 || days <= 0 {
        return None;
    }
    let slots = Decimal::from(venues * days);
    Some((Decimal::from(booked) / slots * Decimal::ONE_HUNDRED).round_dp(1))
}
