use std::collections::HashSet;

use jiff::ToSpan;
use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, ToSqlx};
use payloads::calendar::{DayStatus, classify};
use payloads::{Availability, Venue, VenueId, requests};
use sqlx::PgPool;

use super::{AVAILABILITY_WINDOW_DAYS, StoreError, to_dates};
use crate::time::TimeSource;

pub async fn list_venues(pool: &PgPool) -> Result<Vec<Venue>, StoreError> {
    Ok(sqlx::query_as::<_, Venue>(
        r#"
        SELECT id, name, location, capacity, price_per_day, description,
            amenities
        FROM venues
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?)
}

/// Insert a venue after validating it. Name and location are stored trimmed.
pub async fn create_venue(
    details: &requests::CreateVenue,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Venue, StoreError> {
    if let Some(message) = details.validate().error_message() {
        return Err(StoreError::InvalidVenue(message));
    }

    Ok(sqlx::query_as::<_, Venue>(
        r#"
        INSERT INTO venues (
            name, location, capacity, price_per_day, description, amenities,
            created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, location, capacity, price_per_day, description,
            amenities
        "#,
    )
    .bind(details.name.trim())
    .bind(details.location.trim())
    .bind(details.capacity)
    .bind(details.price_per_day)
    .bind(&details.description)
    .bind(&details.amenities)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?)
}

/// Delete a venue. Its bookings and blocked dates go with it.
pub async fn delete_venue(
    venue_id: &VenueId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM venues WHERE id = $1")
        .bind(venue_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::VenueNotFound);
    }
    Ok(())
}

pub async fn get_availability(
    venue_id: &VenueId,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Availability, StoreError> {
    sqlx::query_scalar::<_, VenueId>("SELECT id FROM venues WHERE id = $1")
        .bind(venue_id)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::VenueNotFound)?;

    let booked_dates = to_dates(
        sqlx::query_scalar::<_, SqlxDate>(
            r#"
            SELECT booking_date FROM bookings
            WHERE venue_id = $1
            ORDER BY booking_date
            "#,
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await?,
    );
    let blocked_dates = to_dates(
        sqlx::query_scalar::<_, SqlxDate>(
            r#"
            SELECT blocked_date FROM blocked_dates
            WHERE venue_id = $1
            ORDER BY blocked_date
            "#,
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await?,
    );

    Ok(Availability {
        venue_id: *venue_id,
        available_dates: available_dates(
            time_source.today(),
            &booked_dates,
            &blocked_dates,
        ),
        booked_dates,
        blocked_dates,
    })
}

/// Open days in the window starting at `today`.
fn available_dates(today: Date, booked: &[Date], blocked: &[Date]) -> Vec<Date> {
    let booked: HashSet<Date> = booked.iter().copied().collect();
    let blocked: HashSet<Date> = blocked.iter().copied().collect();
    today
        .series(1.day())
        .take(AVAILABILITY_WINDOW_DAYS)
        .filter(|date| {
            classify(*date, &booked, &blocked) == DayStatus::Available
        })
        .collect()
}
