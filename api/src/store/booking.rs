use jiff_sqlx::ToSqlx;
use payloads::{Booking, requests, responses};
use sqlx::PgPool;

use super::{StoreError, is_blocked, is_booked, lock_venue, map_unique_error};
use crate::time::TimeSource;

const BOOKING_UNIQUE: &str = "bookings_venue_id_booking_date_unique";
const BLOCKED_DATE_UNIQUE: &str = "blocked_dates_venue_id_blocked_date_unique";

pub async fn list_bookings(pool: &PgPool) -> Result<Vec<Booking>, StoreError> {
    Ok(sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, venue_id, booking_date, user_name, user_email, status,
            created_at
        FROM bookings
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?)
}

/// Book a venue for one day.
///
/// Fails when the venue does not exist, when the date is already booked, or
/// when the owner blocked it. Booked is checked before blocked.
pub async fn create_booking(
    details: &requests::CreateBooking,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Booking, StoreError> {
    if let Some(message) = details.validate().error_message() {
        return Err(StoreError::InvalidBooking(message));
    }

    let mut tx = pool.begin().await?;
    lock_venue(&details.venue_id, &mut tx).await?;

    if is_booked(&details.venue_id, details.booking_date, &mut tx).await? {
        return Err(StoreError::AlreadyBooked);
    }
    if is_blocked(&details.venue_id, details.booking_date, &mut tx).await? {
        return Err(StoreError::DateBlocked);
    }

    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (
            venue_id, booking_date, user_name, user_email, created_at
        )
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, venue_id, booking_date, user_name, user_email, status,
            created_at
        "#,
    )
    .bind(details.venue_id)
    .bind(details.booking_date.to_sqlx())
    .bind(details.user_name.trim())
    .bind(details.user_email.trim())
    .bind(time_source.now().to_sqlx())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        map_unique_error(e, BOOKING_UNIQUE, StoreError::AlreadyBooked)
    })?;

    tx.commit().await?;
    Ok(booking)
}

/// Block a date for a venue. A booked date cannot be blocked.
pub async fn block_date(
    details: &requests::BlockDate,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::SuccessMessage, StoreError> {
    let mut tx = pool.begin().await?;
    lock_venue(&details.venue_id, &mut tx).await?;

    if is_booked(&details.venue_id, details.blocked_date, &mut tx).await? {
        return Err(StoreError::DateAlreadyBooked);
    }
    if is_blocked(&details.venue_id, details.blocked_date, &mut tx).await? {
        return Err(StoreError::DateAlreadyBlocked);
    }

    let reason = match details.reason.trim() {
        "" => requests::DEFAULT_BLOCK_REASON,
        reason => reason,
    };

    sqlx::query(
        r#"
        INSERT INTO blocked_dates (venue_id, blocked_date, reason, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(details.venue_id)
    .bind(details.blocked_date.to_sqlx())
    .bind(reason)
    .bind(time_source.now().to_sqlx())
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        map_unique_error(e, BLOCKED_DATE_UNIQUE, StoreError::DateAlreadyBlocked)
    })?;

    tx.commit().await?;
    Ok(responses::SuccessMessage {
        message: "Date blocked successfully".into(),
    })
}
