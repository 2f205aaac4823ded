//! Database store for the venue booking API.
//!
//! ## Design Decisions
//!
//! ### One row lock per venue
//! - Bookings and blocked dates for a venue are written inside a transaction
//!   that first takes `SELECT ... FOR UPDATE` on the venue row. The checks
//!   for "already booked" and "already blocked" therefore see a stable view,
//!   and the rule violation is reported with its specific message.
//! - The unique constraints on `(venue_id, booking_date)` and
//!   `(venue_id, blocked_date)` are the backstop. A violation that slips past
//!   the checks is mapped back to the same error by constraint name.
//!
//! ### Time Source Dependency
//! - Functions that stamp rows or anchor date windows take a `TimeSource`
//!   so tests can pin "today".
//!
//! ### Type Safety
//! - `VenueId` and `BookingId` implement `sqlx::Type` and bind directly.
//! - Dates cross the sqlx boundary as `jiff_sqlx` wrappers.

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, ToSqlx};
use payloads::VenueId;
use sqlx::{Postgres, Transaction};

pub mod analytics;
pub mod booking;
pub mod venue;

pub use analytics::dashboard_summary;
pub use booking::{block_date, create_booking, list_bookings};
pub use venue::{create_venue, delete_venue, get_availability, list_venues};

/// Days covered by `available_dates` in an availability response.
pub const AVAILABILITY_WINDOW_DAYS: usize = 30;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Venue not found")]
    VenueNotFound,
    #[error("{0}")]
    InvalidVenue(&'static str),
    #[error("{0}")]
    InvalidBooking(&'static str),
    #[error("Venue already booked for this date")]
    AlreadyBooked,
    #[error("Date is blocked by venue owner")]
    DateBlocked,
    #[error("Date is already booked")]
    DateAlreadyBooked,
    #[error("Date is already blocked")]
    DateAlreadyBlocked,
    #[error("Unique constraint violation")]
    NotUnique(#[source] sqlx::Error),
    #[error("Database error")]
    Database(#[source] sqlx::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

/// Convert a unique violation on `constraint` into `specific`. Any other
/// error converts as usual.
fn map_unique_error(
    e: sqlx::Error,
    constraint: &str,
    specific: StoreError,
) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
        && db_err.constraint() == Some(constraint)
    {
        return specific;
    }
    e.into()
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return StoreError::NotUnique(e);
            }
            // only venue_id columns carry foreign keys
            if db_err.is_foreign_key_violation() {
                return StoreError::VenueNotFound;
            }
        }
        StoreError::Database(e)
    }
}

/// Lock the venue row for the rest of the transaction, failing if the venue
/// does not exist.
async fn lock_venue(
    venue_id: &VenueId,
    tx: &mut Transaction<'_, Postgres>,
) -> Result<(), StoreError> {
    sqlx::query_scalar::<_, VenueId>(
        "SELECT id FROM venues WHERE id = $1 FOR UPDATE",
    )
    .bind(venue_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or(StoreError::VenueNotFound)?;
    Ok(())
}

async fn is_booked(
    venue_id: &VenueId,
    date: Date,
    tx: &mut Transaction<'_, Postgres>,
) -> Result<bool, StoreError> {
    Ok(sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM bookings
            WHERE venue_id = $1 AND booking_date = $2
        )
        "#,
    )
    .bind(venue_id)
    .bind(date.to_sqlx())
    .fetch_one(&mut **tx)
    .await?)
}

async fn is_blocked(
    venue_id: &VenueId,
    date: Date,
    tx: &mut Transaction<'_, Postgres>,
) -> Result<bool, StoreError> {
    Ok(sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM blocked_dates
            WHERE venue_id = $1 AND blocked_date = $2
        )
        "#,
    )
    .bind(venue_id)
    .bind(date.to_sqlx())
    .fetch_one(&mut **tx)
    .await?)
}

fn to_dates(dates: Vec<SqlxDate>) -> Vec<Date> {
    dates.into_iter().map(|d| d.to_jiff()).collect()
}
