use crate::{BookingId, VenueId, catalog::CapacityBucket};
use jiff::Timestamp;
use jiff::civil::Date;
#[cfg(feature = "use-sqlx")]
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTs};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable space, as listed in the catalog and the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub price_per_day: Decimal,
    pub description: String,
    pub amenities: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: BookingId,
    pub venue_id: VenueId,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxDate"))]
    pub booking_date: Date,
    pub user_name: String,
    pub user_email: String,
    pub status: String,
    #[cfg_attr(feature = "use-sqlx", sqlx(try_from = "SqlxTs"))]
    pub created_at: Timestamp,
}

/// Booked and blocked dates for one venue.
///
/// Missing date lists are treated as empty, so an availability record with no
/// data renders as an all-available calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub venue_id: VenueId,
    /// Dates within the next 30 days that are neither booked nor blocked.
    #[serde(default)]
    pub available_dates: Vec<Date>,
    #[serde(default)]
    pub booked_dates: Vec<Date>,
    #[serde(default)]
    pub blocked_dates: Vec<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub name: String,
    pub bookings: i64,
}

/// Bookings and revenue for one calendar month, keyed by its first day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub month: Date,
    pub bookings: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRevenue {
    pub bucket: CapacityBucket,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_venues: i64,
    pub total_bookings: i64,
    pub total_revenue: Decimal,
    pub top_venue: Option<TopPerformer>,
    pub top_user: Option<TopPerformer>,
    /// The last six months, oldest first, ending with the current month.
    #[serde(default)]
    pub monthly: Vec<MonthlyStats>,
    /// Always one entry per capacity bucket, smallest first.
    #[serde(default)]
    pub revenue_by_capacity: Vec<BucketRevenue>,
    /// Percent of venue-days booked over the next 30 days.
    #[serde(default)]
    pub occupancy_rate: Option<Decimal>,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: Timestamp,
}
