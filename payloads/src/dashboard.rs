//! Pure helpers behind the admin panel and the analytics view.

use rust_decimal::Decimal;

use crate::responses::{Booking, MonthlyStats};

/// Number of bookings listed in the admin panel.
pub const RECENT_BOOKINGS_LIMIT: usize = 8;

/// Most recent bookings first, by creation time and then by id.
pub fn recent_bookings(bookings: &[Booking], limit: usize) -> Vec<&Booking> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by(|a, b| {
        b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
    });
    sorted.truncate(limit);
    sorted
}

/// Relative change in percent, rounded to one decimal place. `None` when
/// there is nothing to compare against.
pub fn percent_change(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    let change = (current - previous) / previous * Decimal::ONE_HUNDRED;
    Some(change.round_dp(1))
}

/// Current month compared to the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthOverMonth {
    /// Percent change in booking count.
    pub bookings_pct: Option<Decimal>,
    /// Absolute change in revenue.
    pub revenue_delta: Option<Decimal>,
}

/// Compare the last two entries of an oldest-first monthly series.
pub fn month_over_month(monthly: &[MonthlyStats]) -> MonthOverMonth {
    let [.., previous, current] = monthly else {
        return MonthOverMonth::default();
    };
    let has_prior = previous.bookings > 0;
    MonthOverMonth {
        bookings_pct: percent_change(
            Decimal::from(current.bookings),
            Decimal::from(previous.bookings),
        ),
        revenue_delta: has_prior.then(|| current.revenue - previous.revenue),
    }
}

/// Each value's share of the total in percent. All zeros when the total is
/// zero.
pub fn shares(values: &[Decimal]) -> Vec<Decimal> {
    let total: Decimal = values.iter().sum();
    values
        .iter()
        .map(|value| {
            if total.is_zero() {
                Decimal::ZERO
            } else {
                (*value / total * Decimal::ONE_HUNDRED).round_dp(1)
            }
        })
        .collect()
}
