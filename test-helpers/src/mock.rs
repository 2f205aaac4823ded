//! A small but realistic dataset for analytics tests.
//!
//! Three venues, one per capacity bucket, with bookings spread over the
//! current month and the months before it:
//! - Grand Hall (large) is the busiest venue
//! - Alice books more often than anyone else
//! - Cozy Loft has one blocked date, which never counts toward revenue

use anyhow::Result;
use jiff::ToSpan;
use payloads::responses;

use crate::{TestApp, booking_details};

pub struct DemoDataset {
    pub grand_hall: responses::Venue,
    pub cozy_loft: responses::Venue,
    pub conference_room: responses::Venue,
    pub bookings: Vec<responses::Booking>,
}

impl DemoDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        let grand_hall = app.create_grand_hall().await?;
        let cozy_loft = app.create_cozy_loft().await?;
        let conference_room = app.create_conference_room().await?;

        let this_month = app.today().first_of_month();
        let last_month = this_month.saturating_sub(1.month());
        let two_months_ago = this_month.saturating_sub(2.months());

        let plan = [
            (grand_hall.id, this_month, "Alice"),
            (grand_hall.id, this_month.saturating_add(1.day()), "Bob"),
            (grand_hall.id, last_month, "Alice"),
            (cozy_loft.id, this_month.saturating_add(2.days()), "Alice"),
            (conference_room.id, two_months_ago, "Carol"),
        ];

        let mut bookings = Vec::with_capacity(plan.len());
        for (venue_id, date, user_name) in plan {
            let details = booking_details(venue_id, date, user_name);
            bookings.push(app.client.create_booking(&details).await?);
        }

        app.block(cozy_loft.id, 10).await?;

        Ok(Self {
            grand_hall,
            cozy_loft,
            conference_room,
            bookings,
        })
    }
}
