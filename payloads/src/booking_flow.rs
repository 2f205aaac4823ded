//! State machine behind the booking modal.
//!
//! ```text
//! Closed --open--> NoDate --select available day--> DateSelected
//!                                                      |  ^
//!                                              submit  |  | failure
//!                                                      v  |
//!                                                   Submitting --success--> Closed
//! ```
//!
//! Every open creates a new session with a fresh request token. Async results
//! (availability fetches, submission outcomes) are applied only if they carry
//! the token of the live session, so a slow response from an earlier open can
//! never overwrite a later one.

use jiff::civil::Date;
use uuid::Uuid;

use crate::VenueId;
use crate::calendar::{CalendarDay, DayStatus, build_calendar};
use crate::requests::CreateBooking;
use crate::responses::Availability;

pub const BOOKING_CONFIRMED: &str = "Booking confirmed successfully!";
pub const BOOKING_FAILED: &str = "Booking failed";
pub const AVAILABILITY_FAILED: &str = "Error loading availability";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingFlowError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Date is {0}")]
    DayUnavailable(DayStatus),
    #[error("No venue selected")]
    NotOpen,
    #[error("Booking is already being submitted")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Closed,
    NoDate,
    DateSelected,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CalendarState {
    #[default]
    Loading,
    Loaded(Vec<CalendarDay>),
    Failed(String),
}

/// Everything the modal holds for one venue, from open until close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    pub venue_id: VenueId,
    pub token: Uuid,
    pub calendar: CalendarState,
    pub selected_date: Option<Date>,
    pub user_name: String,
    pub user_email: String,
    pub submitting: bool,
}

impl BookingSession {
    fn new(venue_id: VenueId) -> Self {
        Self {
            venue_id,
            token: Uuid::new_v4(),
            calendar: CalendarState::Loading,
            selected_date: None,
            user_name: String::new(),
            user_email: String::new(),
            submitting: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingFlow {
    #[default]
    Closed,
    Open(BookingSession),
}

impl BookingFlow {
    /// Open the modal for a venue, discarding any previous session. Returns
    /// the token the availability fetch must report back with.
    pub fn open(&mut self, venue_id: VenueId) -> Uuid {
        let session = BookingSession::new(venue_id);
        let token = session.token;
        *self = Self::Open(session);
        token
    }

    /// Cancel: all in-progress input is dropped.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn session(&self) -> Option<&BookingSession> {
        match self {
            Self::Closed => None,
            Self::Open(session) => Some(session),
        }
    }

    pub fn phase(&self) -> BookingPhase {
        match self {
            Self::Closed => BookingPhase::Closed,
            Self::Open(session) if session.submitting => {
                BookingPhase::Submitting
            }
            Self::Open(session) if session.selected_date.is_some() => {
                BookingPhase::DateSelected
            }
            Self::Open(_) => BookingPhase::NoDate,
        }
    }

    fn live_session(&mut self, token: Uuid) -> Option<&mut BookingSession> {
        match self {
            Self::Open(session) if session.token == token => Some(session),
            _ => None,
        }
    }

    /// Apply a fetched availability record. Returns false if the result is
    /// stale and was dropped.
    pub fn availability_loaded(
        &mut self,
        token: Uuid,
        today: Date,
        availability: &Availability,
    ) -> bool {
        match self.live_session(token) {
            Some(session) => {
                session.calendar =
                    CalendarState::Loaded(build_calendar(today, availability));
                true
            }
            None => false,
        }
    }

    pub fn availability_failed(&mut self, token: Uuid, message: String) -> bool {
        match self.live_session(token) {
            Some(session) => {
                session.calendar = CalendarState::Failed(message);
                true
            }
            None => false,
        }
    }

    /// Only available days can be chosen; anything else leaves the state
    /// untouched.
    pub fn select_day(
        &mut self,
        day: &CalendarDay,
    ) -> Result<(), BookingFlowError> {
        let Self::Open(session) = self else {
            return Err(BookingFlowError::NotOpen);
        };
        if session.submitting {
            return Err(BookingFlowError::AlreadySubmitting);
        }
        if !day.status.is_available() {
            return Err(BookingFlowError::DayUnavailable(day.status));
        }
        session.selected_date = Some(day.date);
        Ok(())
    }

    pub fn set_user_name(&mut self, user_name: String) {
        if let Self::Open(session) = self {
            session.user_name = user_name;
        }
    }

    pub fn set_user_email(&mut self, user_email: String) {
        if let Self::Open(session) = self {
            session.user_email = user_email;
        }
    }

    /// Validate locally and move to submitting. On error nothing changes and
    /// no request should be sent.
    pub fn begin_submit(
        &mut self,
    ) -> Result<(Uuid, CreateBooking), BookingFlowError> {
        let Self::Open(session) = self else {
            return Err(BookingFlowError::NotOpen);
        };
        if session.submitting {
            return Err(BookingFlowError::AlreadySubmitting);
        }
        let user_name = session.user_name.trim();
        let user_email = session.user_email.trim();
        let (false, false, Some(booking_date)) =
            (user_name.is_empty(), user_email.is_empty(), session.selected_date)
        else {
            return Err(BookingFlowError::MissingFields);
        };

        let request = CreateBooking {
            venue_id: session.venue_id,
            booking_date,
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
        };
        session.submitting = true;
        Ok((session.token, request))
    }

    /// The backend accepted the booking; the modal closes.
    pub fn submit_succeeded(&mut self, token: Uuid) -> bool {
        let accepted =
            self.live_session(token).is_some_and(|session| session.submitting);
        if accepted {
            *self = Self::Closed;
        }
        accepted
    }

    /// The backend refused the booking; keep every input so the user can
    /// retry.
    pub fn submit_failed(&mut self, token: Uuid) -> bool {
        match self.live_session(token) {
            Some(session) if session.submitting => {
                session.submitting = false;
                true
            }
            _ => false,
        }
    }
}
