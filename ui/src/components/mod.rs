pub mod availability_calendar;
pub mod booking_modal;
pub mod charts;
pub mod confirm_delete_modal;
pub mod create_venue_form;
pub mod header;
pub mod manage_dates_modal;
pub mod modal;
pub mod stat_card;
pub mod toast;
pub mod venue_card;

pub use availability_calendar::AvailabilityCalendar;
pub use booking_modal::{BookingFlowState, BookingModal, open_booking};
pub use charts::{DonutChart, DonutSlice, LineChart};
pub use confirm_delete_modal::ConfirmDeleteModal;
pub use create_venue_form::CreateVenueForm;
pub use header::AppHeader;
pub use manage_dates_modal::ManageDatesModal;
pub use modal::Modal;
pub use stat_card::{StatCard, Trend};
pub use toast::ToastContainer;
pub use venue_card::VenueCard;
