pub mod use_dashboard;
pub mod use_fetch;
pub mod use_venues;

pub use use_dashboard::use_dashboard;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_venues::{use_admin_data, use_availability, use_venues};

/// Distinguishes "not fetched yet" from "fetched and empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

/// Numbers fetch calls so that only the newest one may apply its result.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, request: u64) -> bool {
        request == self.latest
    }
}
