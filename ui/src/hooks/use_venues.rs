use payloads::{Availability, Booking, Venue, VenueId};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

/// All venues, reloaded after every mutation.
#[hook]
pub fn use_venues() -> FetchHookReturn<Vec<Venue>> {
    let (state, _) = use_store::<State>();

    use_fetch(state.data_revision, || async {
        get_api_client()
            .list_venues()
            .await
            .map_err(|e| e.to_string())
    })
}

/// Venues and bookings for the admin panel, fetched concurrently.
#[hook]
pub fn use_admin_data() -> FetchHookReturn<(Vec<Venue>, Vec<Booking>)> {
    let (state, _) = use_store::<State>();

    use_fetch(state.data_revision, || async {
        let api_client = get_api_client();
        let (venues, bookings) = futures::join!(
            api_client.list_venues(),
            api_client.list_bookings()
        );
        Ok((
            venues.map_err(|e| e.to_string())?,
            bookings.map_err(|e| e.to_string())?,
        ))
    })
}

#[hook]
pub fn use_availability(venue_id: VenueId) -> FetchHookReturn<Availability> {
    let (state, _) = use_store::<State>();

    use_fetch((venue_id, state.data_revision), move || async move {
        get_api_client()
            .get_availability(&venue_id)
            .await
            .map_err(|e| e.to_string())
    })
}
