use payloads::Venue;
use payloads::catalog::{CapacityBucket, VenueFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{
    BookingFlowState, BookingModal, VenueCard, open_booking,
};
use crate::hooks::use_venues;

#[function_component]
pub fn CatalogPage() -> Html {
    let venues_hook = use_venues();
    let filter = use_state(VenueFilter::default);
    let booking = use_reducer(BookingFlowState::default);

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(VenueFilter {
                search: input.value(),
                ..(*filter).clone()
            });
        })
    };

    let on_capacity = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filter.set(VenueFilter {
                capacity: CapacityBucket::from_form_value(&select.value()),
                ..(*filter).clone()
            });
        })
    };

    let on_book = {
        let booking = booking.clone();
        Callback::from(move |venue: Venue| open_booking(&booking, venue.id))
    };

    let booking_venue = booking.flow.session().and_then(|session| {
        venues_hook.data.as_ref().and_then(|venues| {
            venues.iter().find(|v| v.id == session.venue_id).cloned()
        })
    });

    let grid = venues_hook.render("venues", |venues, _, _| {
        let shown = filter.apply(venues);
        if shown.is_empty() {
            return html! {
                <div class="text-center py-12 text-neutral-500">
                    {"No venues match your search."}
                </div>
            };
        }
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {for shown.into_iter().map(|venue| html! {
                    <VenueCard
                        key={venue.id.to_string()}
                        venue={venue.clone()}
                        on_book={on_book.clone()}
                    />
                })}
            </div>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row gap-3">
                <input
                    type="search"
                    placeholder="Search venues by name"
                    value={filter.search.clone()}
                    oninput={on_search}
                    class="flex-1 px-3 py-2 text-sm border border-neutral-300 rounded-md"
                />
                <select
                    onchange={on_capacity}
                    class="px-3 py-2 text-sm border border-neutral-300 rounded-md bg-white"
                >
                    <option value="" selected={filter.capacity.is_none()}>
                        {"Any capacity"}
                    </option>
                    {for CapacityBucket::ALL.iter().map(|bucket| html! {
                        <option
                            value={bucket.as_str()}
                            selected={filter.capacity == Some(*bucket)}
                        >
                            {bucket.label()}
                        </option>
                    })}
                </select>
            </div>
            {grid}
            <BookingModal flow={booking.clone()} venue={booking_venue} />
        </div>
    }
}
