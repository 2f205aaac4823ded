use payloads::dashboard::{RECENT_BOOKINGS_LIMIT, recent_bookings};
use payloads::{Booking, Venue};
use yew::prelude::*;

use crate::components::{ConfirmDeleteModal, CreateVenueForm, ManageDatesModal};
use crate::hooks::use_admin_data;
use crate::utils::format;

#[derive(Clone, PartialEq)]
enum Dialog {
    ConfirmDelete(Venue),
    ManageDates(Venue),
}

#[function_component]
pub fn AdminPage() -> Html {
    let admin_data = use_admin_data();
    let dialog = use_state(|| None::<Dialog>);

    let on_close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(None))
    };

    let open = {
        let dialog = dialog.clone();
        Callback::from(move |next: Dialog| dialog.set(Some(next)))
    };

    let content = admin_data.render("admin data", |(venues, bookings), _, _| {
        html! {
            <>
                <Section title="Venues">
                    <VenueTable venues={venues.clone()} on_action={open.clone()} />
                </Section>
                <Section title="Recent Bookings">
                    <RecentBookings venues={venues.clone()} bookings={bookings.clone()} />
                </Section>
            </>
        }
    });

    let modal = match &*dialog {
        None => html! {},
        Some(Dialog::ConfirmDelete(venue)) => html! {
            <ConfirmDeleteModal venue={venue.clone()} on_close={on_close} />
        },
        Some(Dialog::ManageDates(venue)) => html! {
            <ManageDatesModal venue={venue.clone()} on_close={on_close} />
        },
    };

    html! {
        <div class="space-y-8">
            <Section title="Add Venue">
                <CreateVenueForm />
            </Section>
            {content}
            {modal}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    title: AttrValue,
    children: Html,
}

#[function_component]
fn Section(props: &SectionProps) -> Html {
    html! {
        <section class="bg-white rounded-lg border border-neutral-200 shadow-sm p-6">
            <h2 class="text-lg font-semibold text-neutral-900 mb-4">{&props.title}</h2>
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct VenueTableProps {
    venues: Vec<Venue>,
    on_action: Callback<Dialog>,
}

#[function_component]
fn VenueTable(props: &VenueTableProps) -> Html {
    if props.venues.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No venues yet."}</p>
        };
    }

    html! {
        <table class="min-w-full text-sm">
            <thead>
                <tr class="text-left text-neutral-500 border-b border-neutral-200">
                    <th class="py-2 pr-4">{"Name"}</th>
                    <th class="py-2 pr-4">{"Location"}</th>
                    <th class="py-2 pr-4">{"Capacity"}</th>
                    <th class="py-2 pr-4">{"Price/day"}</th>
                    <th class="py-2 text-right">{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.venues.iter().map(|venue| {
                    let manage = {
                        let venue = venue.clone();
                        props.on_action.reform(move |_: MouseEvent| {
                            Dialog::ManageDates(venue.clone())
                        })
                    };
                    let delete = {
                        let venue = venue.clone();
                        props.on_action.reform(move |_: MouseEvent| {
                            Dialog::ConfirmDelete(venue.clone())
                        })
                    };
                    html! {
                        <tr key={venue.id.to_string()} class="border-b border-neutral-100">
                            <td class="py-2 pr-4 font-medium">{&venue.name}</td>
                            <td class="py-2 pr-4">{&venue.location}</td>
                            <td class="py-2 pr-4">{venue.capacity}</td>
                            <td class="py-2 pr-4">{format::money(venue.price_per_day)}</td>
                            <td class="py-2 text-right space-x-2">
                                <button
                                    onclick={manage}
                                    class="px-3 py-1 text-xs font-medium border border-neutral-300 rounded-md hover:bg-neutral-50"
                                >
                                    {"Manage Dates"}
                                </button>
                                <button
                                    onclick={delete}
                                    class="px-3 py-1 text-xs font-medium text-white bg-red-600 hover:bg-red-700 rounded-md"
                                >
                                    {"Delete"}
                                </button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
struct RecentBookingsProps {
    venues: Vec<Venue>,
    bookings: Vec<Booking>,
}

#[function_component]
fn RecentBookings(props: &RecentBookingsProps) -> Html {
    let recent = recent_bookings(&props.bookings, RECENT_BOOKINGS_LIMIT);
    if recent.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No bookings yet."}</p>
        };
    }

    let venue_name = |booking: &Booking| {
        props
            .venues
            .iter()
            .find(|venue| venue.id == booking.venue_id)
            .map(|venue| venue.name.clone())
            .unwrap_or_else(|| format!("Venue #{}", booking.venue_id))
    };

    html! {
        <ul class="divide-y divide-neutral-100">
            {for recent.into_iter().map(|booking| html! {
                <li key={booking.id.to_string()} class="py-2 flex justify-between text-sm">
                    <div>
                        <p class="font-medium text-neutral-900">{venue_name(booking)}</p>
                        <p class="text-neutral-500">
                            {format!("{} · {}", booking.user_name, booking.user_email)}
                        </p>
                    </div>
                    <div class="text-right">
                        <p>{format::short_date(booking.booking_date)}</p>
                        <p class="text-xs text-green-700">{&booking.status}</p>
                    </div>
                </li>
            })}
        </ul>
    }
}
