use payloads::Venue;
use payloads::catalog::CapacityBucket;
use yew::prelude::*;

use crate::utils::format;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub venue: Venue,
    pub on_book: Callback<Venue>,
}

#[function_component]
pub fn VenueCard(props: &Props) -> Html {
    let venue = &props.venue;
    let bucket = CapacityBucket::for_capacity(venue.capacity);

    let on_click = {
        let venue = venue.clone();
        props.on_book.reform(move |_: MouseEvent| venue.clone())
    };

    html! {
        <div class="bg-white rounded-lg border border-neutral-200 shadow-sm p-5 flex flex-col">
            <div class="flex justify-between items-start">
                <h3 class="text-lg font-semibold text-neutral-900">{&venue.name}</h3>
                <span class="text-xs px-2 py-1 rounded-full bg-neutral-100 text-neutral-600">
                    {bucket.label()}
                </span>
            </div>
            <p class="text-sm text-neutral-500 mt-1">{format!("📍 {}", venue.location)}</p>
            <dl class="mt-3 grid grid-cols-2 gap-2 text-sm">
                <div>
                    <dt class="text-neutral-500">{"Capacity"}</dt>
                    <dd class="font-medium">{format!("{} people", venue.capacity)}</dd>
                </div>
                <div>
                    <dt class="text-neutral-500">{"Price"}</dt>
                    <dd class="font-medium">
                        {format!("{}/day", format::money(venue.price_per_day))}
                    </dd>
                </div>
            </dl>
            if !venue.description.is_empty() {
                <p class="mt-3 text-sm text-neutral-700">{&venue.description}</p>
            }
            if !venue.amenities.is_empty() {
                <p class="mt-2 text-xs text-neutral-500">
                    <span class="font-medium">{"Amenities: "}</span>
                    {&venue.amenities}
                </p>
            }
            <button
                onclick={on_click}
                class="mt-auto pt-4 w-full"
            >
                <span class="block w-full px-4 py-2 text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 rounded-md transition-colors">
                    {"Check Availability & Book"}
                </span>
            </button>
        </div>
    }
}
