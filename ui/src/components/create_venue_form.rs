use payloads::requests::CreateVenue;
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border border-neutral-300 \
                           rounded-md focus:outline-none focus:ring-2 \
                           focus:ring-neutral-500";

/// Read the form fields into a request, or the message to show instead.
fn read_form(
    name: &str,
    location: &str,
    capacity: &str,
    price: &str,
    description: &str,
    amenities: &str,
) -> Result<CreateVenue, &'static str> {
    // An unparseable capacity is reported by the positive-capacity rule.
    let capacity = capacity.trim().parse::<i32>().unwrap_or(0);
    let price_per_day = price
        .trim()
        .parse::<Decimal>()
        .map_err(|_| "Price per day must be a number")?;

    let details = CreateVenue {
        name: name.trim().to_string(),
        location: location.trim().to_string(),
        capacity,
        price_per_day,
        description: description.trim().to_string(),
        amenities: amenities.trim().to_string(),
    };
    match details.validate().error_message() {
        Some(message) => Err(message),
        None => Ok(details),
    }
}

#[function_component]
pub fn CreateVenueForm() -> Html {
    let toast = use_toast();
    let (_, dispatch) = use_store::<State>();

    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let location_ref = use_node_ref();
    let capacity_ref = use_node_ref();
    let price_ref = use_node_ref();
    let description_ref = use_node_ref();
    let amenities_ref = use_node_ref();
    let is_loading = use_state(|| false);

    let on_submit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let location_ref = location_ref.clone();
        let capacity_ref = capacity_ref.clone();
        let price_ref = price_ref.clone();
        let description_ref = description_ref.clone();
        let amenities_ref = amenities_ref.clone();
        let is_loading = is_loading.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let description = description_ref
                .cast::<HtmlTextAreaElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let details = match read_form(
                &input(&name_ref),
                &input(&location_ref),
                &input(&capacity_ref),
                &input(&price_ref),
                &description,
                &input(&amenities_ref),
            ) {
                Ok(details) => details,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };

            let form_ref = form_ref.clone();
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                match get_api_client().create_venue(&details).await {
                    Ok(venue) => {
                        tracing::info!("created venue {}", venue.id);
                        toast.success("Venue added successfully!");
                        if let Some(form) =
                            form_ref.cast::<web_sys::HtmlFormElement>()
                        {
                            form.reset();
                        }
                        dispatch.reduce_mut(|s| s.data_changed());
                    }
                    Err(e) => toast.api_error(&e, "Failed to add venue"),
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <form ref={form_ref} onsubmit={on_submit} class="space-y-3">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <input ref={name_ref} type="text" placeholder="Venue name" class={INPUT_CLASS} />
                <input ref={location_ref} type="text" placeholder="Location" class={INPUT_CLASS} />
                <input
                    ref={capacity_ref}
                    type="number"
                    min="1"
                    placeholder="Capacity"
                    class={INPUT_CLASS}
                />
                <input
                    ref={price_ref}
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Price per day"
                    class={INPUT_CLASS}
                />
            </div>
            <textarea
                ref={description_ref}
                rows="2"
                placeholder="Description"
                class={INPUT_CLASS}
            />
            <input
                ref={amenities_ref}
                type="text"
                placeholder="Amenities (comma separated)"
                class={INPUT_CLASS}
            />
            <button
                type="submit"
                disabled={*is_loading}
                class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 rounded-md disabled:opacity-50"
            >
                {if *is_loading { "Adding..." } else { "Add Venue" }}
            </button>
        </form>
    }
}
