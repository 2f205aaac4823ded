use jiff::civil::Date;
use payloads::Venue;
use payloads::requests::{BlockDate, DEFAULT_BLOCK_REASON};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::Modal;
use crate::contexts::toast::use_toast;
use crate::hooks::use_availability;
use crate::{State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub venue: Venue,
    pub on_close: Callback<()>,
}

/// Booked and blocked counts for one venue, plus a form to block a date.
#[function_component]
pub fn ManageDatesModal(props: &Props) -> Html {
    let toast = use_toast();
    let (_, dispatch) = use_store::<State>();
    let availability = use_availability(props.venue.id);

    let date_ref = use_node_ref();
    let reason_ref = use_node_ref();
    let is_loading = use_state(|| false);

    let on_submit = {
        let date_ref = date_ref.clone();
        let reason_ref = reason_ref.clone();
        let is_loading = is_loading.clone();
        let toast = toast.clone();
        let on_close = props.on_close.clone();
        let venue_id = props.venue.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(date_input) = date_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Ok(blocked_date) = date_input.value().parse::<Date>() else {
                toast.error("Please select a date");
                return;
            };
            let reason = reason_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            let details = BlockDate::new(venue_id, blocked_date, &reason);

            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();
            let on_close = on_close.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                match get_api_client().block_date(&details).await {
                    Ok(response) => {
                        toast.success(response.message);
                        dispatch.reduce_mut(|s| s.data_changed());
                        on_close.emit(());
                    }
                    Err(e) => toast.api_error(&e, "Failed to block date"),
                }
                is_loading.set(false);
            });
        })
    };

    let counts = availability.render("availability", |availability, _, _| {
        html! {
            <div class="grid grid-cols-2 gap-4">
                <div class="p-3 rounded-md bg-red-50 text-center">
                    <p class="text-2xl font-semibold text-red-700">
                        {availability.booked_dates.len()}
                    </p>
                    <p class="text-xs text-red-600">{"Booked dates"}</p>
                </div>
                <div class="p-3 rounded-md bg-neutral-100 text-center">
                    <p class="text-2xl font-semibold text-neutral-700">
                        {availability.blocked_dates.len()}
                    </p>
                    <p class="text-xs text-neutral-600">{"Blocked dates"}</p>
                </div>
            </div>
        }
    });

    html! {
        <Modal
            title={format!("Manage Dates: {}", props.venue.name)}
            on_close={props.on_close.clone()}
        >
            <div class="space-y-4">
                {counts}
                <form onsubmit={on_submit} class="space-y-3">
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 mb-1">
                            {"Block a date"}
                        </label>
                        <input
                            ref={date_ref}
                            type="date"
                            disabled={*is_loading}
                            class="w-full px-3 py-2 text-sm border border-neutral-300 rounded-md"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 mb-1">
                            {"Reason (optional)"}
                        </label>
                        <input
                            ref={reason_ref}
                            type="text"
                            placeholder={DEFAULT_BLOCK_REASON}
                            disabled={*is_loading}
                            class="w-full px-3 py-2 text-sm border border-neutral-300 rounded-md"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full px-4 py-2 text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 rounded-md disabled:opacity-50"
                    >
                        {if *is_loading { "Blocking..." } else { "Block Date" }}
                    </button>
                </form>
            </div>
        </Modal>
    }
}
