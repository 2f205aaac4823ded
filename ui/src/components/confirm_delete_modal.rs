use payloads::Venue;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::Modal;
use crate::contexts::toast::use_toast;
use crate::{State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub venue: Venue,
    pub on_close: Callback<()>,
}

/// Asks before deleting a venue. Deleting also removes its bookings and
/// blocked dates.
#[function_component]
pub fn ConfirmDeleteModal(props: &Props) -> Html {
    let toast = use_toast();
    let (_, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);

    let on_confirm = {
        let is_loading = is_loading.clone();
        let on_close = props.on_close.clone();
        let venue_id = props.venue.id;
        Callback::from(move |_: MouseEvent| {
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();
            let on_close = on_close.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                match get_api_client().delete_venue(&venue_id).await {
                    Ok(()) => {
                        toast.success("Venue deleted successfully");
                        dispatch.reduce_mut(|s| s.data_changed());
                        on_close.emit(());
                    }
                    Err(e) => {
                        toast.api_error(&e, "Failed to delete venue");
                        is_loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <Modal title="Delete Venue" on_close={props.on_close.clone()}>
            <div class="space-y-4">
                <p class="text-sm text-neutral-600">
                    {"Delete "}
                    <span class="font-semibold text-neutral-900">{&props.venue.name}</span>
                    {"? Its bookings and blocked dates are removed too. This "}
                    <span class="font-semibold text-red-600">{"cannot be undone"}</span>
                    {"."}
                </p>
                <div class="flex justify-end gap-3">
                    <button
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        disabled={*is_loading}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 bg-white border border-neutral-300 rounded-md hover:bg-neutral-50"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        onclick={on_confirm}
                        disabled={*is_loading}
                        class="px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-md disabled:opacity-50"
                    >
                        {if *is_loading { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
