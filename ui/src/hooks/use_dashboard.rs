use payloads::responses::DashboardSummary;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

/// Aggregate statistics, used by both the header and the analytics view.
#[hook]
pub fn use_dashboard() -> FetchHookReturn<DashboardSummary> {
    let (state, _) = use_store::<State>();

    use_fetch(state.data_revision, || async {
        get_api_client()
            .dashboard_summary()
            .await
            .map_err(|e| e.to_string())
    })
}
