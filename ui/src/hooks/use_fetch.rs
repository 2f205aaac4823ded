use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::{FetchState, RequestSequence};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render the fetched data, or a loading or error notice when there is
    /// nothing to show yet.
    ///
    /// Data from an earlier fetch stays on screen while a refetch runs; the
    /// render function receives the refetch error, if any, alongside it.
    ///
    /// ```rust,ignore
    /// venues_hook.render("venues", |venues, _, _| html! {
    ///     <VenueGrid venues={venues.clone()} />
    /// })
    /// ```
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match (self.data.as_ref(), &self.error) {
            (Some(data), error) => {
                render_fn(data, self.is_loading, error.as_ref())
            }
            (None, Some(error)) => {
                let refetch = self.refetch.clone();
                html! {
                    <div class="p-4 rounded-md bg-red-50 border border-red-200 flex items-center justify-between gap-4">
                        <p class="text-sm text-red-700">
                            {format!("Error loading {context}: {error}")}
                        </p>
                        <button
                            type="button"
                            onclick={refetch.reform(|_: MouseEvent| ())}
                            disabled={self.is_loading}
                            class="px-3 py-1 text-sm font-medium text-red-700 border border-red-300 rounded-md hover:bg-red-100 disabled:opacity-50"
                        >
                            {"Retry"}
                        </button>
                    </div>
                }
            }
            (None, None) => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
        }
    }
}

/// Fetch on mount and whenever `deps` change, with a manual refetch.
///
/// Only the most recently started fetch may write its result, so a slow
/// response for old deps never overwrites a newer one.
///
/// The fetch function captures what it needs from its closure; `deps` only
/// drives when it runs. Views pass the global data revision as part of their
/// deps so every mutation anywhere triggers a reload.
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_venue_availability(venue_id: VenueId) -> FetchHookReturn<Availability> {
///     use_fetch(venue_id, move || async move {
///         get_api_client()
///             .get_availability(&venue_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let sequence = use_mut_ref(RequestSequence::default);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();
            let sequence = sequence.clone();
            let request = sequence.borrow_mut().begin();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = fetch_fn().await;
                if !sequence.borrow().is_latest(request) {
                    tracing::debug!(request, "dropping stale fetch result");
                    return;
                }

                match result {
                    Ok(result) => data.set(FetchState::Fetched(result)),
                    Err(e) => {
                        tracing::warn!("fetch failed: {e}");
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| refetch.emit(()));
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
