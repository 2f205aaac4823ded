use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-4xl font-bold text-neutral-900">{"404"}</h1>
            <p class="text-neutral-600">{"Page not found"}</p>
            <Link<Route> to={Route::Catalog} classes="mt-4 inline-block text-sm underline">
                {"Back to venues"}
            </Link<Route>>
        </div>
    }
}
