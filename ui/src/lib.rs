use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use state::State;

use components::{AppHeader, ToastContainer};
use contexts::toast::ToastProvider;
use pages::{AdminPage, AnalyticsPage, CatalogPage, NotFoundPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-neutral-50 text-neutral-900">
                    <AppHeader />
                    <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                    <ToastContainer />
                </div>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Catalog,
    #[at("/admin")]
    Admin,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const TABS: [Route; 3] = [Route::Catalog, Route::Admin, Route::Analytics];

    pub fn tab_label(&self) -> &'static str {
        match self {
            Route::Catalog => "Venues",
            Route::Admin => "Admin Panel",
            Route::Analytics => "Analytics",
            Route::NotFound => "",
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Catalog => html! { <CatalogPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
