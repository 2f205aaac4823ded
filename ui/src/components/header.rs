use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_dashboard;

/// Title bar with headline statistics and the tab navigation.
#[function_component]
pub fn AppHeader() -> Html {
    let dashboard = use_dashboard();
    let active = use_route::<Route>();

    let (venues, bookings) = match dashboard.data.as_ref() {
        Some(summary) => (
            summary.total_venues.to_string(),
            summary.total_bookings.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };

    html! {
        <header class="bg-white border-b border-neutral-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-neutral-900">
                        {"Venue Booking Dashboard"}
                    </h1>
                    <div class="flex space-x-6 text-sm text-neutral-600">
                        <HeaderStat label="Venues" value={venues} />
                        <HeaderStat label="Bookings" value={bookings} />
                    </div>
                </div>
                <nav class="-mb-px flex space-x-8">
                    {for Route::TABS.iter().map(|tab| {
                        let classes = if active == Some(*tab) {
                            "border-neutral-700 text-neutral-900"
                        } else {
                            "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300"
                        };
                        html! {
                            <Link<Route>
                                to={*tab}
                                classes={classes!(format!(
                                    "py-2 px-1 border-b-2 font-medium text-sm {classes}"
                                ))}
                            >
                                {tab.tab_label()}
                            </Link<Route>>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderStatProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component]
fn HeaderStat(props: &HeaderStatProps) -> Html {
    html! {
        <span>
            <span class="font-semibold text-neutral-900">{&props.value}</span>
            {" "}{&props.label}
        </span>
    }
}
