use jiff::civil::Date;
use payloads::calendar::{CalendarDay, DayStatus};
use yew::prelude::*;

use crate::utils::format;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub days: Vec<CalendarDay>,
    pub selected: Option<Date>,
    pub on_select: Callback<CalendarDay>,
    #[prop_or_default]
    pub disabled: bool,
}

/// The six-week availability grid. Columns are weekdays, so the first row is
/// padded up to today's weekday.
#[function_component]
pub fn AvailabilityCalendar(props: &Props) -> Html {
    let Some(first) = props.days.first() else {
        return html! {};
    };
    let padding = first.date.weekday().to_sunday_zero_offset();

    html! {
        <div>
            <div class="grid grid-cols-7 gap-1 text-center text-xs text-neutral-500 mb-1">
                {for WEEKDAYS.iter().map(|day| html! { <div>{*day}</div> })}
            </div>
            <div class="grid grid-cols-7 gap-1">
                {for (0..padding).map(|_| html! { <div></div> })}
                {for props.days.iter().map(|day| {
                    let selected = props.selected == Some(day.date);
                    html! {
                        <DayCell
                            key={day.date.to_string()}
                            day={*day}
                            selected={selected}
                            disabled={props.disabled}
                            on_select={props.on_select.clone()}
                        />
                    }
                })}
            </div>
            <div class="flex space-x-4 mt-3 text-xs text-neutral-600">
                <Legend class="bg-green-100 border-green-300" label="Available" />
                <Legend class="bg-red-100 border-red-300" label="Booked" />
                <Legend class="bg-neutral-300 border-neutral-400" label="Blocked" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DayCellProps {
    day: CalendarDay,
    selected: bool,
    disabled: bool,
    on_select: Callback<CalendarDay>,
}

#[function_component]
fn DayCell(props: &DayCellProps) -> Html {
    let day = props.day;
    let colors = match (day.status, props.selected) {
        (DayStatus::Available, true) => {
            "bg-neutral-900 text-white border-neutral-900"
        }
        (DayStatus::Available, false) => {
            "bg-green-100 border-green-300 hover:bg-green-200 cursor-pointer"
        }
        (DayStatus::Booked, _) => {
            "bg-red-100 border-red-300 text-red-700 cursor-not-allowed"
        }
        (DayStatus::Blocked, _) => {
            "bg-neutral-300 border-neutral-400 text-neutral-600 cursor-not-allowed"
        }
    };
    let onclick = props.on_select.reform(move |_: MouseEvent| day);
    let title = format!("{} ({})", format::short_date(day.date), day.status);

    html! {
        <button
            type="button"
            {onclick}
            {title}
            disabled={props.disabled}
            class={format!("h-10 rounded border text-sm {colors}")}
        >
            {day.day_of_month()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct LegendProps {
    class: AttrValue,
    label: AttrValue,
}

#[function_component]
fn Legend(props: &LegendProps) -> Html {
    html! {
        <span class="flex items-center space-x-1">
            <span class={format!("inline-block w-3 h-3 rounded border {}", props.class)}></span>
            <span>{&props.label}</span>
        </span>
    }
}
