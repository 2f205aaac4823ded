use rust_decimal::Decimal;
use yew::prelude::*;

use crate::utils::format;

/// Month-over-month change shown under a card's value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Trend {
    #[default]
    Hidden,
    NoPriorData,
    Change {
        text: String,
        direction: Direction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    fn of(change: Decimal) -> Self {
        if change.is_zero() {
            Self::Flat
        } else if change.is_sign_positive() {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl Trend {
    pub fn percent(change: Option<Decimal>) -> Self {
        match change {
            None => Self::NoPriorData,
            Some(pct) => Self::Change {
                text: format::signed_percent(pct),
                direction: Direction::of(pct),
            },
        }
    }

    pub fn money(change: Option<Decimal>) -> Self {
        match change {
            None => Self::NoPriorData,
            Some(delta) => {
                let sign = if delta.is_sign_positive() { "+" } else { "" };
                let amount = format::money(delta);
                Self::Change {
                    text: format!("{sign}{amount}"),
                    direction: Direction::of(delta),
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    #[prop_or_default]
    pub trend: Trend,
}

#[function_component]
pub fn StatCard(props: &Props) -> Html {
    let trend = match &props.trend {
        Trend::Hidden => html! {},
        Trend::NoPriorData => html! {
            <p class="mt-2 text-xs text-neutral-400">{"no data for last month"}</p>
        },
        Trend::Change { text, direction } => {
            let (arrow, color) = match direction {
                Direction::Up => ("↑", "text-green-600"),
                Direction::Down => ("↓", "text-red-600"),
                Direction::Flat => ("→", "text-neutral-500"),
            };
            html! {
                <p class={classes!("mt-2", "text-xs", color)}>
                    {format!("{arrow} {text} vs last month")}
                </p>
            }
        }
    };

    html! {
        <div class="bg-white rounded-lg border border-neutral-200 shadow-sm p-5">
            <p class="text-sm text-neutral-500">{&props.title}</p>
            <p class="mt-1 text-2xl font-semibold text-neutral-900">{&props.value}</p>
            if let Some(detail) = &props.detail {
                <p class="text-sm text-neutral-600">{detail}</p>
            }
            {trend}
        </div>
    }
}
