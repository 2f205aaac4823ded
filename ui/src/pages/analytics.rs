use payloads::dashboard::{month_over_month, shares};
use payloads::responses::{DashboardSummary, TopPerformer};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::components::{DonutChart, DonutSlice, LineChart, StatCard, Trend};
use crate::hooks::use_dashboard;
use crate::utils::format;

const BUCKET_COLORS: [&str; 3] = ["#a3a3a3", "#525252", "#171717"];

#[function_component]
pub fn AnalyticsPage() -> Html {
    let dashboard = use_dashboard();

    dashboard.render("analytics", |summary, _, _| {
        html! { <Summary summary={summary.clone()} /> }
    })
}

#[derive(Properties, PartialEq)]
struct SummaryProps {
    summary: DashboardSummary,
}

fn performer(top: &Option<TopPerformer>) -> (String, Option<AttrValue>) {
    match top {
        Some(top) => (
            top.name.clone(),
            Some(format!("{} bookings", top.bookings).into()),
        ),
        None => ("-".to_string(), None),
    }
}

#[function_component]
fn Summary(props: &SummaryProps) -> Html {
    let summary = &props.summary;
    let trends = month_over_month(&summary.monthly);
    let (top_venue, top_venue_detail) = performer(&summary.top_venue);
    let (top_user, top_user_detail) = performer(&summary.top_user);
    let occupancy = summary
        .occupancy_rate
        .map(|rate| format!("{rate:.1}%"))
        .unwrap_or_else(|| "-".to_string());

    let labels = summary
        .monthly
        .iter()
        .map(|m| format::month_label(m.month))
        .collect::<Vec<_>>();
    let revenue = summary
        .monthly
        .iter()
        .map(|m| m.revenue.to_f64().unwrap_or_default())
        .collect::<Vec<_>>();

    let bucket_revenue = summary
        .revenue_by_capacity
        .iter()
        .map(|b| b.revenue)
        .collect::<Vec<Decimal>>();
    let bucket_shares = shares(&bucket_revenue);
    let slices = summary
        .revenue_by_capacity
        .iter()
        .zip(BUCKET_COLORS)
        .map(|(b, color)| DonutSlice {
            label: b.bucket.label().to_string(),
            value: b.revenue.to_f64().unwrap_or_default(),
            color,
        })
        .collect::<Vec<_>>();

    html! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <StatCard title="Total Venues" value={summary.total_venues.to_string()} />
                <StatCard
                    title="Total Bookings"
                    value={summary.total_bookings.to_string()}
                    trend={Trend::percent(trends.bookings_pct)}
                />
                <StatCard
                    title="Total Revenue"
                    value={format::money(summary.total_revenue)}
                    trend={Trend::money(trends.revenue_delta)}
                />
                <StatCard title="Occupancy (next 30 days)" value={occupancy} />
                <StatCard title="Top Venue" value={top_venue} detail={top_venue_detail} />
                <StatCard title="Top Customer" value={top_user} detail={top_user_detail} />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg border border-neutral-200 shadow-sm p-6">
                    <h3 class="text-sm font-medium text-neutral-700 mb-4">
                        {"Monthly Revenue"}
                    </h3>
                    <LineChart labels={labels} values={revenue} />
                </div>
                <div class="bg-white rounded-lg border border-neutral-200 shadow-sm p-6">
                    <h3 class="text-sm font-medium text-neutral-700 mb-4">
                        {"Revenue by Venue Size"}
                    </h3>
                    <div class="flex items-center gap-6">
                        <DonutChart slices={slices} />
                        <ul class="space-y-2 text-sm">
                            {for summary.revenue_by_capacity.iter()
                                .zip(bucket_shares)
                                .zip(BUCKET_COLORS)
                                .map(|((b, share), color)| html! {
                                    <li class="flex items-center gap-2">
                                        <span
                                            class="inline-block w-3 h-3 rounded-sm"
                                            style={format!("background-color: {color}")}
                                        />
                                        <span>{b.bucket.label()}</span>
                                        <span class="text-neutral-500">
                                            {format!("{} ({share}%)", format::money(b.revenue))}
                                        </span>
                                    </li>
                                })}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
