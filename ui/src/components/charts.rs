//! Inline SVG charts for the analytics view.

use yew::prelude::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 200.0;
const PADDING: f64 = 24.0;

const DONUT_RADIUS: f64 = 60.0;
const DONUT_STROKE: f64 = 24.0;

/// Screen coordinates for a series spread evenly across the chart width and
/// scaled so the largest value touches the top padding. An all-zero series
/// sits on the baseline.
pub fn line_points(
    values: &[f64],
    width: f64,
    height: f64,
    padding: f64,
) -> Vec<(f64, f64)> {
    let max = values.iter().copied().fold(0.0, f64::max);
    let plot_width = width - 2.0 * padding;
    let plot_height = height - 2.0 * padding;
    let step = if values.len() > 1 {
        plot_width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = padding + step * i as f64;
            let scaled = if max > 0.0 { value / max } else { 0.0 };
            let y = height - padding - scaled * plot_height;
            (x, y)
        })
        .collect()
}

/// Dash length and offset for each slice of a donut drawn with stroked
/// circles. Slices are laid out clockwise in input order.
pub fn donut_dashes(values: &[f64], circumference: f64) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    let mut offset = 0.0;
    values
        .iter()
        .map(|value| {
            let length = if total > 0.0 {
                value / total * circumference
            } else {
                0.0
            };
            let dash = (length, offset);
            offset += length;
            dash
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[prop_or_else(|| AttrValue::from("#404040"))]
    pub color: AttrValue,
}

#[function_component]
pub fn LineChart(props: &LineChartProps) -> Html {
    let points = line_points(&props.values, WIDTH, HEIGHT, PADDING);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let baseline = HEIGHT - PADDING;

    html! {
        <svg
            viewBox={format!("0 0 {WIDTH} {}", HEIGHT + PADDING)}
            class="w-full h-auto"
            role="img"
        >
            <line
                x1={PADDING.to_string()}
                y1={baseline.to_string()}
                x2={(WIDTH - PADDING).to_string()}
                y2={baseline.to_string()}
                stroke="#e5e5e5"
            />
            <polyline
                points={polyline}
                fill="none"
                stroke={props.color.clone()}
                stroke-width="2"
            />
            {for points.iter().zip(&props.labels).map(|((x, y), label)| html! {
                <g>
                    <circle
                        cx={x.to_string()}
                        cy={y.to_string()}
                        r="3"
                        fill={props.color.clone()}
                    />
                    <text
                        x={x.to_string()}
                        y={(HEIGHT + PADDING / 2.0).to_string()}
                        text-anchor="middle"
                        font-size="11"
                        fill="#737373"
                    >
                        {label}
                    </text>
                </g>
            })}
        </svg>
    }
}

#[derive(Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    pub slices: Vec<DonutSlice>,
}

#[function_component]
pub fn DonutChart(props: &DonutChartProps) -> Html {
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let values: Vec<f64> = props.slices.iter().map(|s| s.value).collect();
    let dashes = donut_dashes(&values, circumference);
    let size = 2.0 * (DONUT_RADIUS + DONUT_STROKE);
    let center = size / 2.0;

    html! {
        <svg viewBox={format!("0 0 {size} {size}")} class="w-40 h-40" role="img">
            <circle
                cx={center.to_string()}
                cy={center.to_string()}
                r={DONUT_RADIUS.to_string()}
                fill="none"
                stroke="#f5f5f5"
                stroke-width={DONUT_STROKE.to_string()}
            />
            {for props.slices.iter().zip(dashes).map(|(slice, (length, offset))| html! {
                <circle
                    cx={center.to_string()}
                    cy={center.to_string()}
                    r={DONUT_RADIUS.to_string()}
                    fill="none"
                    stroke={slice.color}
                    stroke-width={DONUT_STROKE.to_string()}
                    stroke-dasharray={format!("{length:.2} {:.2}", circumference - length)}
                    stroke-dashoffset={format!("{:.2}", -offset)}
                    transform={format!("rotate(-90 {center} {center})")}
                >
                    <title>{&slice.label}</title>
                </circle>
            })}
        </svg>
    }
}
