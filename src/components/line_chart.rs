//! Static SVG line chart for the dashboard's transport dataset.

use leptos::prelude::*;

use crate::state::dashboard::{Series, TransportRow, polyline_points, series_max};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 250.0;

/// One polyline per [`Series`], with x labels and a legend.
#[allow(clippy::cast_precision_loss)]
#[component]
pub fn LineChart(rows: &'static [TransportRow]) -> impl IntoView {
    let max = series_max(rows);
    let step = if rows.len() > 1 { WIDTH / (rows.len() - 1) as f64 } else { 0.0 };

    let lines = Series::ALL
        .into_iter()
        .map(|series| {
            view! {
                <polyline
                    fill="none"
                    stroke=series.stroke()
                    stroke-width="2"
                    points=polyline_points(rows, series, WIDTH, HEIGHT, max)
                ></polyline>
            }
        })
        .collect_view();

    let labels = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            view! {
                <text x=format!("{:.1}", step * i as f64) y=format!("{:.1}", HEIGHT + 16.0) fill="#888" font-size="10" text-anchor="middle">
                    {r.name}
                </text>
            }
        })
        .collect_view();

    let legend = Series::ALL
        .into_iter()
        .map(|series| {
            view! {
                <span class="line-chart__legend-item" style=format!("color: {}", series.stroke())>
                    {series.label()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="line-chart">
            <svg
                class="line-chart__svg"
                viewBox=format!("-20 -10 {} {}", WIDTH + 40.0, HEIGHT + 40.0)
                preserveAspectRatio="none"
                width="100%"
                height="250"
            >
                <line x1="0" y1=HEIGHT.to_string() x2=WIDTH.to_string() y2=HEIGHT.to_string() stroke="#888"></line>
                <line x1="0" y1="0" x2="0" y2=HEIGHT.to_string() stroke="#888"></line>
                <text x="-4" y="4" fill="#888" font-size="10" text-anchor="end">{max}</text>
                {lines}
                {labels}
            </svg>
            <div class="line-chart__legend">{legend}</div>
        </div>
    }
}
