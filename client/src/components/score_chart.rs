//! Line chart of recent attempt scores.
//!
//! DESIGN
//! ======
//! Plain inline SVG. The y axis always starts at zero and ends one point
//! above the best score so a perfect run does not touch the top edge.

#[cfg(test)]
#[path = "score_chart_test.rs"]
mod score_chart_test;

use leptos::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 120.0;
const PADDING: f64 = 8.0;

/// One plotted attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub score: f64,
}

/// Top of the y axis.
pub fn y_max(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.score).fold(0.0, f64::max) + 1.0
}

/// SVG coordinates for `points`, left to right in order.
#[allow(clippy::cast_precision_loss)]
pub fn plot(points: &[ChartPoint], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = y_max(points);
    let inner_w = (width - PADDING * 2.0).max(1.0);
    let inner_h = (height - PADDING * 2.0).max(1.0);
    let step = if points.len() > 1 { inner_w / (points.len() - 1) as f64 } else { 0.0 };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() == 1 { width / 2.0 } else { PADDING + step * i as f64 };
            let y = PADDING + inner_h * (1.0 - p.score.max(0.0) / max);
            (x, y)
        })
        .collect()
}

fn polyline(coords: &[(f64, f64)]) -> String {
    coords.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect::<Vec<_>>().join(" ")
}

#[component]
pub fn ScoreChart(points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");

    view! {
        <div class="score-chart">
            <Show
                when=move || points.with(|p| !p.is_empty())
                fallback=|| view! { <p class="page-status page-status--muted">"No attempts yet."</p> }
            >
                <svg class="score-chart__svg" viewBox=view_box.clone() role="img" aria-label="Score history">
                    <polyline
                        class="score-chart__line"
                        fill="none"
                        points=move || points.with(|p| polyline(&plot(p, WIDTH, HEIGHT)))
                    />
                    {move || {
                        points
                            .with(|p| {
                                plot(p, WIDTH, HEIGHT)
                                    .into_iter()
                                    .zip(p.iter())
                                    .map(|((x, y), point)| {
                                        view! {
                                            <circle class="score-chart__dot" cx=format!("{x:.1}") cy=format!("{y:.1}") r="3" data-label=point.label.clone()/>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </svg>
                <p class="score-chart__axis">{move || format!("max {}", points.with(|p| y_max(p)))}</p>
            </Show>
        </div>
    }
}
