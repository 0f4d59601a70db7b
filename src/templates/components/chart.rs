// templates/components/chart.rs
//
// Server-side bar chart: one bar per offense bucket, y axis from zero with
// whole-number ticks.

use crate::domain::CrimeChart;
use maud::{html, Markup};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 110.0;

/// Whole-number tick step giving at most ~6 ticks.
fn tick_step(max: usize) -> usize {
    max.div_ceil(6).max(1)
}

pub fn crime_bar_chart(chart: &CrimeChart) -> Markup {
    if chart.buckets.is_empty() {
        return html! {};
    }

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    let step = tick_step(chart.max_count());
    // Round the axis up to a whole tick so the tallest bar sits under a line.
    let axis_max = chart.max_count().div_ceil(step).max(1) * step;
    let scale = plot_h / axis_max as f64;

    let slot = plot_w / chart.buckets.len() as f64;
    let bar_w = slot * 0.8;

    let bars = chart
        .labels()
        .into_iter()
        .zip(chart.counts())
        .zip(chart.colors());

    html! {
        figure class="crime-chart" {
            svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                role="img"
                aria-label=(chart.title)
            {
                text x=(WIDTH / 2.0) y="18" text-anchor="middle" font-size="15" { (chart.title) }

                @for tick in (0..=axis_max).step_by(step) {
                    @let y = baseline - tick as f64 * scale;
                    line x1=(MARGIN_LEFT) x2=(WIDTH - MARGIN_RIGHT) y1=(y) y2=(y) stroke="#ddd" {}
                    text x=(MARGIN_LEFT - 6.0) y=(y + 4.0) text-anchor="end" font-size="11" { (tick) }
                }

                @for (i, ((label, count), color)) in bars.enumerate() {
                    @let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
                    @let h = count as f64 * scale;
                    rect
                        x=(x)
                        y=(baseline - h)
                        width=(bar_w)
                        height=(h)
                        fill=(color)
                        stroke=(color)
                        stroke-width="1"
                    {
                        title { (label) ": " (count) }
                    }
                    @let label_x = x + bar_w / 2.0;
                    text
                        x=(label_x)
                        y=(baseline + 12.0)
                        text-anchor="end"
                        font-size="10"
                        transform=(format!("rotate(-45 {label_x} {})", baseline + 12.0))
                    { (label) }
                }
            }
            figcaption { (chart.dataset_label) }
        }
    }
}
