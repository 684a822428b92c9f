//! Plain-SVG charts fed by `{label, value}` tuples. No charting library;
//! the dashboards only need static bars, a trend line, and a donut.

use eatwise_core::DataPoint;
use yew::prelude::*;

const VIEW_W: f64 = 320.0;
const VIEW_H: f64 = 160.0;
const PALETTE: [&str; 5] = ["#16a34a", "#f59e0b", "#3b82f6", "#ef4444", "#8b5cf6"];

fn max_value(data: &[DataPoint]) -> f64 {
    data.iter().map(|p| p.value).fold(1.0_f64, f64::max)
}

#[derive(Properties, PartialEq, Clone)]
pub struct ChartProps {
    pub data: Vec<DataPoint>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &ChartProps) -> Html {
    let max = max_value(&props.data);
    let n = props.data.len().max(1);
    let slot = VIEW_W / n as f64;
    let bar_w = slot * 0.6;
    html! {
        <svg
            viewBox={format!("0 0 {VIEW_W} {}", VIEW_H + 20.0)}
            class={classes!("w-full", props.class.clone())}
            role="img"
            data-testid="bar-chart"
        >
            { for props.data.iter().enumerate().map(|(i, point)| {
                let h = (point.value / max) * (VIEW_H - 10.0);
                let x = i as f64 * slot + (slot - bar_w) / 2.0;
                let y = VIEW_H - h;
                html! {
                    <g>
                        <rect x={x.to_string()} y={y.to_string()}
                              width={bar_w.to_string()} height={h.to_string()}
                              rx="3" fill={PALETTE[0]} opacity="0.85" />
                        <text x={(x + bar_w / 2.0).to_string()} y={(VIEW_H + 14.0).to_string()}
                              text-anchor="middle" font-size="10" fill="currentColor">
                            { point.label.clone() }
                        </text>
                    </g>
                }
            }) }
        </svg>
    }
}

#[function_component(LineChart)]
pub fn line_chart(props: &ChartProps) -> Html {
    let max = max_value(&props.data);
    let n = props.data.len().max(2);
    let step = VIEW_W / (n - 1) as f64;
    let points: String = props
        .data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * step;
            let y = VIEW_H - (p.value / max) * (VIEW_H - 10.0);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    html! {
        <svg
            viewBox={format!("0 0 {VIEW_W} {}", VIEW_H + 20.0)}
            class={classes!("w-full", props.class.clone())}
            role="img"
            data-testid="line-chart"
        >
            <polyline points={points} fill="none" stroke={PALETTE[2]} stroke-width="2.5" />
            { for props.data.iter().enumerate().map(|(i, point)| {
                let x = i as f64 * step;
                html! {
                    <text x={x.to_string()} y={(VIEW_H + 14.0).to_string()}
                          text-anchor="middle" font-size="10" fill="currentColor">
                        { point.label.clone() }
                    </text>
                }
            }) }
        </svg>
    }
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &ChartProps) -> Html {
    let total: f64 = props.data.iter().map(|p| p.value).sum::<f64>().max(1.0);
    let radius = 50.0_f64;
    let circumference = std::f64::consts::TAU * radius;
    let mut offset = 0.0_f64;
    let segments: Vec<Html> = props
        .data
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let share = point.value / total;
            let dash = share * circumference;
            let segment = html! {
                <circle
                    cx="80" cy="80" r={radius.to_string()}
                    fill="none"
                    stroke={PALETTE[i % PALETTE.len()]}
                    stroke-width="24"
                    stroke-dasharray={format!("{dash:.2} {:.2}", circumference - dash)}
                    stroke-dashoffset={format!("{:.2}", -offset)}
                />
            };
            offset += dash;
            segment
        })
        .collect();
    html! {
        <div class={classes!("flex", "items-center", "gap-4", props.class.clone())} data-testid="donut-chart">
            <svg viewBox="0 0 160 160" class="w-32 h-32" role="img">
                { for segments.into_iter() }
            </svg>
            <ul class="text-xs space-y-1">
                { for props.data.iter().enumerate().map(|(i, point)| html! {
                    <li class="flex items-center gap-2">
                        <span class="inline-block w-2 h-2 rounded-full" style={format!("background:{}", PALETTE[i % PALETTE.len()])} />
                        { format!("{} — {:.0}%", point.label, point.value / total * 100.0) }
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{BarChart, ChartProps, DonutChart, LineChart};
    use eatwise_core::DataPoint;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn sample() -> Vec<DataPoint> {
        vec![
            DataPoint::new("Mon", 40.0),
            DataPoint::new("Tue", 60.0),
            DataPoint::new("Wed", 20.0),
        ]
    }

    #[test]
    fn bar_chart_renders_one_rect_per_point() {
        let props = ChartProps {
            data: sample(),
            class: Default::default(),
        };
        let html = block_on(LocalServerRenderer::<BarChart>::with_props(props).render());
        assert_eq!(html.matches("<rect").count(), 3);
        assert!(html.contains("Mon"));
    }

    #[test]
    fn line_chart_renders_polyline() {
        let props = ChartProps {
            data: sample(),
            class: Default::default(),
        };
        let html = block_on(LocalServerRenderer::<LineChart>::with_props(props).render());
        assert!(html.contains("<polyline"));
    }

    #[test]
    fn donut_chart_lists_legend_entries() {
        let props = ChartProps {
            data: sample(),
            class: Default::default(),
        };
        let html = block_on(LocalServerRenderer::<DonutChart>::with_props(props).render());
        assert_eq!(html.matches("<circle").count(), 3);
        assert!(html.contains("Tue"));
    }
}
