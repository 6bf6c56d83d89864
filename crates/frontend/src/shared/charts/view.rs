use super::{
    bar_rects, category_labels, doughnut_segments, is_cartesian, line_points, ChartError,
    ChartRegistry, ValueAxis, DOUGHNUT_SIZE, VIEW_HEIGHT, VIEW_WIDTH,
};
use contracts::shared::charts::{ChartKind, ChartSpec};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChartsContext {
    pub registry: RwSignal<ChartRegistry>,
}

impl ChartsContext {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(ChartRegistry::with_demo()),
        }
    }

    pub fn update(&self, name: &str, data: Vec<f64>, labels: Option<Vec<String>>) {
        let result = self
            .registry
            .try_update(|registry| registry.update(name, data, labels));
        if let Some(Err(e)) = result {
            log::warn!("chart update: {e}");
        }
    }

    pub fn reset(&self) {
        self.registry.update(|registry| registry.reset_to_demo());
    }

    pub fn get(&self, name: &str) -> Result<ChartSpec, ChartError> {
        self.registry.with(|registry| registry.get(name).cloned())
    }
}

impl Default for ChartsContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_charts() -> ChartsContext {
    use_context::<ChartsContext>().expect("ChartsContext not provided in context")
}

fn legend(spec: &ChartSpec) -> impl IntoView {
    // Doughnuts list their slices, other charts their datasets.
    let items: Vec<(String, String)> = match spec.kind {
        ChartKind::Doughnut => spec
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = spec
                    .datasets
                    .first()
                    .map(|d| d.color_at(i).to_string())
                    .unwrap_or_default();
                (label.clone(), color)
            })
            .collect(),
        _ => spec
            .datasets
            .iter()
            .map(|d| (d.label.clone(), d.color_at(0).to_string()))
            .collect(),
    };
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <span class="chart-legend-item">
                            <span class="chart-legend-swatch" style=format!("background:{color};")></span>
                            {label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn cartesian_svg(spec: &ChartSpec) -> AnyView {
    let axis = ValueAxis::for_max(spec.max_value());
    let ticks = axis.ticks();
    let labels = category_labels(spec);

    let plot = match spec.kind {
        ChartKind::Line => line_points(spec, &axis)
            .into_iter()
            .map(|(points, color)| {
                view! {
                    <polyline points=points fill="none" stroke=color stroke-width="3" stroke-linejoin="round" />
                }
            })
            .collect_view()
            .into_any(),
        _ => bar_rects(spec, &axis)
            .into_iter()
            .map(|r| {
                view! {
                    <rect x=r.x y=r.y width=r.width height=r.height rx="6" fill=r.color />
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <svg class="chart-svg" viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}") preserveAspectRatio="none">
            {ticks
                .into_iter()
                .map(|t| {
                    view! {
                        <g class="chart-tick">
                            <line x1="56" x2={VIEW_WIDTH - 12.0} y1=t.y y2=t.y />
                            <text x="48" y={t.y + 4.0} text-anchor="end">{t.label}</text>
                        </g>
                    }
                })
                .collect_view()}
            {plot}
            {labels
                .into_iter()
                .map(|l| {
                    view! {
                        <text class="chart-category" x=l.x y={VIEW_HEIGHT - 8.0} text-anchor="middle">{l.text}</text>
                    }
                })
                .collect_view()}
        </svg>
    }
    .into_any()
}

fn doughnut_svg(spec: &ChartSpec) -> AnyView {
    view! {
        <svg class="chart-svg chart-doughnut" viewBox=format!("0 0 {DOUGHNUT_SIZE} {DOUGHNUT_SIZE}")>
            {doughnut_segments(spec)
                .into_iter()
                .map(|s| view! { <path d=s.path fill=s.color /> })
                .collect_view()}
        </svg>
    }
    .into_any()
}

/// Inline SVG rendering of a registered chart.
#[component]
pub fn Chart(#[prop(into)] name: String) -> impl IntoView {
    let charts = use_charts();

    move || match charts.get(&name) {
        Ok(spec) => {
            let body = if is_cartesian(spec.kind) {
                cartesian_svg(&spec)
            } else {
                doughnut_svg(&spec)
            };
            let legend_view = spec.show_legend.then(|| legend(&spec));
            view! {
                <div class="chart-container">
                    {body}
                    {legend_view}
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::warn!("{e}");
            view! { <div class="chart-container chart-empty"></div> }.into_any()
        }
    }
}
