//! Named chart instances and their SVG geometry.

pub mod view;

pub use view::{use_charts, Chart, ChartsContext};

use crate::shared::format::format_k;
use contracts::shared::charts::{demo_charts, ChartKind, ChartSpec};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unknown chart: {0}")]
    UnknownChart(String),
    #[error("chart {0} has no dataset")]
    NoDataset(String),
}

/// Live chart instances by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartRegistry {
    charts: BTreeMap<String, ChartSpec>,
}

impl ChartRegistry {
    pub fn with_demo() -> Self {
        let mut registry = Self::default();
        registry.reset_to_demo();
        registry
    }

    /// Drop every instance and register the demo charts again.
    pub fn reset_to_demo(&mut self) {
        self.destroy_all();
        for (name, spec) in demo_charts() {
            self.register(name, spec);
        }
    }

    pub fn register(&mut self, name: &str, spec: ChartSpec) {
        self.charts.insert(name.to_string(), spec);
    }

    pub fn get(&self, name: &str) -> Result<&ChartSpec, ChartError> {
        self.charts
            .get(name)
            .ok_or_else(|| ChartError::UnknownChart(name.to_string()))
    }

    /// Replace the values of the first dataset and, optionally, the labels.
    pub fn update(
        &mut self,
        name: &str,
        data: Vec<f64>,
        labels: Option<Vec<String>>,
    ) -> Result<(), ChartError> {
        let spec = self
            .charts
            .get_mut(name)
            .ok_or_else(|| ChartError::UnknownChart(name.to_string()))?;
        let dataset = spec
            .datasets
            .first_mut()
            .ok_or_else(|| ChartError::NoDataset(name.to_string()))?;
        dataset.data = data;
        if let Some(labels) = labels {
            spec.labels = labels;
        }
        Ok(())
    }

    pub fn destroy(&mut self, name: &str) -> Result<ChartSpec, ChartError> {
        self.charts
            .remove(name)
            .ok_or_else(|| ChartError::UnknownChart(name.to_string()))
    }

    pub fn destroy_all(&mut self) {
        self.charts.clear();
    }

    pub fn names(&self) -> Vec<&str> {
        self.charts.keys().map(String::as_str).collect()
    }
}

// ============================================================================
// Geometry
// ============================================================================

pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;

const PLOT_BOTTOM: f64 = VIEW_HEIGHT - PAD_BOTTOM;
const PLOT_HEIGHT: f64 = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
const PLOT_WIDTH: f64 = VIEW_WIDTH - PAD_LEFT - PAD_RIGHT;

/// Round a raw tick step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

/// Value axis starting at zero with about four steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub step: f64,
    pub top: f64,
}

impl ValueAxis {
    pub fn for_max(max: f64) -> Self {
        let step = nice_step(max / 4.0);
        let steps = (max / step).ceil().max(1.0);
        Self {
            step,
            top: steps * step,
        }
    }

    pub fn y_of(&self, value: f64) -> f64 {
        PLOT_BOTTOM - value / self.top * PLOT_HEIGHT
    }

    pub fn ticks(&self) -> Vec<Tick> {
        let count = (self.top / self.step).round() as usize;
        (0..=count)
            .map(|i| {
                let value = i as f64 * self.step;
                Tick {
                    y: self.y_of(value),
                    label: format_k(value),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub x: f64,
    pub text: String,
}

fn group_width(spec: &ChartSpec) -> f64 {
    PLOT_WIDTH / spec.labels.len().max(1) as f64
}

pub fn category_labels(spec: &ChartSpec) -> Vec<CategoryLabel> {
    let group = group_width(spec);
    spec.labels
        .iter()
        .enumerate()
        .map(|(i, text)| CategoryLabel {
            x: PAD_LEFT + group * (i as f64 + 0.5),
            text: text.clone(),
        })
        .collect()
}

/// Grouped bars: one group per label, one bar per dataset.
pub fn bar_rects(spec: &ChartSpec, axis: &ValueAxis) -> Vec<BarRect> {
    let group = group_width(spec);
    let bar = group * 0.7 / spec.datasets.len().max(1) as f64;
    let mut rects = Vec::new();
    for (d, dataset) in spec.datasets.iter().enumerate() {
        for (i, value) in dataset.data.iter().enumerate() {
            let y = axis.y_of(*value);
            rects.push(BarRect {
                x: PAD_LEFT + group * i as f64 + group * 0.15 + bar * d as f64,
                y,
                width: bar,
                height: PLOT_BOTTOM - y,
                color: dataset.color_at(i).to_string(),
            });
        }
    }
    rects
}

/// SVG `points` attribute of each dataset's polyline.
pub fn line_points(spec: &ChartSpec, axis: &ValueAxis) -> Vec<(String, String)> {
    let group = group_width(spec);
    spec.datasets
        .iter()
        .map(|dataset| {
            let points = dataset
                .data
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:.1},{:.1}", PAD_LEFT + group * (i as f64 + 0.5), axis.y_of(*v)))
                .collect::<Vec<_>>()
                .join(" ");
            (points, dataset.color_at(0).to_string())
        })
        .collect()
}

pub const DOUGHNUT_SIZE: f64 = 300.0;
const DOUGHNUT_OUTER: f64 = 130.0;
const DOUGHNUT_INNER: f64 = 78.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub path: String,
    pub color: String,
    pub fraction: f64,
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    let c = DOUGHNUT_SIZE / 2.0;
    (c + radius * angle.cos(), c + radius * angle.sin())
}

/// Ring segments of the first dataset, clockwise from twelve o'clock.
pub fn doughnut_segments(spec: &ChartSpec) -> Vec<ArcSegment> {
    let Some(dataset) = spec.datasets.first() else {
        return Vec::new();
    };
    let total = dataset.total();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -std::f64::consts::FRAC_PI_2;
    dataset
        .data
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let fraction = value / total;
            // A full circle collapses to a point; stop just short of it.
            let sweep = (fraction * std::f64::consts::TAU).min(std::f64::consts::TAU - 1e-4);
            let end = start + sweep;
            let large = if sweep > std::f64::consts::PI { 1 } else { 0 };
            let (ox0, oy0) = polar(DOUGHNUT_OUTER, start);
            let (ox1, oy1) = polar(DOUGHNUT_OUTER, end);
            let (ix1, iy1) = polar(DOUGHNUT_INNER, end);
            let (ix0, iy0) = polar(DOUGHNUT_INNER, start);
            let path = format!(
                "M {ox0:.2} {oy0:.2} A {r} {r} 0 {large} 1 {ox1:.2} {oy1:.2} L {ix1:.2} {iy1:.2} A {ri} {ri} 0 {large} 0 {ix0:.2} {iy0:.2} Z",
                r = DOUGHNUT_OUTER,
                ri = DOUGHNUT_INNER,
            );
            start = end;
            ArcSegment {
                path,
                color: dataset.color_at(i).to_string(),
                fraction,
            }
        })
        .collect()
}

pub fn is_cartesian(kind: ChartKind) -> bool {
    !matches!(kind, ChartKind::Doughnut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::charts::{
        projects_chart, revenue_chart, EVOLUTION_CHART, PROFITABILITY_CHART, PROJECTS_CHART,
        REVENUE_CHART,
    };

    #[test]
    fn test_demo_registry_names() {
        let registry = ChartRegistry::with_demo();
        assert_eq!(
            registry.names(),
            vec![EVOLUTION_CHART, PROFITABILITY_CHART, PROJECTS_CHART, REVENUE_CHART]
        );
    }

    #[test]
    fn test_update_replaces_first_dataset() {
        let mut registry = ChartRegistry::with_demo();
        registry
            .update(REVENUE_CHART, vec![1.0, 2.0], Some(vec!["A".into(), "B".into()]))
            .unwrap();
        let spec = registry.get(REVENUE_CHART).unwrap();
        assert_eq!(spec.datasets[0].data, vec![1.0, 2.0]);
        assert_eq!(spec.labels, vec!["A", "B"]);

        registry.update(PROJECTS_CHART, vec![1.0, 1.0, 1.0], None).unwrap();
        assert_eq!(registry.get(PROJECTS_CHART).unwrap().labels.len(), 3);
    }

    #[test]
    fn test_unknown_chart() {
        let mut registry = ChartRegistry::with_demo();
        let err = registry.update("sales", vec![], None).unwrap_err();
        assert_eq!(err, ChartError::UnknownChart("sales".into()));
        assert!(registry.get("sales").is_err());
    }

    #[test]
    fn test_destroy() {
        let mut registry = ChartRegistry::with_demo();
        assert!(registry.destroy(REVENUE_CHART).is_ok());
        assert_eq!(
            registry.destroy(REVENUE_CHART),
            Err(ChartError::UnknownChart(REVENUE_CHART.into()))
        );
        registry.destroy_all();
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_reset_to_demo() {
        let mut registry = ChartRegistry::with_demo();
        registry.update(EVOLUTION_CHART, vec![1.0], None).unwrap();
        registry.destroy(PROJECTS_CHART).unwrap();
        registry.reset_to_demo();
        assert_eq!(registry, ChartRegistry::with_demo());
    }

    #[test]
    fn test_value_axis_ticks() {
        let axis = ValueAxis::for_max(28000.0);
        assert_eq!(axis.step, 10000.0);
        assert_eq!(axis.top, 30000.0);
        let labels: Vec<String> = axis.ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["$0k", "$10k", "$20k", "$30k"]);

        let axis = ValueAxis::for_max(0.0);
        assert!(axis.top > 0.0);
    }

    #[test]
    fn test_bar_geometry() {
        let spec = revenue_chart();
        let axis = ValueAxis::for_max(spec.max_value());
        let rects = bar_rects(&spec, &axis);
        assert_eq!(rects.len(), 5);
        let tallest = rects
            .iter()
            .max_by(|a, b| a.height.total_cmp(&b.height))
            .unwrap();
        assert_eq!(tallest.color, contracts::shared::charts::colors::SECONDARY);
        assert!(rects.iter().all(|r| r.y + r.height <= VIEW_HEIGHT));
    }

    #[test]
    fn test_doughnut_segments() {
        let segments = doughnut_segments(&projects_chart());
        assert_eq!(segments.len(), 3);
        let total: f64 = segments.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(segments.iter().all(|s| s.path.starts_with("M ")));
    }
}
