//! Chart descriptions for the dashboard and reports sections.

use serde::{Deserialize, Serialize};

/// Dashboard palette.
pub mod colors {
    pub const PRIMARY: &str = "#6366f1";
    pub const SECONDARY: &str = "#8b5cf6";
    pub const SUCCESS: &str = "#10b981";
    pub const WARNING: &str = "#f59e0b";
    pub const DANGER: &str = "#ef4444";
    pub const INFO: &str = "#3b82f6";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One color for the whole series, or one per data point.
    pub colors: Vec<String>,
}

impl Dataset {
    pub fn new(label: &str, data: Vec<f64>, colors: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            data,
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Color of the point at `index`, cycling through the palette.
    pub fn color_at(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            colors::PRIMARY
        } else {
            &self.colors[index % self.colors.len()]
        }
    }

    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub show_legend: bool,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, labels: &[&str], datasets: Vec<Dataset>) -> Self {
        Self {
            kind,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            datasets,
            show_legend: false,
        }
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    /// Largest value across all datasets, `0.0` for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

// ============================================================================
// Demo charts
// ============================================================================

pub const REVENUE_CHART: &str = "revenue";
pub const PROJECTS_CHART: &str = "projects";
pub const PROFITABILITY_CHART: &str = "profitability";
pub const EVOLUTION_CHART: &str = "evolution";

const MONTHS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Revenue per project category (dashboard).
pub fn revenue_chart() -> ChartSpec {
    ChartSpec::new(
        ChartKind::Bar,
        &["E-commerce", "Apps", "Sistemas", "Diseño", "Landing"],
        vec![Dataset::new(
            "Ingresos",
            vec![18500.0, 22000.0, 15000.0, 8500.0, 4850.0],
            &[
                colors::PRIMARY,
                colors::SECONDARY,
                colors::INFO,
                colors::SUCCESS,
                colors::WARNING,
            ],
        )],
    )
}

/// Project status split (dashboard).
pub fn projects_chart() -> ChartSpec {
    ChartSpec::new(
        ChartKind::Doughnut,
        &["En Progreso", "Completados", "Pendientes"],
        vec![Dataset::new(
            "Proyectos",
            vec![8.0, 13.0, 3.0],
            &[colors::INFO, colors::SUCCESS, colors::WARNING],
        )],
    )
    .with_legend()
}

/// Monthly revenue vs. costs (reports).
pub fn profitability_chart() -> ChartSpec {
    ChartSpec::new(
        ChartKind::Bar,
        &MONTHS,
        vec![
            Dataset::new(
                "Ingresos",
                vec![
                    12000.0, 15000.0, 18000.0, 14000.0, 22000.0, 19000.0, 25000.0, 21000.0,
                    24000.0, 20000.0, 28000.0, 24500.0,
                ],
                &[colors::SUCCESS],
            ),
            Dataset::new(
                "Costos",
                vec![
                    5000.0, 6000.0, 7500.0, 6000.0, 9000.0, 8000.0, 10000.0, 9000.0, 10000.0,
                    8500.0, 11000.0, 9500.0,
                ],
                &[colors::DANGER],
            ),
        ],
    )
    .with_legend()
}

/// Accumulated balance (reports).
pub fn evolution_chart() -> ChartSpec {
    ChartSpec::new(
        ChartKind::Line,
        &MONTHS,
        vec![Dataset::new(
            "Saldo",
            vec![
                7000.0, 16000.0, 26500.0, 34500.0, 47500.0, 58500.0, 73500.0, 85500.0, 99500.0,
                111000.0, 128000.0, 143000.0,
            ],
            &[colors::PRIMARY],
        )],
    )
}

/// Every named demo chart.
pub fn demo_charts() -> Vec<(&'static str, ChartSpec)> {
    vec![
        (REVENUE_CHART, revenue_chart()),
        (PROJECTS_CHART, projects_chart()),
        (PROFITABILITY_CHART, profitability_chart()),
        (EVOLUTION_CHART, evolution_chart()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_chart_shapes() {
        for (name, spec) in demo_charts() {
            for dataset in &spec.datasets {
                assert_eq!(
                    dataset.data.len(),
                    spec.labels.len(),
                    "{name}/{} length mismatch",
                    dataset.label
                );
            }
        }
    }

    #[test]
    fn test_max_value_and_color_cycle() {
        let spec = profitability_chart();
        assert_eq!(spec.max_value(), 28000.0);
        let costs = &spec.datasets[1];
        assert_eq!(costs.color_at(0), colors::DANGER);
        assert_eq!(costs.color_at(7), colors::DANGER);
        assert_eq!(projects_chart().datasets[0].total(), 24.0);
    }
}
