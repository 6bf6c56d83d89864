use crate::shared::charts::{use_charts, Chart};
use crate::shared::components::page_header::SectionHeader;
use crate::shared::icons::bi;
use contracts::shared::charts::{evolution_chart, EVOLUTION_CHART, PROFITABILITY_CHART};
use leptos::prelude::*;
use thaw::*;

/// Last `months` points of the balance series with their labels.
pub fn trailing_balance(months: usize) -> (Vec<f64>, Vec<String>) {
    let spec = evolution_chart();
    let data = spec
        .datasets
        .first()
        .map(|d| d.data.clone())
        .unwrap_or_default();
    let skip = data.len().saturating_sub(months);
    (
        data.into_iter().skip(skip).collect(),
        spec.labels.into_iter().skip(skip).collect(),
    )
}

#[component]
pub fn ReportsSection() -> impl IntoView {
    let charts = use_charts();
    let months = RwSignal::new(12usize);

    let show = move |n: usize| {
        months.set(n);
        let (data, labels) = trailing_balance(n);
        charts.update(EVOLUTION_CHART, data, Some(labels));
    };
    let range_class = move |n: usize| {
        move || {
            if months.get() == n {
                "btn-range active"
            } else {
                "btn-range"
            }
        }
    };

    view! {
        <section id="section-reports" class="content-section active">
            <SectionHeader title="Reportes" icon="graph-up">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        months.set(12);
                        charts.reset();
                    }
                >
                    {bi("arrow-counterclockwise")}
                    " Restablecer"
                </Button>
            </SectionHeader>
            <div class="charts-grid">
                <div class="card-custom chart-card chart-card--wide">
                    <h5>"Rentabilidad Mensual"</h5>
                    <Chart name=PROFITABILITY_CHART />
                </div>
                <div class="card-custom chart-card chart-card--wide">
                    <div class="chart-card__header">
                        <h5>"Evolución del Saldo"</h5>
                        <div class="btn-range-group">
                            <button class=range_class(6) on:click=move |_| show(6)>"6 meses"</button>
                            <button class=range_class(12) on:click=move |_| show(12)>"12 meses"</button>
                        </div>
                    </div>
                    <Chart name=EVOLUTION_CHART />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_balance() {
        let (data, labels) = trailing_balance(6);
        assert_eq!(data.len(), 6);
        assert_eq!(labels.first().map(String::as_str), Some("Jul"));
        assert_eq!(data.last(), Some(&143000.0));

        let (data, labels) = trailing_balance(24);
        assert_eq!(data.len(), 12);
        assert_eq!(labels.len(), 12);
    }
}
