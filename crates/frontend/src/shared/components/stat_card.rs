use crate::shared::icons::bi;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

impl StatTone {
    fn css_class(&self) -> &'static str {
        match self {
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Danger => "stat-card stat-card--danger",
        }
    }
}

/// Arrow and class for a relative change in percent.
pub fn change_badge(pct: f64) -> (String, &'static str) {
    let (arrow, cls) = if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    };
    (format!("{}{:.1}%", arrow, pct.abs()), cls)
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Bootstrap icon name
    #[prop(into)]
    icon_name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] tone: StatTone,
    /// Change % relative to previous period
    #[prop(optional)]
    change_percent: Option<f64>,
) -> impl IntoView {
    let change_view = change_percent.map(|pct| {
        let (text, cls) = change_badge(pct);
        view! { <span class=cls>{text}</span> }
    });

    view! {
        <div class=tone.css_class()>
            <div class="stat-card__icon">{bi(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_badge() {
        assert_eq!(change_badge(12.34).0, "\u{2191}12.3%");
        assert_eq!(change_badge(-3.0).1, "stat-card__change stat-card__change--down");
        assert_eq!(change_badge(0.2).0, "0.2%");
    }
}
