use crate::shared::icons::bi;
use leptos::prelude::*;

/// Section title with an icon and an action area on the right.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    /// Bootstrap icon name
    #[prop(into)]
    icon: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Actions on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div>
                <h2>{bi(&icon)} " " {title}</h2>
                {move || subtitle.get().map(|s| view! { <small class="text-muted">{s}</small> })}
            </div>
            <div class="section-header__actions">{children.map(|c| c())}</div>
        </div>
    }
}
