use leptos::prelude::*;

fn error_view(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|msg| view! { <div class="invalid-feedback-custom">{msg}</div> })
    }
}

fn control_class(
    base: &'static str,
    error: Signal<Option<String>>,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if error.with(Option::is_some) {
            format!("{base} is-invalid")
        } else {
            base.to_string()
        }
    }
}

/// Labelled text input with an optional field error
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "date", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Text shown before the input, e.g. `$`
    #[prop(optional, into)]
    prefix: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    let input = view! {
        <input
            class=control_class("form-control-custom", error)
            type=input_t
            prop:value=move || value.get()
            placeholder=input_placeholder
            required=required
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    };
    let control = match prefix {
        Some(prefix) => view! {
            <div class="input-group">
                <span class="input-group-text-custom">{prefix}</span>
                {input}
            </div>
        }
        .into_any(),
        None => input.into_any(),
    };

    view! {
        <div class="form-group-custom">
            {move || label.get().map(|l| view! { <label class="form-label-custom">{l}</label> })}
            {control}
            {error_view(error)}
        </div>
    }
}

/// Labelled select; `options` are `(value, label)` pairs
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group-custom">
            {move || label.get().map(|l| view! { <label class="form-label-custom">{l}</label> })}
            <select
                class=control_class("form-select-custom", error)
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {error_view(error)}
        </div>
    }
}
