use crate::shared::icons::bi;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay + dialog surface with a title bar.
///
/// Children supply their own `modal-body-custom` / `modal-footer-custom` blocks.
#[component]
pub fn ModalFrame(
    /// Called when the dialog should close (overlay click, close button).
    on_close: Callback<()>,
    #[prop(into)] title: String,
    /// Extra class for the dialog surface (`div.modal-dialog-custom`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay, so a text selection
    // ending outside the dialog does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the overlay must not be removed during its own dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal-dialog-custom {cls}"),
        None => "modal-dialog-custom".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header-custom">
                    <h5 class="modal-title">{title}</h5>
                    <button class="btn-close-custom" title="Cerrar" on:click=move |_| on_close.run(())>
                        {bi("x-lg")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
