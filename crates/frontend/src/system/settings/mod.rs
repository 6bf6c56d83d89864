use crate::shared::components::form_field::{Input, Select};
use crate::shared::components::page_header::SectionHeader;
use crate::shared::config::use_config;
use crate::shared::icons::bi;
use crate::shared::panel_switcher::PanelRegistry;
use crate::shared::theme::DarkModeSwitch;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;
use thaw::*;

/// Settings tabs: (id, title, icon).
pub const SETTINGS_PANELS: [(&str, &str, &str); 4] = [
    ("general", "General", "sliders"),
    ("profile", "Perfil", "person-circle"),
    ("company", "Empresa", "building"),
    ("security", "Seguridad", "shield-lock"),
];

/// Tabs with `default_panel` active. While no tab is active the general
/// tab is reported.
pub fn settings_registry(default_panel: &str) -> PanelRegistry {
    let panels: Vec<(&str, &str)> = SETTINGS_PANELS
        .iter()
        .map(|(id, title, _)| (*id, *title))
        .collect();
    let mut registry = PanelRegistry::new("general", &panels);
    if let Err(e) = registry.activate(default_panel) {
        log::warn!("settings: {e}");
    }
    registry
}

fn text_value(value: &'static str) -> Signal<String> {
    Signal::stored(value.to_string())
}

#[component]
fn GeneralPanel() -> impl IntoView {
    let language = RwSignal::new("es".to_string());
    let options = vec![
        ("es".to_string(), "Español".to_string()),
        ("en".to_string(), "English".to_string()),
    ];

    view! {
        <h5>"Preferencias"</h5>
        <div class="settings-row">
            <div>
                <strong>"Apariencia"</strong>
                <small class="d-block text-muted">"Cambia entre tema claro y oscuro."</small>
            </div>
            <DarkModeSwitch />
        </div>
        <Select
            label="Idioma"
            value=language
            options=options
            on_change=Callback::new(move |v: String| language.set(v))
        />
    }
}

#[component]
fn ProfilePanel() -> impl IntoView {
    view! {
        <h5>"Perfil"</h5>
        <div class="form-grid">
            <div class="form-col-6">
                <Input label="Nombre" value=text_value("Admin User") />
            </div>
            <div class="form-col-6">
                <Input label="Correo" input_type="email" value=text_value("admin@ypservices.com") />
            </div>
        </div>
    }
}

#[component]
fn CompanyPanel() -> impl IntoView {
    view! {
        <h5>"Empresa"</h5>
        <div class="form-grid">
            <div class="form-col-6">
                <Input label="Razón social" value=text_value("YP Services") />
            </div>
            <div class="form-col-6">
                <Input label="Sitio web" value=text_value("https://ypservices.com") />
            </div>
        </div>
    }
}

#[component]
fn SecurityPanel() -> impl IntoView {
    view! {
        <h5>"Seguridad"</h5>
        <div class="form-grid">
            <div class="form-col-12">
                <Input label="Contraseña actual" input_type="password" value=text_value("") />
            </div>
            <div class="form-col-6">
                <Input label="Nueva contraseña" input_type="password" value=text_value("") />
            </div>
            <div class="form-col-6">
                <Input label="Confirmar contraseña" input_type="password" value=text_value("") />
            </div>
        </div>
    }
}

#[component]
pub fn SettingsSection() -> impl IntoView {
    let config = use_config();
    let toasts = use_toasts();
    let panels = RwSignal::new(settings_registry(&config.navigation.default_settings_panel));

    let navigate_to = move |id: &'static str| {
        if let Some(Err(e)) = panels.try_update(|p| p.activate(id)) {
            log::warn!("settings: {e}");
        }
    };
    let current = Memo::new(move |_| panels.with(|p| p.current_panel().to_string()));

    let nav = SETTINGS_PANELS
        .iter()
        .map(|&(id, title, icon)| {
            view! {
                <button
                    class="settings-nav-item"
                    class:active=move || current.get() == id
                    on:click=move |_| navigate_to(id)
                >
                    {bi(icon)}
                    " "
                    {title}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="section-settings" class="content-section active">
            <SectionHeader title="Configuración" icon="gear" />
            <div class="settings-layout">
                <nav class="settings-nav card-custom">{nav}</nav>
                <div class="settings-panel card-custom active">
                    {move || match current.get().as_str() {
                        "profile" => view! { <ProfilePanel /> }.into_any(),
                        "company" => view! { <CompanyPanel /> }.into_any(),
                        "security" => view! { <SecurityPanel /> }.into_any(),
                        _ => view! { <GeneralPanel /> }.into_any(),
                    }}
                    <div class="settings-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                toasts.success(
                                    "Configuración guardada",
                                    "Los cambios han sido guardados correctamente.",
                                );
                            }
                        >
                            {bi("check-lg")}
                            " Guardar cambios"
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_is_active() {
        let registry = settings_registry("company");
        assert_eq!(registry.current_panel(), "company");
        assert_eq!(registry.active_count(), 1);
        assert_eq!(registry.current_title(), "Empresa");
    }

    #[test]
    fn test_switching_panels() {
        let mut registry = settings_registry("general");
        for (id, _, _) in SETTINGS_PANELS {
            registry.activate(id).unwrap();
            assert!(registry.is_active(id));
            assert_eq!(registry.active_count(), 1);
        }
        assert!(registry.activate("billing").is_err());
        assert_eq!(registry.current_panel(), "security");
    }

    #[test]
    fn test_unknown_default_falls_back() {
        let registry = settings_registry("billing");
        assert_eq!(registry.active_count(), 0);
        assert_eq!(registry.current_panel(), "general");
    }
}
