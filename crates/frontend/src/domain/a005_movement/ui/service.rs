use super::editor::MovementEditor;
use super::view_model::{MovementDetailVm, MovementRowVm};
use crate::layout::modal_service::{ActiveModal, ModalService};
use crate::shared::clock::today;
use crate::shared::toast::ToastService;
use contracts::domain::a005_movement::aggregate::Movement;
use contracts::domain::a005_movement::filter::MovementFilter;
use contracts::domain::a005_movement::store::DemoMovementStore;
use leptos::prelude::*;

/// Movements screen: demo table, filters and the create/edit/delete dialogs.
#[derive(Clone, Copy)]
pub struct MovementsService {
    store: StoredValue<DemoMovementStore>,
    pub editor: RwSignal<MovementEditor>,
    pub filter: RwSignal<MovementFilter>,
    modals: ModalService,
    toasts: ToastService,
}

impl MovementsService {
    pub fn new(modals: ModalService, toasts: ToastService) -> Self {
        Self {
            store: StoredValue::new(DemoMovementStore::with_fixtures()),
            editor: RwSignal::new(MovementEditor::default()),
            filter: RwSignal::new(MovementFilter::default()),
            modals,
            toasts,
        }
    }

    /// Record shown for `id`; unknown ids resolve to the first movement.
    pub fn record(&self, id: u32) -> Movement {
        self.store.with_value(|store| {
            if let Err(e) = store.lookup(id) {
                log::warn!("{e}, showing movement {}", store.fallback().id);
            }
            store.lookup_or_default(id).clone()
        })
    }

    pub fn detail(&self, id: u32) -> MovementDetailVm {
        MovementDetailVm::from_movement(&self.record(id))
    }

    /// Rows matching the applied filter, newest first.
    pub fn rows(&self) -> Vec<MovementRowVm> {
        let today = today();
        self.filter.with(|filter| {
            self.store.with_value(|store| {
                store
                    .filter(filter, today)
                    .into_iter()
                    .map(MovementRowVm::from_movement)
                    .collect()
            })
        })
    }

    pub fn total(&self) -> f64 {
        let today = today();
        self.filter
            .with(|filter| self.store.with_value(|store| store.total_amount(filter, today)))
    }

    pub fn apply_filter(&self, filter: MovementFilter) {
        leptos::logging::log!("movements filter: {:?}", filter);
        self.filter.set(filter);
        self.toasts
            .info("Filtros aplicados", "Los resultados han sido actualizados.");
    }

    pub fn open_new(&self) {
        let today = today();
        self.editor.update(|editor| editor.open_new(today));
        self.modals.show(ActiveModal::MovementForm);
    }

    pub fn open_detail(&self, id: u32) {
        self.modals.show(ActiveModal::MovementDetail(id));
    }

    /// Closes the detail dialog and opens the form filled from the record.
    pub fn open_edit(&self, id: u32) {
        let movement = self.record(id);
        self.editor.update(|editor| editor.open_edit(&movement));
        self.modals.hide();
        self.modals.show(ActiveModal::MovementForm);
    }

    pub fn close(&self) {
        self.modals.hide();
    }

    /// Validate and "persist" the form. Invalid forms stay open with their
    /// field errors.
    pub fn save(&self) {
        match self.editor.try_update(|editor| editor.save()) {
            Some(Ok(saved)) => {
                match serde_json::to_string(&saved.payload) {
                    Ok(json) => log::info!("movement save (id {:?}): {json}", saved.id),
                    Err(e) => log::warn!("movement save: cannot serialize payload: {e}"),
                }
                self.modals.hide();
                self.toasts.notify(saved.notification);
            }
            Some(Err(errors)) => {
                log::debug!("movement form rejected: {} error(s)", errors.len());
            }
            None => {}
        }
    }

    pub fn open_delete(&self, id: u32) {
        self.editor.update(|editor| editor.request_delete(id));
        self.modals.show(ActiveModal::MovementDelete(id));
    }

    pub fn confirm_delete(&self) {
        self.modals.hide();
        match self.editor.try_update(|editor| editor.confirm_delete()) {
            Some(Ok((id, notification))) => {
                log::info!("movement delete: {id}");
                self.toasts.notify(notification);
            }
            Some(Err(e)) => log::warn!("confirm_delete: {e}"),
            None => {}
        }
    }

    pub fn cancel_delete(&self) {
        self.editor.update(|editor| editor.cancel_delete());
        self.modals.hide();
    }
}

pub fn use_movements() -> MovementsService {
    use_context::<MovementsService>().expect("MovementsService not provided in context")
}
