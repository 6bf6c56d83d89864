use crate::domain::a005_movement::ui::details::MovementDetailModal;
use crate::domain::a005_movement::ui::form::{MovementDeleteModal, MovementFormModal};
use crate::shared::entity_detail::components::{DeleteModal, EditModal, PaymentModal, ViewModal};
use crate::shared::entity_detail::{DeleteTarget, DetailFragment, EditForm, PaymentTarget};
use leptos::prelude::*;

/// Dialog currently shown by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveModal {
    View(DetailFragment),
    Edit(EditForm),
    Delete(DeleteTarget),
    Payment(PaymentTarget),
    MovementForm,
    MovementDetail(u32),
    MovementDelete(u32),
}

/// Holds at most one dialog; opening another replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSlot {
    active: Option<ActiveModal>,
}

impl ModalSlot {
    /// Show `modal`, returning the dialog it closed.
    pub fn open(&mut self, modal: ActiveModal) -> Option<ActiveModal> {
        self.active.replace(modal)
    }

    pub fn close(&mut self) -> Option<ActiveModal> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&ActiveModal> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

/// Centralized dialog management.
#[derive(Clone, Copy)]
pub struct ModalService {
    slot: RwSignal<ModalSlot>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ModalSlot::default()),
        }
    }

    pub fn show(&self, modal: ActiveModal) {
        self.slot.update(|slot| {
            if let Some(previous) = slot.open(modal) {
                log::debug!("modal replaced: {:?}", std::mem::discriminant(&previous));
            }
        });
    }

    pub fn hide(&self) {
        self.slot.update(|slot| {
            slot.close();
        });
    }

    pub fn is_open(&self) -> bool {
        self.slot.with(|slot| slot.is_open())
    }

    pub fn active(&self) -> Option<ActiveModal> {
        self.slot.with(|slot| slot.active().cloned())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modals() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Renders whichever dialog is active.
#[component]
pub fn ModalHost() -> impl IntoView {
    let modals = use_modals();

    move || match modals.active() {
        None => view! { <></> }.into_any(),
        Some(ActiveModal::View(fragment)) => view! { <ViewModal fragment=fragment /> }.into_any(),
        Some(ActiveModal::Edit(form)) => view! { <EditModal form=form /> }.into_any(),
        Some(ActiveModal::Delete(target)) => view! { <DeleteModal target=target /> }.into_any(),
        Some(ActiveModal::Payment(target)) => view! { <PaymentModal target=target /> }.into_any(),
        Some(ActiveModal::MovementForm) => view! { <MovementFormModal /> }.into_any(),
        Some(ActiveModal::MovementDetail(id)) => view! { <MovementDetailModal id=id /> }.into_any(),
        Some(ActiveModal::MovementDelete(id)) => view! { <MovementDeleteModal id=id /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityKind;

    #[test]
    fn test_single_modal() {
        let mut slot = ModalSlot::default();
        assert!(!slot.is_open());

        assert_eq!(slot.open(ActiveModal::MovementDetail(2)), None);
        let target = DeleteTarget {
            kind: EntityKind::Project,
            name: "Sistema de Reservas".into(),
        };
        let closed = slot.open(ActiveModal::Delete(target.clone()));
        assert_eq!(closed, Some(ActiveModal::MovementDetail(2)));
        assert_eq!(slot.active(), Some(&ActiveModal::Delete(target)));

        slot.close();
        assert!(!slot.is_open());
    }
}
