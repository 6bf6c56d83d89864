use super::{render_edit, render_view, DeleteConfirmation, EditForm, PaymentConfirmation};
use crate::layout::modal_service::{ActiveModal, ModalService};
use crate::shared::clock::today;
use crate::shared::toast::ToastService;
use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

/// Opens and confirms the entity dialogs.
#[derive(Clone, Copy)]
pub struct EntityDetailService {
    modals: ModalService,
    toasts: ToastService,
    deletes: RwSignal<DeleteConfirmation>,
    payments: RwSignal<PaymentConfirmation>,
}

impl EntityDetailService {
    pub fn new(modals: ModalService, toasts: ToastService) -> Self {
        Self {
            modals,
            toasts,
            deletes: RwSignal::new(DeleteConfirmation::default()),
            payments: RwSignal::new(PaymentConfirmation::default()),
        }
    }

    pub fn open_view(&self, record: &EntityRecord) {
        self.modals.show(ActiveModal::View(render_view(record)));
    }

    /// Replaces whatever dialog is open (the view dialog, when coming from
    /// its edit button).
    pub fn open_edit(&self, kind: EntityKind, name: &str) {
        match render_edit(kind, name) {
            Ok(form) => {
                self.modals.hide();
                self.modals.show(ActiveModal::Edit(form));
            }
            Err(e) => log::warn!("open_edit({kind}, {name}): {e}"),
        }
    }

    pub fn save_edit(&self, form: &EditForm) {
        log::info!("edit saved: {} ({})", form.title, form.kind);
        self.modals.hide();
    }

    pub fn open_delete(&self, kind: EntityKind, name: &str) {
        let target = self
            .deletes
            .try_update(|deletes| deletes.request(kind, name).clone());
        if let Some(target) = target {
            self.modals.show(ActiveModal::Delete(target));
        }
    }

    pub fn confirm_delete(&self) {
        self.modals.hide();
        match self.deletes.try_update(|deletes| deletes.confirm()) {
            Some(Ok(notification)) => {
                self.toasts.notify(notification);
            }
            Some(Err(e)) => log::warn!("confirm_delete: {e}"),
            None => {}
        }
    }

    pub fn cancel_delete(&self) {
        self.deletes.update(|deletes| deletes.cancel());
        self.modals.hide();
    }

    pub fn open_payment(&self, name: &str, initials: &str, role: &str) {
        let today = today();
        let target = self
            .payments
            .try_update(|payments| payments.open(name, initials, role, today).clone());
        if let Some(target) = target {
            self.modals.show(ActiveModal::Payment(target));
        }
    }

    pub fn confirm_payment(&self) {
        self.modals.hide();
        match self.payments.try_update(|payments| payments.confirm()) {
            Some(Ok(notification)) => {
                self.toasts.notify(notification);
            }
            Some(Err(e)) => log::warn!("confirm_payment: {e}"),
            None => {}
        }
    }

    pub fn cancel_payment(&self) {
        self.payments.update(|payments| payments.cancel());
        self.modals.hide();
    }
}

pub fn use_entity_details() -> EntityDetailService {
    use_context::<EntityDetailService>().expect("EntityDetailService not provided in context")
}
