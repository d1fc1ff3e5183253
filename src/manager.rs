//! Inventory State Manager
//!
//! Owns the reactive [`InventoryState`] and mediates every mutation through
//! the remote service. Every operation is confirm-then-reconcile: local
//! collections only change after the server has acknowledged, so they always
//! reflect a server-acknowledged state and no rollback is ever needed.
//!
//! Methods never hold a state borrow across an await point: they read what
//! they need untracked, await the client, then apply the result in one
//! `update`.

use futures::future::join;
use leptos::prelude::*;

use crate::api::InventoryApi;
use crate::error::{Action, InventoryError};
use crate::state::InventoryState;

#[derive(Clone)]
pub struct InventoryStateManager<C> {
    state: RwSignal<InventoryState>,
    client: C,
}

fn warn_transport(op: &str, err: &InventoryError) {
    if err.is_transport() {
        log::warn!("{} hit a transport failure: {}", op, err);
    }
}

impl<C: InventoryApi> InventoryStateManager<C> {
    pub fn new(client: C) -> Self {
        Self {
            state: RwSignal::new(InventoryState::default()),
            client,
        }
    }

    /// The reactive state handle for the view layer
    pub fn state(&self) -> RwSignal<InventoryState> {
        self.state
    }

    fn begin(&self) {
        self.state.update(|s| s.pending = true);
    }

    fn finish(&self, apply: impl FnOnce(&mut InventoryState)) {
        self.state.update(|s| {
            s.pending = false;
            apply(s);
        });
    }

    /// Fetch both lists concurrently. Either side fails open to an empty
    /// collection rather than blocking or keeping stale data.
    pub async fn initialize(&self) {
        let (active, deleted) = join(self.client.list_active(), self.client.list_deleted()).await;
        let active = active.unwrap_or_else(|err| {
            log::warn!("active list load failed: {}", err);
            Vec::new()
        });
        let deleted = deleted.unwrap_or_else(|err| {
            log::warn!("deleted list load failed: {}", err);
            Vec::new()
        });
        self.state.update(|s| s.apply_loaded(active, deleted));
    }

    /// Submit the new-item draft. Validation failures surface locally without
    /// a network call; a failed create leaves the draft intact for retry.
    pub async fn add_item(&self) {
        let draft = self.state.with_untracked(|s| s.new_item.clone());
        let fields = match draft.validate() {
            Ok(fields) => fields,
            Err(err) => {
                self.state.update(|s| s.report_failure(Action::Add, &err));
                return;
            }
        };

        self.begin();
        match self.client.create(&fields).await {
            Ok(item) => self.finish(|s| s.apply_created(item)),
            Err(err) => {
                warn_transport("create", &err);
                self.finish(|s| s.report_failure(Action::Add, &err));
            }
        }
    }

    /// Submit the edit draft for the selected active item. The server's
    /// returned record wins over the local draft.
    pub async fn save_edit(&self) {
        let Some((id, draft)) = self
            .state
            .with_untracked(|s| s.selection.active().map(|id| (id, s.edit_draft.clone())))
        else {
            return;
        };
        let fields = match draft.validate() {
            Ok(fields) => fields,
            Err(err) => {
                self.state.update(|s| s.report_failure(Action::Update, &err));
                return;
            }
        };

        self.begin();
        match self.client.update(id, &fields).await {
            Ok(item) => self.finish(|s| s.apply_updated(item)),
            Err(err) => {
                warn_transport("update", &err);
                self.finish(|s| s.report_failure(Action::Update, &err));
            }
        }
    }

    /// Soft-delete the selected active item, then refetch the deleted list in
    /// full so `deletedAt` and any server-side fields are authoritative.
    pub async fn delete_item(&self) {
        let Some(id) = self.state.with_untracked(|s| s.selection.active()) else {
            return;
        };

        self.begin();
        match self.client.soft_delete(id).await {
            Ok(()) => {
                // The delete itself is acknowledged; a failed refetch keeps
                // the previous deleted list rather than undoing the removal.
                let deleted = match self.client.list_deleted().await {
                    Ok(list) => Some(list),
                    Err(err) => {
                        log::warn!("deleted list refresh failed after delete: {}", err);
                        None
                    }
                };
                self.finish(|s| s.apply_soft_deleted(id, deleted));
            }
            Err(err) => {
                warn_transport("soft delete", &err);
                self.finish(|s| s.report_failure(Action::Delete, &err));
            }
        }
    }

    /// Restore the selected deleted item. Restoring can race with a
    /// server-side purge, so both lists are refetched in full instead of
    /// patched locally.
    pub async fn restore_item(&self) {
        let Some(id) = self.state.with_untracked(|s| s.selection.deleted()) else {
            return;
        };

        self.begin();
        match self.client.restore(id).await {
            Ok(()) => {
                let (active, deleted) =
                    join(self.client.list_active(), self.client.list_deleted()).await;
                let active = active.unwrap_or_else(|err| {
                    log::warn!("active list refresh failed after restore: {}", err);
                    Vec::new()
                });
                let deleted = deleted.unwrap_or_else(|err| {
                    log::warn!("deleted list refresh failed after restore: {}", err);
                    Vec::new()
                });
                self.finish(|s| s.apply_restored(active, deleted));
            }
            Err(err) => {
                warn_transport("restore", &err);
                self.finish(|s| s.report_failure(Action::Restore, &err));
            }
        }
    }

    /// Permanently remove the selected deleted item. Irreversible.
    pub async fn purge_item(&self) {
        let Some(id) = self.state.with_untracked(|s| s.selection.deleted()) else {
            return;
        };

        self.begin();
        match self.client.purge(id).await {
            Ok(()) => self.finish(|s| s.apply_purged(id)),
            Err(err) => {
                warn_transport("purge", &err);
                self.finish(|s| s.report_failure(Action::Purge, &err));
            }
        }
    }
}
