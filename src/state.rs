//! Inventory State
//!
//! The single owned state object behind the whole page: the two authoritative
//! collections (active and deleted items), selection, the two form drafts, and
//! view flags. All transitions here are pure and synchronous; the async
//! confirm-then-reconcile orchestration lives in [`crate::manager`].
//!
//! Invariant: an id lives in exactly one of `items` / `deleted_items`, and a
//! selection never references an id missing from its collection.

use std::collections::BTreeMap;

use crate::draft::ItemDraft;
use crate::error::{Action, InventoryError, Notice};
use crate::models::{Item, ItemId};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryState {
    /// Active items by id; `deleted_at` absent on every entry
    pub items: BTreeMap<ItemId, Item>,
    /// Soft-deleted, still recoverable items by id; `deleted_at` present
    pub deleted_items: BTreeMap<ItemId, Item>,
    pub selection: Selection,
    /// Draft behind the "add new item" panel
    pub new_item: ItemDraft,
    /// Draft behind the "edit selected item" panel
    pub edit_draft: ItemDraft,
    pub show_add_panel: bool,
    /// Set once the initial list fetches have settled
    pub ready: bool,
    /// A remote call is outstanding; submitting controls are disabled
    pub pending: bool,
    pub notice: Option<Notice>,
}

fn collect_by_id(list: Vec<Item>) -> BTreeMap<ItemId, Item> {
    list.into_iter().map(|item| (item.id, item)).collect()
}

impl InventoryState {
    // ========================
    // View-state transitions (no network involved)
    // ========================

    /// Add and edit are mutually exclusive: opening the add panel drops the
    /// current active selection
    pub fn open_add_panel(&mut self) {
        self.show_add_panel = true;
        self.selection.clear_active();
        self.edit_draft.reset();
    }

    /// Cancel adding; the draft is discarded
    pub fn close_add_panel(&mut self) {
        self.show_add_panel = false;
        self.new_item.reset();
    }

    /// Select an active item and seed the edit draft from its current fields
    pub fn select_active(&mut self, id: ItemId) {
        let Some(item) = self.items.get(&id) else {
            return;
        };
        self.edit_draft = ItemDraft::from_item(item);
        self.selection.select_active(id);
        self.show_add_panel = false;
    }

    /// Cancel editing; the draft is discarded
    pub fn clear_active_selection(&mut self) {
        self.selection.clear_active();
        self.edit_draft.reset();
    }

    pub fn select_deleted(&mut self, id: ItemId) {
        if self.deleted_items.contains_key(&id) {
            self.selection.select_deleted(id);
        }
    }

    pub fn clear_deleted_selection(&mut self) {
        self.selection.clear_deleted();
    }

    // ========================
    // Reconciliation with server-acknowledged responses
    // ========================

    /// Initial load finished; either list may be empty if its fetch failed
    pub fn apply_loaded(&mut self, active: Vec<Item>, deleted: Vec<Item>) {
        self.items = collect_by_id(active);
        self.deleted_items = collect_by_id(deleted);
        self.selection.prune(&self.items, &self.deleted_items);
        self.ready = true;
    }

    /// Create confirmed: insert the server-returned record, reset the draft,
    /// close the add panel
    pub fn apply_created(&mut self, item: Item) {
        self.items.insert(item.id, item);
        self.new_item.reset();
        self.show_add_panel = false;
        self.notice = None;
    }

    /// Update confirmed: the server-returned record wins over the local draft
    pub fn apply_updated(&mut self, item: Item) {
        self.items.insert(item.id, item);
        self.clear_active_selection();
        self.notice = None;
    }

    /// Soft delete confirmed. `deleted` carries the refetched deleted list;
    /// `None` means the refetch failed and the previous list is kept.
    pub fn apply_soft_deleted(&mut self, id: ItemId, deleted: Option<Vec<Item>>) {
        self.items.remove(&id);
        if let Some(list) = deleted {
            self.deleted_items = collect_by_id(list);
        }
        self.clear_active_selection();
        self.selection.prune(&self.items, &self.deleted_items);
        self.notice = None;
    }

    /// Restore confirmed: both collections are replaced by full refetches
    pub fn apply_restored(&mut self, active: Vec<Item>, deleted: Vec<Item>) {
        self.items = collect_by_id(active);
        self.deleted_items = collect_by_id(deleted);
        self.selection.clear_deleted();
        self.selection.prune(&self.items, &self.deleted_items);
        self.notice = None;
    }

    /// Purge confirmed: the id is gone for good
    pub fn apply_purged(&mut self, id: ItemId) {
        self.deleted_items.remove(&id);
        self.selection.clear_deleted();
        self.notice = None;
    }

    /// Record an action-specific failure notice; collections, selection and
    /// drafts stay as they were
    pub fn report_failure(&mut self, action: Action, err: &InventoryError) {
        self.notice = Some(Notice::failure(action, err));
    }

    // ========================
    // Derived lookups
    // ========================

    pub fn selected_item(&self) -> Option<&Item> {
        self.selection.active().and_then(|id| self.items.get(&id))
    }

    pub fn selected_deleted_item(&self) -> Option<&Item> {
        self.selection.deleted().and_then(|id| self.deleted_items.get(&id))
    }

    /// Active items in display order: stable sort by category rank, ties
    /// broken by id ascending (the map's iteration order)
    pub fn sorted_items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.values().cloned().collect();
        items.sort_by_key(|item| item.category.rank());
        items
    }
}
