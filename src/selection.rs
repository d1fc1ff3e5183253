//! Selection Tracking
//!
//! At most one selected id per list (active, deleted), independent of each
//! other. A selection must never point at an id missing from its collection;
//! structural state transitions call [`Selection::prune`] to enforce that.

use std::collections::BTreeMap;

use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: Option<ItemId>,
    deleted: Option<ItemId>,
}

impl Selection {
    pub fn active(&self) -> Option<ItemId> {
        self.active
    }

    pub fn deleted(&self) -> Option<ItemId> {
        self.deleted
    }

    pub fn select_active(&mut self, id: ItemId) {
        self.active = Some(id);
    }

    pub fn select_deleted(&mut self, id: ItemId) {
        self.deleted = Some(id);
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn clear_deleted(&mut self) {
        self.deleted = None;
    }

    /// Drop any selection whose id no longer exists in its collection
    pub fn prune(&mut self, active: &BTreeMap<ItemId, Item>, deleted: &BTreeMap<ItemId, Item>) {
        if self.active.is_some_and(|id| !active.contains_key(&id)) {
            self.active = None;
        }
        if self.deleted.is_some_and(|id| !deleted.contains_key(&id)) {
            self.deleted = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn map_with(ids: &[ItemId]) -> BTreeMap<ItemId, Item> {
        ids.iter()
            .map(|&id| {
                (
                    id,
                    Item {
                        id,
                        name: format!("Item {}", id),
                        quantity: 1,
                        category: Category::Prailgekai,
                        deleted_at: None,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_selections_are_independent() {
        let mut sel = Selection::default();
        sel.select_active(1);
        sel.select_deleted(2);

        sel.clear_active();
        assert_eq!(sel.active(), None);
        assert_eq!(sel.deleted(), Some(2));

        sel.select_active(3);
        sel.clear_deleted();
        assert_eq!(sel.active(), Some(3));
        assert_eq!(sel.deleted(), None);
    }

    #[test]
    fn test_prune_clears_missing_ids_only() {
        let mut sel = Selection::default();
        sel.select_active(1);
        sel.select_deleted(9);

        let active = map_with(&[1, 2]);
        let deleted = map_with(&[5]);
        sel.prune(&active, &deleted);

        assert_eq!(sel.active(), Some(1));
        assert_eq!(sel.deleted(), None);
    }
}
