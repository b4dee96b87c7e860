//! Ordered tile layout.
//!
//! # Responsibility
//! - Hold the rendered order of grid items.
//! - Offer only order-preserving mutations (move, shuffle, reorder).
//!
//! # Invariants
//! - Ids inside one layout are unique and non-blank.
//! - Every mutation keeps the id multiset unchanged.

use crate::model::grid_item::{GridItem, GridItemValidationError, ItemId};
use rand::Rng;
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised when a canonical item list breaks layout invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutValidationError {
    Item {
        index: usize,
        source: GridItemValidationError,
    },
    DuplicateId(ItemId),
}

impl Display for LayoutValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item { index, source } => write!(f, "item at index {index}: {source}"),
            Self::DuplicateId(id) => write!(f, "duplicate grid item id `{id}`"),
        }
    }
}

impl Error for LayoutValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Item { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

/// Reasons an id order cannot be applied to a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    DuplicateId(ItemId),
    /// The order does not name exactly the ids of the layout.
    IdSetMismatch {
        missing: Vec<ItemId>,
        unexpected: Vec<ItemId>,
    },
}

impl Display for ReorderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "order repeats id `{id}`"),
            Self::IdSetMismatch {
                missing,
                unexpected,
            } => write!(
                f,
                "order id set differs from layout: missing {missing:?}, unexpected {unexpected:?}"
            ),
        }
    }
}

impl Error for ReorderError {}

/// Ordered sequence of grid items as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    items: Vec<GridItem>,
}

impl Layout {
    /// Builds a layout from the host-defined canonical item list.
    ///
    /// # Errors
    /// - `Item` when an item fails its own validation.
    /// - `DuplicateId` when two items share an id.
    pub fn from_canonical(items: Vec<GridItem>) -> Result<Self, LayoutValidationError> {
        let mut seen = BTreeSet::new();
        for (index, item) in items.iter().enumerate() {
            item.validate()
                .map_err(|source| LayoutValidationError::Item { index, source })?;
            if !seen.insert(item.id.as_str()) {
                return Err(LayoutValidationError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GridItem> {
        self.items.get(index)
    }

    /// Returns ids in rendered order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    /// Returns the order-independent id set.
    pub fn id_set(&self) -> BTreeSet<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    /// Moves one item from `from` to `to`, shifting the items in between.
    ///
    /// This is a single-element reorder, not a swap. Returns `false` and
    /// leaves the layout untouched when either index is out of bounds or the
    /// indices are equal.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Permutes the layout in place with a Fisher–Yates shuffle.
    ///
    /// Every permutation is equally likely given a uniform `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.items.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.items.swap(i, j);
        }
    }

    /// Builds a new layout that follows `order` but takes all item data
    /// from `self`.
    ///
    /// # Errors
    /// - `DuplicateId` when `order` repeats an id.
    /// - `IdSetMismatch` when `order` and `self` do not name the same ids.
    pub fn reorder_by(&self, order: &[ItemId]) -> Result<Layout, ReorderError> {
        let mut seen = BTreeSet::new();
        for id in order {
            if !seen.insert(id.as_str()) {
                return Err(ReorderError::DuplicateId(id.clone()));
            }
        }

        let current = self.id_set();
        if seen != current {
            return Err(ReorderError::IdSetMismatch {
                missing: current
                    .difference(&seen)
                    .map(|id| (*id).to_string())
                    .collect(),
                unexpected: seen
                    .difference(&current)
                    .map(|id| (*id).to_string())
                    .collect(),
            });
        }

        let by_id: HashMap<&str, &GridItem> = self
            .items
            .iter()
            .map(|item| (item.id.as_str(), item))
            .collect();
        let items = order
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).map(|item| (*item).clone()))
            .collect();
        Ok(Layout { items })
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, LayoutValidationError, ReorderError};
    use crate::model::grid_item::GridItem;

    fn layout(ids: &[&str]) -> Layout {
        Layout::from_canonical(
            ids.iter()
                .map(|id| GridItem::new(*id, id.to_uppercase(), format!("/{id}")).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn move_item_shifts_intervening_items() {
        let mut layout = layout(&["a", "b", "c", "d"]);
        assert!(layout.move_item(3, 1));
        assert_eq!(layout.ids(), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn move_item_ignores_out_of_bounds() {
        let mut layout = layout(&["a", "b"]);
        assert!(!layout.move_item(0, 2));
        assert!(!layout.move_item(1, 1));
        assert_eq!(layout.ids(), vec!["a", "b"]);
    }

    #[test]
    fn from_canonical_rejects_duplicates() {
        let item = GridItem::new("a", "A", "/a").unwrap();
        let err = Layout::from_canonical(vec![item.clone(), item]).unwrap_err();
        assert_eq!(err, LayoutValidationError::DuplicateId("a".to_string()));
    }

    #[test]
    fn reorder_by_reports_missing_and_unexpected_ids() {
        let layout = layout(&["a", "b", "c"]);
        let err = layout
            .reorder_by(&["a".to_string(), "b".to_string(), "d".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            ReorderError::IdSetMismatch {
                missing: vec!["c".to_string()],
                unexpected: vec!["d".to_string()],
            }
        );
    }
}
