//! Comparison selection.

use std::collections::BTreeSet;

use cardcompare_core::ProductId;

/// Maximum number of products compared side by side.
pub const MAX_COMPARE: usize = 3;

/// Outcome of [`SelectionSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// The id was not selected and the set is full; nothing changed.
    AtCapacity,
}

/// Bounded set of selected product ids.
///
/// Capacity is a soft UI limit: adding past it is refused silently rather than
/// reported as an error. Ids are not checked against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    members: BTreeSet<ProductId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &ProductId) -> Toggle {
        if self.members.remove(id) {
            return Toggle::Removed;
        }
        if self.is_full() {
            tracing::debug!(product_id = %id, "selection at capacity; toggle ignored");
            return Toggle::AtCapacity;
        }
        self.members.insert(id.clone());
        Toggle::Added
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.members.contains(id)
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_COMPARE
    }

    pub fn members(&self) -> &BTreeSet<ProductId> {
        &self.members
    }

    /// Whether the select affordance for `id` is enabled: selected items can
    /// always be deselected, others only while there is room.
    pub fn can_toggle(&self, id: &ProductId) -> bool {
        self.contains(id) || !self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection.toggle(&id("a")), Toggle::Added);
        assert!(selection.contains(&id("a")));
        assert_eq!(selection.toggle(&id("a")), Toggle::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn fourth_distinct_id_is_refused() {
        let mut selection = SelectionSet::new();
        for s in ["a", "b", "c"] {
            assert_eq!(selection.toggle(&id(s)), Toggle::Added);
        }
        let before = selection.clone();

        assert_eq!(selection.toggle(&id("d")), Toggle::AtCapacity);
        assert_eq!(selection, before);
        assert_eq!(selection.size(), MAX_COMPARE);
    }

    #[test]
    fn full_set_still_allows_deselect() {
        let mut selection = SelectionSet::new();
        for s in ["a", "b", "c"] {
            selection.toggle(&id(s));
        }
        assert!(selection.can_toggle(&id("b")));
        assert!(!selection.can_toggle(&id("d")));

        assert_eq!(selection.toggle(&id("b")), Toggle::Removed);
        assert!(selection.can_toggle(&id("d")));
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection.toggle(&id("not-in-any-catalog")), Toggle::Added);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut selection = SelectionSet::new();
        selection.toggle(&id("a"));
        selection.toggle(&id("b"));
        selection.clear();
        assert_eq!(selection.size(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: size never exceeds the cap, whatever the toggle sequence.
            #[test]
            fn size_never_exceeds_cap(toggles in proptest::collection::vec(0u8..8, 0..64)) {
                let mut selection = SelectionSet::new();
                for t in toggles {
                    selection.toggle(&ProductId::new(format!("p{t}")));
                    prop_assert!(selection.size() <= MAX_COMPARE);
                }
            }

            /// Property: toggling the same id twice restores the original set.
            #[test]
            fn double_toggle_is_involution(
                prefix in proptest::collection::vec(0u8..8, 0..16),
                target in 0u8..8,
            ) {
                let mut selection = SelectionSet::new();
                for t in prefix {
                    selection.toggle(&ProductId::new(format!("p{t}")));
                }
                let before = selection.clone();
                let target = ProductId::new(format!("p{target}"));

                selection.toggle(&target);
                selection.toggle(&target);
                prop_assert_eq!(selection, before);
            }
        }
    }
}
