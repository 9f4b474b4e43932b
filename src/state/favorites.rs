//! Which activities the visitor has hearted.

use std::collections::HashMap;

/// Activity id → favorited flag. Ids are not validated against any card
/// list; toggling an unknown id simply creates its entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoriteSet {
    flags: HashMap<u32, bool>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `id`; an absent entry counts as `false` before the
    /// flip, so two toggles in a row restore the original state.
    pub fn toggle(&mut self, id: u32) {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_read_as_unfavorited() {
        let favorites = FavoriteSet::new();
        assert!(!favorites.is_favorite(42));
    }

    #[test]
    fn toggle_creates_and_flips() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(3);
        assert!(favorites.is_favorite(3));
        favorites.toggle(3);
        assert!(!favorites.is_favorite(3));
    }

    #[test]
    fn double_toggle_restores_the_set() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(1);
        let before = favorites.clone();
        favorites.toggle(2);
        favorites.toggle(2);
        assert_eq!(favorites, before);
    }

    #[test]
    fn ids_are_independent() {
        let mut favorites = FavoriteSet::new();
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(2);
        assert!(favorites.is_favorite(1));
        assert!(!favorites.is_favorite(2));
    }
}
