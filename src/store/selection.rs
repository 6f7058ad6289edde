use std::collections::HashSet;

use crate::core::models::Character;

/// Checkbox selection over record ids, kept beside the store by the
/// consumer. Clearing it when the search is cleared is the consumer's call.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    checked: HashSet<u32>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { checked: HashSet::new() }
    }

    pub fn toggle(&mut self, id: u32) {
        if !self.checked.insert(id) {
            self.checked.remove(&id);
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    /// Replace the selection with the given ids ("Select All" over the
    /// currently filtered list).
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = u32>,
    {
        self.checked = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// The selected subset of `characters`, preserving their order.
    pub fn selected_from<'a>(&self, characters: &'a [Character]) -> Vec<&'a Character> {
        characters.iter().filter(|character| self.checked.contains(&character.id)).collect()
    }
}
