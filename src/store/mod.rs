use crate::core::models::Character;

pub mod highlight;
pub mod search;
pub mod selection;
pub mod tasks;

use search::matches_search;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Collection state owned by the composition root and read by the
/// presentation layer. The filtered view is always derived from
/// `characters` and the current query, never mutated on its own.
pub struct CharacterStore {
    characters: Vec<Character>,
    filtered: Vec<Character>,
    search_query: String,
    state: LoadState,
    generation: u64,
}

impl Default for CharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStore {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            filtered: Vec::new(),
            search_query: String::new(),
            state: LoadState::Idle,
            generation: 0,
        }
    }

    /// Enter `Loading` and hand out the generation token for this fetch.
    /// Previously loaded characters stay visible until the fetch resolves.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.generation
    }

    /// Apply a fetch outcome. Outcomes from a superseded fetch (a newer
    /// `begin_fetch` has happened) are discarded: last started wins.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<Character>, String>) {
        if generation != self.generation {
            tracing::warn!(
                generation,
                current = self.generation,
                "Discarding stale fetch outcome"
            );
            return;
        }

        match result {
            Ok(characters) => {
                tracing::debug!(count = characters.len(), "Replacing character collection");
                self.characters = characters;
                self.recompute_filtered();
                self.state = LoadState::Ready;
            }
            Err(message) => {
                self.state = LoadState::Failed(message);
            }
        }
    }

    /// Set the search query and synchronously recompute the filtered view.
    pub fn set_query(&mut self, query: String) {
        if self.search_query != query {
            self.search_query = query;
            self.recompute_filtered();
        }
    }

    fn recompute_filtered(&mut self) {
        self.filtered = self
            .characters
            .iter()
            .filter(|character| matches_search(&character.name, &self.search_query))
            .cloned()
            .collect();
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn filtered_characters(&self) -> &[Character] {
        &self.filtered
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
