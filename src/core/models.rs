#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: u32,              // Unique and stable across pages (API-assigned)
    pub name: String,         // Display name
    pub image: String,        // Avatar URI
    pub episode: Vec<String>, // Episode URIs, order as delivered
    episode_count: usize,     // Derived from episode at construction
}

impl Character {
    pub fn new(id: u32, name: String, image: String, episode: Vec<String>) -> Self {
        let episode_count = episode.len();
        Character { id, name, image, episode, episode_count }
    }

    pub fn episode_count(&self) -> usize {
        self.episode_count
    }
}
