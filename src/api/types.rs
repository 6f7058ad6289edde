use serde::{
    Deserialize,
    Serialize,
};

use crate::core::models::Character;

/// Pagination block of a collection response. `next`/`prev` are full page
/// URLs, null at the ends of the chain.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<ApiCharacter>,
}

/// One character record as the API delivers it. Only the consumed fields
/// are listed; anything else in the payload is ignored on decode.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiCharacter {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub episode: Vec<String>,
}

impl From<ApiCharacter> for Character {
    fn from(raw: ApiCharacter) -> Self {
        Character::new(raw.id, raw.name, raw.image, raw.episode)
    }
}
