pub mod api;
pub mod core;
pub mod store;

pub use self::api::{
    CharacterApi,
    CharacterSource,
};
pub use self::core::{
    errors::MortydexError,
    models::Character,
};
pub use self::store::{
    selection::SelectionState,
    tasks::{
        FetchManager,
        FetchOutcome,
    },
    CharacterStore,
    LoadState,
};
