pub mod errors;
pub mod models;

pub use errors::MortydexError;
pub use models::Character;
