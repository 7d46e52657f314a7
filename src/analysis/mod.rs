pub mod mana;
pub mod types;

pub use mana::*;
pub use types::*;
