pub mod entry;
pub mod session;

mod error;

pub use pokedex_core::{ability, item, pokemon, r#move, text};
pub use pokedex_core::{Ability, Availability, Item, Move, Pokemon};

pub use entry::{Entry, Kind};
pub use error::Error;
pub use session::Session;
