pub mod ability;
pub mod availability;
pub mod item;
pub mod r#move;
pub mod pokemon;
pub mod text;

pub use ability::Ability;
pub use availability::Availability;
pub use item::Item;
pub use r#move::Move;
pub use pokemon::Pokemon;
