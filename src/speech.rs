mod ability;
mod item;
mod r#move;
mod pokemon;

use crate::pokedex::Entry;

/// A composed answer, ready to be spoken and shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speech {
    pub title: String,
    pub text: String,
}

impl Speech {
    pub fn compose(entry: &Entry) -> Self {
        match entry {
            Entry::Pokemon(pokemon) => pokemon::compose(pokemon),
            Entry::Move(move_) => r#move::compose(move_),
            Entry::Item(item) => item::compose(item),
            Entry::Ability(ability) => ability::compose(ability),
        }
    }
}

/// Joins the present clauses with a single space, in order.
pub fn join(clauses: impl IntoIterator<Item = Option<String>>) -> String {
    clauses.into_iter().flatten().collect::<Vec<_>>().join(" ")
}
