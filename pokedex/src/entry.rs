use crate::{Ability, Item, Move, Pokemon};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Pokemon,
    Move,
    Item,
    Ability,
}

impl Kind {
    pub const ALL: [Self; 4] = [Self::Pokemon, Self::Move, Self::Item, Self::Ability];

    /// Name of the fuzzy query for this kind.
    pub fn operation(self) -> &'static str {
        match self {
            Self::Pokemon => "getFuzzyPokemon",
            Self::Move => "getFuzzyMove",
            Self::Item => "getFuzzyItem",
            Self::Ability => "getFuzzyAbility",
        }
    }

    /// Name of the single argument of [`Kind::operation`].
    pub fn variable(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Move => "move",
            Self::Item => "item",
            Self::Ability => "ability",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pokemon => "Pokémon",
            Self::Move => "move",
            Self::Item => "item",
            Self::Ability => "ability",
        })
    }
}

/// A single record resolved by the dex.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Pokemon(Pokemon),
    Move(Move),
    Item(Item),
    Ability(Ability),
}

impl Entry {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Pokemon(_) => Kind::Pokemon,
            Self::Move(_) => Kind::Move,
            Self::Item(_) => Kind::Item,
            Self::Ability(_) => Kind::Ability,
        }
    }
}
