use crate::Availability;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub desc: Option<String>,
    pub short_desc: String,
    pub type_: String,
    pub category: Category,
    pub base_power: String,
    pub pp: u32,
    pub priority: i32,
    pub accuracy: Accuracy,
    pub target: Target,
    /// Name of the Z-Crystal this move requires, if it is a Z-Move.
    pub z_crystal: Option<String>,
    /// Species that can use this move as a G-Max move.
    pub gmax: Option<String>,
    pub availability: Availability,
}

impl Move {
    pub fn description(&self) -> &str {
        self.desc
            .as_deref()
            .filter(|desc| !desc.is_empty())
            .unwrap_or(&self.short_desc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Physical,
    Special,
    Status,
}

impl Category {
    pub fn parse(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "status" => Self::Status,
            "special" => Self::Special,
            _ => Self::Physical,
        }
    }

    pub fn is_damaging(self) -> bool {
        self != Self::Status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Percent(u32),
    AlwaysHits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Normal,
    Any,
    AdjacentAlly,
    AdjacentAllyOrSelf,
    AdjacentFoe,
    AllAdjacent,
    AllAdjacentFoes,
    Allies,
    AllySide,
    AllyTeam,
    FoeSide,
    All,
    RandomNormal,
    Scripted,
    User,
    Other(String),
}

impl Target {
    /// Accepts both the battle engine spelling (`allAdjacentFoes`) and
    /// humanized variants (`All Adjacent Foes`).
    pub fn parse(target: &str) -> Self {
        let key: String = target
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "normal" => Self::Normal,
            "any" => Self::Any,
            "adjacentally" => Self::AdjacentAlly,
            "adjacentallyorself" => Self::AdjacentAllyOrSelf,
            "adjacentfoe" => Self::AdjacentFoe,
            "alladjacent" => Self::AllAdjacent,
            "alladjacentfoes" => Self::AllAdjacentFoes,
            "allies" => Self::Allies,
            "allyside" => Self::AllySide,
            "allyteam" => Self::AllyTeam,
            "foeside" => Self::FoeSide,
            "all" => Self::All,
            "randomnormal" => Self::RandomNormal,
            "scripted" => Self::Scripted,
            "self" | "user" => Self::User,
            _ => Self::Other(target.trim().to_owned()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "one adjacent Pokémon of the user's choice",
            Self::Any => "any one Pokémon on the field",
            Self::AdjacentAlly => "one adjacent ally",
            Self::AdjacentAllyOrSelf => "either the user or one adjacent ally",
            Self::AdjacentFoe => "one adjacent foe",
            Self::AllAdjacent => "all adjacent Pokémon, including allies",
            Self::AllAdjacentFoes => "all adjacent foes",
            Self::Allies => "the user and all of its allies",
            Self::AllySide => "the user's side of the field",
            Self::AllyTeam => "every Pokémon on the user's team",
            Self::FoeSide => "the opposing side of the field",
            Self::All => "the entire field",
            Self::RandomNormal => "one random adjacent foe",
            Self::Scripted => "the Pokémon that last damaged the user",
            Self::User => "the user itself",
            Self::Other(target) => target,
        })
    }
}
