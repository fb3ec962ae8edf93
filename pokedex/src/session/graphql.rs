use super::Failure;
use crate::Kind;
use crate::pokemon::{Condition, Evolution, Gender};
use crate::r#move::{Accuracy, Category, Target};
use crate::Availability;

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

pub fn document(kind: Kind) -> &'static str {
    match kind {
        Kind::Pokemon => POKEMON,
        Kind::Move => MOVE,
        Kind::Item => ITEM,
        Kind::Ability => ABILITY,
    }
}

const POKEMON: &str = "query getFuzzyPokemon($pokemon: String!) {
  getFuzzyPokemon(pokemon: $pokemon) {
    species
    num
    evolutionLevel
    flavorTexts { flavor }
    types { name }
    height
    weight
    gender { male female }
    preevolutions {
      species
      evolutionLevel
      preevolutions { species evolutionLevel }
    }
    evolutions {
      species
      evolutionLevel
      evolutions { species evolutionLevel }
    }
  }
}";

const MOVE: &str = "query getFuzzyMove($move: String!) {
  getFuzzyMove(move: $move) {
    name
    shortDesc
    desc
    type
    basePower
    category
    pp
    priority
    accuracy
    target
    isZ
    isGMax
    isNonstandard
  }
}";

const ITEM: &str = "query getFuzzyItem($item: String!) {
  getFuzzyItem(item: $item) {
    name
    desc
    generationIntroduced
    isNonstandard
  }
}";

const ABILITY: &str = "query getFuzzyAbility($ability: String!) {
  getFuzzyAbility(ability: $ability) {
    name
    desc
    shortDesc
  }
}";

#[derive(Deserialize)]
pub struct Response<T> {
    data: Option<HashMap<String, Option<Vec<T>>>>,
    #[serde(default)]
    errors: Option<Vec<Message>>,
}

#[derive(Deserialize)]
struct Message {
    message: String,
}

impl<T> Response<T> {
    pub fn into_first(self, kind: Kind) -> Result<T, Failure> {
        if let Some(error) = self.errors.into_iter().flatten().next() {
            return Err(Failure::Rejected(error.message));
        }

        self.data
            .and_then(|mut data| data.remove(kind.operation()))
            .flatten()
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or(Failure::Empty)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    species: String,
    num: i32,
    #[serde(default)]
    evolution_level: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    flavor_texts: Vec<FlavorText>,
    #[serde(default, deserialize_with = "nullable")]
    types: Vec<Named>,
    height: f64,
    weight: f64,
    gender: GenderRatio,
    #[serde(default, deserialize_with = "nullable")]
    preevolutions: Vec<Stage>,
    #[serde(default, deserialize_with = "nullable")]
    evolutions: Vec<Stage>,
}

#[derive(Deserialize)]
struct FlavorText {
    flavor: String,
}

#[derive(Deserialize)]
struct Named {
    name: String,
}

#[derive(Deserialize)]
struct GenderRatio {
    male: String,
    female: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Stage {
    species: String,
    #[serde(default)]
    evolution_level: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    preevolutions: Vec<Stage>,
    #[serde(default, deserialize_with = "nullable")]
    evolutions: Vec<Stage>,
}

impl Pokemon {
    pub fn into_record(self) -> Result<crate::Pokemon, Failure> {
        let gender = Gender::parse(&self.gender.male, &self.gender.female)
            .map_err(|error| Failure::Invalid(error.to_string()))?;

        let flavor = self
            .flavor_texts
            .into_iter()
            .next()
            .map(|text| text.flavor)
            .ok_or_else(|| Failure::Invalid(format!("{} has no flavor text", self.species)))?;

        let mut preevolutions = Vec::new();
        flatten_preevolutions(
            self.evolution_level.as_deref(),
            self.preevolutions,
            &mut preevolutions,
        );

        let mut evolutions = Vec::new();
        flatten_evolutions(self.evolutions, &mut evolutions);

        Ok(crate::Pokemon {
            species: self.species,
            number: self.num,
            flavor,
            types: self
                .types
                .into_iter()
                .map(|type_| crate::pokemon::Type(type_.name))
                .collect(),
            height: self.height,
            weight: self.weight,
            gender,
            preevolutions,
            evolutions,
        })
    }
}

// A pre-evolution is left through the requirement of the stage after it,
// so the condition travels one step down the chain.
fn flatten_preevolutions(condition: Option<&str>, stages: Vec<Stage>, edges: &mut Vec<Evolution>) {
    for stage in stages {
        edges.push(Evolution {
            species: stage.species,
            condition: parse_condition(condition),
        });

        flatten_preevolutions(stage.evolution_level.as_deref(), stage.preevolutions, edges);
    }
}

fn flatten_evolutions(stages: Vec<Stage>, edges: &mut Vec<Evolution>) {
    for stage in stages {
        edges.push(Evolution {
            species: stage.species,
            condition: parse_condition(stage.evolution_level.as_deref()),
        });

        flatten_evolutions(stage.evolutions, edges);
    }
}

fn parse_condition(condition: Option<&str>) -> Option<Condition> {
    condition
        .filter(|condition| !condition.trim().is_empty())
        .map(Condition::parse)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    name: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    short_desc: String,
    #[serde(rename = "type")]
    type_: String,
    base_power: Scalar,
    category: String,
    pp: u32,
    priority: i32,
    accuracy: MoveAccuracy,
    target: String,
    #[serde(default)]
    is_z: Option<String>,
    #[serde(default)]
    is_g_max: Option<String>,
    #[serde(default)]
    is_nonstandard: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MoveAccuracy {
    Percent(u32),
    Always(bool),
}

impl Move {
    pub fn into_record(self) -> Result<crate::Move, Failure> {
        let accuracy = match self.accuracy {
            MoveAccuracy::Percent(accuracy) => Accuracy::Percent(accuracy),
            MoveAccuracy::Always(true) => Accuracy::AlwaysHits,
            MoveAccuracy::Always(false) => {
                return Err(Failure::Invalid(format!("{} has no accuracy", self.name)));
            }
        };

        Ok(crate::Move {
            name: self.name,
            desc: self.desc,
            short_desc: self.short_desc,
            type_: self.type_,
            category: Category::parse(&self.category),
            base_power: match self.base_power {
                Scalar::Number(power) => power.to_string(),
                Scalar::Text(power) => power,
            },
            pp: self.pp,
            priority: self.priority,
            accuracy,
            target: Target::parse(&self.target),
            z_crystal: self.is_z.filter(|crystal| !crystal.is_empty()),
            gmax: self.is_g_max.filter(|species| !species.is_empty()),
            availability: Availability::from_marker(self.is_nonstandard.as_deref()),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    desc: String,
    generation_introduced: u32,
    #[serde(default)]
    is_nonstandard: Option<String>,
}

impl Item {
    pub fn into_record(self) -> crate::Item {
        crate::Item {
            name: self.name,
            desc: self.desc,
            generation_introduced: self.generation_introduced,
            availability: Availability::from_marker(self.is_nonstandard.as_deref()),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    name: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    short_desc: String,
}

impl Ability {
    pub fn into_record(self) -> crate::Ability {
        crate::Ability {
            name: self.name,
            desc: self.desc,
            short_desc: self.short_desc,
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
