use crate::pokedex::Pokemon;
use crate::pokedex::pokemon::{Evolution, Gender};
use crate::pokedex::text::title_case;
use crate::speech::{self, Speech};

pub fn compose(pokemon: &Pokemon) -> Speech {
    let name = title_case(&pokemon.species);

    let types = pokemon
        .types
        .iter()
        .map(|type_| type_.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let preevolutions = (!pokemon.preevolutions.is_empty()).then(|| {
        format!(
            "Its pre-evolution{} {}.",
            if pokemon.preevolutions.len() >= 2 {
                "s are"
            } else {
                " is"
            },
            chain(&pokemon.preevolutions)
        )
    });

    let evolutions = (!pokemon.evolutions.is_empty())
        .then(|| format!("It evolves into {}.", chain(&pokemon.evolutions)));

    let text = speech::join([
        Some(format!(
            "{name}, number {}, {}",
            pokemon.number, pokemon.flavor
        )),
        Some(format!("It is {types} type.")),
        preevolutions,
        evolutions,
        Some(format!(
            "{name} is typically {} meters tall and weighs about {} kilograms.",
            pokemon.height, pokemon.weight
        )),
        Some(gender(pokemon.gender)),
    ]);

    Speech {
        title: format!("Dex Pokémon Data for {name}"),
        text,
    }
}

fn chain(edges: &[Evolution]) -> String {
    edges
        .iter()
        .map(|edge| {
            let species = title_case(&edge.species);

            match &edge.condition {
                Some(condition) => format!("{species} ({condition})"),
                None => species,
            }
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

fn gender(gender: Gender) -> String {
    match gender {
        Gender::Genderless => "It is genderless.".to_owned(),
        Gender::Ratio { male, female } => {
            format!("It has a gender ratio of {male}% male and {female}% female.")
        }
    }
}
