use crate::pokedex::Move;
use crate::pokedex::r#move::Accuracy;
use crate::pokedex::text::title_case;
use crate::speech::{self, Speech};

use regex::Regex;
use std::sync::LazyLock;

static ELECTRIC_OR_ICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(?i)(electric|ice)").expect("Valid type pattern"));

pub fn compose(move_: &Move) -> Speech {
    let name = title_case(&move_.name);

    let article = if ELECTRIC_OR_ICE.is_match(&move_.type_) {
        "an"
    } else {
        "a"
    };

    let power = if move_.category.is_damaging() {
        format!("has a base power of {}", move_.base_power)
    } else {
        "does not deal direct damage".to_owned()
    };

    let accuracy = match move_.accuracy {
        Accuracy::Percent(accuracy) => format!("an accuracy of {accuracy}%"),
        Accuracy::AlwaysHits => "it will never miss".to_owned(),
    };

    let text = speech::join([
        Some(format!("{name}, {}", move_.description())),
        Some(format!("{name} is {article} {} type move.", move_.type_)),
        Some(format!("{name} {power} and it has {} pp.", move_.pp)),
        Some(format!(
            "Under normal conditions this move will have a priority of {} and {accuracy}.",
            move_.priority
        )),
        Some(format!(
            "In battles with multiple Pokémon on each side it will have an effect on {}.",
            move_.target
        )),
        move_
            .z_crystal
            .as_ref()
            .map(|crystal| format!("This move is a Z Move and requires the Z-Crystal {crystal}.")),
        move_.gmax.as_ref().map(|species| {
            format!("This move is a G MAX move and can only be used by G Max {species}.")
        }),
        (!move_.availability.is_past())
            .then(|| format!("{name} is available in the generation 8 games.")),
    ]);

    Speech {
        title: format!("Dex Move Data for {name}"),
        text,
    }
}
