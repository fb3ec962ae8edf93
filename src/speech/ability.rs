use crate::pokedex::Ability;
use crate::pokedex::text::title_case;
use crate::speech::Speech;

pub fn compose(ability: &Ability) -> Speech {
    let name = title_case(&ability.name);

    Speech {
        title: format!("Dex Ability Data for {name}"),
        text: format!("{name}, {}", ability.description()),
    }
}
