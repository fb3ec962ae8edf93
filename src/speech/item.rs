use crate::pokedex::Item;
use crate::pokedex::text::title_case;
use crate::speech::Speech;

use regex::Regex;
use std::sync::LazyLock;

// "1.5x" → "1.5 times". Applied to the whole utterance, not only the
// description.
static MULTIPLIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9](\.[0-9])?)x").expect("Valid multiplier pattern"));

pub fn compose(item: &Item) -> Speech {
    let name = title_case(&item.name);

    let text = [
        format!("{name}, {}", item.desc),
        format!(
            "It was introduced in generation {}.",
            item.generation_introduced
        ),
        format!(
            "{name} is {}available in Generation 8.",
            if item.availability.is_past() {
                "not "
            } else {
                ""
            }
        ),
    ]
    .join(" ");

    Speech {
        title: format!("Dex Item Data for {name}"),
        text: MULTIPLIER.replace_all(&text, "$1 times").into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::Availability;

    fn item(name: &str, desc: &str) -> Item {
        Item {
            name: name.to_owned(),
            desc: desc.to_owned(),
            generation_introduced: 4,
            availability: Availability::Current,
        }
    }

    #[test]
    fn life_orb_speaks_multipliers() {
        let speech = compose(&item(
            "life orb",
            "Holder's attacks do 1.3x damage, and it loses 1/10 its max HP after the attack.",
        ));

        assert_eq!(speech.title, "Dex Item Data for Life Orb");
        assert_eq!(
            speech.text,
            "Life Orb, Holder's attacks do 1.3 times damage, and it loses 1/10 its max HP after the attack. \
             It was introduced in generation 4. \
             Life Orb is available in Generation 8."
        );
    }

    #[test]
    fn whole_multipliers_are_rewritten() {
        let text = compose(&item("metronome", "Damage is boosted up to 2x.")).text;

        assert!(text.contains("up to 2 times."));
        assert!(!text.contains("2x"));
    }

    #[test]
    fn past_items_are_not_available() {
        let soul_dew = Item {
            generation_introduced: 3,
            availability: Availability::Past,
            ..item("soul dew", "Boosts Latios and Latias.")
        };

        assert!(
            compose(&soul_dew)
                .text
                .ends_with("Soul Dew is not available in Generation 8.")
        );
    }

    #[test]
    fn plain_descriptions_are_untouched() {
        let text = compose(&item("leftovers", "Restores 1/16 max HP each turn.")).text;

        assert!(text.starts_with("Leftovers, Restores 1/16 max HP each turn. "));
        assert!(!text.contains("times"));
    }
}
