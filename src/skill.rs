use crate::pokedex::text::strip_diacritics;
use crate::pokedex::{Entry, Error, Kind, Session};
use crate::speech::{self, Speech};

use serde_json::json;

const REPROMPT: &str = "I did not quite catch that, could you repeat it?";

/// Resolves the best record of a kind for a free-text query.
pub trait Dex: Send + Sync {
    fn lookup(&self, kind: Kind, query: &str) -> impl Future<Output = Result<Entry, Error>> + Send;
}

impl Dex for Session {
    async fn lookup(&self, kind: Kind, query: &str) -> Result<Entry, Error> {
        self.fetch(kind, query).await
    }
}

/// An intent that asks the dex about one kind of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent(pub Kind);

impl Intent {
    pub const ALL: [Self; 4] = [
        Self(Kind::Pokemon),
        Self(Kind::Move),
        Self(Kind::Item),
        Self(Kind::Ability),
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|intent| intent.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            Kind::Pokemon => "DexIntent",
            Kind::Move => "MoveIntent",
            Kind::Item => "ItemIntent",
            Kind::Ability => "AbilityIntent",
        }
    }

    pub fn slot(self) -> &'static str {
        match self.0 {
            Kind::Pokemon => "POKEMON",
            Kind::Move => "MOVE",
            Kind::Item => "ITEM",
            Kind::Ability => "ABILITY",
        }
    }

    fn utterances(self) -> Vec<String> {
        let slot = format!("{{{}}}", self.slot());

        match self.0 {
            Kind::Pokemon => vec![
                format!("data on {slot}"),
                format!("pokemon data for {slot}"),
                format!("pokemon data {slot}"),
            ],
            Kind::Move => vec![format!("move data for {slot}"), format!("move data {slot}")],
            Kind::Item => vec![format!("item data {slot}"), format!("item data for {slot}")],
            Kind::Ability => vec![
                format!("ability data for {slot}"),
                format!("ability data {slot}"),
            ],
        }
    }
}

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// What the voice platform asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Launch,
    Search {
        intent: Intent,
        value: Option<String>,
    },
    Help,
    Cancel,
    Stop,
    SessionEnded,
    Unknown {
        intent: Option<String>,
    },
}

impl Request {
    pub fn intent(name: &str, slot: impl Fn(&str) -> Option<String>) -> Self {
        match name {
            HELP_INTENT => Self::Help,
            CANCEL_INTENT => Self::Cancel,
            STOP_INTENT => Self::Stop,
            _ => match Intent::parse(name) {
                Some(intent) => Self::Search {
                    intent,
                    value: slot(intent.slot()),
                },
                None => Self::Unknown {
                    intent: Some(name.to_owned()),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub speech: String,
    pub card: Option<Speech>,
    pub reprompt: Option<String>,
    pub keep_open: bool,
}

impl Response {
    fn say(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            card: None,
            reprompt: None,
            keep_open: true,
        }
    }

    fn reprompt(self, reprompt: impl Into<String>) -> Self {
        Self {
            reprompt: Some(reprompt.into()),
            ..self
        }
    }

    fn end(self) -> Self {
        Self {
            keep_open: false,
            ..self
        }
    }
}

pub struct Skill<D> {
    dex: D,
}

impl<D: Dex> Skill<D> {
    pub fn new(dex: D) -> Self {
        Self { dex }
    }

    pub async fn handle(&self, request: Request) -> Response {
        match request {
            Request::Launch => launch(),
            Request::Search { intent, value } => self.search(intent, value).await,
            Request::Help => help(),
            Request::Cancel => Response::say("No problem. Request cancelled.").end(),
            Request::Stop => Response::say("Don't you worry, I'll be back").end(),
            Request::SessionEnded => {
                log::info!("Session ended");

                Response::say("").end()
            }
            Request::Unknown { intent } => {
                log::error!("Unknown intent: {intent:?}");

                system_failure()
            }
        }
    }

    async fn search(&self, intent: Intent, value: Option<String>) -> Response {
        let query = value.as_deref().map(strip_diacritics).unwrap_or_default();

        match self.dex.lookup(intent.0, &query).await {
            Ok(entry) => {
                let speech = Speech::compose(&entry);

                Response {
                    speech: speech.text.clone(),
                    card: Some(speech),
                    reprompt: None,
                    keep_open: true,
                }
            }
            Err(error) => {
                log::warn!("{error}");

                apology(intent, &query)
            }
        }
    }
}

fn launch() -> Response {
    Response::say(
        [
            "Welcome to Dexa, your one stop place for PokéDex information.",
            "You can start browsing right away by giving me a command, or respond with \"help\" to learn all my commands.",
            "If you want to stop Dexa, then respond with \"Alexa Stop\".",
        ]
        .join(" "),
    )
    .reprompt(REPROMPT)
}

fn help() -> Response {
    Response::say(
        [
            "Dexa provides many sources of information, Pokémon, Items, Abilities and Moves. Respectively these can be invoked with.",
            "1: Ask Dexa Browser pokémon data.",
            "2: Ask Dexa Browser item data.",
            "3: Ask Dexa Browser ability data.",
            "4: Ask Dexa Browser move data.",
            "",
            "You can always stop or cancel anything I am saying by saying \"Alexa Stop\" or \"Alexa Cancel\".",
            "If you want to start browsing you can request something now.",
        ]
        .join("\n"),
    )
    .reprompt(REPROMPT)
}

/// Echoes what the user asked for and invites a retry.
fn apology(intent: Intent, query: &str) -> Response {
    let (missing, hint) = match intent.0 {
        Kind::Pokemon => ("a Pokémon", "Are you sure you spelled that correctly?"),
        Kind::Move => ("a Move", "I only support moves that are used inside battles."),
        Kind::Item => ("an Item", "Is that really an item that can be used in battle?"),
        Kind::Ability => ("an Ability", "Are you sure you spelled that correctly?"),
    };

    let query = query.trim();

    let text = speech::join([
        Some(if query.is_empty() {
            "I am sorry but I could not resolve that query.".to_owned()
        } else {
            format!("I couldn't find {missing} for {query}.")
        }),
        (!query.is_empty()).then(|| hint.to_owned()),
        Some("Maybe try again, or respond with \"Alexa Cancel\" if you want to stop.".to_owned()),
    ]);

    Response::say(text.clone()).reprompt(text)
}

pub fn system_failure() -> Response {
    Response::say(
        "Something went awfully wrong browsing my dataset. \
         Please use \"Alexa ask Dexa Browser for help\" if you are unsure how to use Dexa",
    )
}

/// The intents, slots and sample utterances this skill understands.
pub fn interaction_model() -> serde_json::Value {
    let mut intents: Vec<_> = Intent::ALL
        .into_iter()
        .map(|intent| {
            json!({
                "name": intent.name(),
                "slots": [{ "name": intent.slot(), "type": intent.slot() }],
                "samples": intent.utterances(),
            })
        })
        .collect();

    intents.extend([
        json!({
            "name": HELP_INTENT,
            "slots": [],
            "samples": ["what are your commands", "for help", "help"],
        }),
        json!({
            "name": CANCEL_INTENT,
            "slots": [],
            "samples": ["cancel", "quit"],
        }),
        json!({
            "name": STOP_INTENT,
            "slots": [],
            "samples": ["stop", "end"],
        }),
    ]);

    json!({
        "interactionModel": {
            "languageModel": {
                "invocationName": "dexa browser",
                "intents": intents,
            }
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pokedex::Ability;

    use std::collections::HashMap;
    use std::sync::Mutex;

    /// An in-memory dex that records every query it receives.
    #[derive(Default)]
    pub struct Fake {
        entries: HashMap<(Kind, String), Entry>,
        pub queries: Mutex<Vec<(Kind, String)>>,
    }

    impl Fake {
        pub fn with(mut self, query: &str, entry: Entry) -> Self {
            let _ = self.entries.insert((entry.kind(), query.to_owned()), entry);
            self
        }
    }

    impl Dex for Fake {
        async fn lookup(&self, kind: Kind, query: &str) -> Result<Entry, Error> {
            self.queries
                .lock()
                .expect("Lock queries")
                .push((kind, query.to_owned()));

            self.entries
                .get(&(kind, query.to_owned()))
                .cloned()
                .ok_or_else(|| Error::NoMatch {
                    kind,
                    query: query.to_owned(),
                })
        }
    }

    pub fn levitate() -> Entry {
        Entry::Ability(Ability {
            name: "levitate".to_owned(),
            desc: None,
            short_desc: "This Pokemon is immune to Ground-type attacks.".to_owned(),
        })
    }

    fn search(intent: Kind, value: &str) -> Request {
        Request::Search {
            intent: Intent(intent),
            value: Some(value.to_owned()),
        }
    }

    #[tokio::test]
    async fn found_entries_are_spoken_with_a_card() {
        let skill = Skill::new(Fake::default().with("levitate", levitate()));

        let response = skill.handle(search(Kind::Ability, "levitate")).await;

        assert_eq!(
            response.speech,
            "Levitate, This Pokemon is immune to Ground-type attacks."
        );
        assert_eq!(
            response.card.map(|card| card.title),
            Some("Dex Ability Data for Levitate".to_owned())
        );
        assert!(response.keep_open);
    }

    #[tokio::test]
    async fn queries_are_stripped_of_diacritics() {
        let skill = Skill::new(Fake::default());

        let response = skill.handle(search(Kind::Pokemon, "Flabébé")).await;

        assert_eq!(
            *skill.dex.queries.lock().expect("Lock queries"),
            vec![(Kind::Pokemon, "Flabebe".to_owned())]
        );
        assert_eq!(
            response.speech,
            "I couldn't find a Pokémon for Flabebe. Are you sure you spelled that correctly? \
             Maybe try again, or respond with \"Alexa Cancel\" if you want to stop."
        );
        assert_eq!(response.reprompt.as_deref(), Some(response.speech.as_str()));
        assert!(response.keep_open);
        assert!(response.card.is_none());
    }

    #[tokio::test]
    async fn apologies_depend_on_the_intent() {
        let skill = Skill::new(Fake::default());

        for (kind, expected) in [
            (Kind::Move, "I couldn't find a Move for hyper beem. I only support moves"),
            (Kind::Item, "I couldn't find an Item for hyper beem. Is that really an item"),
            (Kind::Ability, "I couldn't find an Ability for hyper beem. Are you sure"),
        ] {
            let response = skill.handle(search(kind, "hyper beem")).await;

            assert!(response.speech.starts_with(expected), "{}", response.speech);
            assert!(response.keep_open);
        }
    }

    #[tokio::test]
    async fn missing_slot_value_is_still_queried() {
        let skill = Skill::new(Fake::default());

        let response = skill
            .handle(Request::Search {
                intent: Intent(Kind::Item),
                value: None,
            })
            .await;

        assert_eq!(
            *skill.dex.queries.lock().expect("Lock queries"),
            vec![(Kind::Item, String::new())]
        );
        assert_eq!(
            response.speech,
            "I am sorry but I could not resolve that query. \
             Maybe try again, or respond with \"Alexa Cancel\" if you want to stop."
        );
    }

    #[tokio::test]
    async fn only_cancel_and_stop_end_the_session() {
        let skill = Skill::new(Fake::default());

        let launch = skill.handle(Request::Launch).await;
        assert!(launch.keep_open);
        assert!(launch.speech.starts_with("Welcome to Dexa"));
        assert_eq!(launch.reprompt.as_deref(), Some(REPROMPT));

        let help = skill.handle(Request::Help).await;
        assert!(help.keep_open);
        assert!(help.speech.contains("4: Ask Dexa Browser move data."));

        let cancel = skill.handle(Request::Cancel).await;
        assert!(!cancel.keep_open);
        assert_eq!(cancel.speech, "No problem. Request cancelled.");

        let stop = skill.handle(Request::Stop).await;
        assert!(!stop.keep_open);
        assert_eq!(stop.speech, "Don't you worry, I'll be back");
    }

    #[tokio::test]
    async fn unknown_intents_get_a_generic_apology() {
        let skill = Skill::new(Fake::default());

        let response = skill
            .handle(Request::Unknown {
                intent: Some("AMAZON.FallbackIntent".to_owned()),
            })
            .await;

        assert!(response.speech.starts_with("Something went awfully wrong"));
        assert!(response.keep_open);
        assert!(skill.dex.queries.lock().expect("Lock queries").is_empty());
    }

    #[test]
    fn intents_are_recognized_by_name() {
        let slot = |name: &str| (name == "MOVE").then(|| "surf".to_owned());

        assert_eq!(
            Request::intent("MoveIntent", slot),
            Request::Search {
                intent: Intent(Kind::Move),
                value: Some("surf".to_owned()),
            }
        );
        assert_eq!(
            Request::intent("DexIntent", slot),
            Request::Search {
                intent: Intent(Kind::Pokemon),
                value: None,
            }
        );
        assert_eq!(Request::intent(HELP_INTENT, slot), Request::Help);
        assert_eq!(Request::intent(CANCEL_INTENT, slot), Request::Cancel);
        assert_eq!(Request::intent(STOP_INTENT, slot), Request::Stop);
        assert_eq!(
            Request::intent("AMAZON.FallbackIntent", slot),
            Request::Unknown {
                intent: Some("AMAZON.FallbackIntent".to_owned())
            }
        );
    }

    #[test]
    fn interaction_model_lists_every_intent() {
        let model = interaction_model();
        let intents = model["interactionModel"]["languageModel"]["intents"]
            .as_array()
            .expect("Intents");

        let names: Vec<_> = intents
            .iter()
            .filter_map(|intent| intent["name"].as_str())
            .collect();

        assert_eq!(
            names,
            [
                "DexIntent",
                "MoveIntent",
                "ItemIntent",
                "AbilityIntent",
                HELP_INTENT,
                CANCEL_INTENT,
                STOP_INTENT,
            ]
        );
        assert_eq!(intents[0]["samples"][0], "data on {POKEMON}");
        assert_eq!(intents[1]["slots"][0]["name"], "MOVE");
    }
}
