//! The JSON envelope exchanged with the voice platform.
use crate::skill::{self, Request};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    pub request: RequestBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestEnvelope {
    pub fn into_request(self) -> Request {
        let RequestBody { type_, intent, .. } = self.request;

        match (type_.as_str(), intent) {
            ("LaunchRequest", _) => Request::Launch,
            ("SessionEndedRequest", _) => Request::SessionEnded,
            ("IntentRequest", Some(intent)) => Request::intent(&intent.name, |slot| {
                intent
                    .slots
                    .get(slot)
                    .and_then(|slot| slot.value.clone())
            }),
            (_, intent) => Request::Unknown {
                intent: intent.map(|intent| intent.name),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: BTreeMap<String, String>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            type_: "SSML",
            ssml: format!("<speak>{}</speak>", escape(text)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub title: String,
    pub content: String,
}

impl From<skill::Response> for ResponseEnvelope {
    fn from(response: skill::Response) -> Self {
        Self {
            version: "1.0",
            session_attributes: BTreeMap::new(),
            response: ResponseBody {
                output_speech: (!response.speech.is_empty())
                    .then(|| OutputSpeech::ssml(&response.speech)),
                card: response.card.map(|speech| Card {
                    type_: "Simple",
                    title: speech.title,
                    content: speech.text,
                }),
                reprompt: response.reprompt.map(|reprompt| Reprompt {
                    output_speech: OutputSpeech::ssml(&reprompt),
                }),
                should_end_session: !response.keep_open,
            },
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::Kind;
    use crate::skill::Intent as SkillIntent;

    fn parse(json: &str) -> Request {
        serde_json::from_str::<RequestEnvelope>(json)
            .expect("Valid envelope")
            .into_request()
    }

    #[test]
    fn intent_requests_carry_their_slot() {
        assert_eq!(
            parse(
                r#"{"request":{"type":"IntentRequest","intent":{"name":"DexIntent",
                    "slots":{"POKEMON":{"name":"POKEMON","value":"dragonite"}}}}}"#
            ),
            Request::Search {
                intent: SkillIntent(Kind::Pokemon),
                value: Some("dragonite".to_owned()),
            }
        );

        assert_eq!(
            parse(
                r#"{"request":{"type":"IntentRequest","intent":{"name":"ItemIntent",
                    "slots":{"ITEM":{"name":"ITEM"}}}}}"#
            ),
            Request::Search {
                intent: SkillIntent(Kind::Item),
                value: None,
            }
        );
    }

    #[test]
    fn lifecycle_requests_are_recognized() {
        assert_eq!(
            parse(r#"{"request":{"type":"LaunchRequest","requestId":"1"}}"#),
            Request::Launch
        );
        assert_eq!(
            parse(r#"{"request":{"type":"SessionEndedRequest","reason":"USER_INITIATED"}}"#),
            Request::SessionEnded
        );
        assert_eq!(
            parse(r#"{"request":{"type":"IntentRequest"}}"#),
            Request::Unknown { intent: None }
        );
    }

    #[test]
    fn responses_are_wrapped_in_ssml() {
        let envelope = ResponseEnvelope::from(skill::Response {
            speech: "Tom & Jerry <3".to_owned(),
            card: None,
            reprompt: None,
            keep_open: true,
        });

        let json = serde_json::to_value(&envelope).expect("Serialize envelope");

        assert_eq!(json["version"], "1.0");
        assert_eq!(
            json["response"]["outputSpeech"]["ssml"],
            "<speak>Tom &amp; Jerry &lt;3</speak>"
        );
        assert_eq!(json["response"]["shouldEndSession"], false);
        assert!(json["response"].get("card").is_none());
        assert!(json["response"].get("reprompt").is_none());
    }

    #[test]
    fn silent_responses_have_no_speech() {
        let envelope = ResponseEnvelope::from(skill::Response {
            speech: String::new(),
            card: None,
            reprompt: None,
            keep_open: false,
        });

        let json = serde_json::to_value(&envelope).expect("Serialize envelope");

        assert!(json["response"].get("outputSpeech").is_none());
        assert_eq!(json["response"]["shouldEndSession"], true);
    }
}
