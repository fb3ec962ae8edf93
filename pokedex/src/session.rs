mod graphql;

use crate::{Entry, Error, Kind};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl Session {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let user_agent = user_agent.into();

        log::info!("Dex session started (endpoint: {endpoint}, user agent: {user_agent})");

        Self {
            client: CLIENT.clone(),
            endpoint,
            user_agent,
        }
    }

    /// Fetches the best fuzzy match of the given kind.
    ///
    /// `query` is sent as is; an empty query is valid and left to the dex
    /// to rank.
    pub async fn fetch(&self, kind: Kind, query: &str) -> Result<Entry, Error> {
        log::info!("Querying {kind}: {query:?}");

        let entry = match kind {
            Kind::Pokemon => self
                .first::<graphql::Pokemon>(kind, query)
                .await
                .and_then(graphql::Pokemon::into_record)
                .map(Entry::Pokemon),
            Kind::Move => self
                .first::<graphql::Move>(kind, query)
                .await
                .and_then(graphql::Move::into_record)
                .map(Entry::Move),
            Kind::Item => self
                .first::<graphql::Item>(kind, query)
                .await
                .map(graphql::Item::into_record)
                .map(Entry::Item),
            Kind::Ability => self
                .first::<graphql::Ability>(kind, query)
                .await
                .map(graphql::Ability::into_record)
                .map(Entry::Ability),
        };

        entry.map_err(|failure| {
            log::warn!("{kind} lookup for {query:?} failed: {failure}");

            Error::NoMatch {
                kind,
                query: query.to_owned(),
            }
        })
    }

    async fn first<T: DeserializeOwned>(&self, kind: Kind, query: &str) -> Result<T, Failure> {
        #[derive(Serialize)]
        struct Request<'a> {
            query: &'static str,
            variables: BTreeMap<&'static str, &'a str>,
        }

        let request = Request {
            query: graphql::document(kind),
            variables: BTreeMap::from([(kind.variable(), query)]),
        };

        let response = self
            .post()
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let response: graphql::Response<T> = response.json().await?;

        response.into_first(kind)
    }

    fn post(&self) -> reqwest::RequestBuilder {
        self.client
            .post(&self.endpoint)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .build()
        .expect("Build reqwest client")
});

/// Why a lookup failed. Only ever logged; callers see [`Error::NoMatch`].
#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("query rejected: {0}")]
    Rejected(String),
    #[error("no candidates")]
    Empty,
    #[error("invalid record: {0}")]
    Invalid(String),
}
