use crate::Kind;

/// The only way a lookup can fail.
///
/// Transport failures, bad statuses and empty result lists all end up here so
/// callers never have to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no {kind} matches \"{query}\"")]
    NoMatch { kind: Kind, query: String },
}
