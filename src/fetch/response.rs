//! Lookup completions returned by the host.

use super::request::{RequestToken, QUERY_KEY, SOURCE_KEY, SOURCE_VALUE, TOKEN_KEY};
use crate::domain::{CharacterPage, FetchFailure};
use std::collections::BTreeMap;

/// The outcome of one lookup, tagged with the token it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub token: RequestToken,
    pub query: String,
    pub outcome: Result<CharacterPage, FetchFailure>,
}

/// Interprets a raw HTTP response as a character page.
///
/// # Errors
///
/// - [`FetchFailure::Status`] for any non-2xx status (the catalog answers 404
///   when nothing matches)
/// - [`FetchFailure::Decode`] when the body is not a character page
pub fn parse_characters(status: u16, body: &[u8]) -> Result<CharacterPage, FetchFailure> {
    if !(200..300).contains(&status) {
        return Err(FetchFailure::Status(status));
    }

    serde_json::from_slice(body).map_err(|e| FetchFailure::Decode(e.to_string()))
}

/// Decodes a host web-request result into a completion.
///
/// Returns `None` for results that were not issued by this plugin or whose
/// context lost the request token.
#[must_use]
pub fn completion_event(
    status: u16,
    body: &[u8],
    context: &BTreeMap<String, String>,
) -> Option<FetchCompletion> {
    if context.get(SOURCE_KEY).map(String::as_str) != Some(SOURCE_VALUE) {
        tracing::debug!("ignoring web request result from another source");
        return None;
    }

    let token = match context.get(TOKEN_KEY).map(|t| t.parse::<RequestToken>()) {
        Some(Ok(token)) => token,
        Some(Err(e)) => {
            tracing::debug!(error = %e, "malformed request token in context");
            return None;
        }
        None => {
            tracing::debug!("web request result without request token");
            return None;
        }
    };

    Some(FetchCompletion {
        token,
        query: context.get(QUERY_KEY).cloned().unwrap_or_default(),
        outcome: parse_characters(status, body),
    })
}
