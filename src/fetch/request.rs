//! Outbound lookup requests.
//!
//! A lookup is split in two by the plugin boundary: the plugin builds a
//! [`FetchRequest`] here, the host performs it, and the completion comes back
//! later as an event carrying the request's context map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Default catalog endpoint.
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api/character/";

/// Context key identifying requests issued by this plugin.
pub(crate) const SOURCE_KEY: &str = "source";
/// Context value identifying requests issued by this plugin.
pub(crate) const SOURCE_VALUE: &str = "charpick";
/// Context key carrying the request token.
pub(crate) const TOKEN_KEY: &str = "request_token";
/// Context key carrying the query the request was issued for.
pub(crate) const QUERY_KEY: &str = "query";

/// Monotonically increasing identifier attached to every lookup.
///
/// Only the completion of the most recently issued token is applied; older
/// completions are discarded when they arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Token preceding the first issued request.
    pub const ZERO: Self = Self(0);

    /// The token following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestToken {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A character lookup ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub query: String,
    pub url: String,
}

impl FetchRequest {
    /// Context map echoed back by the host with the response.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (SOURCE_KEY.to_string(), SOURCE_VALUE.to_string()),
            (TOKEN_KEY.to_string(), self.token.to_string()),
            (QUERY_KEY.to_string(), self.query.clone()),
        ])
    }
}

/// Builds the lookup URL for `query`, percent-encoding the search text.
///
/// # Examples
///
/// ```
/// use charpick::fetch::character_search_url;
///
/// let url = character_search_url("https://rickandmortyapi.com/api/character/", "rick & morty");
/// assert_eq!(url, "https://rickandmortyapi.com/api/character/?name=rick%20%26%20morty");
/// ```
#[must_use]
pub fn character_search_url(api_url: &str, query: &str) -> String {
    let separator = if api_url.contains('?') { '&' } else { '?' };
    format!("{api_url}{separator}name={}", urlencoding::encode(query))
}

/// Builds the request for one lookup of `query`.
#[must_use]
pub fn fetch_characters(api_url: &str, token: RequestToken, query: &str) -> FetchRequest {
    FetchRequest {
        token,
        query: query.to_string(),
        url: character_search_url(api_url, query),
    }
}
