//! # Card Search
//!
//! [`SearchPortal`] is the seam between collections and a remote card
//! database: a query goes in, raw card entries come out. [`ScryfallPortal`]
//! talks to <https://api.scryfall.com>, following `next_page` cursors until the
//! results run out or `max_cards` is reached.
//!
//! Scryfall asks clients to wait 50-100ms between requests. The portal waits
//! at least [`MIN_REQUEST_DELAY`] before every request.

use crate::error::{Result, ScrollError};
use crate::normalize::RawCard;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::thread;
use std::time::Duration;

pub const SCRYFALL_SEARCH_URL: &str = "https://api.scryfall.com/cards/search";
pub const MIN_REQUEST_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_MAX_CARDS: usize = 1000;

const USER_AGENT_VALUE: &str = concat!("scrollrack/", env!("CARGO_PKG_VERSION"));

/// Cards returned by a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub cards: Vec<RawCard>,
    /// More results existed but `max_cards` stopped pagination.
    pub truncated: bool,
}

pub trait SearchPortal {
    fn search(&self, query: &str, max_cards: usize) -> Result<SearchResults>;
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<RawCard>,
    #[serde(default)]
    next_page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    details: String,
}

pub struct ScryfallPortal {
    client: reqwest::blocking::Client,
    endpoint: String,
    delay: Duration,
}

impl ScryfallPortal {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: SCRYFALL_SEARCH_URL.to_string(),
            delay: DEFAULT_REQUEST_DELAY,
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the wait before each request, never below [`MIN_REQUEST_DELAY`].
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay.max(MIN_REQUEST_DELAY);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn fetch(&self, request: reqwest::blocking::RequestBuilder) -> Result<SearchPage> {
        thread::sleep(self.delay);
        let response = request.send()?;
        let status = response.status();
        tracing::debug!(url = %response.url(), %status, "Search page fetched");

        if status.is_success() {
            return Ok(response.json::<SearchPage>()?);
        }

        let error: ApiError = response.json().unwrap_or_else(|_| ApiError {
            code: String::new(),
            details: status.to_string(),
        });
        // A query with no matches is a 404, not a failure
        if status == reqwest::StatusCode::NOT_FOUND && error.code == "not_found" {
            return Ok(SearchPage {
                data: Vec::new(),
                next_page: None,
            });
        }
        Err(ScrollError::Search(error.details))
    }
}

impl SearchPortal for ScryfallPortal {
    fn search(&self, query: &str, max_cards: usize) -> Result<SearchResults> {
        let url = reqwest::Url::parse_with_params(&self.endpoint, &[("q", query)])
            .map_err(|e| ScrollError::Search(format!("bad endpoint {}: {e}", self.endpoint)))?;
        let results = collect_pages(max_cards, |next| match next {
            None => self.fetch(self.client.get(url.clone())),
            Some(next) => self.fetch(self.client.get(next)),
        })?;
        if results.truncated {
            tracing::warn!(query, max_cards, "Some cards were not pulled, max cards reached");
        }
        Ok(results)
    }
}

/// Follows `next_page` cursors until they run out or `max_cards` is reached.
///
/// `fetch` gets `None` for the first page and the cursor URL after that. The
/// first page is always fetched. Results past `max_cards` are cut, and
/// `truncated` is set whenever more cards existed than were returned.
fn collect_pages<F>(max_cards: usize, mut fetch: F) -> Result<SearchResults>
where
    F: FnMut(Option<&str>) -> Result<SearchPage>,
{
    let mut page = fetch(None)?;
    let mut cards = std::mem::take(&mut page.data);

    while cards.len() < max_cards {
        let Some(next) = page.next_page.take() else {
            break;
        };
        page = fetch(Some(&next))?;
        cards.append(&mut page.data);
    }

    let truncated = page.next_page.is_some() || cards.len() > max_cards;
    cards.truncate(max_cards);
    Ok(SearchResults { cards, truncated })
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;

    /// Serves canned results and records the queries it saw.
    #[derive(Default)]
    pub struct FakePortal {
        pub results: SearchResults,
        pub queries: RefCell<Vec<(String, usize)>>,
    }

    impl FakePortal {
        pub fn with_cards(cards: Vec<RawCard>, truncated: bool) -> Self {
            Self {
                results: SearchResults { cards, truncated },
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl SearchPortal for FakePortal {
        fn search(&self, query: &str, max_cards: usize) -> Result<SearchResults> {
            self.queries
                .borrow_mut()
                .push((query.to_string(), max_cards));
            Ok(self.results.clone())
        }
    }
}
