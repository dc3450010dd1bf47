//! HTTP fetcher for the autocomplete endpoint
//!
//! This module performs one query against the remote API and classifies the
//! outcome for the crawler:
//! - a page of results (possibly empty)
//! - an explicit throttling rejection (HTTP 429)
//! - a transport-level failure (network error, other non-2xx status)
//!
//! A response body without a usable `results` field is treated as an empty
//! page: terminal for the branch, fatal for nothing.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Outcome of a single autocomplete query
#[derive(Debug)]
pub enum QueryOutcome {
    /// The endpoint answered with a page of results
    ///
    /// The page length never exceeds the endpoint's page cap; a shorter
    /// page means the result set under this prefix is exhausted.
    Page(Vec<String>),

    /// The endpoint rejected the call for exceeding the rate budget
    ///
    /// The caller cools down and replays the identical query.
    Throttled,

    /// The call failed at the transport level or with an unexpected status
    ///
    /// Terminal for the branch that issued it; siblings and ancestors are
    /// unaffected.
    TransportError(String),
}

/// Wire format of the autocomplete response body
#[derive(Debug, Deserialize)]
struct AutocompleteBody {
    #[serde(default)]
    results: Vec<String>,
}

/// Builds the HTTP client used for all queries in a run
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("namesweep/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Issues autocomplete queries against one endpoint
pub struct Fetcher {
    client: Client,
    endpoint: String,
    page_cap: usize,
}

impl Fetcher {
    /// Creates a fetcher for the given endpoint and page cap
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client to use
    /// * `endpoint` - Base URL of the autocomplete endpoint
    /// * `page_cap` - Maximum results the endpoint returns per query
    pub fn new(client: Client, endpoint: String, page_cap: usize) -> Self {
        Self {
            client,
            endpoint,
            page_cap,
        }
    }

    /// Queries the endpoint for one prefix and classifies the outcome
    ///
    /// Sends `GET <endpoint>?query=<prefix>&max_results=<page_cap>` and maps
    /// the response:
    ///
    /// | Condition | Outcome |
    /// |-----------|---------|
    /// | HTTP 2xx, valid body | Page(results) |
    /// | HTTP 2xx, malformed body | Page(empty) |
    /// | HTTP 429 | Throttled |
    /// | Other non-2xx | TransportError |
    /// | Network failure | TransportError |
    pub async fn query(&self, prefix: &str) -> QueryOutcome {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("query", prefix)])
            .query(&[("max_results", self.page_cap)]);

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                let error = if e.is_timeout() {
                    "Request timeout".to_string()
                } else if e.is_connect() {
                    "Connection failed".to_string()
                } else {
                    e.to_string()
                };
                return QueryOutcome::TransportError(error);
            }
        };

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return QueryOutcome::Throttled;
        }

        if !status.is_success() {
            return QueryOutcome::TransportError(format!("HTTP {}", status.as_u16()));
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => return QueryOutcome::TransportError(e.to_string()),
        };

        match serde_json::from_str::<AutocompleteBody>(&body) {
            Ok(parsed) => QueryOutcome::Page(parsed.results),
            Err(e) => {
                tracing::debug!("Malformed response for '{}': {}", prefix, e);
                QueryOutcome::Page(Vec::new())
            }
        }
    }

    /// Returns the page cap this fetcher was configured with
    pub fn page_cap(&self) -> usize {
        self.page_cap
    }
}
