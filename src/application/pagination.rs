/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/11/25
******************************************************************************/

//! Cursor-based pagination over Gencove list endpoints
//!
//! List responses are shaped `{meta: {count, next, previous}, results: [...]}`.
//! The server encodes the resume position in the `offset` query parameter of
//! the `next` URL; the paginator extracts it and replays the list call with
//! `offset`/`limit` until `next` comes back null.

use crate::error::AppError;
use crate::model::responses::Page;
use crate::transport::http_client::GencoveHttpClient;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

static OFFSET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]offset=(\d+)").expect("valid offset regex"));

/// Extracts the `offset` query parameter from a `next` page URL
///
/// # Arguments
/// * `next` - The `next` link reported in the page's `meta`
///
/// # Returns
/// * `Ok(u64)` - The offset encoded in the link
/// * `Err(AppError)` - If the link carries no parseable offset
pub fn extract_offset(next: &str) -> Result<u64, AppError> {
    OFFSET_RE
        .captures(next)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .ok_or_else(|| AppError::InvalidInput(format!("next link has no offset parameter: {next}")))
}

/// Lazy iterator over the pages of one list endpoint
///
/// Each [`Paginator::next_page`] call issues one request and yields that
/// page's `results`. The sequence is finite and non-restartable; to walk the
/// listing again, construct a new paginator. An empty first page (empty
/// `results`, null `next`) yields exactly one empty page and then stops;
/// callers treat it as "no items", not as an error.
pub struct Paginator<'a, C, T> {
    client: &'a C,
    path: String,
    limit: u32,
    extra_query: Vec<(String, String)>,
    next_offset: u64,
    more: bool,
    _marker: PhantomData<T>,
}

impl<'a, C, T> Paginator<'a, C, T>
where
    C: GencoveHttpClient,
    T: DeserializeOwned + Send,
{
    /// Creates a paginator over `path`, starting at offset 0
    ///
    /// # Arguments
    /// * `client` - Transport to issue the list calls on
    /// * `path` - Endpoint path of the list endpoint
    /// * `limit` - Page size requested from the server
    pub fn new(client: &'a C, path: impl Into<String>, limit: u32) -> Self {
        Self {
            client,
            path: path.into(),
            limit,
            extra_query: Vec::new(),
            next_offset: 0,
            more: true,
            _marker: PhantomData,
        }
    }

    /// Adds a fixed query parameter sent with every page request
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_query.push((key.into(), value.into()));
        self
    }

    /// Fetches the next page, or `None` once the listing is exhausted
    ///
    /// # Returns
    /// * `Ok(Some(results))` - The next page's items; may be empty
    /// * `Ok(None)` - The listing was already exhausted
    /// * `Err(AppError)` - A transport or API error; the paginator stays
    ///   usable, so a timed-out page fetch can be retried by calling again
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, AppError> {
        if !self.more {
            return Ok(None);
        }

        let mut query = vec![
            (String::from("offset"), self.next_offset.to_string()),
            (String::from("limit"), self.limit.to_string()),
        ];
        query.extend(self.extra_query.iter().cloned());

        let page: Page<T> = self
            .client
            .request(Method::GET, &self.path, Some(query.as_slice()), None::<&()>)
            .await?;

        match page.meta.next.as_deref() {
            Some(next) => {
                self.next_offset = extract_offset(next)?;
                debug!("{}: next page at offset {}", self.path, self.next_offset);
            }
            None => self.more = false,
        }

        Ok(Some(page.results))
    }

    /// Drains the paginator, concatenating every page's results
    ///
    /// Equivalent to a single call with `limit` set to the total count.
    pub async fn collect_all(mut self) -> Result<Vec<T>, AppError> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }
}
