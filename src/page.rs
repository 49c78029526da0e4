// src/page.rs

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::{REQUEST_TIMEOUT, USER_AGENT};
use crate::table::cell::cell_text;

static FIRST_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#firstHeading").expect("CSS selector for #firstHeading"));
static H1: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").expect("CSS selector for h1"));

/// Blocking HTTP client used for the page fetch.
pub fn client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .context("building HTTP client")
}

/// A fetched and parsed wiki article.
pub struct Page {
    pub url: Url,
    pub document: Html,
}

impl Page {
    #[instrument(level = "info", skip(client))]
    pub fn fetch(client: &Client, url: &str) -> Result<Self> {
        let url = Url::parse(url.trim()).with_context(|| format!("invalid page url {:?}", url))?;
        debug!("Fetching text from {}", url);
        let body = client
            .get(url.clone())
            .send()
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", url))?
            .text()
            .with_context(|| format!("Reading text from {}", url))?;
        info!(bytes = body.len(), "Fetched page");
        Ok(Self::parse(url, &body))
    }

    pub fn parse(url: Url, html: &str) -> Self {
        Self {
            url,
            document: Html::parse_document(html),
        }
    }

    /// Trimmed text of the article's top-level heading.
    pub fn title(&self) -> Result<String> {
        let heading = self
            .document
            .select(&FIRST_HEADING)
            .next()
            .or_else(|| self.document.select(&H1).next());
        let title = match heading {
            Some(el) => cell_text(el),
            None => bail!("{} has no top-level heading", self.url),
        };
        if title.is_empty() {
            bail!("{} has an empty top-level heading", self.url);
        }
        Ok(title)
    }
}
