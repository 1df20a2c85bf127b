//! DuckDuckGo HTML search: one GET, first organic result link.

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info, instrument};

use crate::{LinkSearcher, SearchConfig};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

static RE_RESULT_ANCHOR: OnceLock<Regex> = OnceLock::new();
static RE_HREF: OnceLock<Regex> = OnceLock::new();

/// [`LinkSearcher`] over the DuckDuckGo HTML endpoint.
#[derive(Clone)]
pub struct DuckDuckGoSearcher {
    http: reqwest::Client,
    base_url: String,
}

impl DuckDuckGoSearcher {
    pub fn new(config: &dyn SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }
}

#[async_trait]
impl LinkSearcher for DuckDuckGoSearcher {
    #[instrument(skip(self))]
    async fn first_link(&self, query: &str) -> Result<Option<String>> {
        let html = self
            .http
            .get(&self.base_url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!(bytes = html.len(), "Search page received");
        let link = extract_first_link(&html);
        info!(query = %query, link = ?link, "Search finished");
        Ok(link)
    }
}

/// Returns the first organic result link of a DuckDuckGo HTML results page.
///
/// Result anchors carry `class="result__a"`; their `href` is usually a `//duckduckgo.com/l/?uddg=<encoded>`
/// redirect which is unwrapped. Ad redirects (links back to duckduckgo.com) are skipped.
pub fn extract_first_link(html: &str) -> Option<String> {
    let anchor = RE_RESULT_ANCHOR.get_or_init(|| {
        Regex::new(r#"<a\s[^>]*class="[^"]*\bresult__a\b[^"]*"[^>]*>"#).expect("valid regex")
    });
    let href = RE_HREF.get_or_init(|| Regex::new(r#"href="([^"]*)""#).expect("valid regex"));

    anchor
        .find_iter(html)
        .filter_map(|tag| href.captures(tag.as_str()))
        .filter_map(|caps| unwrap_redirect(&caps[1]))
        .find(|link| !is_duckduckgo(link))
}

fn unwrap_redirect(raw: &str) -> Option<String> {
    let href = raw.replace("&amp;", "&");
    let href = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href
    };

    if let Some(pos) = href.find("uddg=") {
        let encoded = href[pos + 5..].split('&').next().unwrap_or_default();
        return urlencoding::decode(encoded).ok().map(|s| s.into_owned());
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        Some(href)
    } else {
        None
    }
}

fn is_duckduckgo(link: &str) -> bool {
    reqwest::Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.ends_with("duckduckgo.com")))
        .unwrap_or(true)
}
