//! # Title/link resolver
//!
//! Turns a free-text movie description into title, description and a viewing link: one
//! completion request to the language model, then one web search for the parsed title.
//! A model failure becomes [`Resolution::Failed`]; a search failure only replaces the link with
//! [`LINK_NOT_FOUND`].

mod benchmark;
mod parse;

pub use benchmark::{run_benchmark, BenchmarkRun};
pub use parse::{parse_model_answer, ParsedAnswer};

use llm_client::LlmClient;
use prompt::movie_request_messages;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use web_search::LinkSearcher;

/// Link line used when the search fails or finds nothing.
pub const LINK_NOT_FOUND: &str = "❗️Ссылка не найдена";

/// Prefix of the user-visible error line for a failed model call.
pub const MODEL_ERROR_PREFIX: &str = "❗️ Ошибка при обращении к модели: ";

/// Query sent to the web search for `title`.
pub fn link_search_query(title: &str) -> String {
    format!("Фильм {} смотреть онлайн", title.to_uppercase())
}

/// A resolved movie. `title` may be empty when the model answered with bare brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieInfo {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl MovieInfo {
    /// Three-line answer: `«title»`, description, link.
    pub fn to_answer(&self) -> String {
        format!("«{}»\n{}\n{}", self.title, self.description, self.link)
    }
}

/// Outcome of one resolve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(MovieInfo),
    Failed { reason: String },
}

impl Resolution {
    /// Title to log, or `None` when resolution failed.
    pub fn title(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(info) => Some(info.title.as_str()),
            Resolution::Failed { .. } => None,
        }
    }

    /// Text sent back to the user.
    pub fn reply_text(&self) -> String {
        match self {
            Resolution::Resolved(info) => info.to_answer(),
            Resolution::Failed { reason } => format!("{}{}", MODEL_ERROR_PREFIX, reason),
        }
    }
}

/// Resolver over an [`LlmClient`] and a [`LinkSearcher`]. Holds no per-request state.
pub struct MovieResolver {
    llm: Arc<dyn LlmClient>,
    links: Arc<dyn LinkSearcher>,
    system_prompt: Option<String>,
}

impl MovieResolver {
    pub fn new(llm: Arc<dyn LlmClient>, links: Arc<dyn LinkSearcher>) -> Self {
        Self {
            llm,
            links,
            system_prompt: None,
        }
    }

    /// Replaces the default system instruction (LLM_SYSTEM_PROMPT).
    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn llm(&self) -> &Arc<dyn LlmClient> {
        &self.llm
    }

    /// Resolves `query` with `model`. Never returns an error; see [`Resolution`].
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn resolve(&self, query: &str, model: &str) -> Resolution {
        let messages = movie_request_messages(query, self.system_prompt.as_deref());
        let raw = match self.llm.get_llm_response_with_messages(model, messages).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, model = %model, "step: model request failed");
                return Resolution::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let parsed = parse_model_answer(&raw);
        info!(model = %model, title = %parsed.title, "step: model answer parsed");

        let link = self.find_link(&parsed.title).await;

        Resolution::Resolved(MovieInfo {
            title: parsed.title,
            description: parsed.description,
            link,
        })
    }

    /// First search result for the title, or [`LINK_NOT_FOUND`].
    pub async fn find_link(&self, title: &str) -> String {
        let query = link_search_query(title);
        match self.links.first_link(&query).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                warn!(query = %query, "No search results");
                LINK_NOT_FOUND.to_string()
            }
            Err(e) => {
                warn!(error = %e, query = %query, "Link search failed");
                LINK_NOT_FOUND.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_has_three_lines() {
        let info = MovieInfo {
            title: "Up".to_string(),
            description: "Дом на шариках".to_string(),
            link: "https://example.com/up".to_string(),
        };
        assert_eq!(info.to_answer(), "«Up»\nДом на шариках\nhttps://example.com/up");
    }

    #[test]
    fn empty_title_is_still_logged() {
        let resolved = Resolution::Resolved(MovieInfo {
            title: String::new(),
            description: "d".to_string(),
            link: LINK_NOT_FOUND.to_string(),
        });
        assert_eq!(resolved.title(), Some(""));
        assert_eq!(resolved.reply_text(), "«»\nd\n❗️Ссылка не найдена");
    }

    #[test]
    fn failed_reply_carries_reason() {
        let failed = Resolution::Failed {
            reason: "timeout".to_string(),
        };
        assert_eq!(failed.title(), None);
        assert_eq!(
            failed.reply_text(),
            "❗️ Ошибка при обращении к модели: timeout"
        );
    }

    #[test]
    fn search_query_uppercases_title() {
        assert_eq!(
            link_search_query("Шоу Трумана"),
            "Фильм ШОУ ТРУМАНА смотреть онлайн"
        );
    }
}
