//! `/start`, `/help` and `/stats` through the handler chain.

use std::sync::Arc;

use movie_bot::handlers::{help_text, WELCOME_TEXT};
use movie_bot::history::HISTORY_EMPTY;
use movie_bot::{build_handler_chain, HandlerChain, HandlerResponse, MovieResolver};
use storage::{SearchLog, SearchRepository};
use tokio::sync::RwLock;

use fakes::{text_message, FixedLinks, FixedLlm};
use mock_bot::MockBot;

async fn harness() -> (Arc<MockBot>, Arc<SearchRepository>, Arc<FixedLlm>, HandlerChain) {
    let bot = Arc::new(MockBot::new());
    let repo = Arc::new(SearchRepository::new("sqlite::memory:").await.unwrap());
    let llm = Arc::new(FixedLlm::answering("[X]"));
    let resolver = Arc::new(MovieResolver::new(llm.clone(), Arc::new(FixedLinks::nothing())));
    let chain = build_handler_chain(
        bot.clone(),
        repo.clone(),
        resolver,
        "m",
        Arc::new(RwLock::new(None)),
    );
    (bot, repo, llm, chain)
}

/// **Test: `/start` replies with the welcome text and does not search or log.**
#[tokio::test]
async fn start_sends_welcome() {
    let (bot, repo, llm, chain) = harness().await;

    let response = chain.handle(&text_message(1, "/start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(WELCOME_TEXT.to_string()));
    assert_eq!(bot.last().text(), WELCOME_TEXT);
    assert!(llm.models_called().is_empty());
    assert!(repo.all_for_user(1).await.unwrap().is_empty());
}

/// **Test: `/help` mentions the rate limit and lists every command.**
#[tokio::test]
async fn help_lists_commands() {
    let (bot, _repo, _llm, chain) = harness().await;

    chain.handle(&text_message(1, "/help")).await.unwrap();

    let text = bot.last().text().to_string();
    assert_eq!(text, help_text());
    assert!(text.contains("ограничены"));
    for cmd in ["/start", "/help", "/stats", "/history"] {
        assert!(text.contains(cmd), "missing {}", cmd);
    }
}

/// **Test: `/stats` counts titles with a separate no-title bucket.**
///
/// **Setup:** Titles A, A, B, none appended in that order.
/// **Expected:** Buckets in first-occurrence order of the newest-first history.
#[tokio::test]
async fn stats_counts_titles() {
    let (bot, repo, _llm, chain) = harness().await;
    for title in [Some("A"), Some("A"), Some("B"), None] {
        repo.append(1, "q", title).await.unwrap();
    }
    repo.append(2, "q", Some("C")).await.unwrap();

    chain.handle(&text_message(1, "/stats")).await.unwrap();

    assert_eq!(bot.last().text(), "без названия – 1\nB – 1\nA – 2");
}

/// **Test: `/stats` without history sends the empty-history message.**
#[tokio::test]
async fn stats_empty() {
    let (bot, _repo, _llm, chain) = harness().await;

    chain.handle(&text_message(1, "/stats")).await.unwrap();

    assert_eq!(bot.last().text(), HISTORY_EMPTY);
}
