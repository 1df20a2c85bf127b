//! `/history` and navigation buttons over an in-memory search log.

use std::sync::Arc;

use movie_bot::history::{HISTORY_EMPTY, HISTORY_HEADER, HISTORY_NO_MORE, NEXT_LABEL, PREV_LABEL};
use movie_bot::{
    build_callback_handler, build_handler_chain, CallbackHandler, HandlerChain, HistoryPaginator,
    MovieResolver,
};
use storage::{SearchLog, SearchRepository};
use tokio::sync::RwLock;

use fakes::{button_press, text_message, FixedLinks, FixedLlm};
use mock_bot::{MockBot, Outgoing};

struct Harness {
    bot: Arc<MockBot>,
    repo: Arc<SearchRepository>,
    chain: HandlerChain,
    callbacks: Arc<dyn CallbackHandler>,
}

async fn harness() -> Harness {
    let bot = Arc::new(MockBot::new());
    let repo = Arc::new(SearchRepository::new("sqlite::memory:").await.unwrap());
    let resolver = Arc::new(MovieResolver::new(
        Arc::new(FixedLlm::answering("[X]")),
        Arc::new(FixedLinks::nothing()),
    ));
    let chain = build_handler_chain(
        bot.clone(),
        repo.clone(),
        resolver,
        "m",
        Arc::new(RwLock::new(Some("movie_finder_bot".to_string()))),
    );
    let callbacks = build_callback_handler(bot.clone(), repo.clone());
    Harness {
        bot,
        repo,
        chain,
        callbacks,
    }
}

/// Appends `n` records `q0..q{n-1}` with titles `t0..`.
async fn seed(repo: &SearchRepository, user_id: i64, n: usize) {
    for i in 0..n {
        repo.append(user_id, &format!("q{}", i), Some(format!("t{}", i).as_str()))
            .await
            .unwrap();
    }
}

/// **Test: `/history` with zero records sends exactly the empty-history message, no buttons.**
#[tokio::test]
async fn history_empty() {
    let h = harness().await;

    h.chain.handle(&text_message(1, "/history")).await.unwrap();

    assert_eq!(
        h.bot.outgoing(),
        vec![Outgoing::Sent {
            chat_id: 1,
            text: HISTORY_EMPTY.to_string(),
            buttons: vec![],
        }]
    );
    assert!(h.repo.all_for_user(1).await.unwrap().is_empty());
}

/// **Test: first page of 7 records lists the newest five with a next button only.**
#[tokio::test]
async fn history_first_page() {
    let h = harness().await;
    seed(&h.repo, 1, 7).await;

    h.chain.handle(&text_message(1, "/history")).await.unwrap();

    let sent = h.bot.last();
    let expected = format!(
        "{}\n1. q6 → t6\n2. q5 → t5\n3. q4 → t4\n4. q3 → t3\n5. q2 → t2",
        HISTORY_HEADER
    );
    assert_eq!(sent.text(), expected);
    assert_eq!(sent.payloads(), vec!["history_page:1"]);
    assert_eq!(sent.buttons()[0].label, NEXT_LABEL);
}

/// **Test: `/history@botname` addressed to this bot is handled as a command, not searched.**
#[tokio::test]
async fn history_with_mention() {
    let h = harness().await;

    h.chain
        .handle(&text_message(1, "/history@movie_finder_bot"))
        .await
        .unwrap();

    assert_eq!(h.bot.last().text(), HISTORY_EMPTY);
    assert!(h.repo.all_for_user(1).await.unwrap().is_empty());
}

/// **Test: pressing next edits the same message with page 1 and a back button.**
#[tokio::test]
async fn next_button_edits_message() {
    let h = harness().await;
    seed(&h.repo, 1, 7).await;

    let handled = h
        .callbacks
        .handle_callback(&button_press(1, Some("55"), "history_page:1"))
        .await
        .unwrap();

    assert!(handled);
    match h.bot.last() {
        Outgoing::Edited {
            chat_id,
            message_id,
            text,
            buttons,
        } => {
            assert_eq!(chat_id, 1);
            assert_eq!(message_id, "55");
            assert_eq!(text, format!("{}\n6. q1 → t1\n7. q0 → t0", HISTORY_HEADER));
            assert_eq!(buttons.len(), 1);
            assert_eq!(buttons[0].label, PREV_LABEL);
            assert_eq!(buttons[0].payload, "history_page:0");
        }
        other => panic!("expected edit, got {:?}", other),
    }
}

/// **Test: `history_page:2` with 7 records is an empty page with only a back button.**
///
/// **Setup:** 7 records.
/// **Action:** Press `history_page:2` (offset 10).
/// **Expected:** Paginator reports no lines and has_prev; message edited to the no-more text.
#[tokio::test]
async fn page_past_end() {
    let h = harness().await;
    seed(&h.repo, 1, 7).await;

    let page = HistoryPaginator::new(h.repo.clone()).render_page(1, 2).await.unwrap();
    assert!(page.lines.is_empty());
    assert!(page.has_prev);
    assert!(!page.has_next);

    h.callbacks
        .handle_callback(&button_press(1, Some("55"), "history_page:2"))
        .await
        .unwrap();
    let edited = h.bot.last();
    assert_eq!(edited.text(), HISTORY_NO_MORE);
    assert_eq!(edited.payloads(), vec!["history_page:1"]);
}

/// **Test: with N records the page floor(N/5) holds N mod 5 lines; at N = 5k page k-1 claims a next page.**
#[tokio::test]
async fn page_sizes() {
    for n in [1usize, 3, 6, 12] {
        let repo = Arc::new(SearchRepository::new("sqlite::memory:").await.unwrap());
        seed(&repo, 1, n).await;
        let paginator = HistoryPaginator::new(repo.clone());
        let page = paginator.render_page(1, (n / 5) as u32).await.unwrap();
        assert_eq!(page.lines.len(), n % 5, "n = {}", n);
        assert!(!page.has_next);
    }

    let repo = Arc::new(SearchRepository::new("sqlite::memory:").await.unwrap());
    seed(&repo, 1, 10).await;
    let paginator = HistoryPaginator::new(repo.clone());
    let last_full = paginator.render_page(1, 1).await.unwrap();
    assert_eq!(last_full.lines.len(), 5);
    assert!(last_full.has_next);
    assert!(paginator.render_page(1, 2).await.unwrap().lines.is_empty());
}

/// **Test: a press on an inaccessible message sends a fresh page to the user's chat.**
#[tokio::test]
async fn inaccessible_message_sends_new_page() {
    let h = harness().await;
    seed(&h.repo, 8, 2).await;

    h.callbacks
        .handle_callback(&button_press(8, None, "history_page:0"))
        .await
        .unwrap();

    match h.bot.last() {
        Outgoing::Sent { chat_id, text, .. } => {
            assert_eq!(chat_id, 8);
            assert!(text.starts_with(HISTORY_HEADER));
        }
        other => panic!("expected send, got {:?}", other),
    }
}

/// **Test: foreign payloads are not handled; malformed page payloads are errors.**
#[tokio::test]
async fn foreign_and_malformed_payloads() {
    let h = harness().await;

    let handled = h
        .callbacks
        .handle_callback(&button_press(1, Some("1"), "vote:up"))
        .await
        .unwrap();
    assert!(!handled);

    let result = h
        .callbacks
        .handle_callback(&button_press(1, Some("1"), "history_page:abc"))
        .await;
    assert!(result.is_err());
    assert!(h.bot.outgoing().is_empty());
}

/// **Test: a user only ever sees their own searches.**
#[tokio::test]
async fn history_is_per_user() {
    let h = harness().await;
    seed(&h.repo, 1, 3).await;
    h.repo.append(2, "чужой запрос", None).await.unwrap();

    h.chain.handle(&text_message(2, "/history")).await.unwrap();

    assert_eq!(
        h.bot.last().text(),
        format!("{}\n1. чужой запрос → без названия", HISTORY_HEADER)
    );
}
