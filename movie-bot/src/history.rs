//! # History pagination
//!
//! Renders one page of a user's newest-first search log with prev/next buttons. The page index
//! travels in the button payload (`history_page:<n>`); nothing is kept server-side.

use std::sync::Arc;

use storage::{SearchLog, SearchRecord, StorageError};

use crate::core::InlineButton;

pub const HISTORY_PAGE_SIZE: i64 = 5;
pub const PAGE_PAYLOAD_PREFIX: &str = "history_page:";

pub const HISTORY_EMPTY: &str = "История пуста 📭";
pub const HISTORY_NO_MORE: &str = "Больше записей нет";
pub const HISTORY_HEADER: &str = "📜 История поисков:";
/// Shown in place of a title that was never resolved.
pub const NO_TITLE_LABEL: &str = "без названия";

pub const PREV_LABEL: &str = "⬅️ Назад";
pub const NEXT_LABEL: &str = "➡️ Далее";

/// Callback payload for `page`.
pub fn page_payload(page: u32) -> String {
    format!("{}{}", PAGE_PAYLOAD_PREFIX, page)
}

/// Page number from a callback payload; `None` for foreign or malformed payloads.
/// Only plain decimal digits are accepted (no sign).
pub fn parse_page_payload(payload: &str) -> Option<u32> {
    let digits = payload.strip_prefix(PAGE_PAYLOAD_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `"<index>. <query> → <title>"`, index 1-based over the whole history.
pub fn history_line(index: i64, record: &SearchRecord) -> String {
    format!(
        "{}. {} → {}",
        index,
        record.request,
        record.title.as_deref().unwrap_or(NO_TITLE_LABEL)
    )
}

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPage {
    pub page: u32,
    pub lines: Vec<String>,
    pub has_prev: bool,
    /// True when the page is full. A history of exactly `k * 5` records offers a next button on
    /// its last page that leads to an empty page.
    pub has_next: bool,
}

impl HistoryPage {
    pub fn text(&self) -> String {
        if self.lines.is_empty() {
            return if self.page == 0 {
                HISTORY_EMPTY.to_string()
            } else {
                HISTORY_NO_MORE.to_string()
            };
        }
        let mut text = String::from(HISTORY_HEADER);
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }

    /// Back then forward, whichever apply.
    pub fn buttons(&self) -> Vec<InlineButton> {
        let mut buttons = Vec::new();
        if self.has_prev {
            buttons.push(InlineButton::new(PREV_LABEL, page_payload(self.page - 1)));
        }
        if self.has_next {
            buttons.push(InlineButton::new(NEXT_LABEL, page_payload(self.page + 1)));
        }
        buttons
    }
}

/// Reads pages from the search log.
#[derive(Clone)]
pub struct HistoryPaginator {
    log: Arc<dyn SearchLog>,
}

impl HistoryPaginator {
    pub fn new(log: Arc<dyn SearchLog>) -> Self {
        Self { log }
    }

    /// Fetches exactly the `page` window (offset `page * 5`) of the user's history.
    pub async fn render_page(&self, user_id: i64, page: u32) -> Result<HistoryPage, StorageError> {
        let offset = i64::from(page) * HISTORY_PAGE_SIZE;
        let records = self.log.history(user_id, offset, HISTORY_PAGE_SIZE).await?;
        let lines = records
            .iter()
            .enumerate()
            .map(|(i, r)| history_line(offset + i as i64 + 1, r))
            .collect::<Vec<_>>();
        Ok(HistoryPage {
            page,
            has_prev: page > 0,
            has_next: lines.len() as i64 == HISTORY_PAGE_SIZE,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, lines: usize) -> HistoryPage {
        HistoryPage {
            page,
            lines: (0..lines).map(|i| format!("{}. q → t", i + 1)).collect(),
            has_prev: page > 0,
            has_next: lines == 5,
        }
    }

    #[test]
    fn payload_round_trip() {
        assert_eq!(page_payload(3), "history_page:3");
        assert_eq!(parse_page_payload("history_page:3"), Some(3));
    }

    #[test]
    fn payload_rejects_foreign_data() {
        assert_eq!(parse_page_payload("history_page:"), None);
        assert_eq!(parse_page_payload("history_page:-1"), None);
        assert_eq!(parse_page_payload("history_page:x"), None);
        assert_eq!(parse_page_payload("history_page:+1"), None);
        assert_eq!(parse_page_payload("history_page: 1"), None);
        assert_eq!(parse_page_payload("other:1"), None);
    }

    #[test]
    fn line_format() {
        let record = SearchRecord {
            id: 1,
            user_id: 7,
            request: "про корабль".to_string(),
            title: Some("Титаник".to_string()),
        };
        assert_eq!(history_line(6, &record), "6. про корабль → Титаник");
        let untitled = SearchRecord { title: None, ..record };
        assert_eq!(history_line(1, &untitled), "1. про корабль → без названия");
    }

    #[test]
    fn empty_first_page_has_no_buttons() {
        let p = page(0, 0);
        assert_eq!(p.text(), HISTORY_EMPTY);
        assert!(p.buttons().is_empty());
    }

    #[test]
    fn empty_later_page_only_goes_back() {
        let p = page(2, 0);
        assert_eq!(p.text(), HISTORY_NO_MORE);
        assert_eq!(
            p.buttons(),
            vec![InlineButton::new(PREV_LABEL, "history_page:1")]
        );
    }

    #[test]
    fn full_middle_page_has_both_buttons() {
        let p = page(1, 5);
        assert!(p.text().starts_with(HISTORY_HEADER));
        let payloads: Vec<_> = p.buttons().into_iter().map(|b| b.payload).collect();
        assert_eq!(payloads, vec!["history_page:0", "history_page:2"]);
    }
}
