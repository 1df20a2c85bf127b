//! Per-title counts over a user's whole history.

use storage::SearchRecord;

use crate::history::{HISTORY_EMPTY, NO_TITLE_LABEL};

/// How often one title (or the no-title bucket) occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCount {
    pub title: Option<String>,
    pub count: usize,
}

/// Counts records by title. Buckets appear in order of first occurrence in `records`.
pub fn aggregate_titles(records: &[SearchRecord]) -> Vec<TitleCount> {
    let mut counts: Vec<TitleCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|c| c.title == record.title) {
            Some(c) => c.count += 1,
            None => counts.push(TitleCount {
                title: record.title.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// One `"<title> – <count>"` line per bucket, or the empty-history message.
pub fn render_stats(records: &[SearchRecord]) -> String {
    if records.is_empty() {
        return HISTORY_EMPTY.to_string();
    }
    aggregate_titles(records)
        .iter()
        .map(|c| {
            format!(
                "{} – {}",
                c.title.as_deref().unwrap_or(NO_TITLE_LABEL),
                c.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
