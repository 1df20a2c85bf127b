//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// Sender identity. `id` keys the search log; `username` is only logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}
