//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat replies and edits are sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}
