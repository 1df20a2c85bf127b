//! Model catalog helpers: keyword filtering and validated model switching.

use tracing::{info, warn};

use crate::LlmClient;

/// Keeps the ids that contain every keyword (substring match, case-sensitive). No keywords keeps all.
pub fn filter_models<S: AsRef<str>>(models: Vec<String>, keywords: &[S]) -> Vec<String> {
    models
        .into_iter()
        .filter(|id| keywords.iter().all(|k| id.contains(k.as_ref())))
        .collect()
}

/// Returns `requested` if the provider catalog lists it, otherwise `current`.
///
/// Catalog errors also keep `current`; switching is never fatal.
pub async fn select_model(client: &dyn LlmClient, current: &str, requested: &str) -> String {
    match client.list_models().await {
        Ok(models) if models.iter().any(|m| m == requested) => {
            info!(from = %current, to = %requested, "Model switched");
            requested.to_string()
        }
        Ok(_) => {
            warn!(requested = %requested, keeping = %current, "Model not in catalog");
            current.to_string()
        }
        Err(e) => {
            warn!(error = %e, requested = %requested, keeping = %current, "Model catalog unavailable");
            current.to_string()
        }
    }
}
