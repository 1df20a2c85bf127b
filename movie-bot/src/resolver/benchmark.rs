//! Response-time comparison of several models on one query.

use std::time::{Duration, Instant};
use tracing::info;

use super::{MovieResolver, Resolution};

/// One model's result.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub model: String,
    pub elapsed: Duration,
    pub resolution: Resolution,
}

impl BenchmarkRun {
    /// Printable block: model, seconds with two decimals, answer, separator.
    pub fn report(&self) -> String {
        format!(
            "Model: {}\n Time: {:.2} sec\n Answer: {}\n{}",
            self.model,
            self.elapsed.as_secs_f64(),
            self.resolution.reply_text(),
            "-".repeat(60)
        )
    }
}

/// Resolves `query` with each model in order. A failing model is reported, not fatal.
pub async fn run_benchmark(
    resolver: &MovieResolver,
    query: &str,
    models: &[String],
) -> Vec<BenchmarkRun> {
    let mut runs = Vec::with_capacity(models.len());
    for model in models {
        let start = Instant::now();
        let resolution = resolver.resolve(query, model).await;
        let elapsed = start.elapsed();
        info!(model = %model, elapsed_ms = elapsed.as_millis() as u64, "Benchmark run done");
        runs.push(BenchmarkRun {
            model: model.clone(),
            elapsed,
            resolution,
        });
    }
    runs
}
