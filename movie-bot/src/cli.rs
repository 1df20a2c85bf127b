//! CLI parser, config loading, and the one-shot commands (`models`, `ask`, `benchmark`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use llm_client::{filter_models, LlmConfig};

use crate::components::{build_llm_client, build_resolver, resolve_model};
use crate::config::{BaseAppExtensions, BotConfig};
use crate::resolver::{run_benchmark, BenchmarkRun};

#[derive(Parser)]
#[command(name = "movie-bot")]
#[command(about = "Telegram bot that finds movies by description", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Model id; used only if the provider catalog lists it.
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Print catalog model ids containing every keyword.
    Models {
        keywords: Vec<String>,
    },
    /// Resolve one description and print the answer.
    Ask {
        query: String,
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Resolve one description with each model and print timings.
    Benchmark {
        query: String,
        #[arg(short, long, num_args = 1.., required = true)]
        models: Vec<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Catalog ids containing every keyword, in catalog order.
pub async fn list_models(extensions: &BaseAppExtensions, keywords: &[String]) -> Result<Vec<String>> {
    let llm = build_llm_client(&extensions.llm);
    let models = llm.list_models().await?;
    Ok(filter_models(models, keywords))
}

/// Answer for one query; a requested model not in the catalog falls back to the configured one.
pub async fn ask(extensions: &BaseAppExtensions, query: &str, model: Option<&str>) -> Result<String> {
    let resolver = build_resolver(extensions)?;
    let model = resolve_model(resolver.llm().as_ref(), extensions.llm.model(), model).await;
    Ok(resolver.resolve(query, &model).await.reply_text())
}

/// One run per model, in the given order. Models are used as given, without a catalog check.
pub async fn benchmark(
    extensions: &BaseAppExtensions,
    query: &str,
    models: &[String],
) -> Result<Vec<BenchmarkRun>> {
    let resolver = build_resolver(extensions)?;
    Ok(run_benchmark(&resolver, query, models).await)
}
