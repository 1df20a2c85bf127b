//! Binary for the movie finder bot and its one-shot CLI commands.

use anyhow::Result;
use clap::Parser;
use movie_bot::cli::{ask, benchmark, list_models};
use movie_bot::{init_tracing, load_config, run_bot, BaseAppExtensions, BaseConfig, Cli, Commands};

/// Extensions and file-only logging for commands that do not talk to Telegram.
fn one_shot_setup() -> Result<BaseAppExtensions> {
    let extensions = BaseAppExtensions::from_env()?;
    extensions.validate()?;
    init_tracing(&BaseConfig::log_file_from_env(), false)?;
    Ok(extensions)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, model } => {
            let config = load_config(token)?;
            run_bot(config, model).await
        }
        Commands::Models { keywords } => {
            let extensions = one_shot_setup()?;
            for id in list_models(&extensions, &keywords).await? {
                println!("{}", id);
            }
            Ok(())
        }
        Commands::Ask { query, model } => {
            let extensions = one_shot_setup()?;
            println!("{}", ask(&extensions, &query, model.as_deref()).await?);
            Ok(())
        }
        Commands::Benchmark { query, models } => {
            let extensions = one_shot_setup()?;
            println!("Benchmark for movie query: «{}»\n", query);
            for run in benchmark(&extensions, &query, &models).await? {
                println!("{}", run.report());
            }
            Ok(())
        }
    }
}
