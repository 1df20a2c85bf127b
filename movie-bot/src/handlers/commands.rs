//! Bot command set, also registered with Telegram as the command menu.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды:")]
pub enum Command {
    #[command(description = "приветствие")]
    Start,
    #[command(description = "справка")]
    Help,
    #[command(description = "статистика найденных фильмов")]
    Stats,
    #[command(description = "история поисков")]
    History,
}

/// Parses `text` as a command addressed to this bot. `bot_username` of `None` accepts only
/// commands without an `@mention`.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    Command::parse(text, bot_username.unwrap_or("")).ok()
}
