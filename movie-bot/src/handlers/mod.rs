//! Message and callback handlers.

mod command_handler;
mod commands;
mod history_callback_handler;
mod logging;
mod movie_search_handler;

pub use command_handler::{help_text, CommandHandler, WELCOME_TEXT};
pub use commands::{parse_command, Command};
pub use history_callback_handler::HistoryCallbackHandler;
pub use logging::LoggingHandler;
pub use movie_search_handler::MovieSearchHandler;
