pub mod command;
pub mod report;
pub mod terminal;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use report::ReportRenderer;
pub use terminal::PromptSession;
pub use theme::Theme;
