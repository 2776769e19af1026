use std::time::Duration;

/// How long the event loop waits for terminal input before checking the engine.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub const TITLE_INPUT: &str = " URL ";
pub const TITLE_ERROR: &str = " Error ";
pub const TITLE_PRIMARY: &str = " Primary Keyword ";
pub const TITLE_SECONDARY: &str = " Secondary Keywords ";

pub const SUBMIT_WIDTH: u16 = 22;

pub const KEY_HELP: &str = "Enter: extract | Ctrl+U: clear | Esc: quit";
