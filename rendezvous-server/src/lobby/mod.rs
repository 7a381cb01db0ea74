mod lobby;
mod lobby_command;
mod lobby_handle;

pub use lobby::*;
pub use lobby_command::*;
pub use lobby_handle::*;
