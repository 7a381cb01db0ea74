mod config;
mod error;
mod http;
mod lobby;
mod room;
mod signaling;

pub use config::*;
pub use error::*;
pub use http::*;
pub use lobby::*;
pub use room::*;
pub use signaling::*;
