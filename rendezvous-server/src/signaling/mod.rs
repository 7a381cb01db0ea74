mod snapshot_output;
mod subscriber_hub;
mod ws_handler;

pub use snapshot_output::*;
pub use subscriber_hub::*;
pub use ws_handler::*;
