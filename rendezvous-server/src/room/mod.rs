mod relay;
mod room;
mod room_store;
mod snapshot;

pub use room::*;
pub use room_store::*;
