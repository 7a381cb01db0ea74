mod app_state;
mod routes;

pub use app_state::*;
pub use routes::*;
