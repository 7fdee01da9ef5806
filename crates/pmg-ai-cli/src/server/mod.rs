pub mod app;
pub mod routes;
pub mod state;

pub use app::*;
pub use state::AppState;
