pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_app, run_server};
pub use state::{AppState, ReloadSummary, SharedState};
