pub mod config;
pub mod error;
pub mod model_service;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::Config;
pub use routes::build_app;
pub use state::AppState;
