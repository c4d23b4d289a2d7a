//! HTTP API surface.

pub mod routes;
pub mod state;

pub use routes::RouterBuilder;
pub use state::ApiState;
