//! Web layer for the restroom compass.
//!
//! Provides the compass and map pages and the JSON endpoints they
//! call: location updates and the full marker dump.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
