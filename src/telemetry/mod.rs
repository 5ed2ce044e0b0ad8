pub use handlers::get_match_telemetry;
pub use models::*;
pub use reconstructor::{reconstruct, TelemetryError};
pub use service::TelemetryService;

pub mod events;
mod handlers;
pub mod models;
mod reconstructor;
mod service;
