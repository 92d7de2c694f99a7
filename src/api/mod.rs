//! HTTP API module for the attendance hour-type engine.
//!
//! Exposes the attendance computation as a JSON endpoint so a host can embed
//! the router in its own server.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, EmployeeRequest, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
