//! HTTP API module for the roster engine.
//!
//! This module provides the upload/convert/download endpoints around the
//! conversion pipeline.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::ApiError;
pub use state::AppState;
