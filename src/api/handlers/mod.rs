//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod tracking;

pub use health::health_handler;
pub use tracking::{missing_label_handler, tracking_handler};
