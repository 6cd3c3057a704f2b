//! Data Transfer Objects for API responses.
//!
//! Tracking lookups return [`crate::domain::entities::TrackingRecord`]
//! directly, so only the health endpoint needs its own shapes.

pub mod health;
