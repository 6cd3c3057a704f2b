//! Browser-facing tracking page.
//!
//! Provides the HTML page where a user enters a label identifier and sees
//! the shipment's status. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`page`] - Page state machine (events, effects, transitions)
//! - [`handlers`] - Template rendering handlers driving the state machine
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod page;
pub mod routes;
