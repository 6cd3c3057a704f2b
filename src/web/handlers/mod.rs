//! HTML template rendering handlers for the tracking page.

mod tracking;

pub use tracking::{TrackingTemplate, index_handler, track_submit_handler, tracking_page_handler};
