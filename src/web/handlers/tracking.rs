//! Tracking page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::domain::entities::TrackingSummary;
use crate::state::AppState;
use crate::web::page::{PAGE_PATH, PageEffect, PageEvent, PageStatus, TrackingPage};

/// Query string of `GET /tracking`.
#[derive(Debug, Deserialize)]
pub struct TrackingQuery {
    #[serde(rename = "labelId")]
    pub label_id: Option<String>,
}

/// Body of the `POST /tracking` form.
#[derive(Debug, Deserialize)]
pub struct TrackingForm {
    #[serde(rename = "labelId", default)]
    pub label_id: String,
}

/// Template for the tracking page.
///
/// Renders `templates/tracking.html` with:
/// - Label input form
/// - Error message, if any
/// - Tracking details, if a lookup succeeded
/// - Offline notice, hidden until the browser reports losing connectivity
#[derive(Template, WebTemplate)]
#[template(path = "tracking.html")]
pub struct TrackingTemplate {
    pub label_id: String,
    pub loading: bool,
    pub error: Option<String>,
    pub tracking: Option<TrackingSummary>,
}

impl From<&TrackingPage> for TrackingTemplate {
    fn from(page: &TrackingPage) -> Self {
        let (error, tracking) = match page.status() {
            PageStatus::Error(message) => (Some(message.clone()), None),
            PageStatus::Success(record) => (None, Some(record.summary())),
            PageStatus::Idle | PageStatus::Loading | PageStatus::Offline => (None, None),
        };

        Self {
            label_id: page.label_id().to_string(),
            loading: page.is_loading(),
            error,
            tracking,
        }
    }
}

/// Renders the tracking page.
///
/// # Endpoint
///
/// `GET /tracking[?labelId=...]`
///
/// With a non-empty `labelId` the label is looked up before rendering, so a
/// `/tracking?labelId=...` link always opens on the shipment's status.
pub async fn tracking_page_handler(
    State(state): State<AppState>,
    Query(query): Query<TrackingQuery>,
) -> TrackingTemplate {
    let mut page = TrackingPage::new();
    let effects = page.dispatch(PageEvent::Load {
        label_id: query.label_id,
    });

    // The request URL already names the label, so only lookups are performed.
    for effect in effects {
        if let PageEffect::Lookup { lookup, label_id } = effect {
            let event = match state.tracking_service.track(&label_id).await {
                Ok(record) => PageEvent::LookupSucceeded { lookup, record },
                Err(_) => PageEvent::LookupFailed { lookup },
            };
            page.dispatch(event);
        }
    }

    TrackingTemplate::from(&page)
}

/// Handles the tracking form.
///
/// # Endpoint
///
/// `POST /tracking`
///
/// A non-empty label redirects (`303 See Other`) to the shareable
/// `/tracking?labelId=...` link, which performs the lookup. An empty label
/// re-renders the form with "Label ID is required." and no lookup.
pub async fn track_submit_handler(Form(form): Form<TrackingForm>) -> Response {
    let mut page = TrackingPage::new();
    let effects = page.dispatch(PageEvent::Submit(form.label_id));

    for effect in effects {
        if let PageEffect::ReplaceUrl(url) = effect {
            return Redirect::to(&url).into_response();
        }
    }

    TrackingTemplate::from(&page).into_response()
}

/// Sends visitors of the site root to the tracking page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Redirect {
    Redirect::to(PAGE_PATH)
}
