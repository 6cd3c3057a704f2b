//! State machine behind the tracking page.
//!
//! The page is modelled as a reducer: [`TrackingPage::dispatch`] applies a
//! [`PageEvent`] and returns the [`PageEffect`]s the caller must perform
//! (rewriting the URL, issuing a lookup). Lookup completions come back as
//! events tagged with the [`LookupId`] they were issued under.
//!
//! ```text
//!            Submit(non-empty) / Load(labelId)
//!   Idle ─────────────────────────────────────▶ Loading ──ok──▶ Success
//!    │                                           │  ▲
//!    │ Submit("")                         failed │  │ Submit(non-empty)
//!    ▼                                           ▼  │
//!  Error ◀───────────────────────────────────────┘──┘
//!
//!   any ──Offline──▶ Offline ──Online──▶ Idle
//! ```
//!
//! Only the most recently issued lookup may resolve the page. Completions of
//! superseded lookups, or of lookups issued before going offline, are dropped.
//!
//! The server drives `Load` and `Submit`, one request per page. Connectivity
//! is only known in the browser, so the script in `templates/tracking.html`
//! mirrors the `Offline`/`Online` transitions and the loading state.

use url::form_urlencoded;

use crate::domain::entities::TrackingRecord;

/// Shown when a submission carries no label identifier.
pub const LABEL_REQUIRED: &str = "Label ID is required.";

/// Shown when the lookup fails for any reason.
pub const LOOKUP_FAILED: &str =
    "Failed to track shipment. Please check the label ID and try again.";

/// Path of the tracking page.
pub const PAGE_PATH: &str = "/tracking";

/// Query parameter carrying the label identifier.
pub const LABEL_QUERY_PARAM: &str = "labelId";

/// Identifies one issued lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupId(u64);

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    Idle,
    Loading,
    Success(TrackingRecord),
    Error(String),
    Offline,
}

/// Inputs to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The page was opened, optionally with `?labelId=` in its URL.
    Load { label_id: Option<String> },
    /// The form was submitted with the given label identifier.
    Submit(String),
    /// A lookup finished successfully.
    LookupSucceeded {
        lookup: LookupId,
        record: TrackingRecord,
    },
    /// A lookup failed.
    LookupFailed { lookup: LookupId },
    /// The browser lost connectivity.
    Offline,
    /// The browser regained connectivity.
    Online,
}

/// Work the caller must perform after a transition, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Replace the current URL with this shareable link.
    ReplaceUrl(String),
    /// Look up `label_id` and report back with `lookup`.
    Lookup { lookup: LookupId, label_id: String },
}

/// State of one tracking page instance.
#[derive(Debug, Clone)]
pub struct TrackingPage {
    label_id: String,
    status: PageStatus,
    issued: u64,
    pending: Option<LookupId>,
}

impl Default for TrackingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingPage {
    /// Creates an idle page with an empty input.
    pub fn new() -> Self {
        Self {
            label_id: String::new(),
            status: PageStatus::Idle,
            issued: 0,
            pending: None,
        }
    }

    /// Current contents of the label input.
    pub fn label_id(&self) -> &str {
        &self.label_id
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, PageStatus::Loading)
    }

    pub fn is_offline(&self) -> bool {
        matches!(self.status, PageStatus::Offline)
    }

    /// The lookup whose completion the page is waiting for, if any.
    pub fn pending_lookup(&self) -> Option<LookupId> {
        self.pending
    }

    /// Applies `event` and returns the effects to perform.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<PageEffect> {
        match event {
            PageEvent::Load { label_id } => match label_id {
                Some(label_id) if !label_id.is_empty() => self.submit(label_id),
                _ => Vec::new(),
            },
            PageEvent::Submit(label_id) => self.submit(label_id),
            PageEvent::LookupSucceeded { lookup, record } => {
                if self.resolve(lookup) {
                    self.status = PageStatus::Success(record);
                }
                Vec::new()
            }
            PageEvent::LookupFailed { lookup } => {
                if self.resolve(lookup) {
                    self.status = PageStatus::Error(LOOKUP_FAILED.to_string());
                }
                Vec::new()
            }
            PageEvent::Offline => {
                self.pending = None;
                self.status = PageStatus::Offline;
                Vec::new()
            }
            PageEvent::Online => {
                if self.is_offline() {
                    self.status = PageStatus::Idle;
                }
                Vec::new()
            }
        }
    }

    fn submit(&mut self, label_id: String) -> Vec<PageEffect> {
        // The form is not shown while offline.
        if self.is_offline() {
            return Vec::new();
        }

        self.label_id = label_id;

        if self.label_id.is_empty() {
            self.status = PageStatus::Error(LABEL_REQUIRED.to_string());
            return Vec::new();
        }

        self.issued += 1;
        let lookup = LookupId(self.issued);
        self.pending = Some(lookup);
        self.status = PageStatus::Loading;

        vec![
            PageEffect::ReplaceUrl(page_url(&self.label_id)),
            PageEffect::Lookup {
                lookup,
                label_id: self.label_id.clone(),
            },
        ]
    }

    /// Returns true if `lookup` is the pending one, clearing it.
    fn resolve(&mut self, lookup: LookupId) -> bool {
        if self.pending == Some(lookup) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Shareable link to the page for a label: `/tracking?labelId=<id>`.
pub fn page_url(label_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(LABEL_QUERY_PARAM, label_id)
        .finish();

    format!("{PAGE_PATH}?{query}")
}
