//! Facility locator: one coordinate pair in, a normalized facility list out.
//!
//! Chains a one-shot location fix into a single grounded search request and
//! normalizes the heterogeneous evidence payload into a stable,
//! display-ready result. All failures resolve into local state -- nothing
//! propagates to the caller and nothing retries.

pub mod filter;

pub use filter::retain_facilities;

use gramin_types::location::{Coordinate, LocationError, QueryResult};
use tracing::{debug, warn};

use crate::location::LocationProvider;
use crate::remote::RemoteService;

/// Intent sent with every grounded facility query.
pub const FACILITY_INTENT: &str = "Find the nearest hospitals, health centers, and \
emergency clinics. Sort them by distance and mention if they are open 24/7.";

/// Summary used when the service returns evidence but no narrative text.
pub const SUMMARY_FALLBACK_TEXT: &str = "I found some locations nearby.";

/// Shown when no location provider is available at all.
pub const PROVIDER_UNSUPPORTED_TEXT: &str =
    "Location services are not available on this device.";

/// Shown when the provider exists but could not produce a fix.
pub const FIX_FAILED_TEXT: &str =
    "Unable to retrieve your location. Please ensure GPS is enabled.";

/// Shown when the grounded query itself fails.
pub const QUERY_FAILED_TEXT: &str = "Failed to fetch nearby facility data. Please try again.";

/// What a front end should render right now.
///
/// Precedence: a call in flight, then a failure message, then the latest
/// result (empty or not), then the untouched initial state. A failure
/// never clears the previous result; accessors expose both.
#[derive(Debug, PartialEq)]
pub enum LocatorView<'a> {
    Idle,
    Busy,
    Failed(&'static str),
    NothingFound(&'a QueryResult),
    Found(&'a QueryResult),
}

/// Orchestrates locate-then-query and owns the latest result.
///
/// Calls issued while one is in flight are ignored (same boolean-latch
/// discipline as the chat session manager); `locate` holds the latch
/// across the chained query so the pair is one logical operation.
pub struct FacilityLocator<R: RemoteService, P: LocationProvider> {
    remote: R,
    provider: P,
    fix: Option<Coordinate>,
    result: Option<QueryResult>,
    error: Option<&'static str>,
    in_flight: bool,
}

impl<R: RemoteService, P: LocationProvider> FacilityLocator<R, P> {
    pub fn new(remote: R, provider: P) -> Self {
        Self {
            remote,
            provider,
            fix: None,
            result: None,
            error: None,
            in_flight: false,
        }
    }

    /// Request the current fix and, on success, immediately query around it.
    ///
    /// A provider failure is terminal for this call: it surfaces a literal
    /// message distinguishing "unsupported" from "unable to retrieve" and
    /// waits for a manual retry.
    pub async fn locate(&mut self) {
        if self.in_flight {
            debug!("locate already in flight; ignoring");
            return;
        }
        self.in_flight = true;
        self.error = None;

        match self.provider.current_fix().await {
            Ok(fix) => {
                self.fix = Some(fix);
                self.run_query(fix).await;
            }
            Err(err) => {
                warn!(error = %err, "location fix failed");
                self.error = Some(match err {
                    LocationError::Unsupported => PROVIDER_UNSUPPORTED_TEXT,
                    _ => FIX_FAILED_TEXT,
                });
            }
        }

        self.in_flight = false;
    }

    /// One grounded facility query around an explicit coordinate.
    pub async fn query(&mut self, coordinate: Coordinate) {
        if self.in_flight {
            debug!("query already in flight; ignoring");
            return;
        }
        self.in_flight = true;
        self.error = None;
        self.run_query(coordinate).await;
        self.in_flight = false;
    }

    async fn run_query(&mut self, coordinate: Coordinate) {
        match self.remote.grounded_query(FACILITY_INTENT, coordinate).await {
            Ok(reply) => {
                let summary_text = reply
                    .text
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| SUMMARY_FALLBACK_TEXT.to_string());
                // Fresh result, wholesale replacement; nothing from a
                // previous query survives.
                self.result = Some(QueryResult {
                    summary_text,
                    facilities: retain_facilities(&reply.chunks),
                });
            }
            Err(err) => {
                warn!(error = %err, "grounded facility query failed");
                // Prior result stays untouched for the front end to keep
                // showing; only the error state changes.
                self.error = Some(QUERY_FAILED_TEXT);
            }
        }
    }

    pub fn view(&self) -> LocatorView<'_> {
        if self.in_flight {
            return LocatorView::Busy;
        }
        if let Some(message) = self.error {
            return LocatorView::Failed(message);
        }
        match &self.result {
            Some(result) if result.is_empty() => LocatorView::NothingFound(result),
            Some(result) => LocatorView::Found(result),
            None => LocatorView::Idle,
        }
    }

    /// The last successful fix, if any.
    pub fn fix(&self) -> Option<Coordinate> {
        self.fix
    }

    /// The latest successful result, surviving later failures.
    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}
