//! Location provider port.

use gramin_types::location::{Coordinate, LocationError};

/// Source of the device's current position.
///
/// One-shot: a single request yields a fresh fix or a failure; no retry
/// loop, no cached result. Implementations live in gramin-infra.
pub trait LocationProvider: Send + Sync {
    fn current_fix(
        &self,
    ) -> impl std::future::Future<Output = Result<Coordinate, LocationError>> + Send;
}
