/*
   Module `ports` specifies the API by which external modules interact with the map domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use crate::domain::models::*;

/// `MapService` is the public API for the map domain.
///
/// External modules must conform to this contract – the domain is not concerned with the
/// implementation details or underlying technology of any external code.
pub trait MapService: Clone + Send + Sync + 'static {
    /// Asynchronously generate a new [GeneratedMap].
    ///
    /// # Errors
    ///
    /// - [CreateMapError::Unknown] if the generation task could not complete.
    fn create_map(
        &self,
        req: &CreateMapRequest,
    ) -> impl Future<Output = Result<GeneratedMap, CreateMapError>> + Send;
}

/// `MapMetrics` describes an aggregator of map creation related metrics, such as a time-series
/// database.
pub trait MapMetrics: Send + Sync + Clone + 'static {
    /// Record a successful map creation.
    fn record_map_creation_success(&self) -> impl Future<Output = ()> + Send;

    /// Record a map creation failure.
    fn record_map_creation_failure(&self) -> impl Future<Output = ()> + Send;
}
