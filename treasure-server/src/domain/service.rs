/*!
   Module `service` provides the canonical implementation of the [MapService] port.
*/

use treasure_core::{Descriptions, create_map};

use std::sync::Arc;

use anyhow::Context;
use uuid::Uuid;

use super::{
    models::{CreateMapError, CreateMapRequest, GeneratedMap},
    ports::{MapMetrics, MapService},
};

/// Canonical implementation of the [MapService] port, through which the map domain API is
/// consumed.
#[derive(Debug, Clone)]
pub struct Service<M>
where
    M: MapMetrics,
{
    descriptions: Arc<Descriptions>,
    metrics: M,
}

impl<M> Service<M>
where
    M: MapMetrics,
{
    pub fn new(descriptions: Descriptions, metrics: M) -> Self {
        Self {
            descriptions: Arc::new(descriptions),
            metrics,
        }
    }
}

impl<M> MapService for Service<M>
where
    M: MapMetrics,
{
    /// Generate the map specified in `req` off the async workers and record
    /// the outcome.
    ///
    /// # Errors
    ///
    /// - [CreateMapError::Unknown] if the blocking generation task panicked or was cancelled.
    async fn create_map(&self, req: &CreateMapRequest) -> Result<GeneratedMap, CreateMapError> {
        let config = *req.config();
        let descriptions = Arc::clone(&self.descriptions);

        let result = tokio::task::spawn_blocking(move || create_map(&config, &descriptions))
            .await
            .context("map generation task failed")
            .map(|map| GeneratedMap::new(Uuid::new_v4(), map))
            .map_err(CreateMapError::from);

        match result {
            Ok(ref generated) => {
                tracing::debug!(
                    "Generated map {} ({}x{})",
                    generated.id(),
                    generated.map().rows(),
                    generated.map().cols()
                );
                self.metrics.record_map_creation_success().await;
            }
            Err(_) => self.metrics.record_map_creation_failure().await,
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::outbound::metrics::CountingMetrics;

    use treasure_core::MapBuilderConfig;

    #[tokio::test]
    async fn test_create_map_records_success() {
        let metrics = CountingMetrics::default();
        let service = Service::new(Descriptions::fallback(), metrics.clone());
        let config = MapBuilderConfig::new(4, 6, 3, 2, 1).unwrap();

        let generated = service
            .create_map(&CreateMapRequest::new(config))
            .await
            .unwrap();

        assert_eq!(generated.map().rows(), 4);
        assert_eq!(generated.map().cols(), 6);
        assert_eq!(generated.map().chests().len(), 3);
        assert_eq!(generated.grid().entries().count(), 24);
        assert_eq!(metrics.successes(), 1);
        assert_eq!(metrics.failures(), 0);
    }
}
