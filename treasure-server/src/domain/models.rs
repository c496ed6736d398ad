use treasure_core::{Grid, MapBuilderConfig, TreasureMap};

use derive_more::From;
use thiserror::Error;
use uuid::Uuid;

/// A generated treasure map, tagged with an id so requests can be traced in
/// the logs. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    id: Uuid,
    map: TreasureMap,
}

impl GeneratedMap {
    pub fn new(id: Uuid, map: TreasureMap) -> Self {
        Self { id, map }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn map(&self) -> &TreasureMap {
        &self.map
    }

    pub fn grid(&self) -> Grid {
        self.map.grid()
    }
}

/// The fields required by the domain to create a [GeneratedMap].
#[derive(Clone, Copy, Debug, PartialEq, Eq, From)]
pub struct CreateMapRequest {
    config: MapBuilderConfig,
}

impl CreateMapRequest {
    pub fn new(config: MapBuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapBuilderConfig {
        &self.config
    }
}

#[derive(Debug, Error)]
pub enum CreateMapError {
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
    // to be extended as new error scenarios are introduced
}
