use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How land units are spread over transports when a load route is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum LoadStrategy {
    /// Round-robin over transports, heaviest units first
    #[default]
    EvenDistribution,
    /// Fill transports one at a time, keeping the tightest fit for last
    MinTransports,
}

/// Transport allocation settings.
#[derive(Resource, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct TransportSettings {
    pub load_strategy: LoadStrategy,
    /// Warn about units left behind because no transport had room
    pub report_overflow: bool,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            load_strategy: LoadStrategy::EvenDistribution,
            report_overflow: true,
        }
    }
}
