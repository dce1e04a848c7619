use bevy::prelude::Entity;
use thiserror::Error;

/// Reasons a transport request cannot be resolved against the ECS world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("entity {0:?} is not a unit")]
    UnknownUnit(Entity),
    #[error("unit {0:?} cannot carry cargo")]
    NotATransport(Entity),
    #[error("unit {0:?} cannot be carried")]
    NotTransportable(Entity),
    #[error("transport {transport:?} has no room left for unit {unit:?}")]
    NoRoom { unit: Entity, transport: Entity },
}
