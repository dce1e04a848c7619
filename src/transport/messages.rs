use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

use super::error::TransportError;
use super::route::RoutePhase;

/// Endpoints and phase of a move, before origin units are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub from: TilePos,
    pub to: TilePos,
    pub phase: RoutePhase,
}

/// Ask which transport carries which unit along a route.
#[derive(Message, Debug, Clone)]
pub struct MapTransportsRequest {
    pub route: RouteRequest,
    pub units: Vec<Entity>,
    pub transports: Vec<Entity>,
}

/// Answer to [`MapTransportsRequest`].
#[derive(Message, Debug, Clone, PartialEq)]
pub struct TransportsMapped {
    pub phase: RoutePhase,
    /// (unit, transport), ordered by unit
    pub assignments: Vec<(Entity, Entity)>,
    /// Units the load phase found no room for
    pub unassigned: Vec<Entity>,
}

/// Ask for the fewest transports that must unload to put `units` ashore.
#[derive(Message, Debug, Clone)]
pub struct UnloadPlanRequest {
    pub units: Vec<Entity>,
    pub transports: Vec<Entity>,
}

#[derive(Message, Debug, Clone, PartialEq)]
pub struct UnloadPlanned {
    pub transports: Vec<Entity>,
}

/// Ask how many of `units` the air transports among `transports` could lift.
#[derive(Message, Debug, Clone)]
pub struct AirLiftRequest {
    pub units: Vec<Entity>,
    pub transports: Vec<Entity>,
}

#[derive(Message, Debug, Clone, PartialEq)]
pub struct AirLiftPlanned {
    /// Heaviest first
    pub units: Vec<Entity>,
}

/// Execute a load: put each unit aboard its transport.
#[derive(Message, Debug, Clone)]
pub struct ApplyTransportMapping {
    pub assignments: Vec<(Entity, Entity)>,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportRequestRejected {
    pub error: TransportError,
}
